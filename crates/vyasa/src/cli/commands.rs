//! CLI command definitions.

use clap::Parser;
use vyasa::{MythLength, MythOptions, Tone};

/// Vyasa - Generate, expand, and narrate original mini-myths
#[derive(Parser, Debug)]
#[command(name = "vyasa")]
#[command(about = "Generate, expand, and narrate original mini-myths", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Theme or moral for the opening generation (e.g., "courage")
    #[arg(short, long)]
    pub theme: Option<String>,

    /// Narrative tone: epic, dramatic, humorous, or dark
    #[arg(long)]
    pub tone: Option<Tone>,

    /// Story length: short or full
    #[arg(long)]
    pub length: Option<MythLength>,

    /// Generate a single myth, print it, and exit
    #[arg(long)]
    pub once: bool,

    /// Narrate the myth aloud before exiting (one-shot mode only)
    #[arg(long, requires = "once")]
    pub narrate: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Seed generation options from command-line flags.
    ///
    /// Unset flags fall back to the stock defaults.
    pub fn initial_options(&self) -> MythOptions {
        let mut options = MythOptions::default();
        if let Some(theme) = &self.theme {
            options.theme = theme.clone();
        }
        if let Some(tone) = self.tone {
            options.tone = tone;
        }
        if let Some(length) = self.length {
            options.length = length;
        }
        options
    }
}
