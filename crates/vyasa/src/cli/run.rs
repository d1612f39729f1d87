//! Interactive and one-shot session runners.

use std::str::FromStr;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use vyasa::{Myth, MythLength, MythOptions, Phase, SessionHandle, SessionSnapshot, Tone};

const HELP: &str = "\
Commands:
  generate <theme>   weave a new myth on a theme
  tone <t>           set the tone (epic, dramatic, humorous, dark)
  length <l>         set the length (short, full)
  expand             expand the current myth into a longer saga
  narrate            read the myth (or its expansion) aloud
  reset              discard the current myth
  help               show this list
  quit               leave the session";

/// A parsed line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Generate a fresh myth on the given theme.
    Generate(String),
    /// Set the tone for subsequent generations.
    Tone(Tone),
    /// Set the length for subsequent generations.
    Length(MythLength),
    /// Expand the current myth.
    Expand,
    /// Narrate the current myth or its expansion.
    Narrate,
    /// Discard the current myth.
    Reset,
    /// List available commands.
    Help,
    /// Leave the session.
    Quit,
}

/// Parse one line of interactive input.
///
/// Returns `Ok(None)` for blank lines and an explanatory message for
/// anything unrecognized.
pub fn parse_line(line: &str) -> Result<Option<ReplCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let command = match word {
        "generate" => {
            if rest.is_empty() {
                return Err("Usage: generate <theme>".to_string());
            }
            ReplCommand::Generate(rest.to_string())
        }
        "tone" => {
            if rest.is_empty() {
                return Err("Usage: tone <epic|dramatic|humorous|dark>".to_string());
            }
            ReplCommand::Tone(Tone::from_str(rest)?)
        }
        "length" => {
            if rest.is_empty() {
                return Err("Usage: length <short|full>".to_string());
            }
            ReplCommand::Length(MythLength::from_str(rest)?)
        }
        "expand" => ReplCommand::Expand,
        "narrate" => ReplCommand::Narrate,
        "reset" => ReplCommand::Reset,
        "help" => ReplCommand::Help,
        "quit" | "exit" => ReplCommand::Quit,
        other => {
            return Err(format!("Unknown command: {other}. Type 'help' for a list."));
        }
    };
    Ok(Some(command))
}

/// Format a myth as terminal output lines.
pub fn render_myth(myth: &Myth) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(String::new());
    lines.push(format!("=== {} ===", myth.title));
    if !myth.characters.is_empty() {
        lines.push("Characters:".to_string());
        for character in &myth.characters {
            lines.push(format!(
                "  {} ({}) - {}",
                character.name, character.role, character.description
            ));
        }
    }
    lines.push(String::new());
    lines.push(myth.plot.clone());
    lines.push(String::new());
    lines.push(format!("Symbolism: {}", myth.symbolism));
    lines
}

/// Describe the step from one snapshot to the next as terminal output lines.
///
/// Busy phases yield a progress line; myth, expansion, and error content is
/// printed once, when it first appears.
pub fn render_transition(
    previous: Option<&SessionSnapshot>,
    next: &SessionSnapshot,
) -> Vec<String> {
    let mut lines = Vec::new();

    match next.phase() {
        Phase::Generating => lines.push("Crafting a new legend...".to_string()),
        Phase::Expanding => lines.push("Expanding the saga...".to_string()),
        Phase::Narrating => lines.push("Narrating...".to_string()),
        Phase::Idle | Phase::Ready | Phase::Failed => {}
    }

    let prior_myth = previous.and_then(|snapshot| snapshot.myth().as_ref());
    if let Some(myth) = next.myth().as_ref()
        && prior_myth != Some(myth)
    {
        lines.extend(render_myth(myth));
        if let Some(image) = next.image().as_ref() {
            if image.is_placeholder() {
                lines.push(format!("Illustration: {}", image.as_str()));
            } else {
                lines.push("Illustration: inline image data".to_string());
            }
        }
    }

    let prior_expansion = previous.and_then(|snapshot| snapshot.expanded_plot().as_ref());
    if let Some(expansion) = next.expanded_plot().as_ref()
        && prior_expansion != Some(expansion)
    {
        lines.push(String::new());
        lines.push("The saga, expanded:".to_string());
        lines.push(expansion.clone());
    }

    let prior_error = previous.and_then(|snapshot| snapshot.error().as_ref());
    if let Some(message) = next.error().as_ref()
        && prior_error != Some(message)
    {
        lines.push(format!("Error: {message}"));
    }

    if previous.map(|snapshot| *snapshot.phase()) == Some(Phase::Narrating)
        && *next.phase() == Phase::Ready
        && next.error().is_none()
    {
        lines.push("Narration complete.".to_string());
    }

    if *next.phase() == Phase::Idle && previous.is_some() {
        lines.push("Ready for another legend.".to_string());
    }

    lines
}

/// Drive an interactive session over stdin.
///
/// A background task renders every published snapshot; this function reads
/// lines, parses them, and forwards intents until `quit` or end of input.
pub async fn run_repl(
    session: SessionHandle,
    initial: MythOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut snapshots = session.subscribe();
    let renderer = tokio::spawn(async move {
        let mut previous: Option<SessionSnapshot> = None;
        loop {
            match snapshots.recv().await {
                Ok(snapshot) => {
                    for line in render_transition(previous.as_ref(), &snapshot) {
                        println!("{line}");
                    }
                    previous = Some(snapshot);
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "Renderer lagged behind session snapshots");
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    println!("Vyasa weaves and narrates original mini-myths.");
    println!("Type 'help' for commands.");

    let mut options = initial;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_line(&line) {
            Ok(None) => {}
            Ok(Some(ReplCommand::Generate(theme))) => {
                options.theme = theme;
                session.generate(options.clone());
            }
            Ok(Some(ReplCommand::Tone(tone))) => {
                options.tone = tone;
                println!("Tone set to {tone}.");
            }
            Ok(Some(ReplCommand::Length(length))) => {
                options.length = length;
                println!("Length set to {length}.");
            }
            Ok(Some(ReplCommand::Expand)) => session.expand(),
            Ok(Some(ReplCommand::Narrate)) => session.narrate(),
            Ok(Some(ReplCommand::Reset)) => session.reset(),
            Ok(Some(ReplCommand::Help)) => println!("{HELP}"),
            Ok(Some(ReplCommand::Quit)) => break,
            Err(message) => println!("{message}"),
        }
    }

    // Dropping the handle stops the session task, which ends the renderer.
    drop(session);
    let _ = renderer.await;
    Ok(())
}

/// Generate a single myth, print it, and exit.
///
/// With `narrate` set, plays the narration to completion before returning.
/// Fails with the session's own message when generation or narration fails.
pub async fn run_once(
    session: SessionHandle,
    options: MythOptions,
    narrate: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    options.validate()?;

    let mut snapshots = session.subscribe();
    let mut previous: Option<SessionSnapshot> = None;

    session.generate(options);
    if let Some(message) = wait_for_settle(&mut snapshots, &mut previous).await? {
        return Err(message.into());
    }

    if narrate {
        session.narrate();
        if let Some(message) = wait_for_settle(&mut snapshots, &mut previous).await? {
            return Err(message.into());
        }
    }

    Ok(())
}

/// Render snapshots until the session settles, returning any failure message.
async fn wait_for_settle(
    snapshots: &mut broadcast::Receiver<SessionSnapshot>,
    previous: &mut Option<SessionSnapshot>,
) -> Result<Option<String>, Box<dyn std::error::Error>> {
    loop {
        let snapshot = match snapshots.recv().await {
            Ok(snapshot) => snapshot,
            Err(RecvError::Lagged(_)) => continue,
            Err(RecvError::Closed) => return Err("Session task stopped unexpectedly".into()),
        };
        for line in render_transition(previous.as_ref(), &snapshot) {
            println!("{line}");
        }
        let settled = !snapshot.phase().is_busy();
        let error = snapshot.error().clone();
        *previous = Some(snapshot);
        if settled {
            return Ok(error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vyasa::{Character, ImageRef};

    fn sample_myth() -> Myth {
        Myth {
            title: "The Lamp of Vidarbha".to_string(),
            characters: vec![Character {
                name: "Agni".to_string(),
                role: "fire god".to_string(),
                description: "Bearer of the first flame".to_string(),
            }],
            plot: "A lamp is carried across the flood.".to_string(),
            symbolism: "The flame is memory.".to_string(),
        }
    }

    fn snapshot(phase: Phase, myth: Option<Myth>, error: Option<String>) -> SessionSnapshot {
        let image = myth.as_ref().map(|_| ImageRef::placeholder());
        SessionSnapshot::new(MythOptions::default(), myth, image, None, phase, error)
    }

    #[test]
    fn blank_lines_parse_to_nothing() {
        assert_eq!(parse_line(""), Ok(None));
        assert_eq!(parse_line("   "), Ok(None));
    }

    #[test]
    fn generate_takes_the_rest_of_the_line() {
        assert_eq!(
            parse_line("generate the first flame"),
            Ok(Some(ReplCommand::Generate("the first flame".to_string())))
        );
        assert!(parse_line("generate").is_err());
    }

    #[test]
    fn tone_and_length_parse_their_arguments() {
        assert_eq!(
            parse_line("tone dark"),
            Ok(Some(ReplCommand::Tone(Tone::Dark)))
        );
        assert_eq!(
            parse_line("length full"),
            Ok(Some(ReplCommand::Length(MythLength::Full)))
        );
        assert!(parse_line("tone sarcastic").is_err());
        assert!(parse_line("length medium").is_err());
    }

    #[test]
    fn bare_commands_parse_without_arguments() {
        assert_eq!(parse_line("expand"), Ok(Some(ReplCommand::Expand)));
        assert_eq!(parse_line("narrate"), Ok(Some(ReplCommand::Narrate)));
        assert_eq!(parse_line("reset"), Ok(Some(ReplCommand::Reset)));
        assert_eq!(parse_line("help"), Ok(Some(ReplCommand::Help)));
        assert_eq!(parse_line("quit"), Ok(Some(ReplCommand::Quit)));
        assert_eq!(parse_line("exit"), Ok(Some(ReplCommand::Quit)));
    }

    #[test]
    fn unknown_commands_are_reported() {
        let message = parse_line("dance").unwrap_err();
        assert!(message.contains("dance"));
    }

    #[test]
    fn busy_phases_render_progress_lines() {
        let generating = snapshot(Phase::Generating, None, None);
        assert_eq!(
            render_transition(None, &generating),
            vec!["Crafting a new legend...".to_string()]
        );

        let ready = snapshot(Phase::Ready, Some(sample_myth()), None);
        let expanding = snapshot(Phase::Expanding, Some(sample_myth()), None);
        assert_eq!(
            render_transition(Some(&ready), &expanding),
            vec!["Expanding the saga...".to_string()]
        );
    }

    #[test]
    fn a_new_myth_is_rendered_once() {
        let ready = snapshot(Phase::Ready, Some(sample_myth()), None);
        let lines = render_transition(None, &ready);
        assert!(lines.iter().any(|line| line.contains("The Lamp of Vidarbha")));
        assert!(lines.iter().any(|line| line.contains("Agni")));

        assert!(render_transition(Some(&ready), &ready).is_empty());
    }

    #[test]
    fn an_expansion_is_rendered_when_it_appears() {
        let ready = snapshot(Phase::Ready, Some(sample_myth()), None);
        let expanded = SessionSnapshot::new(
            MythOptions::default(),
            Some(sample_myth()),
            Some(ImageRef::placeholder()),
            Some("In the first age of the world, a lamp was lit.".to_string()),
            Phase::Ready,
            None,
        );
        let lines = render_transition(Some(&ready), &expanded);
        assert!(lines.iter().any(|line| line.contains("In the first age")));
        assert!(render_transition(Some(&expanded), &expanded).is_empty());
    }

    #[test]
    fn narration_completion_is_announced() {
        let narrating = snapshot(Phase::Narrating, Some(sample_myth()), None);
        let ready = snapshot(Phase::Ready, Some(sample_myth()), None);
        assert_eq!(
            render_transition(Some(&narrating), &ready),
            vec!["Narration complete.".to_string()]
        );
    }

    #[test]
    fn failures_render_the_friendly_message() {
        let generating = snapshot(Phase::Generating, None, None);
        let failed = snapshot(
            Phase::Failed,
            None,
            Some("An ancient power faltered.".to_string()),
        );
        assert_eq!(
            render_transition(Some(&generating), &failed),
            vec!["Error: An ancient power faltered.".to_string()]
        );
    }

    #[test]
    fn reset_is_acknowledged() {
        let ready = snapshot(Phase::Ready, Some(sample_myth()), None);
        let idle = snapshot(Phase::Idle, None, None);
        assert_eq!(
            render_transition(Some(&ready), &idle),
            vec!["Ready for another legend.".to_string()]
        );
    }
}
