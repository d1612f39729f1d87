//! Command-line interface module.
//!
//! This module provides the CLI structure and session runners for the vyasa binary.

mod commands;
mod run;

pub use commands::Cli;
pub use run::{ReplCommand, parse_line, render_myth, render_transition, run_once, run_repl};
