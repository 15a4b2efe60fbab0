//! CLI argument definitions.

use clap::Parser;

/// Usage line printed when a required argument is missing or empty.
pub const USAGE: &str = "Usage: mark-step <phase> <title> [notes]";

/// Top-level CLI parser for `mark-step`.
///
/// Positionals are free text: a leading `-` is kept as part of the value
/// unless the whole argument is a known flag (`-h`, `--help`, `-V`,
/// `--version`).
#[derive(Debug, Parser)]
#[command(name = "mark-step", version, about = "Mark a project step as completed")]
pub struct Cli {
    /// Phase the step belongs to.
    #[arg(allow_hyphen_values = true)]
    pub phase: Option<String>,
    /// Title of the completed step.
    #[arg(allow_hyphen_values = true)]
    pub title: Option<String>,
    /// Free-text notes stored with the step.
    #[arg(allow_hyphen_values = true)]
    pub notes: Option<String>,
    /// Arguments past the notes; accepted and ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,
}
