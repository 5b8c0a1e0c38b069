//! CLI argument parsing for the letter generator.
//!
//! Uses clap derive macros for declarative argument definitions. This is the
//! "form layer": it collects the field values a user would type into the
//! original form and turns them into a `LetterRequest`.

use std::path::PathBuf;

use clap::Parser;

/// Generate a resignation letter from structured input.
///
/// The letter is always printed to stdout; `--copy`, `--save` and `--mailto`
/// additionally route it to the clipboard, a text file, or a mailto link.
#[derive(Parser, Debug)]
#[command(name = "resignation-letter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Your full name (signs the letter)
    #[arg(long)]
    pub name: Option<String>,

    /// Manager or recipient name used in the greeting
    #[arg(long)]
    pub manager: Option<String>,

    /// Your job title
    #[arg(long)]
    pub job: Option<String>,

    /// Company name
    #[arg(long)]
    pub company: Option<String>,

    /// Last working day as an ISO date (YYYY-MM-DD); overrides --notice
    #[arg(long, value_name = "DATE")]
    pub last_day: Option<String>,

    /// Notice period in days used to compute the last working day
    /// (0 omits the date entirely)
    #[arg(long, value_name = "DAYS")]
    pub notice: Option<i64>,

    /// Reason for leaving, woven into the reason clause
    #[arg(long)]
    pub reason: Option<String>,

    /// Closing sentence replacing the tone's default one
    #[arg(long)]
    pub extra: Option<String>,

    /// Writing style: polite, formal, honest, simple, grateful or light
    #[arg(long)]
    pub tone: Option<String>,

    /// Letter language: en or es
    #[arg(long)]
    pub lang: Option<String>,

    /// Load the request from a JSON file instead of the flags above
    #[arg(long, value_name = "FILE", conflicts_with_all = [
        "name", "manager", "job", "company", "last_day", "reason", "extra", "tone", "lang",
    ])]
    pub from_json: Option<PathBuf>,

    /// Copy the letter to the system clipboard
    #[arg(long)]
    pub copy: bool,

    /// Save the letter as a UTF-8 text file
    /// (optional path; defaults to <name>_letter.txt)
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    pub save: Option<Option<PathBuf>>,

    /// Print a mailto: link carrying the letter as the message body
    #[arg(long)]
    pub mailto: bool,
}

impl Cli {
    /// Parse command-line arguments into the Cli structure.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
