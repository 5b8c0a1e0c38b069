//! Output sinks for a composed letter: clipboard, plain-text file, and
//! mailto link.
//!
//! The sinks only ever consume the finished letter string; none of them feed
//! anything back into composition. The clipboard write is the single call in
//! the whole tool that can fail against an external resource.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use arboard::Clipboard;
use regex::Regex;
use thiserror::Error;

/// Subject used for the mailto link.
const MAIL_SUBJECT: &str = "Resignation Letter";

/// Errors from the clipboard sink.
///
/// Kept separate from `anyhow` so the caller can report the failure with its
/// own user-facing message and continue (recovery is manual).
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("clipboard unavailable: {0}")]
    Clipboard(#[from] arboard::Error),
}

/// Write the letter to the system clipboard.
///
/// Either succeeds or fails once; no retry is attempted.
pub fn copy_to_clipboard(letter: &str) -> Result<(), ExportError> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(letter)?;
    Ok(())
}

// Whitespace runs collapse to a single underscore in filenames
static WHITESPACE_RUN: OnceLock<Regex> = OnceLock::new();

/// Suggested export filename derived from the signer's name.
///
/// Whitespace runs are replaced with underscores and the `_letter.txt`
/// suffix is appended; a blank name falls back to "resignation".
pub fn suggested_filename(name: &str) -> String {
    let pattern = WHITESPACE_RUN.get_or_init(|| Regex::new(r"\s+").unwrap());

    let trimmed = name.trim();
    let base = if trimmed.is_empty() {
        "resignation".to_string()
    } else {
        pattern.replace_all(trimmed, "_").into_owned()
    };

    format!("{}_letter.txt", base)
}

/// Write the letter to a plain-text file (UTF-8).
///
/// When no explicit path is given, the file lands in the current directory
/// under [`suggested_filename`].
///
/// # Returns
/// The path the letter was written to.
pub fn save_to_file(letter: &str, path: Option<&Path>, name: &str) -> Result<PathBuf> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => PathBuf::from(suggested_filename(name)),
    };

    fs::write(&path, letter)
        .with_context(|| format!("Failed to write letter to {}", path.display()))?;

    Ok(path)
}

/// Build a `mailto:` link carrying the letter as the message body.
///
/// Subject and body are URL-encoded; pure string construction, no I/O.
pub fn mailto_link(letter: &str) -> String {
    format!(
        "mailto:?subject={}&body={}",
        urlencoding::encode(MAIL_SUBJECT),
        urlencoding::encode(letter)
    )
}
