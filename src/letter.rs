//! Letter composition: the data-to-text pipeline.
//!
//! `compose` is a pure transformation from a [`LetterRequest`] to the
//! finished letter string. It never fails: selector values degrade to
//! defaults, a malformed date is echoed raw, and empty clauses are dropped
//! before assembly.

use serde::{Deserialize, Serialize};

use crate::dates;
use crate::i18n::{templates, Language};

/// Structured input for one letter generation.
///
/// Built fresh per user action by the form layer (which applies the
/// "Employee"/"the company" fallbacks and the presence checks) and discarded
/// after the composed letter is consumed. Serializable so a request can be
/// round-tripped through a JSON file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LetterRequest {
    /// Signer's full name
    pub name: String,

    /// Manager or recipient name for the greeting
    pub manager: Option<String>,

    /// Job title
    pub job: String,

    /// Company name
    pub company: String,

    /// Last working day as an ISO calendar date (`YYYY-MM-DD`)
    pub last_day: Option<String>,

    /// Free-form reason for leaving
    pub reason: Option<String>,

    /// Free-form closing sentence overriding the tone's default
    pub extra: Option<String>,

    /// Tone selector; degrades to "polite" if unrecognized
    pub tone: String,

    /// Language selector; degrades to "en" if unrecognized
    pub lang: String,
}

/// Trim leading/trailing whitespace and uppercase only the first character.
///
/// Empty or whitespace-only input yields an empty string. Uppercasing is
/// Unicode-aware (a first character may expand to several).
pub fn cap(text: &str) -> String {
    let trimmed = text.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Compose the finished letter for a request.
///
/// The pipeline: resolve language and tone (total, with fallbacks), format
/// the effective date per locale, render each clause with sanitized inputs,
/// drop empty clauses, and join the rest with blank lines. Calling twice
/// with an identical request yields identical output.
pub fn compose(request: &LetterRequest) -> String {
    let language = Language::resolve(&request.lang);
    let template = templates::lookup(language, &request.tone);

    let date = request
        .last_day
        .as_deref()
        .map(|iso| dates::format_long_date(iso, language))
        .unwrap_or_default();

    let reason = request.reason.as_deref().map(cap).unwrap_or_default();

    let extra = match request.extra.as_deref().map(cap) {
        Some(text) if !text.is_empty() => text,
        _ => template.default_extra.to_string(),
    };

    let clauses = [
        template.greet(request.manager.as_deref()),
        template.open(&request.job, &request.company, &date),
        template.reason(&reason),
        template.thanks(&request.company),
        extra,
        format!("{}\n{}", template.valediction, request.name),
    ];

    clauses
        .into_iter()
        .filter(|clause| !clause.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}
