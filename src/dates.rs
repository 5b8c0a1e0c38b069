//! Date helpers: locale-aware long-date rendering and notice-period math.

use chrono::{Datelike, Days, Local, NaiveDate};

use crate::i18n::Language;

/// Render an ISO calendar date (`YYYY-MM-DD`) as a long-form date localized
/// to `language` ("February 1, 2024" for en-US, "1 de febrero de 2024" for
/// es-ES).
///
/// This is a TOTAL function: empty input yields an empty string, and input
/// that does not parse as an ISO date is echoed back unchanged rather than
/// failing, so a malformed date can never block letter generation.
pub fn format_long_date(iso: &str, language: Language) -> String {
    let trimmed = iso.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(date) => {
            let config = language.config();
            let month = config.month_names[date.month0() as usize];
            config
                .date_pattern
                .replace("{month}", month)
                .replace("{day}", &date.day().to_string())
                .replace("{year}", &date.year().to_string())
        }
        Err(_) => iso.to_string(),
    }
}

/// Compute the last working day implied by a notice period, counted from
/// `today`.
///
/// # Returns
/// * `None` when `notice_days <= 0` (the caller should clear any displayed
///   date)
/// * `Some(date)` with `today` advanced by `notice_days` days otherwise
pub fn last_day_from(today: NaiveDate, notice_days: i64) -> Option<NaiveDate> {
    if notice_days <= 0 {
        return None;
    }
    today.checked_add_days(Days::new(notice_days as u64))
}

/// Compute the last working day implied by a notice period, counted from
/// the local calendar date, as an ISO date string.
///
/// This is the convenience default the form layer applies (14-day notice)
/// when the user has not picked an explicit last day.
pub fn compute_last_day(notice_days: i64) -> Option<String> {
    last_day_from(Local::now().date_naive(), notice_days)
        .map(|date| date.format("%Y-%m-%d").to_string())
}
