use std::env;

pub const DEFAULT_NOTICE_DAYS: i64 = 14;

#[derive(Debug, Clone)]
pub struct Config {
    // Selector defaults applied when the CLI does not override them
    pub default_lang: String,
    pub default_tone: String,

    // Notice period applied when no explicit last day is given
    pub default_notice_days: i64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            default_lang: env::var("LETTER_LANG").unwrap_or_else(|_| "en".to_string()),
            default_tone: env::var("LETTER_TONE").unwrap_or_else(|_| "polite".to_string()),
            default_notice_days: env::var("LETTER_NOTICE_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_NOTICE_DAYS),
        }
    }
}
