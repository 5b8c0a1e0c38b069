//! Language type: Flexible, validated language representation.
//!
//! This module provides the `Language` type, a thin handle over the registry
//! that resolves free-form selector values to a supported language.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};

/// A resolved language.
///
/// This type represents a language that exists in the registry. Values are
/// obtained either through the total `resolve` (which degrades unknown codes
/// to the canonical language) or through the fallible `from_code` (for
/// callers that want to know whether a selector was recognized).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "es")
    code: &'static str,
}

impl Language {
    /// English, the canonical language.
    pub const ENGLISH: Language = Language { code: "en" };

    /// Spanish.
    pub const SPANISH: Language = Language { code: "es" };

    /// Resolve a selector value to a supported language.
    ///
    /// This is a TOTAL function: it never fails. Selector values are
    /// user-controlled free-form strings, and an unrecognized or disabled
    /// code degrades to the canonical language rather than blocking letter
    /// generation.
    ///
    /// # Arguments
    /// * `code` - The selector value (e.g., "es", "en", or anything else)
    ///
    /// # Returns
    /// The matching enabled language, or the canonical language for any
    /// other input.
    pub fn resolve(code: &str) -> Language {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code.trim()) {
            Some(config) if config.enabled => Language { code: config.code },
            _ => Language::canonical(),
        }
    }

    /// Create a Language from a language code string.
    ///
    /// Unlike [`Language::resolve`], this reports unrecognized codes so the
    /// caller can warn before degrading.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code (e.g., "en", "es")
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is valid and the language is enabled
    /// * `Err` if the code is not found or the language is disabled
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language {
                code: config.code, // Use the static str from the registry
            }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Get the canonical (default) language.
    ///
    /// This is the language every unrecognized selector degrades to.
    ///
    /// # Returns
    /// The canonical Language (English).
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language { code: config.code }
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the language code is not found in the registry. This should
    /// never happen if the Language was constructed properly (via `resolve`,
    /// `from_code`, or the constants).
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// Get the English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the language.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Get the BCP 47 locale tag used for date rendering.
    pub fn locale(&self) -> &'static str {
        self.config().locale
    }

    /// Check if this is the canonical language.
    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }
}
