//! Language registry: Single source of truth for all supported languages.
//!
//! This module provides a centralized registry of the languages the letter
//! generator can write in. It uses a singleton pattern with `OnceLock` to
//! ensure thread-safe initialization and access.

use std::sync::OnceLock;

/// Configuration for a supported language.
///
/// Contains all metadata and settings for a specific language, including
/// its code, names, enabled status, and the locale data used to render
/// long-form dates.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "es")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Spanish")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "Español")
    pub native_name: &'static str,

    /// BCP 47 locale tag used for date rendering (e.g., "en-US", "es-ES")
    pub locale: &'static str,

    /// Whether this is the canonical/default language (only one should be true)
    pub is_canonical: bool,

    /// Whether this language is enabled for use
    pub enabled: bool,

    /// Long-form date pattern with {day}, {month} and {year} placeholders
    pub date_pattern: &'static str,

    /// Full month names, January through December
    pub month_names: [&'static str; 12],
}

/// Global language registry singleton.
///
/// This registry contains all supported languages and provides methods to
/// query and access them. It's initialized once on first access and remains
/// immutable thereafter.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    ///
    /// This method initializes the registry on first call and returns a
    /// reference to the singleton instance on subsequent calls.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code (e.g., "en", "es")
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists
    /// * `None` if the language is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all enabled languages.
    ///
    /// # Returns
    /// A vector of references to all language configurations where `enabled`
    /// is true.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Get the canonical language configuration.
    ///
    /// The canonical language is the one every unrecognized selector value
    /// degrades to (English). There should be exactly one canonical language.
    ///
    /// # Returns
    /// A reference to the canonical language configuration.
    ///
    /// # Panics
    /// Panics if no canonical language is found or if multiple canonical
    /// languages are defined (this indicates a configuration error).
    pub fn canonical(&self) -> &LanguageConfig {
        let canonical_langs: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_canonical)
            .collect();

        match canonical_langs.len() {
            0 => panic!("No canonical language found in registry"),
            1 => canonical_langs[0],
            _ => panic!("Multiple canonical languages found in registry"),
        }
    }

    /// Check if a language code is supported and enabled.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code to check
    ///
    /// # Returns
    /// `true` if the language exists and is enabled, `false` otherwise.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|lang| lang.enabled)
            .unwrap_or(false)
    }
}

/// Default language configurations.
///
/// This function returns the initial set of supported languages.
/// Currently supports English (canonical) and Spanish.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            locale: "en-US",
            is_canonical: true,
            enabled: true,
            date_pattern: "{month} {day}, {year}",
            month_names: [
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ],
        },
        LanguageConfig {
            code: "es",
            name: "Spanish",
            native_name: "Español",
            locale: "es-ES",
            is_canonical: false,
            enabled: true,
            date_pattern: "{day} de {month} de {year}",
            month_names: [
                "enero",
                "febrero",
                "marzo",
                "abril",
                "mayo",
                "junio",
                "julio",
                "agosto",
                "septiembre",
                "octubre",
                "noviembre",
                "diciembre",
            ],
        },
    ]
}
