//! Tone type: the writing-style variants a letter can be composed in.
//!
//! Tones form the second axis of the template registry: each language
//! registers a subset of tones, and an unregistered selector degrades to
//! `Polite` for the resolved language.

use crate::i18n::Language;

/// A writing-style variant.
///
/// The variant set is small, fixed, and known at build time; each variant
/// selects one [`ToneTemplate`](crate::i18n::ToneTemplate) bundle per
/// language that registers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Polite,
    Formal,
    Honest,
    Simple,
    Grateful,
    Light,
}

/// Tones registered under English (all of them).
const ENGLISH_TONES: &[Tone] = &[
    Tone::Polite,
    Tone::Formal,
    Tone::Honest,
    Tone::Simple,
    Tone::Grateful,
    Tone::Light,
];

/// Tones registered under Spanish (polite only).
const SPANISH_TONES: &[Tone] = &[Tone::Polite];

impl Tone {
    /// The tone every unregistered selector degrades to.
    pub const DEFAULT: Tone = Tone::Polite;

    /// Parse a selector value into a tone.
    ///
    /// # Returns
    /// * `Some(Tone)` if the key names a known tone
    /// * `None` for anything else
    pub fn from_key(key: &str) -> Option<Tone> {
        match key.trim() {
            "polite" => Some(Tone::Polite),
            "formal" => Some(Tone::Formal),
            "honest" => Some(Tone::Honest),
            "simple" => Some(Tone::Simple),
            "grateful" => Some(Tone::Grateful),
            "light" => Some(Tone::Light),
            _ => None,
        }
    }

    /// The registry key for this tone.
    pub fn key(&self) -> &'static str {
        match self {
            Tone::Polite => "polite",
            Tone::Formal => "formal",
            Tone::Honest => "honest",
            Tone::Simple => "simple",
            Tone::Grateful => "grateful",
            Tone::Light => "light",
        }
    }

    /// Tones registered under a language.
    pub fn registered(language: Language) -> &'static [Tone] {
        match language.code() {
            "es" => SPANISH_TONES,
            _ => ENGLISH_TONES,
        }
    }

    /// Resolve a selector value to a tone registered under `language`.
    ///
    /// This is a TOTAL function: a key that is unknown, or known but not
    /// registered under the language (e.g. "formal" under Spanish), degrades
    /// to [`Tone::DEFAULT`] rather than failing.
    pub fn resolve(language: Language, key: &str) -> Tone {
        match Tone::from_key(key) {
            Some(tone) if Tone::registered(language).contains(&tone) => tone,
            _ => Tone::DEFAULT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key_all_variants() {
        assert_eq!(Tone::from_key("polite"), Some(Tone::Polite));
        assert_eq!(Tone::from_key("formal"), Some(Tone::Formal));
        assert_eq!(Tone::from_key("honest"), Some(Tone::Honest));
        assert_eq!(Tone::from_key("simple"), Some(Tone::Simple));
        assert_eq!(Tone::from_key("grateful"), Some(Tone::Grateful));
        assert_eq!(Tone::from_key("light"), Some(Tone::Light));
    }

    #[test]
    fn test_from_key_unknown() {
        assert_eq!(Tone::from_key("sarcastic"), None);
        assert_eq!(Tone::from_key(""), None);
    }

    #[test]
    fn test_from_key_trims_whitespace() {
        assert_eq!(Tone::from_key(" formal "), Some(Tone::Formal));
    }

    #[test]
    fn test_key_round_trips() {
        for tone in ENGLISH_TONES {
            assert_eq!(Tone::from_key(tone.key()), Some(*tone));
        }
    }

    #[test]
    fn test_registered_english_has_all_tones() {
        let tones = Tone::registered(Language::ENGLISH);
        assert_eq!(tones.len(), 6);
        assert!(tones.contains(&Tone::Polite));
        assert!(tones.contains(&Tone::Light));
    }

    #[test]
    fn test_registered_spanish_is_polite_only() {
        assert_eq!(Tone::registered(Language::SPANISH), &[Tone::Polite]);
    }

    #[test]
    fn test_resolve_registered_tone() {
        assert_eq!(Tone::resolve(Language::ENGLISH, "formal"), Tone::Formal);
        assert_eq!(Tone::resolve(Language::SPANISH, "polite"), Tone::Polite);
    }

    #[test]
    fn test_resolve_unknown_degrades_to_polite() {
        assert_eq!(Tone::resolve(Language::ENGLISH, "sarcastic"), Tone::Polite);
        assert_eq!(Tone::resolve(Language::ENGLISH, ""), Tone::Polite);
    }

    #[test]
    fn test_resolve_unregistered_under_language_degrades() {
        // "formal" is a known tone but Spanish only registers "polite"
        assert_eq!(Tone::resolve(Language::SPANISH, "formal"), Tone::Polite);
    }
}
