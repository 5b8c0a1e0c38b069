//! Tone templates: the per-(language, tone) clause bundles a letter is
//! composed from.
//!
//! Each bundle holds the five clause patterns (greeting, opening, reason,
//! thanks, closing) plus the default closing sentence. Patterns are stored
//! raw with `{placeholder}` markers and filled at render time; rendering is
//! deterministic for the same arguments.

use crate::i18n::{Language, Tone};

/// Clause patterns for one (language, tone) pair.
///
/// Every registered pair supplies all fields; `lookup` can therefore never
/// hand out a partial bundle.
#[derive(Debug, Clone)]
pub struct ToneTemplate {
    /// Greeting used when a manager name is given
    /// Placeholders: {manager}
    pub greeting_named: &'static str,

    /// Greeting used when no manager name is given
    pub greeting_plain: &'static str,

    /// Opening statement
    /// Placeholders: {job}, {company}, {effective}
    pub opening: &'static str,

    /// Effective-date fragment spliced into {effective} when a date is present
    /// Placeholders: {date}
    pub effective_date: &'static str,

    /// Reason clause, rendered only when the request carries a reason
    /// Placeholders: {reason}
    pub reason_clause: &'static str,

    /// Gratitude clause
    /// Placeholders: {company}
    pub thanks_clause: &'static str,

    /// Default closing sentence, used when the request has no extra text
    pub default_extra: &'static str,

    /// Valediction line; the composer appends the signer's name below it
    pub valediction: &'static str,
}

impl ToneTemplate {
    /// Render the greeting line.
    ///
    /// A blank or absent manager name selects the impersonal greeting.
    pub fn greet(&self, manager: Option<&str>) -> String {
        match manager.map(str::trim) {
            Some(m) if !m.is_empty() => self.greeting_named.replace("{manager}", m),
            _ => self.greeting_plain.to_string(),
        }
    }

    /// Render the opening statement.
    ///
    /// An empty `date` drops the effective-date fragment entirely.
    pub fn open(&self, job: &str, company: &str, date: &str) -> String {
        let effective = if date.is_empty() {
            String::new()
        } else {
            self.effective_date.replace("{date}", date)
        };

        self.opening
            .replace("{job}", job)
            .replace("{company}", company)
            .replace("{effective}", &effective)
    }

    /// Render the reason clause; empty input yields an empty clause.
    pub fn reason(&self, reason: &str) -> String {
        if reason.is_empty() {
            String::new()
        } else {
            self.reason_clause.replace("{reason}", reason)
        }
    }

    /// Render the gratitude clause.
    pub fn thanks(&self, company: &str) -> String {
        self.thanks_clause.replace("{company}", company)
    }
}

// ==================== English Templates ====================

pub const EN_POLITE: ToneTemplate = ToneTemplate {
    greeting_named: "Hi {manager},",
    greeting_plain: "Hello,",
    opening: "I'm writing to let you know I'm resigning from my role as {job} at {company}{effective}.",
    effective_date: ", effective {date}",
    reason_clause: "This wasn't easy, but I'm leaving because {reason}.",
    thanks_clause: "Thank you for the chance to grow at {company}.",
    default_extra: "I'll help ensure a smooth hand-off.",
    valediction: "Best regards,",
};

pub const EN_FORMAL: ToneTemplate = ToneTemplate {
    greeting_named: "Dear {manager},",
    greeting_plain: "To whom it may concern,",
    opening: "Please accept this letter as formal notice of my resignation from my position as {job} at {company}{effective}.",
    effective_date: ", effective {date}",
    reason_clause: "After careful consideration, I have decided to step down due to {reason}.",
    thanks_clause: "I am grateful for the opportunities and experience I have gained at {company}.",
    default_extra: "I will do everything I can to ensure a smooth transition.",
    valediction: "Sincerely,",
};

pub const EN_HONEST: ToneTemplate = ToneTemplate {
    greeting_named: "Dear {manager},",
    greeting_plain: "Hello,",
    opening: "I'm submitting my resignation from my position as {job} at {company}{effective}.",
    effective_date: ", with my last day on {date}",
    reason_clause: "To be transparent, my decision is based on {reason}.",
    thanks_clause: "I appreciate the experiences and relationships I've built at {company}.",
    default_extra: "I'll document my responsibilities to make the transition easier.",
    valediction: "Respectfully,",
};

pub const EN_SIMPLE: ToneTemplate = ToneTemplate {
    greeting_named: "Hi {manager},",
    greeting_plain: "Hi,",
    opening: "I'm resigning from my job as {job} at {company}{effective}.",
    effective_date: ", and my last day will be {date}",
    reason_clause: "I'm leaving because {reason}.",
    thanks_clause: "Thanks for everything at {company}.",
    default_extra: "I'll help with the handover.",
    valediction: "Thanks,",
};

pub const EN_GRATEFUL: ToneTemplate = ToneTemplate {
    greeting_named: "Dear {manager},",
    greeting_plain: "Dear Team,",
    opening: "Please accept this as my resignation from {job} at {company}{effective}.",
    effective_date: ", effective {date}",
    reason_clause: "I've decided to move on because {reason}.",
    thanks_clause: "I'm truly grateful for the trust and opportunities at {company}.",
    default_extra: "I'll do my best to make this an easy transition for everyone.",
    valediction: "With appreciation,",
};

pub const EN_LIGHT: ToneTemplate = ToneTemplate {
    greeting_named: "Hey {manager},",
    greeting_plain: "Hey there,",
    opening: "I'm letting you know I'll be resigning from my role as {job} at {company}{effective}.",
    effective_date: ", with {date} as my last day",
    reason_clause: "The short version: I'm moving on because {reason}.",
    thanks_clause: "I've learned a lot and I'm thankful for my time at {company}.",
    default_extra: "I'll leave things tidy and share notes for a smooth handover.",
    valediction: "All the best,",
};

// ==================== Spanish Templates ====================

pub const ES_POLITE: ToneTemplate = ToneTemplate {
    greeting_named: "Hola {manager},",
    greeting_plain: "Hola,",
    opening: "Le escribo para informarle que presento mi renuncia al puesto de {job} en {company}{effective}.",
    effective_date: ", con fecha efectiva {date}",
    reason_clause: "No fue una decisión fácil, pero me voy porque {reason}.",
    thanks_clause: "Agradezco la oportunidad de haber crecido en {company}.",
    default_extra: "Apoyaré para que el traspaso sea lo más sencillo posible.",
    valediction: "Saludos cordiales,",
};

/// Look up the template bundle for a (language, tone selector) pair.
///
/// This is a TOTAL function over free-form selector strings: an unregistered
/// tone yields the "polite" bundle for the resolved language, so letter
/// generation can never be blocked by a malformed or future-incompatible
/// selector value.
pub fn lookup(language: Language, tone_key: &str) -> &'static ToneTemplate {
    template_for(language, Tone::resolve(language, tone_key))
}

/// Map a resolved (language, tone) pair to its bundle.
fn template_for(language: Language, tone: Tone) -> &'static ToneTemplate {
    match (language.code(), tone) {
        // Spanish registers polite only; Tone::resolve has already degraded
        // everything else
        ("es", _) => &ES_POLITE,
        (_, Tone::Polite) => &EN_POLITE,
        (_, Tone::Formal) => &EN_FORMAL,
        (_, Tone::Honest) => &EN_HONEST,
        (_, Tone::Simple) => &EN_SIMPLE,
        (_, Tone::Grateful) => &EN_GRATEFUL,
        (_, Tone::Light) => &EN_LIGHT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every registered (language, tone) pair, for exhaustive checks.
    fn all_bundles() -> Vec<(&'static str, &'static str, &'static ToneTemplate)> {
        let mut bundles = Vec::new();
        for language in [Language::ENGLISH, Language::SPANISH] {
            for tone in Tone::registered(language) {
                bundles.push((language.code(), tone.key(), template_for(language, *tone)));
            }
        }
        bundles
    }

    // ==================== Registry Invariants ====================

    #[test]
    fn test_every_bundle_supplies_all_clauses() {
        for (lang, tone, template) in all_bundles() {
            assert!(
                !template.greeting_named.is_empty(),
                "{lang}/{tone} greeting_named"
            );
            assert!(
                !template.greeting_plain.is_empty(),
                "{lang}/{tone} greeting_plain"
            );
            assert!(!template.opening.is_empty(), "{lang}/{tone} opening");
            assert!(
                !template.effective_date.is_empty(),
                "{lang}/{tone} effective_date"
            );
            assert!(
                !template.reason_clause.is_empty(),
                "{lang}/{tone} reason_clause"
            );
            assert!(
                !template.thanks_clause.is_empty(),
                "{lang}/{tone} thanks_clause"
            );
            assert!(
                !template.default_extra.is_empty(),
                "{lang}/{tone} default_extra"
            );
            assert!(!template.valediction.is_empty(), "{lang}/{tone} valediction");
        }
    }

    #[test]
    fn test_every_bundle_carries_placeholders() {
        for (lang, tone, template) in all_bundles() {
            assert!(
                template.greeting_named.contains("{manager}"),
                "{lang}/{tone}"
            );
            assert!(template.opening.contains("{job}"), "{lang}/{tone}");
            assert!(template.opening.contains("{company}"), "{lang}/{tone}");
            assert!(template.opening.contains("{effective}"), "{lang}/{tone}");
            assert!(template.effective_date.contains("{date}"), "{lang}/{tone}");
            assert!(template.reason_clause.contains("{reason}"), "{lang}/{tone}");
            assert!(template.thanks_clause.contains("{company}"), "{lang}/{tone}");
        }
    }

    // ==================== Lookup Tests ====================

    #[test]
    fn test_lookup_registered_pair() {
        let template = lookup(Language::ENGLISH, "formal");
        assert_eq!(template.valediction, "Sincerely,");
    }

    #[test]
    fn test_lookup_unknown_tone_degrades_to_polite() {
        let template = lookup(Language::ENGLISH, "sarcastic");
        assert_eq!(template.valediction, "Best regards,");
    }

    #[test]
    fn test_lookup_spanish_unregistered_tone_stays_spanish() {
        // "formal" exists under English only; the Spanish request must fall
        // back to es/polite, not to an English bundle
        let template = lookup(Language::SPANISH, "formal");
        assert_eq!(template.valediction, "Saludos cordiales,");
    }

    // ==================== Rendering Tests ====================

    #[test]
    fn test_greet_with_manager() {
        assert_eq!(EN_POLITE.greet(Some("Sam")), "Hi Sam,");
        assert_eq!(ES_POLITE.greet(Some("Sam")), "Hola Sam,");
    }

    #[test]
    fn test_greet_without_manager() {
        assert_eq!(EN_POLITE.greet(None), "Hello,");
        assert_eq!(EN_FORMAL.greet(None), "To whom it may concern,");
    }

    #[test]
    fn test_greet_blank_manager_uses_plain_greeting() {
        assert_eq!(EN_POLITE.greet(Some("   ")), "Hello,");
    }

    #[test]
    fn test_open_with_date() {
        let line = EN_POLITE.open("Engineer", "Acme", "February 1, 2024");
        assert_eq!(
            line,
            "I'm writing to let you know I'm resigning from my role as \
             Engineer at Acme, effective February 1, 2024."
        );
    }

    #[test]
    fn test_open_without_date() {
        let line = EN_POLITE.open("Engineer", "Acme", "");
        assert_eq!(
            line,
            "I'm writing to let you know I'm resigning from my role as Engineer at Acme."
        );
    }

    #[test]
    fn test_open_date_phrasing_varies_by_tone() {
        let honest = EN_HONEST.open("Engineer", "Acme", "March 1, 2024");
        assert!(honest.contains("with my last day on March 1, 2024"));

        let light = EN_LIGHT.open("Engineer", "Acme", "March 1, 2024");
        assert!(light.contains("with March 1, 2024 as my last day"));
    }

    #[test]
    fn test_reason_empty_yields_empty_clause() {
        assert_eq!(EN_POLITE.reason(""), "");
    }

    #[test]
    fn test_reason_appends_period() {
        assert_eq!(
            EN_POLITE.reason("Of a career change"),
            "This wasn't easy, but I'm leaving because Of a career change."
        );
    }

    #[test]
    fn test_reason_period_doubles_when_input_already_punctuated() {
        // The pattern appends its period regardless of trailing punctuation
        assert_eq!(
            EN_POLITE.reason("of layoffs."),
            "This wasn't easy, but I'm leaving because of layoffs.."
        );
    }

    #[test]
    fn test_thanks_mentions_company() {
        assert_eq!(
            EN_POLITE.thanks("Acme"),
            "Thank you for the chance to grow at Acme."
        );
        assert_eq!(
            ES_POLITE.thanks("Acme"),
            "Agradezco la oportunidad de haber crecido en Acme."
        );
    }
}
