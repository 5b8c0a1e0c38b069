//! Internationalization (i18n) module: languages, tones, and their templates.
//!
//! This module provides a centralized, extensible architecture for the two
//! selection axes of letter generation. All language-related logic, tone
//! registration, and the clause template bundles are contained here.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their
//!   metadata (including the locale data used for date rendering)
//! - `language`: Type-safe Language type with total selector resolution
//! - `tone`: Writing-style variants and their per-language registration
//! - `templates`: The per-(language, tone) clause bundles and the total
//!   `lookup` function
//!
//! # Example
//!
//! ```rust,ignore
//! use resignation_letter::i18n::{templates, Language};
//!
//! // Selector values are user-controlled and never fail to resolve
//! let language = Language::resolve("es");
//! let template = templates::lookup(language, "formal"); // degrades to es/polite
//! ```

mod language;
mod registry;
mod tone;
pub mod templates;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use templates::ToneTemplate;
pub use tone::Tone;
