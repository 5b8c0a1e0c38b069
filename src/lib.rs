//! Resignation letter generation: structured input in, finished letter out.
//!
//! The core is a pure template-selection and text-composition engine:
//!
//! - [`i18n`] holds the template registry — the fixed mapping from
//!   (language, tone) to clause bundles, with total-function lookup that
//!   degrades unknown selectors to sane defaults
//! - [`letter`] is the composer: it resolves the bundle, formats the
//!   effective date per locale, renders each clause, and joins the
//!   non-empty ones
//! - [`dates`] provides localized long-date rendering and notice-period math
//! - [`export`] routes the finished string to the clipboard, a text file,
//!   or a mailto link
//! - [`config`] supplies environment-driven defaults for the CLI form layer
//!
//! Composition is stateless and idempotent; nothing is retained between
//! invocations and generated letters are never stored.

pub mod config;
pub mod dates;
pub mod export;
pub mod i18n;
pub mod letter;
