mod cli;

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::{info, warn};

use cli::Cli;
use resignation_letter::config::Config;
use resignation_letter::i18n::{Language, Tone};
use resignation_letter::letter::{self, LetterRequest};
use resignation_letter::{dates, export};

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("resignation_letter=info".parse()?),
        )
        .init();

    let cli = Cli::parse_args();
    let config = Config::from_env();

    // Build the request from the JSON file or the individual flags
    let mut request = match &cli.from_json {
        Some(path) => load_request(path)?,
        None => request_from_flags(&cli),
    };
    apply_defaults(&mut request, &cli, &config);
    validate(&request)?;
    warn_on_unknown_selectors(&request);

    let language = Language::resolve(&request.lang);
    info!(
        "Composing a {} letter in {} ({})",
        Tone::resolve(language, &request.tone).key(),
        language.native_name(),
        language.locale()
    );

    let letter = letter::compose(&request);
    println!("{letter}");

    if cli.copy {
        match export::copy_to_clipboard(&letter) {
            Ok(()) => println!("\nCopied to clipboard!"),
            Err(err) => {
                warn!("Clipboard write failed: {err}");
                println!("\nCopy failed — please copy manually.");
            }
        }
    }

    if let Some(save) = &cli.save {
        let path = export::save_to_file(&letter, save.as_deref(), &request.name)?;
        info!("Saved letter to {}", path.display());
        println!("\nSaved to: {}", path.display());
    }

    if cli.mailto {
        println!("\n{}", export::mailto_link(&letter));
    }

    Ok(())
}

/// Build the request from the individual CLI flags.
fn request_from_flags(cli: &Cli) -> LetterRequest {
    LetterRequest {
        name: cli.name.clone().unwrap_or_default(),
        manager: cli.manager.clone(),
        job: cli.job.clone().unwrap_or_default(),
        company: cli.company.clone().unwrap_or_default(),
        last_day: cli.last_day.clone(),
        reason: cli.reason.clone(),
        extra: cli.extra.clone(),
        tone: cli.tone.clone().unwrap_or_default(),
        lang: cli.lang.clone().unwrap_or_default(),
    }
}

/// Load a request from a JSON file.
fn load_request(path: &Path) -> Result<LetterRequest> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read request file {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse request file {}", path.display()))
}

/// Apply the form-layer defaults: blank job/company fall back to their
/// stock values, blank selectors fall back to the configured defaults, and
/// a missing last day is computed from the notice period.
fn apply_defaults(request: &mut LetterRequest, cli: &Cli, config: &Config) {
    if request.job.trim().is_empty() {
        request.job = "Employee".to_string();
    }
    if request.company.trim().is_empty() {
        request.company = "the company".to_string();
    }
    if request.tone.trim().is_empty() {
        request.tone = config.default_tone.clone();
    }
    if request.lang.trim().is_empty() {
        request.lang = config.default_lang.clone();
    }

    let has_last_day = request
        .last_day
        .as_deref()
        .map(|day| !day.trim().is_empty())
        .unwrap_or(false);
    if !has_last_day {
        let notice_days = cli.notice.unwrap_or(config.default_notice_days);
        request.last_day = dates::compute_last_day(notice_days);
    }
}

/// Presence checks the form performs before the composer is ever invoked.
fn validate(request: &LetterRequest) -> Result<()> {
    if request.name.trim().is_empty() {
        bail!("Please enter your full name.");
    }
    if request.job.trim().is_empty() {
        bail!("Please enter your job title.");
    }
    if request.company.trim().is_empty() {
        bail!("Please enter your company.");
    }
    Ok(())
}

/// Unrecognized selector values degrade silently inside the composer; the
/// CLI still tells the user what is about to happen.
fn warn_on_unknown_selectors(request: &LetterRequest) {
    if Language::from_code(request.lang.trim()).is_err() {
        warn!(
            "Unknown language '{}', defaulting to {}",
            request.lang,
            Language::canonical().name()
        );
    }

    let language = Language::resolve(&request.lang);
    let registered = Tone::from_key(&request.tone)
        .map(|tone| Tone::registered(language).contains(&tone))
        .unwrap_or(false);
    if !registered {
        warn!(
            "Tone '{}' is not available in {}, using '{}'",
            request.tone,
            language.name(),
            Tone::DEFAULT.key()
        );
    }
}
