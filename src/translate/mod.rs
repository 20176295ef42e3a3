//! Translation engines and the translation pass over a text list.
//!
//! ## Module Structure
//!
//! - `google`: Google Translate web endpoint client
//! - `pass`: walks a [`LocalizationTable`](crate::localization::LocalizationTable)
//!   and fills in the target locale

mod google;
mod pass;

use std::time::Duration;

use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::localization::{Locale, SourceLocale};

pub use google::{DEFAULT_ENDPOINT, GoogleTranslator, parse_response};
pub use pass::{TranslateOptions, TranslationFailure, TranslationStats, translate_table};

/// Turns a string into its translation.
pub trait Translator {
    /// Short engine name for messages.
    fn name(&self) -> &'static str;

    fn translate(&mut self, text: &str, source: &SourceLocale, target: &Locale) -> Result<String>;
}

/// Available translation engines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    /// Google Translate web endpoint
    #[default]
    Google,
    /// Copy the source text unchanged (seeds a locale for manual translation)
    Copy,
}

/// Connection settings for network engines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSettings {
    pub endpoint: String,
    pub delay: Duration,
    pub timeout: Duration,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            delay: Duration::from_secs(2),
            timeout: Duration::from_secs(30),
        }
    }
}

impl Engine {
    pub fn build(self, settings: &EngineSettings) -> Box<dyn Translator> {
        match self {
            Engine::Google => Box::new(GoogleTranslator::new(
                &settings.endpoint,
                settings.delay,
                settings.timeout,
            )),
            Engine::Copy => Box::new(CopyTranslator),
        }
    }
}

impl std::fmt::Display for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Engine::Google => write!(f, "google"),
            Engine::Copy => write!(f, "copy"),
        }
    }
}

/// Returns the source text as its own translation.
pub struct CopyTranslator;

impl Translator for CopyTranslator {
    fn name(&self) -> &'static str {
        "copy"
    }

    fn translate(
        &mut self,
        text: &str,
        _source: &SourceLocale,
        _target: &Locale,
    ) -> Result<String> {
        Ok(text.to_string())
    }
}
