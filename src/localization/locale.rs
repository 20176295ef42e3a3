use std::{fmt, sync::LazyLock};

use anyhow::{Result, bail};
use regex::Regex;

/// Language part (2-3 letters) with an optional region or script part,
/// separated by `_` or `-`: `en`, `en_US`, `zh-Hant`.
static LOCALE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{2,3}(?:[_-][A-Za-z0-9]{2,8})?$").expect("valid locale regex")
});

/// A locale code as it appears in the project's `text` maps.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale(String);

impl Locale {
    pub fn parse(code: &str) -> Result<Self> {
        let code = code.trim();
        if !LOCALE_PATTERN.is_match(code) {
            bail!("Unsupported locale code: \"{}\"", code);
        }
        Ok(Self(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The ISO 639 language part sent to the translation service.
    pub fn iso(&self) -> &str {
        iso_from_locale(&self.0)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Language of the strings being translated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocale {
    /// Let the translation service detect the language.
    Auto,
    Locale(Locale),
}

impl SourceLocale {
    pub const AUTO: &'static str = "auto";

    pub fn parse(code: &str) -> Result<Self> {
        if code.trim().eq_ignore_ascii_case(Self::AUTO) {
            Ok(Self::Auto)
        } else {
            Locale::parse(code).map(Self::Locale)
        }
    }

    pub fn locale(&self) -> Option<&Locale> {
        match self {
            Self::Auto => None,
            Self::Locale(locale) => Some(locale),
        }
    }

    /// Code passed to the translation service (`auto` or ISO 639).
    pub fn service_code(&self) -> &str {
        match self {
            Self::Auto => Self::AUTO,
            Self::Locale(locale) => locale.iso(),
        }
    }
}

impl fmt::Display for SourceLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str(Self::AUTO),
            Self::Locale(locale) => locale.fmt(f),
        }
    }
}

/// Strip the region part: `en_US` -> `en`, `pt-BR` -> `pt`.
///
/// A `-` separator takes precedence over `_`.
pub fn iso_from_locale(locale: &str) -> &str {
    let separator = locale.find('-').or_else(|| locale.find('_'));
    match separator {
        Some(index) => &locale[..index],
        None => locale,
    }
}
