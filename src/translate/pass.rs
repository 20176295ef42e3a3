use indicatif::ProgressBar;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::Translator;
use crate::localization::{Locale, LocalizationTable, Position, SourceLocale, visit_text_nodes_mut};

#[derive(Debug, Clone)]
pub struct TranslateOptions {
    pub source: SourceLocale,
    pub target: Locale,
    /// Leave text nodes that already have the target locale untouched.
    pub skip_existing: bool,
}

/// A string the translation engine could not handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationFailure {
    pub position: Position,
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationStats {
    pub translated: usize,
    /// Already had the target locale (skip mode).
    pub skipped: usize,
    /// No string to translate.
    pub empty: usize,
    pub failures: Vec<TranslationFailure>,
}

impl TranslationStats {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

/// Fill in `options.target` on every text node of the table.
///
/// The source string is the one tagged with the source locale, or the
/// first string of the node when that locale is absent or detection is
/// requested. A target equal to the source overwrites the value in place.
/// A failed string is recorded and left untouched; the walk continues.
pub fn translate_table(
    table: &mut LocalizationTable,
    translator: &mut dyn Translator,
    options: &TranslateOptions,
    progress: &ProgressBar,
) -> TranslationStats {
    let mut stats = TranslationStats::default();

    visit_text_nodes_mut(table.blocks_mut(), |position, text| {
        progress.set_message(format!("Block {}", position.block() + 1));
        translate_node(position, text, &mut *translator, options, &mut stats);
        progress.inc(1);
    });

    stats
}

fn translate_node(
    position: &Position,
    text: &mut Map<String, Value>,
    translator: &mut dyn Translator,
    options: &TranslateOptions,
    stats: &mut TranslationStats,
) {
    if options.skip_existing && text.contains_key(options.target.as_str()) {
        stats.skipped += 1;
        return;
    }

    let Some(source_text) = source_text(text, &options.source) else {
        stats.empty += 1;
        return;
    };

    if source_text.trim().is_empty() {
        let copied = source_text.to_string();
        text.insert(options.target.to_string(), Value::String(copied));
        stats.translated += 1;
        return;
    }

    match translator.translate(source_text, &options.source, &options.target) {
        Ok(translation) => {
            debug!(%position, "translated");
            text.insert(options.target.to_string(), Value::String(translation));
            stats.translated += 1;
        }
        Err(err) => {
            warn!(%position, error = %err, "translation failed");
            stats.failures.push(TranslationFailure {
                position: position.clone(),
                error: format!("{:#}", err),
            });
        }
    }
}

fn source_text<'a>(text: &'a Map<String, Value>, source: &SourceLocale) -> Option<&'a str> {
    source
        .locale()
        .and_then(|locale| text.get(locale.as_str()))
        .and_then(Value::as_str)
        .or_else(|| text.values().find_map(Value::as_str))
}
