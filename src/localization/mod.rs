//! The project's text list and the locale codes tagging its strings.
//!
//! The text list is the array stored under `textList` in `project.json`.
//! It can be extracted from a project, exported to a standalone file for
//! later processing, imported back, and applied to a project.

mod locale;
mod walk;

use std::{collections::BTreeSet, fs, path::Path};

use anyhow::{Context, Result, bail};
use serde_json::Value;

use crate::project::{Layout, ProjectFile};

pub use locale::{Locale, SourceLocale, iso_from_locale};
pub use walk::{CHILDREN_KEY, Position, TEXT_KEY, visit_text_nodes, visit_text_nodes_mut};

/// Key of the array holding all localizable strings of a project.
pub const TEXT_LIST_KEY: &str = "textList";

/// Outcome of [`LocalizationTable::export`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportOutcome {
    Written,
    /// The destination already existed and was left untouched.
    SkippedExisting,
}

/// A text node's position with its locale map.
#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub struct TextEntry {
    pub position: Position,
    pub text: serde_json::Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocalizationTable {
    blocks: Vec<Value>,
}

impl LocalizationTable {
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Array(blocks) => Ok(Self { blocks }),
            _ => bail!("The \"{}\" node must be an array", TEXT_LIST_KEY),
        }
    }

    /// Copy the text list out of a project.
    pub fn extract(project: &ProjectFile) -> Result<Self> {
        Self::from_value(text_list(project)?.clone())
    }

    /// Check that `project` has a text list this table can be applied to.
    pub fn check_target(project: &ProjectFile) -> Result<()> {
        text_list(project).map(|_| ())
    }

    /// Read a text list previously written by [`LocalizationTable::export`].
    pub fn import(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!(
                "The import path does not exist, check that the path is exact: {}",
                path.display()
            );
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read localization file: {}", path.display()))?;
        let value: Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON file: {}", path.display()))?;
        Self::from_value(value)
            .with_context(|| format!("Invalid localization file: {}", path.display()))
    }

    /// Write the text list to `path`, unless something already exists there.
    pub fn export(&self, path: &Path) -> Result<ExportOutcome> {
        if path.exists() {
            return Ok(ExportOutcome::SkippedExisting);
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let content = Layout::default().render(&self.to_value())?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        Ok(ExportOutcome::Written)
    }

    /// Replace the project's text list with this table.
    pub fn apply(self, project: &mut ProjectFile) -> Result<()> {
        let path = project.path().display().to_string();
        match project.locate_mut(TEXT_LIST_KEY) {
            Some(slot) if slot.is_array() => {
                *slot = Value::Array(self.blocks);
                Ok(())
            }
            Some(_) => bail!("The \"{}\" node must be an array in {}", TEXT_LIST_KEY, path),
            None => bail!("No \"{}\" array found in {}", TEXT_LIST_KEY, path),
        }
    }

    pub fn blocks(&self) -> &[Value] {
        &self.blocks
    }

    pub fn blocks_mut(&mut self) -> &mut [Value] {
        &mut self.blocks
    }

    pub fn to_value(&self) -> Value {
        Value::Array(self.blocks.clone())
    }

    /// Number of text nodes.
    pub fn len(&self) -> usize {
        let mut count = 0;
        visit_text_nodes(&self.blocks, |_, _| count += 1);
        count
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every text node, in walk order.
    #[cfg(test)]
    pub fn entries(&self) -> Vec<TextEntry> {
        let mut entries = Vec::new();
        visit_text_nodes(&self.blocks, |position, text| {
            entries.push(TextEntry {
                position: position.clone(),
                text: text.clone(),
            });
        });
        entries
    }

    /// Every locale code used by at least one text node.
    pub fn locales(&self) -> BTreeSet<String> {
        let mut locales = BTreeSet::new();
        visit_text_nodes(&self.blocks, |_, text| {
            locales.extend(text.keys().cloned());
        });
        locales
    }
}

fn text_list(project: &ProjectFile) -> Result<&Value> {
    let path = project.path().display();
    match project.locate(TEXT_LIST_KEY) {
        Some(value) if value.is_array() => Ok(value),
        Some(_) => bail!("The \"{}\" node must be an array in {}", TEXT_LIST_KEY, path),
        None => bail!("No \"{}\" array found in {}", TEXT_LIST_KEY, path),
    }
}
