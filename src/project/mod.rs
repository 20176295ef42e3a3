//! The Pixel Game Maker `project.json` document.
//!
//! The project schema belongs to the game-authoring tool, so the document is
//! kept as an untyped [`Value`] and only the nodes this tool edits are
//! located by key name. Object key order is preserved on write-back.

mod layout;

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde_json::Value;

use crate::localization::Locale;

pub use layout::Layout;

/// Default file name looked up when no path is given.
pub const PROJECT_FILE_NAME: &str = "project.json";

/// Key of the object holding the game's metadata.
pub const GAME_INFORMATION_KEY: &str = "gameInformation";

/// Member of [`GAME_INFORMATION_KEY`] listing the supported locales.
pub const LANGUAGE_KEY: &str = "language";

/// Extension appended to the project path when backing it up.
const BACKUP_EXTENSION: &str = "bak";

pub struct ProjectFile {
    path: PathBuf,
    root: Value,
    layout: Layout,
    original_size: usize,
}

impl ProjectFile {
    /// Read and parse a project file.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!(
                "The specified path does not contain the requested file, check that the path is exact: {}",
                path.display()
            );
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read project file: {}", path.display()))?;
        let root: Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON file: {}", path.display()))?;

        Ok(Self {
            path: path.to_path_buf(),
            layout: Layout::detect(&content),
            original_size: content.len(),
            root,
        })
    }

    /// Build a project from an in-memory document (not yet saved anywhere).
    pub fn from_value(path: &Path, root: Value) -> Self {
        Self {
            path: path.to_path_buf(),
            root,
            layout: Layout::default(),
            original_size: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    #[cfg(test)]
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Layout the file had when it was opened.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Size in bytes of the file when it was opened.
    pub fn original_size(&self) -> usize {
        self.original_size
    }

    /// First node stored under `key`, in document order.
    pub fn locate(&self, key: &str) -> Option<&Value> {
        let pointer = find_key_pointer(&self.root, key)?;
        self.root.pointer(&pointer)
    }

    pub fn locate_mut(&mut self, key: &str) -> Option<&mut Value> {
        let pointer = find_key_pointer(&self.root, key)?;
        self.root.pointer_mut(&pointer)
    }

    /// Register `locale` as a supported game language.
    ///
    /// Returns `true` if the locale was added, `false` if already present.
    pub fn add_language(&mut self, locale: &Locale) -> Result<bool> {
        let path = self.path.display().to_string();
        let info = self.locate_mut(GAME_INFORMATION_KEY).with_context(|| {
            format!(
                "No \"{}\" object found in {}",
                GAME_INFORMATION_KEY, path
            )
        })?;

        let Some(languages) = info.get_mut(LANGUAGE_KEY).and_then(Value::as_array_mut) else {
            bail!(
                "\"{}.{}\" is missing or not an array in {}",
                GAME_INFORMATION_KEY,
                LANGUAGE_KEY,
                path
            );
        };

        if languages
            .iter()
            .any(|language| language.as_str() == Some(locale.as_str()))
        {
            return Ok(false);
        }

        languages.push(Value::String(locale.to_string()));
        Ok(true)
    }

    /// Serialize the document with the given layout.
    pub fn render(&self, layout: &Layout) -> Result<String> {
        layout.render(&self.root)
    }

    /// Write the document back to its path. Returns the number of bytes written.
    pub fn save(&self, layout: &Layout) -> Result<usize> {
        let content = self.render(layout)?;
        fs::write(&self.path, &content)
            .with_context(|| format!("Failed to write file: {}", self.path.display()))?;
        Ok(content.len())
    }

    /// Copy the file on disk to `<path>.bak`.
    ///
    /// An existing backup is never overwritten; `None` is returned in that case.
    pub fn backup(&self) -> Result<Option<PathBuf>> {
        let backup_path = backup_path(&self.path);
        if backup_path.exists() {
            return Ok(None);
        }

        fs::copy(&self.path, &backup_path).with_context(|| {
            format!(
                "Failed to back up {} to {}",
                self.path.display(),
                backup_path.display()
            )
        })?;
        Ok(Some(backup_path))
    }
}

pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".");
    name.push(BACKUP_EXTENSION);
    PathBuf::from(name)
}

/// JSON pointer to the first member named `key`, searching depth-first.
///
/// Members are visited in document order and a member's key is checked
/// before descending into its value, so the result is the first occurrence
/// of `key` when reading the file top to bottom.
pub fn find_key_pointer(value: &Value, key: &str) -> Option<String> {
    match value {
        Value::Object(map) => map.iter().find_map(|(name, child)| {
            let pointer = format!("/{}", escape_pointer_token(name));
            if name == key {
                return Some(pointer);
            }
            find_key_pointer(child, key).map(|rest| pointer + &rest)
        }),
        Value::Array(items) => items.iter().enumerate().find_map(|(index, child)| {
            find_key_pointer(child, key).map(|rest| format!("/{}{}", index, rest))
        }),
        _ => None,
    }
}

fn escape_pointer_token(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}
