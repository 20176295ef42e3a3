use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{Serializer, Value, ser::PrettyFormatter};

/// How a JSON document is laid out on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    /// No whitespace at all.
    Minified,
    /// One member per line, indented with the given unit.
    Indented(String),
}

impl Default for Layout {
    fn default() -> Self {
        Self::Indented("  ".to_string())
    }
}

impl Layout {
    /// Guess the layout of an existing document.
    ///
    /// A document on a single line is minified; otherwise the leading
    /// whitespace of the first indented line is the indent unit.
    pub fn detect(content: &str) -> Self {
        let trimmed = content.trim();
        if !trimmed.contains('\n') {
            return Self::Minified;
        }

        trimmed
            .lines()
            .skip(1)
            .map(|line| {
                let width = line.len() - line.trim_start_matches([' ', '\t']).len();
                &line[..width]
            })
            .find(|indent| !indent.is_empty())
            .map(|indent| Self::Indented(indent.to_string()))
            .unwrap_or_default()
    }

    /// Serialize `value` with this layout.
    ///
    /// Indented output ends with a trailing newline, minified output does not.
    pub fn render(&self, value: &Value) -> Result<String> {
        match self {
            Layout::Minified => serde_json::to_string(value).context("Failed to serialize JSON"),
            Layout::Indented(indent) => {
                let mut buf = Vec::new();
                let formatter = PrettyFormatter::with_indent(indent.as_bytes());
                let mut serializer = Serializer::with_formatter(&mut buf, formatter);
                value
                    .serialize(&mut serializer)
                    .context("Failed to serialize JSON")?;
                let mut content = String::from_utf8(buf).context("Serialized JSON is not UTF-8")?;
                content.push('\n');
                Ok(content)
            }
        }
    }
}
