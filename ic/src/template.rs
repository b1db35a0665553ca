//! Front-matter issue template parsing
//!
//! A template looks like:
//!
//! ```text
//! ---
//! title: "Example Bug"
//! labels: bug, high-priority
//! ---
//! Something is broken.
//! ```
//!
//! Only single-line `title:` and `labels:` values are read.

use std::fs;
use std::path::Path;

use log::debug;
use regex::Regex;

use crate::error::TemplateError;

const FRONT_MATTER_PATTERN: &str = r"(?s)\A---\n(.*?)\n---\n(.*)";
const TITLE_PATTERN: &str = r"(?m)^title:[ \t]*(.+?)[ \t]*$";
const LABELS_PATTERN: &str = r"(?m)^labels:[ \t]*(.*?)[ \t]*$";

/// Fields extracted from a template before validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTemplate {
    /// Title with one outer quote pair removed, `None` if no `title:` line
    pub title: Option<String>,
    /// Comma-delimited labels, empty if no `labels:` line
    pub labels: String,
    /// Text after the closing marker, trimmed
    pub body: String,
}

/// A validated issue template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub title: String,
    pub labels: String,
    pub body: String,
}

/// Compiled patterns for reading issue templates
#[derive(Debug, Clone)]
pub struct TemplateParser {
    front_matter: Regex,
    title: Regex,
    labels: Regex,
}

impl TemplateParser {
    pub fn new() -> Result<Self, TemplateError> {
        Ok(Self {
            front_matter: Regex::new(FRONT_MATTER_PATTERN)?,
            title: Regex::new(TITLE_PATTERN)?,
            labels: Regex::new(LABELS_PATTERN)?,
        })
    }

    /// Split raw text into title, labels and body
    ///
    /// Returns `None` when the text does not open with a complete `---` block.
    pub fn parse(&self, content: &str) -> Option<RawTemplate> {
        let caps = self.front_matter.captures(content)?;
        let header = caps.get(1).map_or("", |m| m.as_str());
        let body = caps.get(2).map_or("", |m| m.as_str()).trim().to_string();

        let title = self
            .title
            .captures(header)
            .and_then(|c| c.get(1))
            .map(|m| strip_quotes(m.as_str().trim()).to_string());

        let labels = self
            .labels
            .captures(header)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default();

        debug!(
            "TemplateParser::parse: title={:?} labels={:?} body_len={}",
            title,
            labels,
            body.len()
        );
        Some(RawTemplate { title, labels, body })
    }

    /// Read and validate the template at `path`
    pub fn load(&self, path: &Path) -> Result<Template, TemplateError> {
        if !path.exists() {
            return Err(TemplateError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path).map_err(|source| TemplateError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let raw = self.parse(&content).ok_or_else(|| TemplateError::MissingFrontMatter {
            path: path.to_path_buf(),
        })?;

        let title = match raw.title {
            Some(title) if !title.is_empty() => title,
            _ => {
                return Err(TemplateError::MissingTitle {
                    path: path.to_path_buf(),
                });
            }
        };

        if raw.body.is_empty() {
            return Err(TemplateError::EmptyBody {
                path: path.to_path_buf(),
            });
        }

        Ok(Template {
            title,
            labels: raw.labels,
            body: raw.body,
        })
    }
}

/// Remove one pair of matching outer quotes
///
/// A lone quote counts as both ends and leaves an empty title.
fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.starts_with(quote) && value.ends_with(quote) {
            return value.get(1..value.len().saturating_sub(1)).unwrap_or("");
        }
    }
    value
}
