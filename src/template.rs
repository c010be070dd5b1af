//! Request body templates.
//!
//! A template is plain text with placeholder tokens such as `${letter}` or
//! `${id}`. Rendering is a literal find/replace of every occurrence; there is
//! no escaping and no validation of the template contents.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Placeholder replaced by the index letter in the list template.
pub const LETTER_PLACEHOLDER: &str = "${letter}";
/// Placeholder replaced by the food id in the detail template.
pub const ID_PLACEHOLDER: &str = "${id}";

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Failed to read request template '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RequestTemplate {
    body: String,
}

impl RequestTemplate {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    /// Reads a template from disk. Any content is accepted.
    pub fn load(path: &Path) -> Result<Self, TemplateError> {
        let body = std::fs::read_to_string(path).map_err(|source| TemplateError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(body))
    }

    /// Replaces every occurrence of `placeholder` with `value`.
    pub fn render(&self, placeholder: &str, value: &str) -> String {
        self.body.replace(placeholder, value)
    }

    pub fn render_letter(&self, letter: char) -> String {
        self.render(LETTER_PLACEHOLDER, &letter.to_string())
    }

    pub fn render_id(&self, id: i64) -> String {
        self.render(ID_PLACEHOLDER, &id.to_string())
    }
}
