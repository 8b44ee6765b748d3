//! Plain-text statement dumps (`.txt`).
//!
//! Pages are separated by form feeds (`\x0c`), the way `pdftotext` writes
//! them. Text dumps are never encrypted; a password is ignored.

use std::fs;
use std::path::Path;

use crate::document::{Document, DocumentError, DocumentSource};

const PAGE_BREAK: char = '\x0c';

#[derive(Debug, Clone, Copy, Default)]
pub struct TextSource;

#[derive(Debug, Clone)]
pub struct TextDocument {
    pages: Vec<String>,
}

impl TextDocument {
    pub fn from_text(text: &str) -> Self {
        let mut pages: Vec<String> = text.split(PAGE_BREAK).map(str::to_string).collect();
        // pdftotext ends the last page with a form feed too
        if pages.len() > 1 && pages.last().is_some_and(|p| p.trim().is_empty()) {
            pages.pop();
        }
        Self { pages }
    }
}

impl Document for TextDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_lines(&self, index: usize) -> Result<Vec<String>, DocumentError> {
        Ok(self
            .pages
            .get(index)
            .map(|page| page.lines().map(str::to_string).collect())
            .unwrap_or_default())
    }
}

impl DocumentSource for TextSource {
    fn extensions(&self) -> &[&'static str] {
        &["txt"]
    }

    fn open(&self, path: &Path, _password: Option<&str>) -> Result<Box<dyn Document>, DocumentError> {
        let bytes = fs::read(path).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|e| DocumentError::Format {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(Box::new(TextDocument::from_text(&text)))
    }
}
