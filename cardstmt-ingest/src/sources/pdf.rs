//! PDF statements via `lopdf`.
//!
//! Card issuers usually lock statements with a password (date of birth, part
//! of the card number). An encrypted file without the right password is an
//! error, never an empty result.

use lopdf::Document as LoDocument;
use std::fs;
use std::path::{Path, PathBuf};

use crate::document::{Document, DocumentError, DocumentSource};

#[derive(Debug, Clone, Copy, Default)]
pub struct PdfSource;

pub struct PdfDocument {
    path: PathBuf,
    inner: LoDocument,
    /// 1-based page numbers in document order
    page_numbers: Vec<u32>,
}

impl Document for PdfDocument {
    fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    fn page_lines(&self, index: usize) -> Result<Vec<String>, DocumentError> {
        let Some(&number) = self.page_numbers.get(index) else {
            return Ok(Vec::new());
        };
        let text = self
            .inner
            .extract_text(&[number])
            .map_err(|e| DocumentError::Format {
                path: self.path.clone(),
                reason: format!("page {number}: {e}"),
            })?;
        Ok(text.lines().map(str::to_string).collect())
    }
}

impl DocumentSource for PdfSource {
    fn extensions(&self) -> &[&'static str] {
        &["pdf"]
    }

    fn open(&self, path: &Path, password: Option<&str>) -> Result<Box<dyn Document>, DocumentError> {
        let bytes = fs::read(path).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut inner = LoDocument::load_mem(&bytes).map_err(|e| DocumentError::Format {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        if inner.is_encrypted() {
            let Some(password) = password else {
                return Err(DocumentError::Decryption {
                    path: path.to_path_buf(),
                    reason: "document is encrypted and no password was given".to_string(),
                });
            };
            inner
                .decrypt(password)
                .map_err(|e| DocumentError::Decryption {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })?;
        }

        let page_numbers: Vec<u32> = inner.get_pages().keys().copied().collect();

        Ok(Box::new(PdfDocument {
            path: path.to_path_buf(),
            inner,
            page_numbers,
        }))
    }
}
