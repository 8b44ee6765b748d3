//! Statement document abstractions.
//!
//! The scanner only needs ordered pages of ordered text lines. Opening,
//! decrypting and extracting text belong to a [`DocumentSource`].

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("cannot decrypt {}: {reason}", path.display())]
    Decryption { path: PathBuf, reason: String },
    #[error("malformed document {}: {reason}", path.display())]
    Format { path: PathBuf, reason: String },
    #[error("cannot read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// An opened statement. Dropping it releases the underlying resources.
pub trait Document {
    fn page_count(&self) -> usize;

    /// Text lines of page `index` (0-based) in reading order.
    fn page_lines(&self, index: usize) -> Result<Vec<String>, DocumentError>;
}

pub trait DocumentSource {
    /// File extensions this source handles, lowercase, without the dot.
    fn extensions(&self) -> &[&'static str];

    fn open(&self, path: &Path, password: Option<&str>) -> Result<Box<dyn Document>, DocumentError>;

    /// Case-insensitive extension check used when enumerating a directory.
    fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.extensions()
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(ext))
            })
    }
}
