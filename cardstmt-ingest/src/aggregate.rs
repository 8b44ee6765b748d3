//! Record aggregation across pages, documents and directories.
//!
//! A scan owns its document handle, so the document is closed as soon as the
//! scan is exhausted or dropped, whether it finished or failed.

use anyhow::{bail, Context, Result};
use cardstmt_core::{Record, RecordShape};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::document::{Document, DocumentError, DocumentSource};
use crate::parsers::{BlockLocator, LineParser};
use crate::types::ScanOptions;

/// Lazy record stream over one document, page by page.
pub struct DocumentScan<'p> {
    parser: &'p LineParser,
    document: Box<dyn Document>,
    locator: BlockLocator,
    path: PathBuf,
    next_page: usize,
    pending: std::vec::IntoIter<String>,
}

impl<'p> DocumentScan<'p> {
    pub fn new(
        parser: &'p LineParser,
        document: Box<dyn Document>,
        block_marker: &str,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            parser,
            document,
            locator: BlockLocator::new(block_marker),
            path: path.into(),
            next_page: 0,
            pending: Vec::new().into_iter(),
        }
    }
}

impl Iterator for DocumentScan<'_> {
    type Item = Result<Record, DocumentError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            for line in self.pending.by_ref() {
                if let Some(record) = self.parser.parse(&line) {
                    debug!(?record, "transaction");
                    return Some(Ok(record));
                }
            }

            let count = self.document.page_count();
            if self.next_page >= count {
                return None;
            }
            let index = self.next_page;
            self.next_page += 1;

            debug!(path = %self.path.display(), "page {} of {}", index + 1, count);
            match self.document.page_lines(index) {
                Ok(lines) => {
                    let candidates: Vec<String> = self.locator.candidates(lines).collect();
                    self.pending = candidates.into_iter();
                }
                Err(e) => {
                    self.next_page = count;
                    return Some(Err(e));
                }
            }
        }
    }
}

/// Runs the scanner over a file or a directory of statements.
pub struct Aggregator<'s> {
    source: &'s dyn DocumentSource,
    parser: LineParser,
    block_marker: String,
    shape: RecordShape,
    password: Option<String>,
}

impl<'s> Aggregator<'s> {
    pub fn new(
        source: &'s dyn DocumentSource,
        options: &ScanOptions,
        password: Option<String>,
    ) -> Result<Self> {
        Ok(Self {
            source,
            parser: LineParser::new(options)?,
            block_marker: options.block_marker.clone(),
            shape: options.shape(),
            password,
        })
    }

    pub fn shape(&self) -> RecordShape {
        self.shape
    }

    /// Open one document and stream its records. Each scan starts with a
    /// closed block latch.
    pub fn scan(&self, path: &Path) -> Result<DocumentScan<'_>, DocumentError> {
        let document = self.source.open(path, self.password.as_deref())?;
        info!(path = %path.display(), pages = document.page_count(), "opened statement");
        Ok(DocumentScan::new(&self.parser, document, &self.block_marker, path))
    }

    pub fn collect_document(&self, path: &Path) -> Result<Vec<Record>> {
        let records = self
            .scan(path)?
            .collect::<Result<Vec<_>, _>>()?;
        if records.is_empty() {
            info!(path = %path.display(), marker = %self.block_marker, "no transactions found");
        } else {
            info!(path = %path.display(), count = records.len(), "parsed transactions");
        }
        Ok(records)
    }

    /// Statement files directly inside `dir`, sorted by file name.
    pub fn statement_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))? {
            let entry = entry.with_context(|| format!("listing {}", dir.display()))?;
            let path = entry.path();
            if path.is_file() && self.source.accepts(&path) {
                files.push(path);
            }
        }
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }

    /// Records from a single statement, or from every statement in a
    /// directory concatenated in file order. The first document that fails
    /// to open aborts the whole batch.
    pub fn collect_path(&self, path: &Path) -> Result<Vec<Record>> {
        if path.is_file() {
            return self.collect_document(path);
        }
        if !path.is_dir() {
            bail!("statement path not found: {}", path.display());
        }

        let files = self.statement_files(path)?;
        if files.is_empty() {
            info!(dir = %path.display(), extensions = ?self.source.extensions(), "no statements in directory");
        }

        let mut out = Vec::new();
        for file in &files {
            out.extend(self.collect_document(file)?);
        }
        Ok(out)
    }
}
