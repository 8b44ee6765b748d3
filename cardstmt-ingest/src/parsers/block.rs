//! Transaction block locator
//!
//! Statements print account summaries, offers and addresses before the
//! transaction table. Nothing is a candidate until a line containing the
//! block marker has been seen; after that every line is, including the
//! marker line itself and all lines of later pages.

/// Latch over the lines of one document. Create a fresh one per document.
#[derive(Debug, Clone)]
pub struct BlockLocator {
    marker: String,
    found: bool,
}

impl BlockLocator {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            found: false,
        }
    }

    /// True once the marker has been seen.
    pub fn is_open(&self) -> bool {
        self.found
    }

    /// Feed one line; returns whether it is a candidate.
    pub fn admit(&mut self, line: &str) -> bool {
        if !self.found && line.contains(self.marker.as_str()) {
            self.found = true;
        }
        self.found
    }

    /// Candidate lines of one page, in order. The latch carries over to the
    /// next call, so pass pages in reading order.
    pub fn candidates<'a, I>(&'a mut self, lines: I) -> impl Iterator<Item = I::Item> + 'a
    where
        I: IntoIterator + 'a,
        I::IntoIter: 'a,
        I::Item: AsRef<str>,
    {
        lines.into_iter().filter(move |line| self.admit(line.as_ref()))
    }
}
