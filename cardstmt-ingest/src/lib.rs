//! cardstmt-ingest: statement documents, the transaction-block scanner and batch aggregation.

pub mod aggregate;
pub mod document;
pub mod parsers;
pub mod sources;
pub mod types;

pub use aggregate::{Aggregator, DocumentScan};
pub use document::{Document, DocumentError, DocumentSource};
pub use parsers::{BlockLocator, Discard, LineParser, LineTokenizer, LineTokens, RewardsCalculator};
pub use types::ScanOptions;
