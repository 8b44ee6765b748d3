//! cardstmt-core: record types and token sanitizers for card statement extraction

pub mod date;
pub mod number;
pub mod summary;
pub mod transaction;

pub use date::{parse_statement_date, DATE_FORMAT, DATE_FORMAT_ALT};
pub use number::NumberFormat;
pub use summary::BatchSummary;
pub use transaction::{Direction, Record, RecordShape, Transaction, TransactionWithRewards};
