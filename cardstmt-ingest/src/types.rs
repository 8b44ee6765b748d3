use cardstmt_core::{NumberFormat, RecordShape};

/// Default sentinel that opens the transaction block of a statement
pub const DEFAULT_BLOCK_MARKER: &str = "Transactions";

/// Settings shared by every document of a batch
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOptions {
    /// Substring that opens the transaction block
    pub block_marker: String,
    pub number_format: NumberFormat,
    /// Emit rewards-shaped records
    pub show_rewards: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            block_marker: DEFAULT_BLOCK_MARKER.to_string(),
            number_format: NumberFormat::default(),
            show_rewards: true,
        }
    }
}

impl ScanOptions {
    pub fn shape(&self) -> RecordShape {
        RecordShape::from_show_rewards(self.show_rewards)
    }
}
