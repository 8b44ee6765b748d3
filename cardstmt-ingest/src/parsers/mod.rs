//! Line-level parsing of extracted statement text.

pub mod block;
pub mod line;
pub mod rewards;

pub use block::BlockLocator;
pub use line::{Discard, LineParser, LineTokenizer, LineTokens};
pub use rewards::RewardsCalculator;
