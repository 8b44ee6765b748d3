//! Totals over an extracted batch, reported after the output is written.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::transaction::Record;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchSummary {
    pub records: usize,
    pub credits: usize,
    pub debits: usize,
    pub total_credit: Decimal,
    pub total_debit: Decimal,
    /// `None` when the batch was extracted without rewards
    pub net_rewards: Option<Decimal>,
}

impl BatchSummary {
    pub fn from_records(records: &[Record]) -> Self {
        let mut summary = BatchSummary::default();
        for record in records {
            let t = record.transaction();
            summary.records += 1;
            if t.is_credit() {
                summary.credits += 1;
                summary.total_credit += t.amount;
            } else {
                summary.debits += 1;
                summary.total_debit += t.amount;
            }
            if let Some(rewards) = record.rewards() {
                *summary.net_rewards.get_or_insert(Decimal::ZERO) += rewards;
            }
        }
        summary
    }
}
