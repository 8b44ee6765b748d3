//! Transaction record types emitted by the statement parser

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether money left or came back to the card holder
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Refund, reversal or payment towards the card
    #[serde(rename = "credit")]
    Credit,
    /// Purchase or charge
    #[serde(rename = "debit")]
    Debit,
}

impl Direction {
    /// Classify from the trailing marker token of a statement row.
    /// Any occurrence of `Cr` counts.
    pub fn from_marker(marker: &str) -> Self {
        if marker.contains("Cr") {
            Direction::Credit
        } else {
            Direction::Debit
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Credit => "credit",
            Direction::Debit => "debit",
        }
    }

    pub fn is_credit(&self) -> bool {
        matches!(self, Direction::Credit)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single statement row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// Posting date
    pub received: NaiveDate,
    /// Trimmed description, grouping separators removed
    pub details: String,
    /// Always non-negative; direction carries the sign
    pub amount: Decimal,
    pub transaction_type: Direction,
}

impl Transaction {
    pub fn new(
        received: NaiveDate,
        details: impl Into<String>,
        amount: Decimal,
        transaction_type: Direction,
    ) -> Self {
        Self {
            received,
            details: details.into(),
            amount,
            transaction_type,
        }
    }

    pub fn is_credit(&self) -> bool {
        self.transaction_type.is_credit()
    }
}

/// A statement row plus the loyalty points it earned or reversed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionWithRewards {
    #[serde(flatten)]
    pub transaction: Transaction,
    /// Positive when earned, negative when a credit reverses earlier points
    pub rewards: Decimal,
}

/// Column layout of the tabular output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordShape {
    Plain,
    WithRewards,
}

impl RecordShape {
    pub fn from_show_rewards(show_rewards: bool) -> Self {
        if show_rewards {
            RecordShape::WithRewards
        } else {
            RecordShape::Plain
        }
    }

    pub fn header(&self) -> &'static [&'static str] {
        match self {
            RecordShape::Plain => &["Date", "Transaction", "Amount", "Type"],
            RecordShape::WithRewards => &["Date", "Transaction", "Amount", "Type", "Rewards"],
        }
    }
}

/// One emitted row, in whichever shape the batch asked for
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Record {
    WithRewards(TransactionWithRewards),
    Plain(Transaction),
}

impl Record {
    pub fn transaction(&self) -> &Transaction {
        match self {
            Record::Plain(t) => t,
            Record::WithRewards(r) => &r.transaction,
        }
    }

    pub fn rewards(&self) -> Option<Decimal> {
        match self {
            Record::Plain(_) => None,
            Record::WithRewards(r) => Some(r.rewards),
        }
    }

    /// Cells in header order. Dates render as `YYYY-MM-DD`.
    pub fn to_row(&self) -> Vec<String> {
        let t = self.transaction();
        let mut row = vec![
            t.received.format("%Y-%m-%d").to_string(),
            t.details.clone(),
            t.amount.to_string(),
            t.transaction_type.to_string(),
        ];
        if let Some(rewards) = self.rewards() {
            row.push(rewards.to_string());
        }
        row
    }
}

impl From<Transaction> for Record {
    fn from(t: Transaction) -> Self {
        Record::Plain(t)
    }
}

impl From<TransactionWithRewards> for Record {
    fn from(r: TransactionWithRewards) -> Self {
        Record::WithRewards(r)
    }
}
