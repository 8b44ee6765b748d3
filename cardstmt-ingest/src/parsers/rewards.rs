//! Rewards points heuristic.
//!
//! Statements that print reward points put them between the description and
//! the amount, so after tokenizing they end up as the last word of the
//! details. The digits are read back out of the details but left in place.

use anyhow::Result;
use cardstmt_core::Transaction;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::trace;

/// Bank transfers towards the card never earn or reverse points
const TRANSFER_MARKER: &str = "IMPS PMT ";

/// Credits below this amount never reverse points
const SMALL_CREDIT_LIMIT: Decimal = Decimal::ONE_HUNDRED;

#[derive(Debug, Clone)]
pub struct RewardsCalculator {
    trailing_re: Regex,
}

impl RewardsCalculator {
    pub fn new() -> Result<Self> {
        Ok(Self {
            trailing_re: Regex::new(r" (?P<points>\d+)$")?,
        })
    }

    /// Signed points for a parsed row: earned on debits, reversed on credits.
    pub fn compute(&self, txn: &Transaction) -> Decimal {
        if txn.is_credit()
            && (txn.details.contains(TRANSFER_MARKER) || txn.amount < SMALL_CREDIT_LIMIT)
        {
            return Decimal::ZERO;
        }

        let points = self.trailing_points(&txn.details).unwrap_or(Decimal::ZERO);
        if txn.is_credit() && !points.is_zero() {
            -points
        } else {
            points
        }
    }

    /// The whitespace-separated run of digits ending `details`, if any. A run
    /// too long for a `Decimal` counts as no points.
    pub fn trailing_points(&self, details: &str) -> Option<Decimal> {
        let caps = self.trailing_re.captures(details.trim_end())?;
        let digits = caps.name("points")?.as_str();
        match Decimal::from_str(digits) {
            Ok(points) => Some(points),
            Err(e) => {
                trace!(details, digits, error = %e, "rewards figure out of range");
                None
            }
        }
    }
}
