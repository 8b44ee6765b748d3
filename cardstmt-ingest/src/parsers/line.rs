//! Statement row parser
//!
//! Expected extracted-text rows (time of day optional, `Cr` marks credits):
//!   01/02/2023 10:00:00 AMAZON PURCHASE 1,234.56
//!   15/03/2023 REFUND FROM VENDOR 99.00 Cr
//!
//! A row is split into four tokens: a leading `DD/MM/YYYY` date, free text,
//! the last amount with exactly two fractional digits, and an optional
//! trailing marker made of spaces, `C` and `r`. Anything after the marker is
//! ignored. Lines that fail any step are dropped without error; most
//! candidate lines are headers, balances or wrapped descriptions.

use anyhow::Result;
use cardstmt_core::{
    parse_statement_date, Direction, NumberFormat, Record, Transaction, TransactionWithRewards,
};
use regex::Regex;
use tracing::trace;

use super::rewards::RewardsCalculator;
use crate::types::ScanOptions;

/// The four tokens of a row, borrowed from the normalized line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineTokens<'a> {
    pub date: &'a str,
    /// Untrimmed free text between the date (and time) and the amount
    pub details: &'a str,
    pub amount: &'a str,
    pub marker: &'a str,
}

/// Why a candidate line produced no record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discard {
    /// Not shaped like a row at all
    NoMatch,
    /// Shaped like a row, but the leading token is not a real date
    BadDate,
    /// Shaped like a row, but the amount did not parse
    BadAmount,
}

#[derive(Debug, Clone)]
pub struct LineTokenizer {
    row_re: Regex,
}

impl LineTokenizer {
    pub fn new(format: &NumberFormat) -> Result<Self> {
        let point = regex::escape(&format.decimal_separator.to_string());

        // DATE [TIME] DETAILS AMOUNT [Cr]
        let row_re = Regex::new(&format!(
            concat!(
                r"^(?P<date>\d{{2}}/\d{{2}}/\d{{4}})",
                r"[ 0-9:]*",
                r"(?P<details>.*) ",
                r"(?P<amount>\d*{point}\d{{2}})",
                r"(?P<marker>[ Cr]*)",
            ),
            point = point
        ))?;

        Ok(Self { row_re })
    }

    /// Split an already normalized line. The details group is greedy, so the
    /// amount is the last qualifying token on the line.
    pub fn tokenize<'a>(&self, line: &'a str) -> Option<LineTokens<'a>> {
        let caps = self.row_re.captures(line)?;
        Some(LineTokens {
            date: caps.name("date")?.as_str(),
            details: caps.name("details")?.as_str(),
            amount: caps.name("amount")?.as_str(),
            marker: caps.name("marker").map_or("", |m| m.as_str()),
        })
    }
}

/// Turns one candidate line into at most one record.
#[derive(Debug, Clone)]
pub struct LineParser {
    tokenizer: LineTokenizer,
    format: NumberFormat,
    /// Present when the batch asked for rewards
    rewards: Option<RewardsCalculator>,
}

impl LineParser {
    pub fn new(options: &ScanOptions) -> Result<Self> {
        let rewards = if options.show_rewards {
            Some(RewardsCalculator::new()?)
        } else {
            None
        };

        Ok(Self {
            tokenizer: LineTokenizer::new(&options.number_format)?,
            format: options.number_format,
            rewards,
        })
    }

    /// Parse `raw`, reporting why it was dropped when it is not a row.
    pub fn classify(&self, raw: &str) -> Result<Record, Discard> {
        let normalized = self.format.strip_grouping(raw);
        let line = normalized.trim();

        let tokens = self.tokenizer.tokenize(line).ok_or(Discard::NoMatch)?;
        let received = parse_statement_date(tokens.date).ok_or(Discard::BadDate)?;
        let direction = Direction::from_marker(tokens.marker);
        let amount = self
            .format
            .parse_amount(tokens.amount)
            .ok_or(Discard::BadAmount)?;

        let transaction = Transaction::new(received, tokens.details.trim(), amount, direction);

        Ok(match &self.rewards {
            Some(calc) => {
                let rewards = calc.compute(&transaction);
                TransactionWithRewards {
                    transaction,
                    rewards,
                }
                .into()
            }
            None => transaction.into(),
        })
    }

    /// Parse `raw`, silently dropping anything that is not a row.
    pub fn parse(&self, raw: &str) -> Option<Record> {
        match self.classify(raw) {
            Ok(record) => Some(record),
            Err(reason) => {
                trace!(?reason, line = raw, "skipped line");
                None
            }
        }
    }
}
