//! Tabular output of extracted records.

use anyhow::{Context, Result};
use cardstmt_core::{Record, RecordShape};
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub trait TabularSink {
    fn write_rows(&mut self, header: &[&str], rows: &[Vec<String>]) -> Result<()>;
}

pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
}

impl CsvSink<File> {
    pub fn create(path: &Path) -> Result<Self> {
        let writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_path(path)
            .with_context(|| format!("create {}", path.display()))?;
        Ok(Self { writer })
    }
}

impl<W: Write> CsvSink<W> {
    pub fn from_writer(w: W) -> Self {
        Self {
            writer: csv::WriterBuilder::new()
                .terminator(csv::Terminator::Any(b'\n'))
                .from_writer(w),
        }
    }

    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("flush csv output: {}", e.error()))
    }
}

impl<W: Write> TabularSink for CsvSink<W> {
    fn write_rows(&mut self, header: &[&str], rows: &[Vec<String>]) -> Result<()> {
        self.writer.write_record(header)?;
        for row in rows {
            self.writer.write_record(row)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Write `records` under the header for `shape`. The header is written even
/// when there are no records.
pub fn write_records(sink: &mut dyn TabularSink, shape: RecordShape, records: &[Record]) -> Result<()> {
    let rows: Vec<Vec<String>> = records.iter().map(Record::to_row).collect();
    sink.write_rows(shape.header(), &rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardstmt_core::{Direction, Transaction, TransactionWithRewards};
    use chrono::NaiveDate;
    use rust_decimal::dec;

    fn render(shape: RecordShape, records: &[Record]) -> String {
        let mut sink = CsvSink::from_writer(Vec::new());
        write_records(&mut sink, shape, records).unwrap();
        String::from_utf8(sink.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_plain_csv() {
        let records: Vec<Record> = vec![
            Transaction::new(
                NaiveDate::from_ymd_opt(2023, 2, 1).unwrap(),
                "AMAZON PURCHASE",
                dec!(1234.56),
                Direction::Debit,
            )
            .into(),
        ];
        assert_eq!(
            render(RecordShape::Plain, &records),
            "Date,Transaction,Amount,Type\n2023-02-01,AMAZON PURCHASE,1234.56,debit\n"
        );
    }

    #[test]
    fn test_rewards_csv() {
        let records: Vec<Record> = vec![
            TransactionWithRewards {
                transaction: Transaction::new(
                    NaiveDate::from_ymd_opt(2023, 3, 21).unwrap(),
                    "VENDOR REFUND 25",
                    dec!(500.00),
                    Direction::Credit,
                ),
                rewards: dec!(-25),
            }
            .into(),
        ];
        assert_eq!(
            render(RecordShape::WithRewards, &records),
            "Date,Transaction,Amount,Type,Rewards\n2023-03-21,VENDOR REFUND 25,500.00,credit,-25\n"
        );
    }

    #[test]
    fn test_header_only_when_empty() {
        assert_eq!(
            render(RecordShape::WithRewards, &[]),
            "Date,Transaction,Amount,Type,Rewards\n"
        );
    }
}
