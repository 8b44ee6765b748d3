use cardstmt_core::{Direction, NumberFormat, Record};
use cardstmt_ingest::sources::TextSource;
use cardstmt_ingest::{Aggregator, ScanOptions};
use chrono::NaiveDate;
use rust_decimal::dec;
use std::fs;
use std::path::Path;

const JANUARY: &str = "\
Card Statement
Statement Date 31/01/2023
01/01/2023 OPENING BALANCE 0.00
Domestic Transactions
Date Transaction Description Amount
05/01/2023 10:00:00 AMAZON PURCHASE 1,234.56
07/01/2023 SWIGGY BANGALORE 12 600.00
\x0c
Domestic Transactions (continued)
15/01/2023 REFUND FROM VENDOR 99.00 Cr
20/01/2023 IMPS PMT TO JOHN 40 5,000.00 Cr
Page 2 of 2
\x0c";

const FEBRUARY: &str = "\
Card Statement
Domestic Transactions
02/02/2023 VENDOR REFUND 25 500.00 Cr
";

fn write(dir: &Path, name: &str, body: &str) {
    fs::write(dir.join(name), body).unwrap();
}

fn details(records: &[Record]) -> Vec<&str> {
    records
        .iter()
        .map(|r| r.transaction().details.as_str())
        .collect()
}

#[test]
fn test_single_statement_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "jan.txt", JANUARY);

    let source = TextSource;
    let agg = Aggregator::new(&source, &ScanOptions::default(), None).unwrap();
    let records = agg.collect_path(&dir.path().join("jan.txt")).unwrap();

    assert_eq!(
        details(&records),
        vec![
            "AMAZON PURCHASE",
            "SWIGGY BANGALORE 12",
            "REFUND FROM VENDOR",
            "IMPS PMT TO JOHN 40",
        ]
    );

    let amazon = records[0].transaction();
    assert_eq!(amazon.received, NaiveDate::from_ymd_opt(2023, 1, 5).unwrap());
    assert_eq!(amazon.amount, dec!(1234.56));
    assert_eq!(amazon.transaction_type, Direction::Debit);

    let rewards: Vec<_> = records.iter().map(|r| r.rewards().unwrap()).collect();
    assert_eq!(rewards, vec![dec!(0), dec!(12), dec!(0), dec!(0)]);
}

#[test]
fn test_directory_batch_keeps_file_order() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "2023-01.txt", JANUARY);
    write(dir.path(), "2023-02.TXT", FEBRUARY);
    write(dir.path(), "notes.md", "Transactions\n01/01/2023 IGNORED 1.00\n");
    fs::create_dir(dir.path().join("nested")).unwrap();
    write(&dir.path().join("nested"), "deep.txt", FEBRUARY);

    let source = TextSource;
    let options = ScanOptions {
        show_rewards: false,
        ..ScanOptions::default()
    };
    let agg = Aggregator::new(&source, &options, None).unwrap();

    let january = agg.collect_path(&dir.path().join("2023-01.txt")).unwrap();
    let february = agg.collect_path(&dir.path().join("2023-02.TXT")).unwrap();
    let all = agg.collect_path(dir.path()).unwrap();

    assert_eq!(all.len(), january.len() + february.len());
    assert_eq!(&all[..january.len()], &january[..]);
    assert_eq!(&all[january.len()..], &february[..]);
    assert!(all.iter().all(|r| r.rewards().is_none()));
}

#[test]
fn test_duplicates_across_files_are_kept() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.txt", FEBRUARY);
    write(dir.path(), "b.txt", FEBRUARY);

    let source = TextSource;
    let agg = Aggregator::new(&source, &ScanOptions::default(), None).unwrap();
    let all = agg.collect_path(dir.path()).unwrap();

    assert_eq!(all.len(), 2);
    assert_eq!(all[0], all[1]);
    assert_eq!(all[0].rewards(), Some(dec!(-25)));
}

#[test]
fn test_statement_without_marker_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "summary.txt",
        "Account Summary\n01/01/2023 LOOKS LIKE A ROW 10.00\n",
    );

    let source = TextSource;
    let agg = Aggregator::new(&source, &ScanOptions::default(), None).unwrap();
    let records = agg.collect_path(&dir.path().join("summary.txt")).unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_custom_marker_and_number_format() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "de.txt",
        "Umsätze\n03/02/2023 SUPERMARKT 1.234,50\n04/02/2023 ERSTATTUNG 20,00 Cr\n",
    );

    let source = TextSource;
    let options = ScanOptions {
        block_marker: "Umsätze".to_string(),
        number_format: NumberFormat::new(',', '.'),
        show_rewards: false,
    };
    let agg = Aggregator::new(&source, &options, None).unwrap();
    let records = agg.collect_path(&dir.path().join("de.txt")).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].transaction().amount, dec!(1234.50));
    assert!(records[1].transaction().is_credit());
}
