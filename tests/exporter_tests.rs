// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use tallybook::cli;
use tallybook::commands::exporter;
use tallybook::error::LedgerError;
use tallybook::ledger::Ledger;
use tallybook::models::TransactionDraft;
use tallybook::store::MemoryKv;
use tempfile::tempdir;

fn ledger_with(entries: &[(&str, &str, &str, &str)]) -> Ledger {
    let mut ledger = Ledger::restore(Box::new(MemoryKv::new()));
    for (description, amount, kind, category) in entries {
        ledger
            .add(TransactionDraft::new(*description, *amount, *kind, *category))
            .unwrap();
    }
    ledger
}

#[test]
fn export_csv_on_an_empty_ledger_fails() {
    let ledger = ledger_with(&[]);
    assert_eq!(ledger.export_csv().unwrap_err(), LedgerError::EmptyLedger);
}

#[test]
fn export_csv_writes_header_and_rows_in_insertion_order() {
    let ledger = ledger_with(&[
        ("Salary Payment", "3000", "income", "salary"),
        ("Coffee", "4.50", "expense", "food"),
    ]);
    let text = ledger.export_csv().unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Date,Description,Category,Type,Amount");
    assert!(lines[1].ends_with(",\"Salary Payment\",salary,income,3000"));
    assert!(lines[2].ends_with(",\"Coffee\",food,expense,4.50"));

    // the quoting shape stays machine-readable for plain descriptions
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 2);
    assert_eq!(&records[1][1], "Coffee");
    assert_eq!(&records[1][4], "4.50");
}

#[test]
fn export_csv_does_not_escape_quotes_inside_descriptions() {
    let ledger = ledger_with(&[("Joe's \"special\" blend", "9", "expense", "food")]);
    let text = ledger.export_csv().unwrap();
    assert!(text.contains("\"Joe's \"special\" blend\""));
}

#[test]
fn export_command_writes_csv_file() {
    let ledger = ledger_with(&[("Coffee", "4.50", "expense", "food")]);
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.csv");
    let out_str = out_path.to_string_lossy().to_string();

    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "tallybook",
        "export",
        "transactions",
        "--format",
        "csv",
        "--out",
        &out_str,
    ]);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(&ledger, export_m).unwrap();
    } else {
        panic!("no export subcommand");
    }

    let contents = std::fs::read_to_string(&out_path).unwrap();
    assert!(contents.starts_with("Date,Description,Category,Type,Amount\n"));
    assert!(contents.contains("\"Coffee\""));
}

#[test]
fn export_command_writes_json_file() {
    let ledger = ledger_with(&[("Coffee", "4.50", "expense", "food")]);
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.json");
    let out_str = out_path.to_string_lossy().to_string();

    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "tallybook",
        "export",
        "transactions",
        "--format",
        "json",
        "--out",
        &out_str,
    ]);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(&ledger, export_m).unwrap();
    } else {
        panic!("no export subcommand");
    }

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed[0]["description"], "Coffee");
    assert_eq!(parsed[0]["type"], "expense");
    assert_eq!(parsed[0]["category"], "food");
    assert_eq!(parsed[0]["id"], 1);
}

#[test]
fn export_command_rejects_unknown_format() {
    let ledger = ledger_with(&[("Coffee", "4.50", "expense", "food")]);
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.unknown");
    let out_str = out_path.to_string_lossy().to_string();

    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "tallybook",
        "export",
        "transactions",
        "--format",
        "xml",
        "--out",
        &out_str,
    ]);
    if let Some(("export", export_m)) = matches.subcommand() {
        assert!(exporter::handle(&ledger, export_m).is_err());
    } else {
        panic!("no export subcommand");
    }
    assert!(!out_path.exists());
}
