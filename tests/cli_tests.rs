// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use tallybook::cli;
use tallybook::commands::{dashboard, reports, transactions};
use tallybook::ledger::Ledger;
use tallybook::store::MemoryKv;

fn empty_ledger() -> Ledger {
    Ledger::restore(Box::new(MemoryKv::new()))
}

fn run_tx(ledger: &mut Ledger, argv: &[&str]) -> anyhow::Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(argv);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        transactions::handle(ledger, tx_m)
    } else {
        panic!("no tx subcommand");
    }
}

#[test]
fn tx_add_records_a_transaction() {
    let mut ledger = empty_ledger();
    run_tx(
        &mut ledger,
        &[
            "tallybook", "tx", "add", "--description", "Coffee", "--amount", "4.50", "--type",
            "expense", "--category", "food",
        ],
    )
    .unwrap();

    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.transactions()[0].description, "Coffee");
}

#[test]
fn tx_add_surfaces_validation_failures() {
    let mut ledger = empty_ledger();
    let result = run_tx(
        &mut ledger,
        &[
            "tallybook", "tx", "add", "--description", "Coffee", "--amount", "zero", "--type",
            "expense", "--category", "food",
        ],
    );
    assert!(result.is_err());
    assert!(ledger.is_empty());
}

#[test]
fn tx_rm_with_yes_skips_the_prompt() {
    let mut ledger = empty_ledger();
    run_tx(
        &mut ledger,
        &[
            "tallybook", "tx", "add", "--description", "Coffee", "--amount", "4.50", "--type",
            "expense", "--category", "food",
        ],
    )
    .unwrap();

    run_tx(&mut ledger, &["tallybook", "tx", "rm", "1", "--yes"]).unwrap();
    assert!(ledger.is_empty());

    // deleting an unknown id still succeeds as a no-op
    run_tx(&mut ledger, &["tallybook", "tx", "rm", "42", "--yes"]).unwrap();
}

#[test]
fn tx_list_handles_an_empty_ledger() {
    let mut ledger = empty_ledger();
    run_tx(&mut ledger, &["tallybook", "tx", "list"]).unwrap();
    run_tx(&mut ledger, &["tallybook", "tx", "list", "--json"]).unwrap();
}

#[test]
fn dashboard_and_report_render_without_errors() {
    let mut ledger = empty_ledger();
    run_tx(
        &mut ledger,
        &[
            "tallybook", "tx", "add", "--description", "Salary", "--amount", "3000", "--type",
            "income", "--category", "salary",
        ],
    )
    .unwrap();

    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["tallybook", "dashboard", "--json"]);
    if let Some(("dashboard", dash_m)) = matches.subcommand() {
        dashboard::handle(&ledger, dash_m).unwrap();
    } else {
        panic!("no dashboard subcommand");
    }

    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["tallybook", "report", "spend-by-category", "--json"]);
    if let Some(("report", report_m)) = matches.subcommand() {
        reports::handle(&ledger, report_m).unwrap();
    } else {
        panic!("no report subcommand");
    }
}
