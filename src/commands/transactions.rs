// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::ledger::{Ledger, SortOrder};
use crate::models::TransactionDraft;
use crate::utils::{confirm, fmt_signed_amount, maybe_print_json, pretty_table};

pub fn handle(ledger: &mut Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(ledger, sub),
        Some(("list", sub)) => list(ledger, sub),
        Some(("rm", sub)) => rm(ledger, sub),
        _ => Ok(()),
    }
}

fn add(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let draft = TransactionDraft::new(
        sub.get_one::<String>("description").unwrap(),
        sub.get_one::<String>("amount").unwrap(),
        sub.get_one::<String>("type").unwrap(),
        sub.get_one::<String>("category").unwrap(),
    );
    let transaction = ledger.add(draft)?;
    println!(
        "{} of ${:.2} added (id {})",
        transaction.kind.label(),
        transaction.amount,
        transaction.id
    );
    Ok(())
}

fn list(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let mut view = ledger.list(SortOrder::Recency);
    if let Some(limit) = sub.get_one::<usize>("limit") {
        view.truncate(*limit);
    }
    if maybe_print_json(json_flag, jsonl_flag, &view)? {
        return Ok(());
    }
    if view.is_empty() {
        println!("No transactions yet. Record your first one with 'tx add'.");
        return Ok(());
    }
    let rows: Vec<Vec<String>> = view
        .iter()
        .map(|t| {
            vec![
                t.id.to_string(),
                t.date.clone(),
                t.description.clone(),
                t.category.label(),
                fmt_signed_amount(t.kind, &t.amount),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["ID", "Date", "Description", "Category", "Amount"], rows)
    );
    Ok(())
}

fn rm(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    if !sub.get_flag("yes") && !confirm(&format!("Delete transaction {}?", id))? {
        println!("Aborted.");
        return Ok(());
    }
    if ledger.remove(id) {
        println!("Transaction {} deleted", id);
    } else {
        println!("No transaction with id {}", id);
    }
    Ok(())
}
