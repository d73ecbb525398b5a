// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::ledger::Ledger;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(ledger: &Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("spend-by-category", sub)) => spend_by_category(ledger, sub),
        _ => Ok(()),
    }
}

fn spend_by_category(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let spend = ledger.spending_by_category();
    if maybe_print_json(json_flag, jsonl_flag, &spend)? {
        return Ok(());
    }
    let mut items: Vec<_> = spend.into_iter().collect();
    items.sort_by(|a, b| b.1.cmp(&a.1));
    let rows: Vec<Vec<String>> = items
        .into_iter()
        .map(|(category, amount)| vec![category.label(), format!("{:.2}", amount)])
        .collect();
    println!("{}", pretty_table(&["Category", "Spent"], rows));
    Ok(())
}
