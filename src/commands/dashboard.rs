// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;

use crate::ledger::Ledger;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(ledger: &Ledger, m: &clap::ArgMatches) -> Result<()> {
    let totals = ledger.totals();
    if maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &totals)? {
        return Ok(());
    }
    let indicator = if totals.balance >= Decimal::ZERO { '+' } else { '-' };
    let rows = vec![
        vec!["Income".to_string(), format!("${:.2}", totals.income)],
        vec!["Expenses".to_string(), format!("${:.2}", totals.expenses)],
        vec![
            "Balance".to_string(),
            format!("{}${:.2}", indicator, totals.balance.abs()),
        ],
    ];
    println!("{}", pretty_table(&["Metric", "Amount"], rows));
    Ok(())
}
