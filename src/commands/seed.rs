// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::ledger::Ledger;

pub fn handle(ledger: &mut Ledger) -> Result<()> {
    let created = ledger.seed_sample_data()?;
    println!("Seeded {} sample transactions", created.len());
    Ok(())
}
