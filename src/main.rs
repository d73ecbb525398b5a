// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use tallybook::{cli, commands, ledger::Ledger, store};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let data_dir = match matches.get_one::<String>("data-dir") {
        Some(dir) => PathBuf::from(dir),
        None => store::default_data_dir()?,
    };
    let kv = store::FileKv::open(&data_dir)?;
    let mut ledger = Ledger::restore(Box::new(kv));

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Ledger data directory: {}", data_dir.display());
        }
        Some(("tx", sub)) => commands::transactions::handle(&mut ledger, sub)?,
        Some(("dashboard", sub)) => commands::dashboard::handle(&ledger, sub)?,
        Some(("report", sub)) => commands::reports::handle(&ledger, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&ledger, sub)?,
        Some(("seed", _)) => commands::seed::handle(&mut ledger)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
