use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use devotional_app::config::AppConfig;
use devotional_core::{audit, EntryStore};
use tracing::info;

/// Report integrity problems in the devotional dataset without changing it.
#[derive(Debug, Parser)]
#[command(name = "devotional_audit", version)]
struct Args {
    /// Directory holding entries.json and esv_cache.json. Defaults to
    /// DEVOTIONAL_DATA_DIR, then ./data.
    #[arg(long, short)]
    data_dir: Option<PathBuf>,

    /// Emit the report as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    devotional_app::init_tracing();
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let data_dir = match args.data_dir {
        Some(dir) => dir,
        None => AppConfig::from_env()?.data_dir,
    };
    let store = EntryStore::load_dir(&data_dir)
        .with_context(|| format!("failed to load data from {}", data_dir.display()))?;

    let report = audit::audit(&store);
    info!(issues = report.issue_count(), "audit finished");
    if args.json {
        let encoded = report
            .to_json()
            .context("failed to encode audit report")?;
        println!("{encoded}");
    } else {
        println!("{report}");
    }
    Ok(())
}
