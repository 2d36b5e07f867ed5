//! viewdef
//!
//! Reads a record schema (and optionally caller overrides) from JSON and
//! prints the resolved view configuration.
//!
//! Usage:
//!   viewdef --schema account.json --options overrides.json --config saved.json --pretty

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use viewdef_cli::{Args, run};

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let resolution = run(&args)?;
    println!("{}", resolution.to_json(args.pretty)?);
    Ok(())
}
