//! StrMetric - Edit distance from the command line.

use anyhow::Result;
use clap::Parser;
use strmetric::similarity;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// First string to compare
    str1: String,

    /// Second string to compare
    str2: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    debug!("strmetric v{}", env!("CARGO_PKG_VERSION"));

    let distance = similarity(&args.str1, &args.str2);
    println!("{distance}");

    Ok(())
}
