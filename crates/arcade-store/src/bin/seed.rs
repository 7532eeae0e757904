//! # Sample Catalog Generator
//!
//! Writes the sample games to a catalog file the console can import.
//!
//! ## Usage
//! ```bash
//! # Write games_to_import.json in the current directory (default)
//! cargo run -p arcade-store --bin seed
//!
//! # Specify output path
//! cargo run -p arcade-store --bin seed -- --out ./data/games.json
//! ```
//!
//! ## Generated Products
//! Every entry of `arcade_store::seed::SAMPLE_GAMES`, in order, as
//! `"type": "Game"` records.

use std::path::PathBuf;
use std::process::ExitCode;

use arcade_core::Catalog;
use arcade_store::{seed, CatalogRepository, DEFAULT_IMPORT_FILE};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "seed", about = "Arcade store sample catalog generator")]
struct Args {
    /// Catalog file to write
    #[arg(short, long, default_value = DEFAULT_IMPORT_FILE)]
    out: PathBuf,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();

    println!("🌱 Arcade Store Seed Data Generator");
    println!("===================================");
    println!("Output: {}", args.out.display());
    println!();

    let mut catalog = Catalog::new();
    let added = match seed::seed_catalog(&mut catalog) {
        Ok(added) => added,
        Err(e) => {
            eprintln!("✗ Failed to build sample catalog: {}", e);
            return ExitCode::FAILURE;
        }
    };
    println!("✓ Built {} sample games", added);

    let repo = CatalogRepository::new(&args.out);
    if repo.exists() {
        println!("⚠ {} already exists and will be replaced", args.out.display());
    }

    match repo.export_from(&catalog) {
        Ok(written) => {
            println!("✓ Wrote {} records", written);
            println!();
            println!("✓ Seed complete!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("✗ {}", e);
            ExitCode::FAILURE
        }
    }
}
