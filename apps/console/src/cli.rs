//! # Command Line
//!
//! Flags for the `arcade` binary. Each one overrides the matching
//! `arcade.toml` setting.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "arcade", version, about = "Arcade store console")]
pub struct Cli {
    /// Configuration file (default: arcade.toml in the platform config directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Catalog file to import at startup
    #[arg(short, long, value_name = "PATH")]
    pub import: Option<PathBuf>,

    /// Catalog file to export after startup
    #[arg(short, long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Skip the startup sales simulation
    #[arg(long)]
    pub no_simulation: bool,
}
