//! # Arcade Console
//!
//! Entry point of the `arcade` binary.

use arcade_console::cli::Cli;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    arcade_console::init_tracing();
    arcade_console::run(cli)
}
