//! # Arcade Console Library
//!
//! Everything the `arcade` binary does, kept out of `main.rs` so it can be
//! driven from tests with in-memory input and output.
//!
//! ## Module Organization
//! ```text
//! arcade_console/
//! ├── lib.rs          ◄─── You are here (tracing setup & run)
//! ├── cli.rs          ◄─── Command-line flags
//! ├── config.rs       ◄─── arcade.toml + environment overrides
//! ├── state.rs        ◄─── Catalog + SalesManager, startup sequence
//! ├── command.rs      ◄─── Input line → Command
//! ├── session.rs      ◄─── Interactive loop
//! ├── report.rs       ◄─── Headers, tables, listings
//! └── chart.rs        ◄─── Revenue bar chart
//! ```

pub mod chart;
pub mod cli;
pub mod command;
pub mod config;
pub mod report;
pub mod session;
pub mod state;

use std::io::{self, Write};

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::AppConfig;
use session::Session;
use state::StoreState;

/// Runs the console on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults < arcade.toml < ARCADE_* env < command line              │
/// │                                                                         │
/// │  2. Build State ──────────────────────────────────────────────────────► │
/// │     • import or sample games, discounts, export, simulation             │
/// │                                                                         │
/// │  3. Command Loop ─────────────────────────────────────────────────────► │
/// │     • until `exit` or end of input                                      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::load(&cli).context("failed to load configuration")?;
    info!(?config, "Configuration loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    report::write_header(&mut out, "Welcome to the online store!")?;
    let state = StoreState::bootstrap(&config, &mut out)?;
    out.flush()?;

    let mut session = Session::new(state, config.report);
    session.run(io::stdin().lock(), &mut out)?;
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never mix with reports.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=arcade=trace` - Show trace for arcade crates only
/// - Default: warnings, plus INFO from arcade crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,arcade=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
