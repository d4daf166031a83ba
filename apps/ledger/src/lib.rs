//! # Disc Store Ledger Host
//!
//! Host application around `discstore-core`.
//!
//! ## Module Organization
//! ```text
//! discstore_ledger/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── config.rs       ◄─── LedgerConfig: file + env + defaults
//! ├── catalog.rs      ◄─── Seeds the MusicStore for this run
//! ├── command.rs      ◄─── Argument parsing, command execution, rendering
//! └── error.rs        ◄─── AppError for the binary
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Initialize Logging ──► tracing-subscriber, RUST_LOG, stderr         │
//! │  2. Parse Arguments ─────► Cli (clap derive)                            │
//! │  3. Load Config ─────────► LedgerConfig (file, env, defaults)           │
//! │  4. Build Store ─────────► one MusicStore, owned by this run            │
//! │  5. Execute Command ─────► rendered output                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod catalog;
pub mod command;
pub mod config;
pub mod error;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use clap::Parser;

use command::{execute, Cli};
use config::LedgerConfig;
use error::AppResult;

/// Runs one invocation and returns what should be printed.
///
/// `args` excludes the program name. Help and version requests come back
/// as `AppError::Cli` carrying the rendered text.
pub fn run<I>(args: I) -> AppResult<String>
where
    I: IntoIterator<Item = String>,
{
    let argv = std::iter::once("discstore".to_string()).chain(args);
    let cli = Cli::try_parse_from(argv)?;
    debug!(?cli, "Parsed arguments");

    let config = LedgerConfig::load(cli.config.as_deref())?;
    let mut store = catalog::build_store(&config)?;

    execute(&mut store, &cli.command, &config, cli.json)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=discstore_core=debug` - Show every ledger operation
/// - Default: warnings, plus info from the host
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,discstore_ledger=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
