//! # discstore
//!
//! Command-line entry point. The setup lives in lib.rs for testability.
//!
//! ## Usage
//! ```bash
//! # List the demo catalog
//! cargo run -p discstore-ledger -- list
//!
//! # Sell three copies using a custom catalog
//! cargo run -p discstore-ledger -- --config ./ledger.toml sell JAZZ-001 3
//! ```

use std::process::ExitCode;

use discstore_ledger::error::AppError;

fn main() -> ExitCode {
    discstore_ledger::init_tracing();

    match discstore_ledger::run(std::env::args().skip(1)) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        // help on stdout, usage errors on stderr, with clap's exit code
        Err(AppError::Cli(e)) => e.exit(),
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
