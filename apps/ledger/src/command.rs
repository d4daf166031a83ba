//! # Commands
//!
//! Command-line definitions and execution of a single ledger command.
//!
//! ## Command Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  argv ──Cli::try_parse_from()──► Cli { config, json, command }          │
//! │                                               │                         │
//! │                                               ▼                         │
//! │  MusicStore ◄────── execute(&mut store, &command, &config, json)        │
//! │                                               │                         │
//! │                                               ▼                         │
//! │                                   String (text or JSON) ──► stdout      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

use discstore_core::validation::validate_copies;
use discstore_core::{
    Disc, LedgerError, MusicStore, Transaction, TransactionKind, ValidationError,
};

use crate::config::LedgerConfig;
use crate::error::AppResult;

/// Disc store ledger: catalog, sales and supplies
///
/// Runs one command against a freshly seeded catalog.
#[derive(Parser, Debug)]
#[command(
    name = "discstore",
    version,
    after_help = "Examples:\n    \
                  discstore list\n    \
                  discstore artist Miles Davis\n    \
                  discstore --config ./ledger.toml sell JAZZ-001 3"
)]
pub struct Cli {
    /// Config file (defaults to the user config dir)
    #[arg(
        long,
        short = 'c',
        global = true,
        env = "DISCSTORE_CONFIG",
        value_name = "PATH"
    )]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// A parsed ledger command.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List every disc in the catalog
    List,

    /// Show one disc
    Show {
        /// Disc identifier
        id: String,
    },

    /// List discs by an artist (exact match)
    Artist {
        /// Artist name; unquoted words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Sell copies of a disc
    Sell {
        /// Disc identifier
        id: String,

        /// Number of copies (1-9999)
        #[arg(value_parser = parse_copies, allow_negative_numbers = true)]
        copies: u32,
    },

    /// Receive copies of a disc
    Supply {
        /// Disc identifier
        id: String,

        /// Number of copies (1-9999)
        #[arg(value_parser = parse_copies, allow_negative_numbers = true)]
        copies: u32,
    },

    /// Show the worst-selling disc
    Worst,
}

fn parse_copies(raw: &str) -> Result<u32, ValidationError> {
    let copies: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidFormat {
            field: "copies".to_string(),
            reason: format!("expected a whole number, got '{raw}'"),
        })?;
    validate_copies(copies)
}

// =============================================================================
// Views
// =============================================================================

/// JSON shape of a disc.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DiscView<'a> {
    id: &'a str,
    title: &'a str,
    artist: &'a str,
    sale_price_cents: i64,
    purchase_price_cents: i64,
    quantity: u64,
    copies_sold: u64,
    copies_supplied: u64,
    songs: &'a [String],
}

impl<'a> From<&'a Disc> for DiscView<'a> {
    fn from(disc: &'a Disc) -> Self {
        DiscView {
            id: disc.id(),
            title: disc.title(),
            artist: disc.artist(),
            sale_price_cents: disc.sale_price().cents(),
            purchase_price_cents: disc.purchase_price().cents(),
            quantity: disc.quantity(),
            copies_sold: disc.copies_sold(),
            copies_supplied: disc.copies_supplied(),
            songs: disc.songs(),
        }
    }
}

/// JSON shape of a completed sell or supply.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MovementView<'a> {
    disc_id: &'a str,
    transaction_id: String,
    kind: TransactionKind,
    copies: u32,
    quantity: u64,
    timestamp: DateTime<Utc>,
}

fn render_disc(disc: &Disc, config: &LedgerConfig) -> String {
    format!(
        "{disc}\nPrice: {}\nStock: {} (sold {}, supplied {})",
        config.format_price(disc.sale_price()),
        disc.quantity(),
        disc.copies_sold(),
        disc.copies_supplied(),
    )
}

fn render_discs<'a>(
    discs: impl IntoIterator<Item = &'a Disc>,
    config: &LedgerConfig,
    json: bool,
) -> AppResult<String> {
    let discs: Vec<&Disc> = discs.into_iter().collect();

    if json {
        let views: Vec<DiscView<'_>> = discs.iter().map(|d| DiscView::from(*d)).collect();
        return Ok(serde_json::to_string_pretty(&views)?);
    }

    if discs.is_empty() {
        return Ok("No discs found.".to_string());
    }

    Ok(discs
        .iter()
        .map(|d| render_disc(d, config))
        .collect::<Vec<_>>()
        .join("\n\n"))
}

fn render_movement(
    disc_id: &str,
    tx: &Transaction,
    quantity: u64,
    json: bool,
) -> AppResult<String> {
    if json {
        let view = MovementView {
            disc_id,
            transaction_id: tx.id().to_string(),
            kind: tx.kind(),
            copies: tx.copies(),
            quantity,
            timestamp: tx.timestamp(),
        };
        return Ok(serde_json::to_string_pretty(&view)?);
    }

    let verb = match tx.kind() {
        TransactionKind::Sell => "Sold",
        TransactionKind::Supply => "Supplied",
    };
    Ok(format!(
        "{verb} {} × {disc_id} ({quantity} in stock)",
        tx.copies()
    ))
}

// =============================================================================
// Execution
// =============================================================================

/// Runs one command against the store and renders the result.
pub fn execute(
    store: &mut MusicStore,
    command: &Command,
    config: &LedgerConfig,
    json: bool,
) -> AppResult<String> {
    match command {
        Command::List => {
            let body = render_discs(store.iter(), config, json)?;
            if json {
                Ok(body)
            } else {
                let name = &config.store.name;
                Ok(format!("{name} ({} discs)\n\n{body}", store.len()))
            }
        }

        Command::Show { id } => {
            let disc = store
                .find_by_id(id)
                .ok_or_else(|| LedgerError::DiscNotFound(id.clone()))?;
            if json {
                Ok(serde_json::to_string_pretty(&DiscView::from(disc))?)
            } else {
                Ok(render_disc(disc, config))
            }
        }

        Command::Artist { name } => {
            let artist = name.join(" ");
            render_discs(store.find_by_artist(&artist), config, json)
        }

        Command::Worst => match store.worst_selling_disc() {
            Some(disc) if json => {
                Ok(serde_json::to_string_pretty(&DiscView::from(disc))?)
            }
            Some(disc) => Ok(render_disc(disc, config)),
            None => Ok("The catalog is empty.".to_string()),
        },

        Command::Sell { id, copies } => {
            let tx = store.try_sell_disc(id, *copies)?.clone();
            let quantity = store.find_by_id(id).map_or(0, Disc::quantity);
            info!(id = %id, copies, quantity, "Sale recorded");
            render_movement(id, &tx, quantity, json)
        }

        Command::Supply { id, copies } => {
            let tx = store.try_supply_disc(id, *copies)?.clone();
            let quantity = store.find_by_id(id).map_or(0, Disc::quantity);
            info!(id = %id, copies, quantity, "Supply recorded");
            render_movement(id, &tx, quantity, json)
        }
    }
}
