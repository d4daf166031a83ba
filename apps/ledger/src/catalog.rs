//! # Catalog Seeding
//!
//! Builds the store the host runs its command against.
//!
//! Each run constructs one [`MusicStore`] explicitly and owns it until
//! the command finishes. Discs come from `[[catalog]]` entries in the
//! config file, or from the demo catalog below when there are none.

use tracing::{debug, info, warn};

use discstore_core::{LedgerError, Money, MusicStore};

use crate::config::{CatalogEntry, LedgerConfig};
use crate::error::AppResult;

/// Demo discs: (id, title, artist, sale cents, purchase cents, quantity, songs).
const DEMO_CATALOG: &[(&str, &str, &str, i64, i64, u64, &[&str])] = &[
    (
        "JAZZ-001",
        "Kind of Blue",
        "Miles Davis",
        1999,
        1100,
        10,
        &[
            "So What",
            "Freddie Freeloader",
            "Blue in Green",
            "All Blues",
            "Flamenco Sketches",
        ],
    ),
    (
        "JAZZ-002",
        "Sketches of Spain",
        "Miles Davis",
        1799,
        950,
        4,
        &[
            "Concierto de Aranjuez",
            "Will o' the Wisp",
            "The Pan Piper",
            "Saeta",
            "Solea",
        ],
    ),
    (
        "JAZZ-003",
        "A Love Supreme",
        "John Coltrane",
        1899,
        1000,
        6,
        &["Acknowledgement", "Resolution", "Pursuance", "Psalm"],
    ),
    (
        "SOUL-001",
        "Pastel Blues",
        "Nina Simone",
        1499,
        800,
        5,
        &[
            "Be My Husband",
            "Nobody Knows You When You're Down and Out",
            "Sinnerman",
        ],
    ),
    (
        "ROCK-001",
        "Horses",
        "Patti Smith",
        1599,
        850,
        3,
        &["Gloria", "Redondo Beach", "Birdland", "Free Money"],
    ),
];

/// Catalog entries for the built-in demo store.
pub fn demo_catalog() -> Vec<CatalogEntry> {
    DEMO_CATALOG
        .iter()
        .map(
            |(id, title, artist, sale, purchase, quantity, songs)| CatalogEntry {
                id: id.to_string(),
                title: title.to_string(),
                artist: artist.to_string(),
                sale_price: Money::from_cents(*sale).format_with(""),
                purchase_price: Money::from_cents(*purchase).format_with(""),
                quantity: *quantity,
                songs: songs.iter().map(|s| s.to_string()).collect(),
            },
        )
        .collect()
}

/// Creates and seeds the store for this run.
///
/// Duplicate ids are skipped with a warning; the first entry wins.
pub fn build_store(config: &LedgerConfig) -> AppResult<MusicStore> {
    let entries = if config.catalog.is_empty() {
        debug!("No catalog configured, using demo catalog");
        demo_catalog()
    } else {
        config.catalog.clone()
    };

    let mut store = MusicStore::new();

    for entry in &entries {
        let (sale, purchase) = entry.prices()?;

        match store.try_add_disc(
            &entry.id,
            &entry.title,
            &entry.artist,
            sale,
            purchase,
            entry.quantity,
        ) {
            Ok(_) => {}
            Err(LedgerError::DuplicateDisc(id)) => {
                warn!(id = %id, "Skipping duplicate catalog entry");
                continue;
            }
            Err(e) => return Err(e.into()),
        }

        if let Some(disc) = store.find_by_id_mut(&entry.id) {
            for song in &entry.songs {
                disc.add_song(song.as_str());
            }
        }
    }

    info!(store = %config.store.name, discs = store.len(), "Catalog loaded");
    Ok(store)
}
