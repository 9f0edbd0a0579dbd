//! CSV deck collections for the card grid preview.
//!
//! A collection is a directory. Every CSV file below it is a deck whose name
//! is its relative path joined with `::`, so `Spanish/Verbs.csv` is the deck
//! `Spanish::Verbs`, a child of `Spanish`.
//!
//! # Features
//!
//! - **Deck Discovery**: Find deck files recursively and name them
//! - **Deck Loading**: Header row as field names, one note per row
//! - **Card Templates**: Optional `<deck>.templates.toml` with `{{Field}}` placeholders
//! - **Host Collection**: [`Collection`] implements [`cardgrid_core::HostCollection`]
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use cardgrid_core::{CardStore, HostCollection};
//! use cardgrid_ingest::Collection;
//!
//! let mut collection = Collection::open(Path::new("decks"))?;
//! collection.select_deck("Spanish")?;
//! let cards = collection.cards_for_current_deck(Some(500))?;
//! let store = CardStore::build(&cards);
//! ```

mod card;
mod collection;
mod config;
mod deck;
mod discovery;
mod error;
mod template;

// === Error Types ===
pub use error::{IngestError, Result};

// === Collection ===
pub use card::CsvCard;
pub use collection::Collection;
pub use config::{CONFIG_FILE, CollectionConfig};
pub use deck::{Deck, DeckSummary, load_deck};

// === Discovery ===
pub use discovery::{DECK_SEPARATOR, deck_name, in_deck, list_deck_files};

// === Templates ===
pub use template::{CardTemplates, FRONT_SIDE, load_templates, templates_path};
