//! Card loading service.
//!
//! Opens the collection, resolves the current deck and builds the card store
//! on a blocking thread.

use std::path::PathBuf;

use cardgrid_core::{CardStore, HostCollection};
use cardgrid_ingest::Collection;
use tracing::{info, warn};

use crate::error::GuiError;

/// What to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub collection: PathBuf,
    /// Deck to select; `None` keeps the collection's configured deck.
    pub deck: Option<String>,
    pub limit: Option<usize>,
}

/// Result of a load.
///
/// `cards` holds the inline message for the surface when there is nothing to
/// preview.
#[derive(Debug, Clone)]
pub struct LoadedDeck {
    pub decks: Vec<String>,
    pub deck: Option<String>,
    pub cards: Result<CardStore, String>,
}

/// Load cards asynchronously.
///
/// Designed for `Task::perform(load_cards(request), Message::CardsLoaded)`.
pub async fn load_cards(request: LoadRequest) -> Result<LoadedDeck, String> {
    tokio::task::spawn_blocking(move || load_cards_sync(&request))
        .await
        .map_err(|e| GuiError::task(&e).to_string())?
        .map_err(|e| e.to_string())
}

/// Synchronous load (runs on a blocking thread).
pub fn load_cards_sync(request: &LoadRequest) -> Result<LoadedDeck, GuiError> {
    let mut collection =
        Collection::open(&request.collection).map_err(|e| GuiError::CollectionOpen {
            path: request.collection.clone(),
            reason: e.to_string(),
        })?;

    if let Some(deck) = &request.deck
        && let Err(error) = collection.select_deck(deck)
    {
        warn!(%error, "remembered deck is gone, using the collection default");
    }

    let decks = collection.decks().into_iter().map(|d| d.name).collect();
    let deck = collection.current_deck();
    let cards = match collection.cards_for_current_deck(request.limit) {
        Ok(cards) => {
            info!(deck = ?deck, cards = cards.len(), "loaded cards");
            Ok(CardStore::build(&cards))
        }
        Err(error) => {
            info!(%error, "nothing to preview");
            Err(error.message())
        }
    };

    Ok(LoadedDeck {
        decks,
        deck,
        cards,
    })
}
