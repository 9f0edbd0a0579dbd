//! Error types for the card grid engine.
//!
//! None of these are fatal to a preview session. No-data conditions become an
//! inline message on the render surface, render failures degrade a single card
//! to empty content, and typesetting failures are logged and dropped.

use thiserror::Error;

/// Conditions under which there is nothing to preview.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PreviewError {
    /// The host has no open collection.
    #[error("No collection or no deck selected.")]
    NoCollection,

    /// A collection is open but no deck is selected.
    #[error("No collection or no deck selected.")]
    NoDeckSelected,

    /// The selected deck exists but holds no cards.
    #[error("This deck has no cards to preview.")]
    EmptyDeck {
        /// Name of the empty deck.
        deck: String,
    },

    /// The host failed to list the deck's cards.
    #[error("Could not load cards for deck '{deck}': {reason}")]
    Host {
        /// Deck that was being loaded.
        deck: String,
        /// Description of what went wrong.
        reason: String,
    },
}

impl PreviewError {
    /// Inline informational text shown on the render surface.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// A single rendering strategy failed for one card.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The strategy is not available for this card.
    #[error("{0} is not available")]
    Unavailable(&'static str),

    /// A template referenced a field the note does not have.
    #[error("template references unknown field '{field}'")]
    MissingField {
        /// Field name used by the template.
        field: String,
    },

    /// The strategy ran but failed.
    #[error("render failed: {0}")]
    Failed(String),
}

/// The external typesetting pass failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypesetError {
    /// A card face has an opening math delimiter without a matching close.
    #[error("unbalanced math delimiter '{delimiter}' on card {index}")]
    Unbalanced {
        /// Global item index of the card.
        index: usize,
        /// The delimiter that was left open.
        delimiter: &'static str,
    },
}
