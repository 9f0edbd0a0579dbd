//! Seams to the host application that owns cards and decks.
//!
//! The host decides how a card becomes markup. Hosts differ in which
//! rendering capabilities they offer, so [`render_front_back`] tries them in a
//! fixed order and keeps the first one that produces content.

use tracing::{debug, warn};

use crate::error::{PreviewError, RenderError};

/// A card owned by the host that can be rendered to markup.
pub trait HostCard {
    /// Stable identifier, used only for diagnostics.
    fn id(&self) -> u64;

    /// Direct question/answer accessor.
    fn question_answer(&self) -> Result<(String, String), RenderError>;

    /// Internal preview render call.
    fn render_preview(&self) -> Result<(String, String), RenderError>;

    /// Raw note fields as `(name, value)` pairs in note order.
    fn note_fields(&self) -> Result<Vec<(String, String)>, RenderError>;
}

/// The host's card collection.
pub trait HostCollection {
    type Card: HostCard;
    type Error: std::error::Error;

    /// Whether a collection is open at all.
    fn is_open(&self) -> bool {
        true
    }

    /// The deck the user currently has selected.
    fn current_deck(&self) -> Option<String>;

    /// Cards of `deck` (children included), truncated to `limit`.
    fn cards_for_deck(
        &self,
        deck: &str,
        limit: Option<usize>,
    ) -> Result<Vec<Self::Card>, Self::Error>;

    /// Cards of the current deck, with no-data conditions reported as errors.
    fn cards_for_current_deck(
        &self,
        limit: Option<usize>,
    ) -> Result<Vec<Self::Card>, PreviewError> {
        if !self.is_open() {
            return Err(PreviewError::NoCollection);
        }
        let deck = self.current_deck().ok_or(PreviewError::NoDeckSelected)?;
        let cards = self
            .cards_for_deck(&deck, limit)
            .map_err(|error| PreviewError::Host {
                deck: deck.clone(),
                reason: error.to_string(),
            })?;
        if cards.is_empty() {
            return Err(PreviewError::EmptyDeck { deck });
        }
        Ok(cards)
    }
}

/// Rendered `(front, back)` markup for a card.
///
/// Tries the direct accessor (both sides must be non-empty), then the
/// internal render (any side non-empty), then raw note fields. When every
/// strategy fails both sides are empty.
pub fn render_front_back<C: HostCard + ?Sized>(card: &C) -> (String, String) {
    match card.question_answer() {
        Ok((q, a)) if !q.is_empty() && !a.is_empty() => return (q, a),
        Ok(_) => debug!(card = card.id(), "question/answer accessor returned empty content"),
        Err(error) => debug!(card = card.id(), %error, "question/answer accessor failed"),
    }

    match card.render_preview() {
        Ok((q, a)) if !q.is_empty() || !a.is_empty() => return (q, a),
        Ok(_) => debug!(card = card.id(), "preview render returned empty content"),
        Err(error) => debug!(card = card.id(), %error, "preview render failed"),
    }

    match card.note_fields() {
        Ok(fields) => {
            let mut values = fields.into_iter().map(|(_, value)| value);
            let front = values.next().unwrap_or_default();
            let back = values.next().unwrap_or_else(|| front.clone());
            (front, back)
        }
        Err(error) => {
            warn!(card = card.id(), %error, "all render strategies failed, card left empty");
            (String::new(), String::new())
        }
    }
}
