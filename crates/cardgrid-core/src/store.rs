//! The immutable item sequence backing one preview refresh.

use std::ops::Range;
use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::card::CardItem;
use crate::host::{HostCard, render_front_back};

/// Ordered, immutable card items. Cloning shares the underlying slice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CardStore {
    items: Arc<[CardItem]>,
}

impl CardStore {
    /// Render every host card into an item.
    ///
    /// A card that cannot be rendered at all becomes an empty item; the rest
    /// of the batch is unaffected.
    pub fn build<C: HostCard>(cards: &[C]) -> Self {
        let items: Vec<CardItem> = cards
            .iter()
            .map(|card| {
                let (front, back) = render_front_back(card);
                CardItem::new(front, back)
            })
            .collect();
        let blank = items.iter().filter(|item| item.is_blank()).count();
        info!(cards = items.len(), blank, "built card store");
        Self::from_items(items)
    }

    pub fn from_items(items: Vec<CardItem>) -> Self {
        Self {
            items: items.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CardItem> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardItem> {
        self.items.iter()
    }

    /// Items in `range`, clipped to the store bounds.
    pub fn slice(&self, range: Range<usize>) -> &[CardItem] {
        let end = range.end.min(self.items.len());
        let start = range.start.min(end);
        &self.items[start..end]
    }

    /// Items as the JSON array the web page consumes.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
