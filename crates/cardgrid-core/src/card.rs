//! Rendered card pairs.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// First divider element, any case, any attributes.
static DIVIDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<hr[^>]*>").expect("divider pattern is valid"));

/// One card as presented in the grid.
///
/// `back_only` is the answer markup without the repeated question that host
/// templates usually put before the `<hr>` divider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardItem {
    #[serde(rename = "q")]
    front: String,
    #[serde(rename = "a")]
    back: String,
    #[serde(rename = "aOnly")]
    back_only: String,
}

impl CardItem {
    /// Build an item from rendered front and back markup.
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        let front = front.into();
        let back = back.into();
        let back_only = split_back_only(&back).to_string();
        Self {
            front,
            back,
            back_only,
        }
    }

    /// Item for a card whose rendering failed entirely.
    pub fn empty() -> Self {
        Self::new(String::new(), String::new())
    }

    pub fn front(&self) -> &str {
        &self.front
    }

    pub fn back(&self) -> &str {
        &self.back
    }

    pub fn back_only(&self) -> &str {
        &self.back_only
    }

    /// True when both faces have no content.
    pub fn is_blank(&self) -> bool {
        self.front.trim().is_empty() && self.back.trim().is_empty()
    }
}

/// Everything after the first divider, or the whole markup when there is none.
pub fn split_back_only(back: &str) -> &str {
    match DIVIDER.find(back) {
        Some(divider) => &back[divider.end()..],
        None => back,
    }
}
