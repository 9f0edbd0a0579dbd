//! A directory of CSV decks acting as the card host.

use std::path::{Path, PathBuf};

use cardgrid_core::HostCollection;
use tracing::{info, warn};

use crate::card::CsvCard;
use crate::config::CollectionConfig;
use crate::deck::{Deck, DeckSummary, load_deck};
use crate::discovery::{deck_name, in_deck, list_deck_files};
use crate::error::{IngestError, Result};

/// An opened collection. Decks are read once, at open.
#[derive(Debug, Clone)]
pub struct Collection {
    root: PathBuf,
    decks: Vec<Deck>,
    config: CollectionConfig,
    selected: Option<String>,
}

impl Collection {
    /// Opens the collection rooted at `root`, reading every deck below it.
    ///
    /// A deck that cannot be read is logged and left out; the rest of the
    /// collection still opens.
    pub fn open(root: &Path) -> Result<Self> {
        let config = CollectionConfig::load(root)?;
        let mut decks = Vec::new();
        let mut skipped = 0usize;
        for file in list_deck_files(root)? {
            let Some(name) = deck_name(root, &file) else {
                continue;
            };
            match load_deck(name, &file) {
                Ok(deck) => decks.push(deck),
                Err(error) => {
                    warn!(path = %file.display(), %error, "skipping unreadable deck");
                    skipped += 1;
                }
            }
        }
        decks.sort_by(|a, b| a.name.cmp(&b.name));

        info!(
            root = %root.display(),
            decks = decks.len(),
            skipped,
            current = ?config.current_deck,
            "opened collection"
        );
        Ok(Self {
            root: root.to_path_buf(),
            decks,
            config,
            selected: None,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Every deck with its card count, sorted by name.
    pub fn decks(&self) -> Vec<DeckSummary> {
        self.decks.iter().map(Deck::summary).collect()
    }

    /// Selects `deck` as the current deck.
    ///
    /// A name with no deck of its own is accepted when it has child decks.
    pub fn select_deck(&mut self, deck: &str) -> Result<()> {
        if !self.decks.iter().any(|d| in_deck(&d.name, deck)) {
            return Err(IngestError::UnknownDeck {
                deck: deck.to_string(),
            });
        }
        self.selected = Some(deck.to_string());
        Ok(())
    }

    /// Cards of `deck` and its children, in deck then row order.
    pub fn cards(&self, deck: &str, limit: Option<usize>) -> Result<Vec<CsvCard>> {
        let mut matched = self.decks.iter().filter(|d| in_deck(&d.name, deck)).peekable();
        if matched.peek().is_none() {
            return Err(IngestError::UnknownDeck {
                deck: deck.to_string(),
            });
        }

        let cards = matched
            .enumerate()
            .flat_map(|(deck_index, d)| {
                d.notes.iter().enumerate().map(move |(row, values)| {
                    CsvCard::new(
                        ((deck_index as u64) << 32) | row as u64,
                        d.name.clone(),
                        d.fields.clone(),
                        values.clone(),
                        d.templates.clone(),
                    )
                })
            })
            .take(limit.unwrap_or(usize::MAX))
            .collect();
        Ok(cards)
    }
}

impl HostCollection for Collection {
    type Card = CsvCard;
    type Error = IngestError;

    fn current_deck(&self) -> Option<String> {
        self.selected
            .clone()
            .or_else(|| self.config.current_deck.clone())
    }

    fn cards_for_deck(&self, deck: &str, limit: Option<usize>) -> Result<Vec<CsvCard>> {
        self.cards(deck, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardgrid_core::{HostCard, PreviewError};
    use tempfile::TempDir;

    fn collection() -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("Spanish")).unwrap();
        std::fs::write(dir.path().join("Spanish.csv"), "Front,Back\nuno,one\n").unwrap();
        std::fs::write(
            dir.path().join("Spanish/Verbs.csv"),
            "Front,Back\nhablar,to speak\ncomer,to eat\n",
        )
        .unwrap();
        std::fs::write(dir.path().join("Empty.csv"), "Front,Back\n").unwrap();
        dir
    }

    #[test]
    fn test_decks_sorted_with_counts() {
        let dir = collection();
        let collection = Collection::open(dir.path()).unwrap();
        let summary: Vec<(String, usize)> = collection
            .decks()
            .into_iter()
            .map(|d| (d.name, d.cards))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Empty".to_string(), 0),
                ("Spanish".to_string(), 1),
                ("Spanish::Verbs".to_string(), 2),
            ]
        );
    }

    #[test]
    fn test_parent_deck_includes_children() {
        let dir = collection();
        let collection = Collection::open(dir.path()).unwrap();
        let cards = collection.cards("Spanish", None).unwrap();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].deck(), "Spanish");
        assert_eq!(cards[2].deck(), "Spanish::Verbs");
        assert_ne!(cards[0].id(), cards[1].id());

        assert_eq!(collection.cards("Spanish", Some(2)).unwrap().len(), 2);
    }

    #[test]
    fn test_no_selection_and_empty_deck() {
        let dir = collection();
        let mut collection = Collection::open(dir.path()).unwrap();
        assert_eq!(
            collection.cards_for_current_deck(None).unwrap_err(),
            PreviewError::NoDeckSelected
        );

        collection.select_deck("Empty").unwrap();
        assert_eq!(
            collection.cards_for_current_deck(None).unwrap_err(),
            PreviewError::EmptyDeck {
                deck: "Empty".into()
            }
        );
    }

    #[test]
    fn test_unknown_deck_is_rejected() {
        let dir = collection();
        let mut collection = Collection::open(dir.path()).unwrap();
        assert!(matches!(
            collection.select_deck("French"),
            Err(IngestError::UnknownDeck { .. })
        ));
    }

    #[test]
    fn test_config_selects_current_deck() {
        let dir = collection();
        std::fs::write(dir.path().join("collection.toml"), "current_deck = \"Spanish::Verbs\"\n")
            .unwrap();
        let collection = Collection::open(dir.path()).unwrap();
        assert_eq!(collection.current_deck().as_deref(), Some("Spanish::Verbs"));
        assert_eq!(collection.cards_for_current_deck(Some(10)).unwrap().len(), 2);
    }
}
