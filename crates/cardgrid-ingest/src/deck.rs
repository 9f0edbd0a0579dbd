//! Loading a single CSV deck.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::template::{CardTemplates, load_templates};

/// A deck file: header row of field names and one note per data row.
#[derive(Debug, Clone)]
pub struct Deck {
    pub name: String,
    pub path: PathBuf,
    pub fields: Arc<[String]>,
    pub notes: Vec<Vec<String>>,
    pub templates: Option<Arc<CardTemplates>>,
}

/// One row of the deck listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckSummary {
    pub name: String,
    pub path: PathBuf,
    pub cards: usize,
}

impl Deck {
    pub fn summary(&self) -> DeckSummary {
        DeckSummary {
            name: self.name.clone(),
            path: self.path.clone(),
            cards: self.notes.len(),
        }
    }
}

/// Reads `path` as a deck named `name`.
///
/// The header row names the fields (a UTF-8 BOM is ignored). Rows may be
/// ragged: short rows are padded with empty values, extra values dropped.
/// Rows whose values are all blank are skipped.
pub fn load_deck(name: String, path: &Path) -> Result<Deck> {
    let parse_error = |e| IngestError::CsvParse {
        path: path.to_path_buf(),
        source: e,
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(parse_error)?;

    let fields: Arc<[String]> = reader
        .headers()
        .map_err(parse_error)?
        .iter()
        .map(|header| header.trim_matches('\u{feff}').trim().to_string())
        .collect();

    let mut notes = Vec::new();
    for record in reader.records() {
        let record = record.map_err(parse_error)?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let mut values: Vec<String> = record
            .iter()
            .take(fields.len())
            .map(str::to_string)
            .collect();
        values.resize(fields.len(), String::new());
        notes.push(values);
    }

    let templates = load_templates(path)?.map(Arc::new);
    debug!(
        deck = %name,
        fields = fields.len(),
        notes = notes.len(),
        templates = templates.is_some(),
        "loaded deck"
    );

    Ok(Deck {
        name,
        path: path.to_path_buf(),
        fields,
        notes,
        templates,
    })
}
