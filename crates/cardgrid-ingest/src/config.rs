//! Collection-level configuration (`collection.toml` at the root).

use std::path::Path;

use serde::Deserialize;

use crate::error::{IngestError, Result};

pub const CONFIG_FILE: &str = "collection.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CollectionConfig {
    /// Deck selected when the collection is opened.
    pub current_deck: Option<String>,
}

impl CollectionConfig {
    /// Reads `collection.toml` from `root`. A missing file yields defaults.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if !path.is_file() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(&path).map_err(|e| IngestError::FileRead {
            path: path.clone(),
            source: e,
        })?;
        toml::from_str(&text).map_err(|e| IngestError::ConfigParse { path, source: e })
    }
}
