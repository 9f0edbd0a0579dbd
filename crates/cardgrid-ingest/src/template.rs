//! Card templates: `{{Field}}` substitution for deck-defined card faces.
//!
//! A deck `Spanish/Verbs.csv` may carry templates in a sibling
//! `Spanish/Verbs.templates.toml`:
//!
//! ```toml
//! front = "<b>{{Infinitive}}</b>"
//! back = "{{FrontSide}}<hr id=answer>{{Meaning}}"
//! ```

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use cardgrid_core::RenderError;
use regex::{Captures, Regex};
use serde::Deserialize;

use crate::error::{IngestError, Result};

/// Placeholder that expands to the rendered front on the back template.
pub const FRONT_SIDE: &str = "FrontSide";

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*([^{}]+?)\s*\}\}").expect("valid pattern"));

/// Front and back templates of a deck.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CardTemplates {
    pub front: String,
    pub back: String,
}

impl CardTemplates {
    /// Renders both faces for a note given as `(name, value)` fields.
    pub fn render(
        &self,
        fields: &[(&str, &str)],
    ) -> std::result::Result<(String, String), RenderError> {
        let front = substitute(&self.front, fields, None)?;
        let back = substitute(&self.back, fields, Some(&front))?;
        Ok((front, back))
    }
}

/// Path of the templates file for a deck file.
pub fn templates_path(deck_file: &Path) -> PathBuf {
    deck_file.with_extension("templates.toml")
}

/// Loads the templates next to `deck_file`, if there are any.
pub fn load_templates(deck_file: &Path) -> Result<Option<CardTemplates>> {
    let path = templates_path(deck_file);
    if !path.is_file() {
        return Ok(None);
    }
    let text = std::fs::read_to_string(&path).map_err(|e| IngestError::FileRead {
        path: path.clone(),
        source: e,
    })?;
    let templates =
        toml::from_str(&text).map_err(|e| IngestError::ConfigParse { path, source: e })?;
    Ok(Some(templates))
}

fn substitute(
    template: &str,
    fields: &[(&str, &str)],
    front_side: Option<&str>,
) -> std::result::Result<String, RenderError> {
    let mut missing = None;
    let rendered = PLACEHOLDER.replace_all(template, |caps: &Captures<'_>| {
        let name = &caps[1];
        if let Some(front) = front_side.filter(|_| name == FRONT_SIDE) {
            return front.to_string();
        }
        match fields.iter().find(|(field, _)| *field == name) {
            Some((_, value)) => (*value).to_string(),
            None => {
                missing.get_or_insert_with(|| name.to_string());
                String::new()
            }
        }
    });
    match missing {
        Some(field) => Err(RenderError::MissingField { field }),
        None => Ok(rendered.into_owned()),
    }
}
