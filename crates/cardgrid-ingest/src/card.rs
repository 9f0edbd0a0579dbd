//! CSV notes as host cards.

use std::sync::Arc;

use cardgrid_core::{HostCard, RenderError};

use crate::template::CardTemplates;

/// A card generated from one CSV row.
#[derive(Debug, Clone)]
pub struct CsvCard {
    id: u64,
    deck: String,
    fields: Arc<[String]>,
    values: Vec<String>,
    templates: Option<Arc<CardTemplates>>,
}

impl CsvCard {
    pub(crate) fn new(
        id: u64,
        deck: String,
        fields: Arc<[String]>,
        values: Vec<String>,
        templates: Option<Arc<CardTemplates>>,
    ) -> Self {
        Self {
            id,
            deck,
            fields,
            values,
            templates,
        }
    }

    /// Name of the deck the card came from.
    pub fn deck(&self) -> &str {
        &self.deck
    }

    fn pairs(&self) -> Vec<(&str, &str)> {
        self.fields
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().map(String::as_str))
            .collect()
    }
}

impl HostCard for CsvCard {
    fn id(&self) -> u64 {
        self.id
    }

    /// Renders through the deck's own templates.
    fn question_answer(&self) -> Result<(String, String), RenderError> {
        let templates = self
            .templates
            .as_ref()
            .ok_or(RenderError::Unavailable("deck templates"))?;
        templates.render(&self.pairs())
    }

    /// Renders as the built-in Basic note type: first field on the front,
    /// front plus answer divider plus second field on the back.
    fn render_preview(&self) -> Result<(String, String), RenderError> {
        match self.values.as_slice() {
            [front, back, ..] => Ok((front.clone(), format!("{front}<hr id=answer>{back}"))),
            _ => Err(RenderError::Unavailable("basic note type")),
        }
    }

    fn note_fields(&self) -> Result<Vec<(String, String)>, RenderError> {
        if self.values.is_empty() {
            return Err(RenderError::Failed("note has no fields".into()));
        }
        Ok(self
            .pairs()
            .into_iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardgrid_core::render_front_back;

    fn card(fields: &[&str], values: &[&str], templates: Option<CardTemplates>) -> CsvCard {
        CsvCard::new(
            7,
            "Deck".into(),
            fields.iter().map(|f| (*f).to_string()).collect(),
            values.iter().map(|v| (*v).to_string()).collect(),
            templates.map(Arc::new),
        )
    }

    #[test]
    fn test_templates_win() {
        let templates = CardTemplates {
            front: "{{Word}}?".into(),
            back: "{{FrontSide}}<hr>{{Meaning}}".into(),
        };
        let card = card(&["Word", "Meaning"], &["casa", "house"], Some(templates));
        assert_eq!(
            render_front_back(&card),
            ("casa?".to_string(), "casa?<hr>house".to_string())
        );
    }

    #[test]
    fn test_broken_template_falls_back_to_basic() {
        let templates = CardTemplates {
            front: "{{Nope}}".into(),
            back: "{{Meaning}}".into(),
        };
        let card = card(&["Word", "Meaning"], &["casa", "house"], Some(templates));
        assert_eq!(
            render_front_back(&card),
            ("casa".to_string(), "casa<hr id=answer>house".to_string())
        );
    }

    #[test]
    fn test_single_field_falls_back_to_raw_fields() {
        let card = card(&["Word"], &["solo"], None);
        assert_eq!(
            render_front_back(&card),
            ("solo".to_string(), "solo".to_string())
        );
    }

    #[test]
    fn test_no_fields_renders_empty() {
        let card = card(&[], &[], None);
        assert_eq!(render_front_back(&card), (String::new(), String::new()));
    }
}
