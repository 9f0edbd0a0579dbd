//! Grid renderer: paints the visible page into a [`GridDocument`].
//!
//! A document is rebuilt from scratch on every render, which is what resets
//! the per-card flip state.
//!
//! # Flip precedence
//!
//! A card shows its back face when flip-all is on, when it has been
//! click-flipped, or while the pointer hovers it. Flip-all therefore wins over
//! any per-card state, and hover and click combine as a plain OR.

use std::ops::Range;

use tracing::{debug, warn};

use crate::layout::LayoutState;
use crate::pagination::{PageInfo, PaginationEngine};
use crate::store::CardStore;
use crate::typeset::{NoTypesetting, Typesetter};

/// Which face of a card is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Front,
    Back,
}

/// One painted card with its transient interaction state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardElement {
    index: usize,
    front: String,
    back_only: String,
    flipped: bool,
    hovered: bool,
}

impl CardElement {
    /// Global item index of this card.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn front(&self) -> &str {
        &self.front
    }

    pub fn back_only(&self) -> &str {
        &self.back_only
    }

    /// Click-toggle state.
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn toggle(&mut self) {
        self.flipped = !self.flipped;
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn visible_face(&self, flip_all: bool) -> Face {
        if flip_all || self.flipped || self.hovered {
            Face::Back
        } else {
            Face::Front
        }
    }

    /// Markup of the face currently showing.
    pub fn visible_markup(&self, flip_all: bool) -> &str {
        match self.visible_face(flip_all) {
            Face::Front => &self.front,
            Face::Back => &self.back_only,
        }
    }
}

/// The painted page: the container and its card children.
#[derive(Debug, Clone, PartialEq)]
pub struct GridDocument {
    layout: LayoutState,
    page: PageInfo,
    range: Range<usize>,
    item_count: usize,
    cards: Vec<CardElement>,
    math: bool,
}

impl GridDocument {
    /// Layout the page was painted with.
    pub fn layout(&self) -> &LayoutState {
        &self.layout
    }

    pub fn page(&self) -> PageInfo {
        self.page
    }

    /// Item indices on this page.
    pub fn visible_range(&self) -> Range<usize> {
        self.range.clone()
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn cards(&self) -> &[CardElement] {
        &self.cards
    }

    /// Card at a position on the page.
    pub fn card_mut(&mut self, slot: usize) -> Option<&mut CardElement> {
        self.cards.get_mut(slot)
    }

    /// Cards grouped into grid rows.
    pub fn rows(&self) -> impl Iterator<Item = &[CardElement]> {
        self.cards.chunks(self.layout.columns.max(1) as usize)
    }

    pub fn flip_all(&self) -> bool {
        self.layout.flip_all
    }

    /// Switch the global flip mode without repainting.
    pub fn set_flip_all(&mut self, flip_all: bool) {
        self.layout.flip_all = flip_all;
    }

    pub fn needs_math(&self) -> bool {
        self.math
    }

    pub fn mark_math(&mut self) {
        self.math = true;
    }
}

/// Paints pages and runs the typesetting pass.
pub struct GridRenderer {
    typesetter: Box<dyn Typesetter>,
}

impl Default for GridRenderer {
    fn default() -> Self {
        Self::new(NoTypesetting)
    }
}

impl std::fmt::Debug for GridRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridRenderer").finish_non_exhaustive()
    }
}

impl GridRenderer {
    pub fn new(typesetter: impl Typesetter + 'static) -> Self {
        Self {
            typesetter: Box::new(typesetter),
        }
    }

    /// Paint the current page.
    ///
    /// `pagination` must already reflect `layout` and the store size.
    pub fn render(
        &self,
        store: &CardStore,
        layout: &LayoutState,
        pagination: &PaginationEngine,
    ) -> GridDocument {
        let range = pagination.visible_range();
        let cards = store
            .slice(range.clone())
            .iter()
            .enumerate()
            .map(|(offset, item)| CardElement {
                index: range.start + offset,
                front: item.front().to_string(),
                back_only: item.back_only().to_string(),
                flipped: false,
                hovered: false,
            })
            .collect();

        let mut document = GridDocument {
            layout: *layout,
            page: pagination.state(),
            range: range.clone(),
            item_count: store.len(),
            cards,
            math: false,
        };

        if let Err(error) = self.typesetter.typeset(&mut document) {
            warn!(%error, "typesetting failed, grid shown without math rendering");
        }

        debug!(
            page = document.page.page,
            pages = document.page.page_count,
            start = range.start,
            end = range.end,
            "rendered grid"
        );
        document
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CardItem;
    use crate::error::TypesetError;

    fn store(count: usize) -> CardStore {
        CardStore::from_items(
            (0..count)
                .map(|i| CardItem::new(format!("Q{i}"), format!("Q{i}<hr>A{i}")))
                .collect(),
        )
    }

    #[test]
    fn paints_only_the_visible_window() {
        let store = store(10);
        let layout = LayoutState::default();
        let mut pagination = PaginationEngine::new(store.len(), layout.page_size());
        pagination.navigate(1);

        let doc = GridRenderer::default().render(&store, &layout, &pagination);
        assert_eq!(doc.visible_range(), 8..10);
        assert_eq!(doc.cards().len(), 2);
        assert_eq!(doc.cards()[0].index(), 8);
        assert_eq!(doc.cards()[0].front(), "Q8");
        assert_eq!(doc.cards()[1].back_only(), "A9");
    }

    #[test]
    fn empty_store_paints_empty_grid() {
        let store = CardStore::default();
        let layout = LayoutState::default();
        let pagination = PaginationEngine::new(0, layout.page_size());
        let doc = GridRenderer::default().render(&store, &layout, &pagination);
        assert!(doc.cards().is_empty());
        assert_eq!(doc.page(), PageInfo::default());
    }

    #[test]
    fn flip_precedence() {
        let mut card = CardElement {
            index: 0,
            front: "F".into(),
            back_only: "B".into(),
            flipped: false,
            hovered: false,
        };
        assert_eq!(card.visible_face(false), Face::Front);
        assert_eq!(card.visible_face(true), Face::Back);

        card.set_hovered(true);
        assert_eq!(card.visible_markup(false), "B");
        card.set_hovered(false);

        card.toggle();
        assert_eq!(card.visible_face(false), Face::Back);
        // flip-all on top of a click-flip still shows the back
        assert_eq!(card.visible_face(true), Face::Back);
        card.toggle();
        assert_eq!(card.visible_face(false), Face::Front);
    }

    #[test]
    fn rerender_resets_click_state() {
        let store = store(3);
        let layout = LayoutState::default();
        let pagination = PaginationEngine::new(store.len(), layout.page_size());
        let renderer = GridRenderer::default();

        let mut doc = renderer.render(&store, &layout, &pagination);
        doc.card_mut(1).unwrap().toggle();
        assert!(doc.cards()[1].is_flipped());

        let doc = renderer.render(&store, &layout, &pagination);
        assert!(doc.cards().iter().all(|card| !card.is_flipped()));
    }

    #[test]
    fn rows_follow_column_count() {
        let store = store(7);
        let layout = LayoutState {
            columns: 3,
            rows: 3,
            ..LayoutState::default()
        };
        let pagination = PaginationEngine::new(store.len(), layout.page_size());
        let doc = GridRenderer::default().render(&store, &layout, &pagination);
        let shape: Vec<usize> = doc.rows().map(<[CardElement]>::len).collect();
        assert_eq!(shape, vec![3, 3, 1]);
    }

    struct FailingTypesetter;

    impl Typesetter for FailingTypesetter {
        fn typeset(&self, _document: &mut GridDocument) -> Result<(), TypesetError> {
            Err(TypesetError::Unbalanced {
                index: 0,
                delimiter: "\\(",
            })
        }
    }

    #[test]
    fn typesetting_failure_keeps_the_grid() {
        let store = store(2);
        let layout = LayoutState::default();
        let pagination = PaginationEngine::new(store.len(), layout.page_size());
        let doc = GridRenderer::new(FailingTypesetter).render(&store, &layout, &pagination);
        assert_eq!(doc.cards().len(), 2);
    }
}
