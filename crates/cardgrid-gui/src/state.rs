//! Application state.
//!
//! The render surface owns the authoritative layout, pagination and grid.
//! `AppState` keeps what the control panel needs to draw itself: its own copy
//! of the layout (clamped the same way the surface clamps it) and the last
//! page info and frame pulled over the bridge.

use std::ops::RangeInclusive;
use std::path::PathBuf;

use cardgrid_core::layout::{CARD_SIZE_PX, COLUMNS, FONT_SIZE_PX, ROWS};
use cardgrid_core::{ControlBridge, Layout, LayoutState, LayoutUpdate, PageInfo, SurfaceFrame};

use crate::service::surface::SurfaceSnapshot;
use crate::settings::Settings;

/// The numeric layout knobs edited as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutField {
    Columns,
    Rows,
    CardSize,
    FontSize,
}

impl LayoutField {
    pub const ALL: [LayoutField; 4] = [
        LayoutField::Columns,
        LayoutField::Rows,
        LayoutField::CardSize,
        LayoutField::FontSize,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LayoutField::Columns => "Columns",
            LayoutField::Rows => "Rows",
            LayoutField::CardSize => "Card size",
            LayoutField::FontSize => "Font size",
        }
    }

    pub fn range(self) -> RangeInclusive<u32> {
        match self {
            LayoutField::Columns => COLUMNS,
            LayoutField::Rows => ROWS,
            LayoutField::CardSize => CARD_SIZE_PX,
            LayoutField::FontSize => FONT_SIZE_PX,
        }
    }

    pub fn value(self, layout: &LayoutState) -> u32 {
        match self {
            LayoutField::Columns => layout.columns,
            LayoutField::Rows => layout.rows,
            LayoutField::CardSize => layout.card_size_px,
            LayoutField::FontSize => layout.font_size_px,
        }
    }

    pub fn update(self, value: i64) -> LayoutUpdate {
        let update = LayoutUpdate::default();
        match self {
            LayoutField::Columns => update.columns(value),
            LayoutField::Rows => update.rows(value),
            LayoutField::CardSize => update.card_size_px(value),
            LayoutField::FontSize => update.font_size_px(value),
        }
    }

    /// Whether `value` can be applied while the user is still typing.
    fn accepts(self, value: i64) -> bool {
        u32::try_from(value).is_ok_and(|value| self.range().contains(&value))
    }

    fn index(self) -> usize {
        self as usize
    }
}

pub struct AppState {
    pub settings: Settings,
    pub bridge: ControlBridge,
    /// Control panel copy of the layout.
    pub controls: Layout,
    /// Last pulled page info.
    pub page: PageInfo,
    /// Text of the editable page field.
    pub page_input: String,
    /// The page field holds typed text that has not been submitted.
    pub page_editing: bool,
    /// Text of the numeric layout fields, indexed by [`LayoutField`].
    field_inputs: [String; 4],
    /// Last pulled frame.
    pub frame: SurfaceFrame,
    pub collection: Option<PathBuf>,
    pub decks: Vec<String>,
    pub deck: Option<String>,
    pub loading: bool,
    /// Last error worth showing in the toolbar.
    pub status: Option<String>,
}

impl AppState {
    pub fn new(settings: Settings, bridge: ControlBridge) -> Self {
        let page = PageInfo::default();
        let controls = Layout::default();
        let layout = controls.current();
        Self {
            settings,
            bridge,
            controls,
            page,
            page_input: page.page.to_string(),
            page_editing: false,
            field_inputs: LayoutField::ALL.map(|field| field.value(&layout).to_string()),
            frame: SurfaceFrame::Blank,
            collection: None,
            decks: Vec::new(),
            deck: None,
            loading: false,
            status: None,
        }
    }

    pub fn layout(&self) -> LayoutState {
        self.controls.current()
    }

    /// Apply `update` to the control copy and push it when anything changed.
    /// A flip-all change on its own leaves the page and its per-card flips
    /// alone.
    ///
    /// Returns whether a push happened.
    pub fn push_layout(&mut self, update: LayoutUpdate) -> bool {
        let change = self.controls.update(update);
        if change.is_empty() {
            return false;
        }
        if change.page_size || change.presentation {
            self.bridge.apply_layout(update);
        } else {
            self.bridge.set_flip_all(self.controls.current().flip_all);
        }
        true
    }

    pub fn field_input(&self, field: LayoutField) -> &str {
        &self.field_inputs[field.index()]
    }

    /// Store typed text for `field`. The value is pushed as soon as the text
    /// is a number inside the field's range; partial input such as a first
    /// digit is kept as typed and not clamped.
    ///
    /// Returns whether a push happened.
    pub fn edit_field(&mut self, field: LayoutField, text: String) -> bool {
        let parsed = text.trim().parse::<i64>().ok();
        self.field_inputs[field.index()] = text;
        match parsed {
            Some(value) if field.accepts(value) => self.push_layout(field.update(value)),
            _ => false,
        }
    }

    /// Apply the typed text for `field`, clamped, and show the value that
    /// took effect. Text that is not a number restores the current value.
    ///
    /// Returns whether a push happened.
    pub fn submit_field(&mut self, field: LayoutField) -> bool {
        let pushed = match self.field_inputs[field.index()].trim().parse::<i64>() {
            Ok(value) => self.push_layout(field.update(value)),
            Err(_) => false,
        };
        self.field_inputs[field.index()] = field.value(&self.layout()).to_string();
        pushed
    }

    /// Store a pull result. The page field follows the page without
    /// navigating, unless it holds unsubmitted text and the page is unchanged.
    pub fn apply_snapshot(&mut self, snapshot: SurfaceSnapshot) {
        let page = snapshot.page.unwrap_or_default();
        if page != self.page || !self.page_editing {
            self.page_input = page.page.to_string();
            self.page_editing = false;
        }
        self.page = page;
        if let Some(frame) = snapshot.frame {
            self.frame = frame;
        }
    }

    /// Page typed in the page field, if it is a number.
    pub fn requested_page(&self) -> Option<i64> {
        self.page_input.trim().parse().ok()
    }

    pub fn has_grid(&self) -> bool {
        matches!(self.frame, SurfaceFrame::Grid(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(Settings::default(), ControlBridge::disconnected())
    }

    #[test]
    fn test_initial_state() {
        let state = state();
        assert_eq!(state.page, PageInfo { page: 1, page_count: 1 });
        assert_eq!(state.page_input, "1");
        assert_eq!(state.frame, SurfaceFrame::Blank);
        assert_eq!(state.layout(), LayoutState::default());
    }

    #[test]
    fn test_push_layout_clamps_and_skips_no_ops() {
        let mut state = state();
        assert!(state.push_layout(LayoutUpdate::default().columns(99)));
        assert_eq!(state.layout().columns, 10);
        assert!(!state.push_layout(LayoutUpdate::default().columns(10)));
        assert!(state.push_layout(LayoutUpdate::default().flip_all(true)));
        assert!(state.layout().flip_all);
    }

    #[test]
    fn test_partial_field_input_is_not_clamped() {
        let mut state = state();
        assert!(!state.edit_field(LayoutField::CardSize, "3".into()));
        assert_eq!(state.field_input(LayoutField::CardSize), "3");
        assert_eq!(state.layout().card_size_px, 270);

        assert!(!state.edit_field(LayoutField::CardSize, "30".into()));
        assert!(state.edit_field(LayoutField::CardSize, "300".into()));
        assert_eq!(state.layout().card_size_px, 300);
        assert_eq!(state.field_input(LayoutField::CardSize), "300");

        assert!(!state.edit_field(LayoutField::FontSize, "1".into()));
        assert!(state.edit_field(LayoutField::FontSize, "12".into()));
        assert_eq!(state.layout().font_size_px, 12);
    }

    #[test]
    fn test_field_can_be_emptied() {
        let mut state = state();
        assert!(!state.edit_field(LayoutField::Columns, String::new()));
        assert_eq!(state.field_input(LayoutField::Columns), "");
        assert_eq!(state.layout().columns, 4);
    }

    #[test]
    fn test_submit_field_clamps_or_restores() {
        let mut state = state();
        state.edit_field(LayoutField::CardSize, "5000".into());
        assert!(state.submit_field(LayoutField::CardSize));
        assert_eq!(state.layout().card_size_px, 600);
        assert_eq!(state.field_input(LayoutField::CardSize), "600");

        state.edit_field(LayoutField::Rows, "lots".into());
        assert!(!state.submit_field(LayoutField::Rows));
        assert_eq!(state.field_input(LayoutField::Rows), "2");
    }

    #[test]
    fn test_snapshot_keeps_unsubmitted_page_text() {
        let mut state = state();
        state.page = PageInfo { page: 2, page_count: 5 };
        state.page_input = "4".to_string();
        state.page_editing = true;

        state.apply_snapshot(SurfaceSnapshot {
            page: Some(PageInfo { page: 2, page_count: 5 }),
            frame: None,
        });
        assert_eq!(state.page_input, "4");

        state.apply_snapshot(SurfaceSnapshot {
            page: Some(PageInfo { page: 3, page_count: 5 }),
            frame: None,
        });
        assert_eq!(state.page_input, "3");
        assert!(!state.page_editing);
    }

    #[test]
    fn test_snapshot_updates_page_field() {
        let mut state = state();
        state.page_input = "7".to_string();
        state.apply_snapshot(SurfaceSnapshot {
            page: Some(PageInfo { page: 3, page_count: 3 }),
            frame: Some(SurfaceFrame::Message("x".into())),
        });
        assert_eq!(state.page_input, "3");
        assert_eq!(state.page.page_count, 3);
        assert_eq!(state.frame, SurfaceFrame::Message("x".into()));
    }

    #[test]
    fn test_snapshot_without_surface_keeps_frame() {
        let mut state = state();
        state.frame = SurfaceFrame::Message("kept".into());
        state.apply_snapshot(SurfaceSnapshot { page: None, frame: None });
        assert_eq!(state.frame, SurfaceFrame::Message("kept".into()));
        assert_eq!(state.page, PageInfo::default());
    }

    #[test]
    fn test_requested_page() {
        let mut state = state();
        state.page_input = " 12 ".to_string();
        assert_eq!(state.requested_page(), Some(12));
        state.page_input = "twelve".to_string();
        assert_eq!(state.requested_page(), None);
    }

    #[tokio::test]
    async fn test_flip_all_keeps_clicked_cards() {
        use cardgrid_core::{CardItem, CardStore, RenderSurface};

        let bridge = ControlBridge::spawn(RenderSurface::default());
        let mut state = AppState::new(Settings::default(), bridge.clone());
        bridge.load(CardStore::from_items(vec![
            CardItem::new("Q0", "A0"),
            CardItem::new("Q1", "A1"),
        ]));
        bridge.toggle_card(0);

        assert!(state.push_layout(LayoutUpdate::default().flip_all(true)));
        let Some(SurfaceFrame::Grid(document)) = bridge.frame().await else {
            panic!("expected a grid");
        };
        assert!(document.flip_all());
        assert!(document.cards()[0].is_flipped());

        assert!(state.push_layout(LayoutUpdate::default().columns(1)));
        let Some(SurfaceFrame::Grid(document)) = bridge.frame().await else {
            panic!("expected a grid");
        };
        assert!(!document.cards()[0].is_flipped());
        assert_eq!(document.layout().columns, 1);
    }
}
