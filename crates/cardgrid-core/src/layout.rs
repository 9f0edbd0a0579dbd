//! Layout knobs shared by the pagination engine and the grid renderer.
//!
//! The layout is mutated only through [`Layout::update`]. Values arriving from
//! the control panel are clamped into range here, so callers never validate.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

pub const COLUMNS: RangeInclusive<u32> = 1..=10;
pub const ROWS: RangeInclusive<u32> = 1..=20;
pub const CARD_SIZE_PX: RangeInclusive<u32> = 120..=600;
pub const FONT_SIZE_PX: RangeInclusive<u32> = 10..=28;
pub const ASPECT_RATIO: RangeInclusive<f64> = 0.5..=2.0;

/// Integer range of the aspect slider; the ratio is the value divided by 100.
pub const ASPECT_SLIDER: RangeInclusive<u16> = 50..=200;

/// Snapshot of every layout knob.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutState {
    pub columns: u32,
    pub rows: u32,
    pub card_size_px: u32,
    pub font_size_px: u32,
    pub aspect_ratio: f64,
    pub flip_all: bool,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            columns: 4,
            rows: 2,
            card_size_px: 270,
            font_size_px: 14,
            aspect_ratio: 0.75,
            flip_all: false,
        }
    }
}

impl LayoutState {
    /// Cards per page.
    pub fn page_size(&self) -> usize {
        (self.rows * self.columns) as usize
    }

    /// Card height derived from width and aspect ratio.
    pub fn card_height_px(&self) -> f64 {
        f64::from(self.card_size_px) / self.aspect_ratio
    }

    pub fn aspect_label(&self) -> AspectLabel {
        AspectLabel::for_ratio(self.aspect_ratio)
    }

    /// Named style variables, in the order the page declares them.
    pub fn style_variables(&self) -> [(&'static str, String); 5] {
        [
            ("--cols", self.columns.to_string()),
            ("--rows", self.rows.to_string()),
            ("--card-size", format!("{}px", self.card_size_px)),
            ("--card-font-size", format!("{}px", self.font_size_px)),
            ("--card-aspect", self.aspect_ratio.to_string()),
        ]
    }
}

/// Partial layout edit. Unset fields are left alone.
///
/// Numeric fields are wide and signed so that out-of-range input survives
/// until it is clamped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutUpdate {
    pub columns: Option<i64>,
    pub rows: Option<i64>,
    pub card_size_px: Option<i64>,
    pub font_size_px: Option<i64>,
    pub aspect_ratio: Option<f64>,
    pub flip_all: Option<bool>,
}

impl LayoutUpdate {
    /// An update that sets every knob to `state`.
    pub fn from_state(state: &LayoutState) -> Self {
        Self {
            columns: Some(i64::from(state.columns)),
            rows: Some(i64::from(state.rows)),
            card_size_px: Some(i64::from(state.card_size_px)),
            font_size_px: Some(i64::from(state.font_size_px)),
            aspect_ratio: Some(state.aspect_ratio),
            flip_all: Some(state.flip_all),
        }
    }

    #[must_use]
    pub fn columns(mut self, value: i64) -> Self {
        self.columns = Some(value);
        self
    }

    #[must_use]
    pub fn rows(mut self, value: i64) -> Self {
        self.rows = Some(value);
        self
    }

    #[must_use]
    pub fn card_size_px(mut self, value: i64) -> Self {
        self.card_size_px = Some(value);
        self
    }

    #[must_use]
    pub fn font_size_px(mut self, value: i64) -> Self {
        self.font_size_px = Some(value);
        self
    }

    #[must_use]
    pub fn aspect_ratio(mut self, value: f64) -> Self {
        self.aspect_ratio = Some(value);
        self
    }

    #[must_use]
    pub fn flip_all(mut self, value: bool) -> Self {
        self.flip_all = Some(value);
        self
    }
}

/// What an update actually changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutChange {
    /// Rows or columns changed, so pagination must be recomputed.
    pub page_size: bool,
    /// Card size, font size or aspect ratio changed.
    pub presentation: bool,
    pub flip_all: bool,
}

impl LayoutChange {
    pub fn is_empty(&self) -> bool {
        !(self.page_size || self.presentation || self.flip_all)
    }
}

/// Owner of the authoritative layout state.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    state: LayoutState,
}

impl Layout {
    pub fn new(state: LayoutState) -> Self {
        let mut layout = Self::default();
        layout.update(LayoutUpdate::from_state(&state));
        layout
    }

    /// Current snapshot.
    pub fn current(&self) -> LayoutState {
        self.state
    }

    /// Apply a partial update, clamping numbers into range.
    ///
    /// A non-finite aspect ratio is rejected and leaves the ratio unchanged.
    pub fn update(&mut self, update: LayoutUpdate) -> LayoutChange {
        let before = self.state;
        let state = &mut self.state;

        if let Some(value) = update.columns {
            state.columns = clamp_u32(value, &COLUMNS);
        }
        if let Some(value) = update.rows {
            state.rows = clamp_u32(value, &ROWS);
        }
        if let Some(value) = update.card_size_px {
            state.card_size_px = clamp_u32(value, &CARD_SIZE_PX);
        }
        if let Some(value) = update.font_size_px {
            state.font_size_px = clamp_u32(value, &FONT_SIZE_PX);
        }
        if let Some(value) = update.aspect_ratio.filter(|ratio| ratio.is_finite()) {
            state.aspect_ratio = value.clamp(*ASPECT_RATIO.start(), *ASPECT_RATIO.end());
        }
        if let Some(value) = update.flip_all {
            state.flip_all = value;
        }

        LayoutChange {
            page_size: before.page_size() != self.state.page_size()
                || before.columns != self.state.columns,
            presentation: before.card_size_px != self.state.card_size_px
                || before.font_size_px != self.state.font_size_px
                || before.aspect_ratio != self.state.aspect_ratio,
            flip_all: before.flip_all != self.state.flip_all,
        }
    }
}

fn clamp_u32(value: i64, range: &RangeInclusive<u32>) -> u32 {
    let clamped = value.clamp(i64::from(*range.start()), i64::from(*range.end()));
    u32::try_from(clamped).unwrap_or(*range.start())
}

/// Ratio for an aspect slider position.
pub fn aspect_from_slider(value: i64) -> f64 {
    let value = value.clamp(
        i64::from(*ASPECT_SLIDER.start()),
        i64::from(*ASPECT_SLIDER.end()),
    );
    value as f64 / 100.0
}

/// Slider position for a ratio.
pub fn slider_from_aspect(ratio: f64) -> u16 {
    if !ratio.is_finite() {
        return slider_from_aspect(LayoutState::default().aspect_ratio);
    }
    let position = (ratio * 100.0).round();
    position.clamp(
        f64::from(*ASPECT_SLIDER.start()),
        f64::from(*ASPECT_SLIDER.end()),
    ) as u16
}

/// Human label for an aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectLabel {
    Tall,
    ThreeByFour,
    Square,
    FourByThree,
    Wide,
}

impl AspectLabel {
    pub fn for_ratio(ratio: f64) -> Self {
        if ratio < 0.7 {
            Self::Tall
        } else if ratio < 0.9 {
            Self::ThreeByFour
        } else if ratio < 1.1 {
            Self::Square
        } else if ratio < 1.4 {
            Self::FourByThree
        } else {
            Self::Wide
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tall => "tall",
            Self::ThreeByFour => "~3:4",
            Self::Square => "~1:1",
            Self::FourByThree => "~4:3",
            Self::Wide => "wide",
        }
    }
}

impl fmt::Display for AspectLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
