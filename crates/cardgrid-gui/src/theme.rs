//! Spacing scale and widget styles.

use cardgrid_core::Face;
use iced::widget::container;
use iced::{Border, Color, Shadow, Theme, Vector};

// =============================================================================
// SPACING SCALE
// =============================================================================

/// Extra small spacing - tight gaps between related elements
pub const SPACING_XS: f32 = 4.0;

/// Small spacing - small gaps, control padding
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing - default padding, grid gaps
pub const SPACING_MD: f32 = 16.0;

/// Large spacing - section padding
pub const SPACING_LG: f32 = 24.0;

// =============================================================================
// BORDER RADIUS
// =============================================================================

/// Card radius, matching the HTML page
pub const BORDER_RADIUS_CARD: f32 = 12.0;

// =============================================================================
// STYLES
// =============================================================================

pub fn app_theme() -> Theme {
    Theme::Light
}

/// Toolbar background.
pub fn toolbar_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// A card showing `face`. The back is tinted so a flip reads at a glance.
pub fn card_style(theme: &Theme, face: Face) -> container::Style {
    let palette = theme.extended_palette();
    let background = match face {
        Face::Front => palette.background.base.color,
        Face::Back => palette.primary.weak.color,
    };
    let text_color = match face {
        Face::Front => palette.background.base.text,
        Face::Back => palette.primary.weak.text,
    };
    container::Style {
        background: Some(background.into()),
        text_color: Some(text_color),
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: BORDER_RADIUS_CARD.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.08),
            offset: Vector::new(0.0, 1.0),
            blur_radius: 3.0,
        },
        ..Default::default()
    }
}

/// Inline error text in the toolbar.
pub fn error_color(theme: &Theme) -> Color {
    theme.extended_palette().danger.base.color
}
