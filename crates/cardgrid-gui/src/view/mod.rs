//! Views. Pure functions of [`crate::state::AppState`].

mod grid;
mod toolbar;

pub use grid::view_surface;
pub use toolbar::view_toolbar;
