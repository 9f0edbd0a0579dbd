//! Paginated flashcard grid engine.
//!
//! This crate turns a host's cards into a paginated, resizable grid where each
//! card reveals its back face on hover, on click, or globally through
//! flip-all.
//!
//! # Features
//!
//! - **Card store**: immutable `{front, back, back_only}` items built from host cards
//! - **Layout state**: clamped layout knobs and the aspect slider mapping
//! - **Pagination engine**: page arithmetic that never leaves `1..=page_count`
//! - **Grid renderer**: paints the visible page and runs the typesetting pass
//! - **Render surface**: owns the state above and processes commands serially
//! - **Control bridge**: fire-and-forget pushes and settle-delayed pulls
//!
//! # Example
//!
//! ```ignore
//! use cardgrid_core::{CardStore, ControlBridge, LayoutUpdate, RenderSurface};
//!
//! let bridge = ControlBridge::spawn(RenderSurface::default());
//! bridge.load(CardStore::build(&host_cards));
//! bridge.apply_layout(LayoutUpdate::default().columns(3).rows(3));
//!
//! let info = bridge.settled_page_info().await;
//! ```

pub mod bridge;
mod card;
mod error;
pub mod grid;
pub mod host;
pub mod html;
pub mod layout;
pub mod markup;
pub mod pagination;
mod store;
pub mod surface;
pub mod typeset;

// === Error Types ===
pub use error::{PreviewError, RenderError, TypesetError};

// === Cards ===
pub use card::{CardItem, split_back_only};
pub use host::{HostCard, HostCollection, render_front_back};
pub use store::CardStore;

// === Layout & Pagination ===
pub use layout::{AspectLabel, Layout, LayoutChange, LayoutState, LayoutUpdate};
pub use pagination::{PageInfo, PaginationEngine};

// === Rendering ===
pub use grid::{CardElement, Face, GridDocument, GridRenderer};
pub use typeset::{MathJax, NoTypesetting, Typesetter};

// === Surface & Bridge ===
pub use bridge::{ControlBridge, SETTLE_DELAY};
pub use surface::{RenderSurface, SurfaceCommand, SurfaceFrame};
