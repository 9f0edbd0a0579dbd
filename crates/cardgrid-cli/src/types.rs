use std::ops::Range;
use std::path::PathBuf;

use cardgrid_core::{LayoutState, LayoutUpdate, PageInfo};

/// Everything `cardgrid render` needs, independent of the argument parser.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub collection: PathBuf,
    /// Deck to select; falls back to the collection's configured deck.
    pub deck: Option<String>,
    pub layout: LayoutUpdate,
    pub page: Option<i64>,
    pub limit: Option<usize>,
    pub output: PathBuf,
    pub math: bool,
}

#[derive(Debug, Clone)]
pub struct RenderResult {
    pub output: PathBuf,
    pub deck: Option<String>,
    pub outcome: RenderOutcome,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderOutcome {
    /// A page of the grid was written.
    Grid(GridSummary),
    /// Nothing to preview; the message page was written instead.
    Message(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridSummary {
    pub cards: usize,
    pub page: PageInfo,
    pub visible: Range<usize>,
    pub layout: LayoutState,
    pub math: bool,
}
