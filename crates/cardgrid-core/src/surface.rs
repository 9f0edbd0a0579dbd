//! The render surface: owner of layout, pagination and the painted grid.
//!
//! A surface is driven exclusively through [`SurfaceCommand`]s, one at a
//! time, so its state never needs a lock. The control side reaches it through
//! [`crate::bridge::ControlBridge`].

use tracing::{debug, info};

use crate::grid::{GridDocument, GridRenderer};
use crate::layout::{Layout, LayoutState, LayoutUpdate};
use crate::pagination::{PageInfo, PaginationEngine};
use crate::store::CardStore;

/// A request processed by the render surface.
#[derive(Debug, Clone)]
pub enum SurfaceCommand {
    /// Replace the cards and paint page 1.
    Load(CardStore),
    /// Show an informational message instead of a grid.
    ShowMessage(String),
    /// Apply a partial layout update.
    SetLayout(LayoutUpdate),
    /// Re-derive pagination from the current layout and repaint.
    Relayout,
    /// The viewport changed size.
    Resize,
    Navigate(i64),
    GoToPage(i64),
    /// Switch flip-all without repainting.
    SetFlipAll(bool),
    /// Click-toggle the card at a page slot.
    ToggleCard(usize),
    Hover { slot: usize, entered: bool },
}

/// Snapshot of what the surface is currently showing.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceFrame {
    /// Nothing loaded yet.
    Blank,
    Message(String),
    Grid(GridDocument),
}

#[derive(Debug)]
enum Content {
    Blank,
    Message(String),
    Grid {
        store: CardStore,
        pagination: PaginationEngine,
        document: GridDocument,
    },
}

#[derive(Debug)]
pub struct RenderSurface {
    layout: Layout,
    renderer: GridRenderer,
    content: Content,
}

impl Default for RenderSurface {
    fn default() -> Self {
        Self::new(LayoutState::default(), GridRenderer::default())
    }
}

impl RenderSurface {
    pub fn new(layout: LayoutState, renderer: GridRenderer) -> Self {
        Self {
            layout: Layout::new(layout),
            renderer,
            content: Content::Blank,
        }
    }

    /// The authoritative layout.
    pub fn layout(&self) -> LayoutState {
        self.layout.current()
    }

    /// Pagination state, or `None` while no grid is loaded.
    pub fn page_info(&self) -> Option<PageInfo> {
        match &self.content {
            Content::Grid { pagination, .. } => Some(pagination.state()),
            Content::Blank | Content::Message(_) => None,
        }
    }

    pub fn frame(&self) -> SurfaceFrame {
        match &self.content {
            Content::Blank => SurfaceFrame::Blank,
            Content::Message(text) => SurfaceFrame::Message(text.clone()),
            Content::Grid { document, .. } => SurfaceFrame::Grid(document.clone()),
        }
    }

    pub fn handle(&mut self, command: SurfaceCommand) {
        if !matches!(command, SurfaceCommand::Load(_)) {
            debug!(?command, "surface command");
        }
        match command {
            SurfaceCommand::Load(store) => self.load(store),
            SurfaceCommand::ShowMessage(text) => {
                info!(%text, "showing message");
                self.content = Content::Message(text);
            }
            SurfaceCommand::SetLayout(update) => {
                let change = self.layout.update(update);
                if change.page_size || change.presentation {
                    self.relayout();
                } else if change.flip_all {
                    self.set_flip_all(self.layout.current().flip_all);
                }
            }
            SurfaceCommand::Relayout | SurfaceCommand::Resize => self.relayout(),
            SurfaceCommand::Navigate(delta) => {
                self.repaint_with(|pagination| pagination.navigate(delta));
            }
            SurfaceCommand::GoToPage(target) => {
                self.repaint_with(|pagination| pagination.go_to(target));
            }
            SurfaceCommand::SetFlipAll(flip_all) => {
                self.layout.update(LayoutUpdate::default().flip_all(flip_all));
                self.set_flip_all(flip_all);
            }
            SurfaceCommand::ToggleCard(slot) => {
                if let Some(card) = self.card_mut(slot) {
                    card.toggle();
                }
            }
            SurfaceCommand::Hover { slot, entered } => {
                if let Some(card) = self.card_mut(slot) {
                    card.set_hovered(entered);
                }
            }
        }
    }

    fn load(&mut self, store: CardStore) {
        let layout = self.layout.current();
        let pagination = PaginationEngine::new(store.len(), layout.page_size());
        let document = self.renderer.render(&store, &layout, &pagination);
        info!(cards = store.len(), pages = pagination.state().page_count, "loaded cards");
        self.content = Content::Grid {
            store,
            pagination,
            document,
        };
    }

    fn relayout(&mut self) {
        let page_size = self.layout.current().page_size();
        self.repaint_with(|pagination| pagination.set_page_size(page_size));
    }

    /// Mutate pagination, recompute against the store and repaint.
    fn repaint_with(&mut self, step: impl FnOnce(&mut PaginationEngine)) {
        let layout = self.layout.current();
        if let Content::Grid {
            store,
            pagination,
            document,
        } = &mut self.content
        {
            step(pagination);
            pagination.recompute(store.len());
            *document = self.renderer.render(store, &layout, pagination);
        }
    }

    fn set_flip_all(&mut self, flip_all: bool) {
        if let Content::Grid { document, .. } = &mut self.content {
            document.set_flip_all(flip_all);
        }
    }

    fn card_mut(&mut self, slot: usize) -> Option<&mut crate::grid::CardElement> {
        match &mut self.content {
            Content::Grid { document, .. } => document.card_mut(slot),
            Content::Blank | Content::Message(_) => None,
        }
    }
}
