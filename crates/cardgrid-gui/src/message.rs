//! Message types for the Iced application.
//!
//! Every user action and every completed background task arrives at
//! `App::update()` as a [`Message`].

use std::path::PathBuf;

use iced::keyboard;

use crate::service::cards::LoadedDeck;
use crate::service::surface::SurfaceSnapshot;
use crate::state::LayoutField;

/// Root message enum.
#[derive(Debug, Clone)]
pub enum Message {
    /// Control panel input.
    Control(ControlMessage),

    /// Pointer input on the render surface view.
    Grid(GridMessage),

    /// Global keyboard shortcut.
    KeyPressed(keyboard::Key, keyboard::Modifiers),

    /// The main window changed size.
    WindowResized,

    /// Folder picker closed.
    CollectionPicked(Option<PathBuf>),

    /// Background card load finished.
    CardsLoaded(Result<LoadedDeck, String>),

    /// Page info and frame pulled from the surface.
    Synced(SurfaceSnapshot),

    /// The current page was handed to the browser.
    BrowserOpened(Result<PathBuf, String>),

    Noop,
}

/// Control panel messages. Each one becomes a push to the render surface.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlMessage {
    /// Numeric layout field edited. Pushed once the text is in range.
    FieldEdited(LayoutField, String),
    /// Numeric layout field confirmed with Enter.
    FieldSubmitted(LayoutField),
    /// Aspect slider position, 50 to 200.
    AspectChanged(u16),
    FlipAllToggled(bool),

    PreviousPage,
    NextPage,
    FirstPage,
    LastPage,
    /// Page field edited. Navigation waits for submit.
    PageInputChanged(String),
    PageSubmitted,

    DeckSelected(String),
    Refresh,
    OpenCollection,
    OpenInBrowser,
}

/// Pointer messages from a card on the current page, by page slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridMessage {
    CardPressed(usize),
    CardHovered { slot: usize, entered: bool },
}
