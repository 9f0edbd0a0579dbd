//! Main application module for Cards Grid Preview.
//!
//! Elm architecture: State → Message → Update → View. The render surface runs
//! on its own thread behind a [`ControlBridge`]; the application only pushes
//! commands and pulls snapshots.

use cardgrid_core::{
    ControlBridge, GridRenderer, LayoutState, MathJax, PreviewError, RenderSurface,
};
use iced::widget::column;
use iced::{Element, Subscription, Task, Theme, keyboard, window};
use tracing::{error, info, warn};

use crate::handler::keyboard::shortcut;
use crate::handler::{
    ControlHandler, GridHandler, MessageHandler, refresh, save_settings, settled_sync,
};
use crate::message::Message;
use crate::service::cards::LoadedDeck;
use crate::settings::Settings;
use crate::state::AppState;
use crate::theme::app_theme;
use crate::view::{view_surface, view_toolbar};

pub struct App {
    pub state: AppState,
}

impl App {
    /// Create the application, start the render surface and open the last
    /// collection when configured to.
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        let surface = RenderSurface::new(LayoutState::default(), GridRenderer::new(MathJax));
        let bridge = ControlBridge::spawn_dedicated(surface).unwrap_or_else(|e| {
            error!(error = %e, "could not start the render surface");
            ControlBridge::disconnected()
        });

        let mut state = AppState::new(settings, bridge);
        if let Some(path) = state.settings.startup_collection() {
            info!(path = %path.display(), "reopening last collection");
            state.collection = Some(path.to_path_buf());
            state.deck = state.settings.last_deck.clone();
        }
        let mut app = Self { state };
        let task = refresh(&mut app.state);
        (app, task)
    }

    pub fn title(&self) -> String {
        match &self.state.deck {
            Some(deck) => format!("Cards Grid Preview - {deck}"),
            None => "Cards Grid Preview".to_string(),
        }
    }

    pub fn theme(&self) -> Theme {
        app_theme()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Control(msg) => ControlHandler.handle(&mut self.state, msg),
            Message::Grid(msg) => GridHandler.handle(&mut self.state, msg),
            Message::KeyPressed(key, modifiers) => match shortcut(&key, modifiers) {
                Some(msg) => ControlHandler.handle(&mut self.state, msg),
                None => Task::none(),
            },
            Message::WindowResized => {
                self.state.bridge.resize();
                settled_sync(&self.state)
            }
            Message::CollectionPicked(Some(path)) => {
                self.state.settings.remember_collection(&path);
                save_settings(&self.state);
                self.state.deck = self.state.settings.last_deck.clone();
                self.state.collection = Some(path);
                refresh(&mut self.state)
            }
            Message::CollectionPicked(None) => Task::none(),
            Message::CardsLoaded(result) => self.handle_cards_loaded(result),
            Message::Synced(snapshot) => {
                self.state.apply_snapshot(snapshot);
                Task::none()
            }
            Message::BrowserOpened(result) => {
                self.state.status = result.err();
                Task::none()
            }
            Message::Noop => Task::none(),
        }
    }

    fn handle_cards_loaded(&mut self, result: Result<LoadedDeck, String>) -> Task<Message> {
        let state = &mut self.state;
        state.loading = false;
        match result {
            Ok(loaded) => {
                state.status = None;
                state.decks = loaded.decks;
                state.deck = loaded.deck;
                match loaded.cards {
                    Ok(store) => state.bridge.load(store),
                    Err(message) => state.bridge.show_message(message),
                }
            }
            Err(reason) => {
                warn!(%reason, "card load failed");
                state.status = Some(reason);
                state.decks.clear();
                state.deck = None;
                state.bridge.show_message(PreviewError::NoCollection.message());
            }
        }
        settled_sync(state)
    }

    pub fn view(&self) -> Element<'_, Message> {
        column![view_toolbar(&self.state), view_surface(&self.state)].into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([keyboard_subscription(), resize_subscription()])
    }
}

/// Key presses not captured by a widget.
fn keyboard_subscription() -> Subscription<Message> {
    keyboard::listen().map(|event| match event {
        keyboard::Event::KeyPressed { key, modifiers, .. } => Message::KeyPressed(key, modifiers),
        _ => Message::Noop,
    })
}

fn resize_subscription() -> Subscription<Message> {
    window::resize_events().map(|_| Message::WindowResized)
}
