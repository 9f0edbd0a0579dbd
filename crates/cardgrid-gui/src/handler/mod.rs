//! Message handlers.
//!
//! Each handler implements [`MessageHandler`] for one message type and works
//! on the shared [`AppState`]. `App::update()` dispatches to them:
//!
//! ```ignore
//! match message {
//!     Message::Control(msg) => ControlHandler.handle(&mut self.state, msg),
//!     Message::Grid(msg) => GridHandler.handle(&mut self.state, msg),
//!     // ...
//! }
//! ```

mod control;
mod grid;
pub mod keyboard;

use iced::Task;

use crate::message::Message;
use crate::service::surface::{settled_snapshot, snapshot};
use crate::state::AppState;

pub use control::{ControlHandler, refresh, save_settings};
pub use grid::GridHandler;

/// Trait for handling one message type against the application state.
pub trait MessageHandler<M> {
    /// Handle a message, returning any follow-up task.
    fn handle(&self, state: &mut AppState, msg: M) -> Task<Message>;
}

/// Pull page info and frame once earlier pushes have settled.
pub fn settled_sync(state: &AppState) -> Task<Message> {
    Task::perform(settled_snapshot(state.bridge.clone()), Message::Synced)
}

/// Pull page info and frame right away.
pub fn immediate_sync(state: &AppState) -> Task<Message> {
    Task::perform(snapshot(state.bridge.clone()), Message::Synced)
}
