//! Pointer input on the surface view.

use iced::Task;

use super::{MessageHandler, immediate_sync};
use crate::message::{GridMessage, Message};
use crate::state::AppState;

/// Forwards clicks and hovers to the surface. The surface decides which face
/// shows, so the view only redraws from the pulled frame.
pub struct GridHandler;

impl MessageHandler<GridMessage> for GridHandler {
    fn handle(&self, state: &mut AppState, msg: GridMessage) -> Task<Message> {
        match msg {
            GridMessage::CardPressed(slot) => state.bridge.toggle_card(slot),
            GridMessage::CardHovered { slot, entered } => state.bridge.hover(slot, entered),
        }
        immediate_sync(state)
    }
}
