//! Keyboard shortcuts.
//!
//! - Left / Page Up: previous page
//! - Right / Page Down: next page
//! - Home / End: first / last page
//! - Cmd/Ctrl+R: refresh
//! - Cmd/Ctrl+O: open collection

use iced::keyboard::key::Named;
use iced::keyboard::{Key, Modifiers};

use crate::message::ControlMessage;

/// The control message bound to a key press, if any.
pub fn shortcut(key: &Key, modifiers: Modifiers) -> Option<ControlMessage> {
    match key.as_ref() {
        Key::Character("r") if modifiers.command() => Some(ControlMessage::Refresh),
        Key::Character("o") if modifiers.command() => Some(ControlMessage::OpenCollection),
        Key::Named(Named::ArrowLeft | Named::PageUp) => Some(ControlMessage::PreviousPage),
        Key::Named(Named::ArrowRight | Named::PageDown) => Some(ControlMessage::NextPage),
        Key::Named(Named::Home) => Some(ControlMessage::FirstPage),
        Key::Named(Named::End) => Some(ControlMessage::LastPage),
        _ => None,
    }
}
