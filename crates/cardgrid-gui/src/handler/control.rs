//! Control panel message handler.
//!
//! Every control pushes to the render surface and then pulls the settled
//! page info and frame. Nothing here waits on the surface.

use cardgrid_core::layout::aspect_from_slider;
use cardgrid_core::{LayoutUpdate, PreviewError};
use iced::Task;
use tracing::warn;

use super::{MessageHandler, settled_sync};
use crate::message::{ControlMessage, Message};
use crate::service::browser::open_in_browser;
use crate::service::cards::{LoadRequest, load_cards};
use crate::state::AppState;

pub struct ControlHandler;

impl MessageHandler<ControlMessage> for ControlHandler {
    fn handle(&self, state: &mut AppState, msg: ControlMessage) -> Task<Message> {
        match msg {
            ControlMessage::FieldEdited(field, text) => {
                let pushed = state.edit_field(field, text);
                sync_if(state, pushed)
            }
            ControlMessage::FieldSubmitted(field) => {
                let pushed = state.submit_field(field);
                sync_if(state, pushed)
            }
            ControlMessage::AspectChanged(position) => layout_task(
                state,
                LayoutUpdate::default().aspect_ratio(aspect_from_slider(i64::from(position))),
            ),
            ControlMessage::FlipAllToggled(on) => {
                layout_task(state, LayoutUpdate::default().flip_all(on))
            }

            ControlMessage::PreviousPage => {
                state.page_editing = false;
                state.bridge.navigate(-1);
                settled_sync(state)
            }
            ControlMessage::NextPage => {
                state.page_editing = false;
                state.bridge.navigate(1);
                settled_sync(state)
            }
            ControlMessage::FirstPage => {
                state.page_editing = false;
                state.bridge.go_to_page(1);
                settled_sync(state)
            }
            ControlMessage::LastPage => {
                state.page_editing = false;
                // Clamped to the last page by the surface.
                state.bridge.go_to_page(i64::MAX);
                settled_sync(state)
            }
            ControlMessage::PageInputChanged(text) => {
                state.page_input = text;
                state.page_editing = true;
                Task::none()
            }
            ControlMessage::PageSubmitted => match state.requested_page() {
                Some(page) => {
                    state.page_editing = false;
                    state.bridge.go_to_page(page);
                    settled_sync(state)
                }
                None => {
                    state.page_editing = false;
                    state.page_input = state.page.page.to_string();
                    Task::none()
                }
            },

            ControlMessage::DeckSelected(deck) => {
                state.settings.last_deck = Some(deck.clone());
                state.deck = Some(deck);
                save_settings(state);
                refresh(state)
            }
            ControlMessage::Refresh => refresh(state),
            ControlMessage::OpenCollection => Task::perform(
                async {
                    rfd::AsyncFileDialog::new()
                        .set_title("Select Collection Folder")
                        .pick_folder()
                        .await
                        .map(|handle| handle.path().to_path_buf())
                },
                Message::CollectionPicked,
            ),
            ControlMessage::OpenInBrowser => {
                Task::perform(open_in_browser(state.frame.clone()), Message::BrowserOpened)
            }
        }
    }
}

fn layout_task(state: &mut AppState, update: LayoutUpdate) -> Task<Message> {
    let pushed = state.push_layout(update);
    sync_if(state, pushed)
}

fn sync_if(state: &AppState, pushed: bool) -> Task<Message> {
    if pushed {
        settled_sync(state)
    } else {
        Task::none()
    }
}

/// Reload the current deck from the open collection, or tell the surface
/// there is nothing to show.
pub fn refresh(state: &mut AppState) -> Task<Message> {
    let Some(collection) = state.collection.clone() else {
        state.bridge.show_message(PreviewError::NoCollection.message());
        return settled_sync(state);
    };
    state.loading = true;
    let request = LoadRequest {
        collection,
        deck: state.deck.clone(),
        limit: state.settings.card_limit,
    };
    Task::perform(load_cards(request), Message::CardsLoaded)
}

pub fn save_settings(state: &AppState) {
    if let Err(error) = state.settings.save() {
        warn!(%error, "could not save settings");
    }
}
