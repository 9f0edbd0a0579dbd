//! Native render surface view.
//!
//! Draws the latest pulled frame. Cards show their visible face as plain
//! text; HTML and TeX are left to the browser page.

use cardgrid_core::markup::to_plain_text;
use cardgrid_core::{CardElement, GridDocument, LayoutState, SurfaceFrame};
use iced::widget::{column, container, mouse_area, row, scrollable, text};
use iced::{Element, Length, Theme};

use crate::message::{GridMessage, Message};
use crate::state::AppState;
use crate::theme::{SPACING_LG, SPACING_MD, SPACING_SM, card_style};

pub fn view_surface(state: &AppState) -> Element<'_, Message> {
    let content: Element<'_, Message> = match &state.frame {
        SurfaceFrame::Blank => text("").into(),
        // Same spacing as the HTML message page.
        SurfaceFrame::Message(message) => container(text(message).size(18))
            .padding(SPACING_MD)
            .into(),
        SurfaceFrame::Grid(document) => view_grid(document),
    };

    scrollable(container(content).padding(SPACING_LG).width(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_grid(document: &GridDocument) -> Element<'_, Message> {
    let layout = *document.layout();
    let per_row = layout.columns as usize;
    let flip_all = document.flip_all();

    let mut rows = column![].spacing(SPACING_MD);
    for (r, cards) in document.rows().enumerate() {
        let mut cells = row![].spacing(SPACING_MD);
        for (c, card) in cards.iter().enumerate() {
            cells = cells.push(view_card(r * per_row + c, card, layout, flip_all));
        }
        rows = rows.push(cells);
    }
    rows.into()
}

fn view_card(
    slot: usize,
    card: &CardElement,
    layout: LayoutState,
    flip_all: bool,
) -> Element<'_, Message> {
    let width = layout.card_size_px as f32;
    let height = layout.card_height_px() as f32;
    let face = card.visible_face(flip_all);
    let body = text(to_plain_text(card.visible_markup(flip_all))).size(layout.font_size_px as f32);

    let face_box = container(body)
        .padding(SPACING_SM)
        .center_x(Length::Fixed(width))
        .center_y(Length::Fixed(height))
        .clip(true)
        .style(move |theme: &Theme| card_style(theme, face));

    mouse_area(face_box)
        .on_press(Message::Grid(GridMessage::CardPressed(slot)))
        .on_enter(Message::Grid(GridMessage::CardHovered {
            slot,
            entered: true,
        }))
        .on_exit(Message::Grid(GridMessage::CardHovered {
            slot,
            entered: false,
        }))
        .into()
}
