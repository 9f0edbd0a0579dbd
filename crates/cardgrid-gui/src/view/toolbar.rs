//! The control panel: layout knobs, pager and collection actions.

use cardgrid_core::LayoutState;
use cardgrid_core::layout::{ASPECT_SLIDER, slider_from_aspect};
use iced::widget::{
    Space, button, column, container, pick_list, row, slider, text, text_input, toggler,
};
use iced::{Alignment, Element, Length, Theme};

use crate::message::{ControlMessage, Message};
use crate::state::{AppState, LayoutField};
use crate::theme::{SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS, error_color, toolbar_style};

pub fn view_toolbar(state: &AppState) -> Element<'_, Message> {
    let layout = state.layout();

    let knobs = row![
        number_field(state, LayoutField::Columns),
        number_field(state, LayoutField::Rows),
        number_field(state, LayoutField::CardSize),
        number_field(state, LayoutField::FontSize),
        aspect_field(&layout),
        toggler(layout.flip_all)
            .label("Flip all")
            .on_toggle(|on| Message::Control(ControlMessage::FlipAllToggled(on))),
        Space::new().width(Length::Fill),
        pager(state),
    ]
    .spacing(SPACING_LG)
    .align_y(Alignment::End);

    container(column![actions(state), knobs].spacing(SPACING_MD))
        .padding(SPACING_MD)
        .width(Length::Fill)
        .style(toolbar_style)
        .into()
}

/// Numeric input over the field's own text buffer. Enter applies the value
/// clamped to the field's range.
fn number_field(state: &AppState, field: LayoutField) -> Element<'_, Message> {
    let range = field.range();
    let input = text_input(&range.start().to_string(), state.field_input(field))
        .on_input(move |s| Message::Control(ControlMessage::FieldEdited(field, s)))
        .on_submit(Message::Control(ControlMessage::FieldSubmitted(field)))
        .padding(SPACING_XS * 1.5)
        .width(Length::Fixed(72.0));

    column![text(field.label()).size(12), input]
        .spacing(SPACING_XS)
        .into()
}

fn aspect_field<'a>(layout: &LayoutState) -> Element<'a, Message> {
    let position = slider_from_aspect(layout.aspect_ratio);
    column![
        text(format!("Aspect {:.2} ({})", layout.aspect_ratio, layout.aspect_label())).size(12),
        slider(ASPECT_SLIDER, position, |v| {
            Message::Control(ControlMessage::AspectChanged(v))
        })
        .width(Length::Fixed(180.0)),
    ]
    .spacing(SPACING_XS)
    .into()
}

fn pager(state: &AppState) -> Element<'_, Message> {
    let page = state.page;
    let previous = button(text("<"))
        .on_press_maybe(
            page.has_previous()
                .then_some(Message::Control(ControlMessage::PreviousPage)),
        )
        .padding([SPACING_XS, SPACING_SM]);
    let next = button(text(">"))
        .on_press_maybe(
            page.has_next()
                .then_some(Message::Control(ControlMessage::NextPage)),
        )
        .padding([SPACING_XS, SPACING_SM]);
    let field = text_input("1", &state.page_input)
        .on_input(|s| Message::Control(ControlMessage::PageInputChanged(s)))
        .on_submit(Message::Control(ControlMessage::PageSubmitted))
        .padding(SPACING_XS * 1.5)
        .width(Length::Fixed(56.0));

    row![
        previous,
        text("Page"),
        field,
        text(format!("of {}", page.page_count)),
        next,
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center)
    .into()
}

fn actions(state: &AppState) -> Element<'_, Message> {
    let deck_picker = pick_list(state.decks.as_slice(), state.deck.as_ref(), |deck| {
        Message::Control(ControlMessage::DeckSelected(deck))
    })
    .placeholder("Select a deck")
    .width(Length::Fixed(240.0));

    let refresh = button(text("Refresh"))
        .on_press_maybe((!state.loading).then_some(Message::Control(ControlMessage::Refresh)))
        .padding([SPACING_XS, SPACING_MD]);
    let open_collection = button(text("Open collection..."))
        .on_press(Message::Control(ControlMessage::OpenCollection))
        .padding([SPACING_XS, SPACING_MD]);
    let open_browser = button(text("Open in browser"))
        .on_press(Message::Control(ControlMessage::OpenInBrowser))
        .padding([SPACING_XS, SPACING_MD]);

    let status: Element<'_, Message> = if state.loading {
        text("Loading...").size(12).into()
    } else if let Some(error) = &state.status {
        text(error)
            .size(12)
            .style(|theme: &Theme| text::Style {
                color: Some(error_color(theme)),
            })
            .into()
    } else if let Some(path) = &state.collection {
        text(path.display().to_string()).size(12).into()
    } else {
        text("No collection open").size(12).into()
    };

    row![open_collection, deck_picker, refresh, open_browser, status]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center)
        .into()
}
