//! Cards Grid Preview - Desktop GUI Application
//!
//! Pages through the current deck's cards in a resizable grid.

use cardgrid_gui::app::App;
use iced::Size;
use iced::window;

pub fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Starting Cards Grid Preview");

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .window(window::Settings {
            size: Size::new(1280.0, 860.0),
            min_size: Some(Size::new(800.0, 500.0)),
            ..Default::default()
        })
        .run()
}
