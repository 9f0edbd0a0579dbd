//! Cards Grid Preview - GUI Library
//!
//! Desktop front end for the card grid engine, built with Iced 0.14.0 using
//! the Elm architecture. The toolbar is the control panel; the area below it
//! draws what the render surface reports.

pub mod app;
pub mod error;
pub mod handler;
pub mod message;
pub mod service;
pub mod settings;
pub mod state;
pub mod theme;
pub mod view;
