//! Background work, run through `Task::perform`.

pub mod browser;
pub mod cards;
pub mod surface;
