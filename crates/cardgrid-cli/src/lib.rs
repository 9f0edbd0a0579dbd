//! Library components of the `cardgrid` command-line tool.

pub mod logging;
pub mod render;
pub mod types;
