//! GUI-specific error types.
//!
//! Errors reach the view as strings inside messages, so every variant carries
//! a user-readable description.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuiError {
    /// The collection folder could not be read.
    #[error("Failed to open collection {path}: {reason}")]
    CollectionOpen { path: PathBuf, reason: String },

    /// Settings could not be written.
    #[error("Failed to save settings to {path}: {reason}")]
    SettingsSave { path: PathBuf, reason: String },

    /// The page could not be written or handed to the browser.
    #[error("Failed to open page in browser: {reason}")]
    Browser { reason: String },

    /// A background task panicked or was cancelled.
    #[error("Background task failed: {reason}")]
    Task { reason: String },
}

impl GuiError {
    pub fn task(error: &tokio::task::JoinError) -> Self {
        Self::Task {
            reason: error.to_string(),
        }
    }
}
