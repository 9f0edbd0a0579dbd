//! Open the current page in the system browser.
//!
//! The native view shows plain text; the browser gets the full HTML page with
//! CSS flips and MathJax.

use std::path::{Path, PathBuf};

use cardgrid_core::PreviewError;
use cardgrid_core::SurfaceFrame;
use cardgrid_core::html::{message_page, render_page};
use tracing::info;

use crate::error::GuiError;

/// File name of the page written to the temp directory.
pub const PAGE_FILE: &str = "cards-grid-preview.html";

/// HTML document for a frame. A blank surface reads as "nothing selected".
pub fn page_html(frame: &SurfaceFrame) -> String {
    match frame {
        SurfaceFrame::Grid(document) => render_page(document),
        SurfaceFrame::Message(text) => message_page(text),
        SurfaceFrame::Blank => message_page(&PreviewError::NoCollection.message()),
    }
}

pub fn write_page(frame: &SurfaceFrame, path: &Path) -> Result<(), GuiError> {
    std::fs::write(path, page_html(frame)).map_err(|e| GuiError::Browser {
        reason: format!("{}: {e}", path.display()),
    })
}

/// Write `frame` to the temp directory and open it.
pub async fn open_in_browser(frame: SurfaceFrame) -> Result<PathBuf, String> {
    tokio::task::spawn_blocking(move || -> Result<PathBuf, GuiError> {
        let path = std::env::temp_dir().join(PAGE_FILE);
        write_page(&frame, &path)?;
        open::that(&path).map_err(|e| GuiError::Browser {
            reason: e.to_string(),
        })?;
        info!(path = %path.display(), "opened page in browser");
        Ok(path)
    })
    .await
    .map_err(|e| GuiError::task(&e).to_string())?
    .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_message_frame_page() {
        let html = page_html(&SurfaceFrame::Message("This deck has no cards to preview.".into()));
        assert_eq!(
            html,
            "<h3 style='margin:1rem'>This deck has no cards to preview.</h3>"
        );
    }

    #[test]
    fn test_blank_frame_page() {
        assert_eq!(
            page_html(&SurfaceFrame::Blank),
            "<h3 style='margin:1rem'>No collection or no deck selected.</h3>"
        );
    }

    #[test]
    fn test_write_page() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(PAGE_FILE);
        write_page(&SurfaceFrame::Message("hi".into()), &path).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("hi"));
    }

    #[test]
    fn test_write_page_to_missing_dir_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join(PAGE_FILE);
        let err = write_page(&SurfaceFrame::Blank, &path).unwrap_err();
        assert!(matches!(err, GuiError::Browser { .. }));
    }
}
