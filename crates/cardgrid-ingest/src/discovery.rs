//! Deck file discovery below a collection root.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// Separator between parent and child deck names.
pub const DECK_SEPARATOR: &str = "::";

/// Lists every CSV file below `root`, recursively.
///
/// Returns paths sorted by component, so the listing is stable.
pub fn list_deck_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    collect(root, &mut files)?;
    files.sort();
    Ok(files)
}

fn collect(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();

        if path.is_dir() {
            collect(&path, files)?;
            continue;
        }

        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if is_csv {
            files.push(path);
        }
    }
    Ok(())
}

/// Deck name for a deck file: its path relative to `root`, without the
/// extension, with directories joined by `::`.
pub fn deck_name(root: &Path, file: &Path) -> Option<String> {
    let relative = file.strip_prefix(root).ok()?.with_extension("");
    let parts: Vec<String> = relative
        .components()
        .map(|part| part.as_os_str().to_string_lossy().into_owned())
        .collect();
    if parts.is_empty() {
        return None;
    }
    Some(parts.join(DECK_SEPARATOR))
}

/// Whether `name` is `deck` itself or one of its children.
pub fn in_deck(name: &str, deck: &str) -> bool {
    name == deck
        || name
            .strip_prefix(deck)
            .is_some_and(|rest| rest.starts_with(DECK_SEPARATOR))
}
