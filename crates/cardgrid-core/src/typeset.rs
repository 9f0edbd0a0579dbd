//! The external math typesetting pass run after every repaint.

use tracing::debug;

use crate::error::TypesetError;
use crate::grid::GridDocument;

/// A typesetting pass over a freshly painted grid.
///
/// Failures are reported to the renderer, which logs them and keeps the grid.
pub trait Typesetter: Send + Sync {
    fn typeset(&self, document: &mut GridDocument) -> Result<(), TypesetError>;
}

/// Leaves math untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTypesetting;

impl Typesetter for NoTypesetting {
    fn typeset(&self, _document: &mut GridDocument) -> Result<(), TypesetError> {
        Ok(())
    }
}

/// Prepares the page for MathJax.
///
/// MathJax itself runs in the browser; this pass decides whether the page
/// needs it and catches delimiters MathJax would choke on.
#[derive(Debug, Clone, Copy, Default)]
pub struct MathJax;

impl Typesetter for MathJax {
    fn typeset(&self, document: &mut GridDocument) -> Result<(), TypesetError> {
        let mut first_error = None;
        let mut found = false;
        for card in document.cards() {
            for face in [card.front(), card.back_only()] {
                found |= has_math(face);
                if first_error.is_none() {
                    first_error = unbalanced(face).map(|delimiter| TypesetError::Unbalanced {
                        index: card.index(),
                        delimiter,
                    });
                }
            }
        }
        if found {
            debug!(cards = document.cards().len(), "page contains math");
            document.mark_math();
        }
        first_error.map_or(Ok(()), Err)
    }
}

fn has_math(markup: &str) -> bool {
    markup.contains("\\(") || markup.contains("\\[") || has_dollar_pair(markup)
}

fn has_dollar_pair(markup: &str) -> bool {
    let mut count = 0;
    let mut escaped = false;
    for ch in markup.chars() {
        match ch {
            '\\' => {
                escaped = !escaped;
                continue;
            }
            '$' if !escaped => count += 1,
            _ => {}
        }
        escaped = false;
    }
    count >= 2
}

fn unbalanced(markup: &str) -> Option<&'static str> {
    for (open, close) in [("\\(", "\\)"), ("\\[", "\\]")] {
        if markup.matches(open).count() > markup.matches(close).count() {
            return Some(open);
        }
    }
    None
}
