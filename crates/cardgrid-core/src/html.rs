//! Standalone HTML output for a painted grid.
//!
//! The page is self-contained: layout knobs become `:root` style variables,
//! hover and flip-all are pure CSS, and a short script toggles `.flip` on
//! click. MathJax is only loaded when the typesetting pass flagged math.

use std::fmt::Write as _;

use crate::grid::{CardElement, GridDocument};

const STYLE: &str = r#"* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif; }
.grid { padding: 16px; display: grid; gap: 16px; justify-content: center; grid-template-columns: repeat(var(--cols), var(--card-size)); }
.card { perspective: 1200px; width: var(--card-size); height: calc(var(--card-size) / var(--card-aspect)); aspect-ratio: var(--card-aspect); justify-self: center; cursor: pointer; display: block; }
.inner { position: relative; width: 100%; height: 100%; transform-style: preserve-3d; transition: transform 0.6s cubic-bezier(.2,.7,.2,1); border-radius: var(--card-radius); will-change: transform; }
.card:hover .inner, .card.flip .inner, body.flip-all .inner { transform: rotateY(180deg); }
.face { position: absolute; inset: 0; backface-visibility: hidden; overflow: auto; border-radius: var(--card-radius); border: 1px solid #ccc; background: #fff; color: #111; padding: 10px; box-shadow: 0 2px 12px rgba(0,0,0,.15); font-size: var(--card-font-size); line-height: 1.3; }
.back { transform: rotateY(180deg); }
.card .face table { max-width: 100%; overflow: auto; display: block; }
.pager { text-align: center; color: #666; font-size: 13px; padding-bottom: 16px; }
"#;

const TOGGLE_SCRIPT: &str = r#"for (const el of document.querySelectorAll('#grid .card')) {
  el.addEventListener('click', () => el.classList.toggle('flip'));
}
"#;

const MATHJAX_CONFIG: &str = r#"window.MathJax = {
  tex: {
    inlineMath: [['\\(', '\\)'], ['$', '$']],
    displayMath: [['\\[', '\\]']],
    processEscapes: true,
    processEnvironments: false,
    processRefs: false,
    packages: {'[+]': ['base', 'ams', 'newcommand', 'mathtools', 'physics', 'braket', 'cancel', 'color']}
  },
  loader: {
    load: ['[tex]/mathtools', '[tex]/color', '[tex]/physics', '[tex]/braket', '[tex]/cancel']
  },
  options: {
    skipHtmlTags: ['script', 'noscript', 'style', 'textarea', 'pre', 'code'],
    ignoreHtmlClass: 'tex2jax_ignore',
    processHtmlClass: 'tex2jax_process'
  }
};
"#;

const MATHJAX_SRC: &str = "https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-chtml.js";

/// Full page for a painted grid.
///
/// Card faces are emitted as-is; the host already produced trusted markup.
pub fn render_page(document: &GridDocument) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset='utf-8'/>\n");
    html.push_str("<title>Cards Grid Preview</title>\n<style>\n:root {");
    for (name, value) in document.layout().style_variables() {
        let _ = write!(html, " {name}: {value};");
    }
    html.push_str(" --card-radius: 12px; }\n");
    html.push_str(STYLE);
    html.push_str("</style>\n");
    if document.needs_math() {
        html.push_str("<script>\n");
        html.push_str(MATHJAX_CONFIG);
        html.push_str("</script>\n");
        let _ = writeln!(html, "<script async src='{MATHJAX_SRC}'></script>");
    }
    html.push_str("</head>\n");

    if document.flip_all() {
        html.push_str("<body class=\"flip-all\">\n");
    } else {
        html.push_str("<body>\n");
    }

    html.push_str("<div id=\"grid\" class=\"grid\">\n");
    for card in document.cards() {
        push_card(&mut html, card);
    }
    html.push_str("</div>\n");

    let page = document.page();
    let range = document.visible_range();
    let _ = writeln!(
        html,
        "<div class=\"pager\">Page {} of {} &middot; cards {}&ndash;{} of {}</div>",
        page.page,
        page.page_count,
        if range.is_empty() { 0 } else { range.start + 1 },
        range.end,
        document.item_count()
    );

    html.push_str("<script>\n");
    html.push_str(TOGGLE_SCRIPT);
    html.push_str("</script>\n</body>\n</html>\n");
    html
}

fn push_card(html: &mut String, card: &CardElement) {
    let class = if card.is_flipped() { "card flip" } else { "card" };
    let _ = writeln!(
        html,
        "<div class=\"{class}\" data-index=\"{}\"><div class=\"inner\"><div class=\"face front\">{}</div><div class=\"face back\">{}</div></div></div>",
        card.index(),
        card.front(),
        card.back_only()
    );
}

/// The inline informational page shown instead of a grid.
pub fn message_page(text: &str) -> String {
    format!("<h3 style='margin:1rem'>{}</h3>", escape(text))
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
