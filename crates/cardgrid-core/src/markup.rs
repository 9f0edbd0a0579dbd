//! Helpers for card markup that is not going to a browser.

use std::sync::LazyLock;

use regex::Regex;

static DROPPED_BLOCKS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(script|style)\b[^>]*>.*?</(script|style)\s*>").expect("valid pattern")
});

static LINE_BREAKS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<br\s*/?>|<hr[^>]*>|</(div|p|li|tr|h[1-6])\s*>").expect("valid pattern")
});

static TAGS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("valid pattern"));

static BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid pattern"));

/// Readable text for a card face.
///
/// Block-level closers and `<br>`/`<hr>` become newlines, script and style
/// bodies are dropped, remaining tags are stripped and common entities are
/// decoded.
pub fn to_plain_text(markup: &str) -> String {
    let without_blocks = DROPPED_BLOCKS.replace_all(markup, "");
    let with_breaks = LINE_BREAKS.replace_all(&without_blocks, "\n");
    let stripped = TAGS.replace_all(&with_breaks, "");
    let decoded = decode_entities(&stripped);
    let lines: Vec<&str> = decoded.lines().map(str::trim).collect();
    BLANK_LINES
        .replace_all(&lines.join("\n"), "\n\n")
        .trim()
        .to_string()
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags_and_keeps_text() {
        assert_eq!(to_plain_text("<b>hola</b> mundo"), "hola mundo");
    }

    #[test]
    fn block_tags_become_lines() {
        assert_eq!(
            to_plain_text("<div>one</div><div>two</div>three<br>four"),
            "one\ntwo\nthree\nfour"
        );
    }

    #[test]
    fn script_and_style_are_dropped() {
        let markup = "<style>.card{color:red}</style>Q<script>alert(1)</script>";
        assert_eq!(to_plain_text(markup), "Q");
    }

    #[test]
    fn entities_are_decoded_once() {
        assert_eq!(to_plain_text("a &lt;b&gt; &amp;lt; c&nbsp;d"), "a <b> &lt; c d");
    }

    #[test]
    fn runs_of_blank_lines_collapse() {
        assert_eq!(to_plain_text("a<br><br><br><br>b"), "a\n\nb");
    }
}
