//! Minimal inline markdown: emoji removal, links, and a line-by-line
//! list/paragraph state machine.
//!
//! This is intentionally not a general markdown parser. List mode toggles per
//! line with no lookahead, so a line that stops starting with `- ` closes any
//! open list immediately.

use regex::Regex;
use std::sync::LazyLock;

static RE_EMOJI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        "[",
        r"\x{1F600}-\x{1F64F}", // emoticons
        r"\x{1F300}-\x{1F5FF}", // symbols & pictographs
        r"\x{1F680}-\x{1F6FF}", // transport & map
        r"\x{1F1E0}-\x{1F1FF}", // flags
        r"\x{2702}-\x{27B0}",
        r"\x{24C2}-\x{1F251}",
        "]+"
    ))
    .unwrap()
});

static RE_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Remove emoji and pictographic symbols.
pub fn strip_emoji(text: &str) -> String {
    RE_EMOJI.replace_all(text, "").into_owned()
}

/// `[text](url)` → anchor opening in a new tab. Text and url are kept verbatim.
pub fn convert_links(text: &str) -> String {
    RE_LINK
        .replace_all(text, r#"<a href="$2" target="_blank" class="inline-link">$1</a>"#)
        .into_owned()
}

/// Emoji removal plus link conversion, without block wrapping.
pub fn inline(text: &str) -> String {
    convert_links(&strip_emoji(text))
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    InList,
    NotInList,
}

/// Convert a markdown fragment into `<ul>`/`<li>` and `<p>` blocks.
pub fn process(content: &str) -> String {
    if content.is_empty() {
        return String::new();
    }

    let content = inline(content);
    let mut out: Vec<String> = Vec::new();
    let mut mode = Mode::NotInList;

    for line in content.lines() {
        let line = line.trim();
        if let Some(item) = line.strip_prefix("- ") {
            if mode == Mode::NotInList {
                out.push("<ul>".to_string());
                mode = Mode::InList;
            }
            out.push(format!("<li>{}</li>", item.trim()));
            continue;
        }

        if mode == Mode::InList {
            out.push("</ul>".to_string());
            mode = Mode::NotInList;
        }
        if !line.is_empty() {
            out.push(format!("<p>{}</p>", line));
        }
    }

    if mode == Mode::InList {
        out.push("</ul>".to_string());
    }

    out.join("\n")
}
