//! Output renderers and the text helpers they share.

pub mod html;
pub mod style;

use crate::model::Datasheet;
use regex::Regex;
use std::sync::LazyLock;

/// Trait for rendering a Datasheet into a specific output format.
pub trait Renderer {
    fn render(&self, sheet: &Datasheet) -> String;
    fn file_extension(&self) -> &str;
}

pub const FALLBACK_PRODUCT_CODE: &str = "MODULE";

static RE_PRODUCT_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(UE\d+|BME\d+|[A-Z]{2,}\d+|\b[A-Z]{3,}\b)").unwrap()
});

/// Short product identifier shown in the header badge and footer.
///
/// Searches the uppercased title for a product-code shape; otherwise joins
/// the first three letters of the first two words.
pub fn product_code(title: &str) -> String {
    let upper = title.to_uppercase();
    if let Some(m) = RE_PRODUCT_CODE.captures(&upper).and_then(|c| c.get(1)) {
        return m.as_str().to_string();
    }

    let words: Vec<&str> = upper.split_whitespace().collect();
    if words.len() < 2 {
        return FALLBACK_PRODUCT_CODE.to_string();
    }
    let code: String = words[..2]
        .iter()
        .filter(|w| w.chars().all(char::is_alphabetic))
        .map(|w| w.chars().take(3).collect::<String>())
        .collect();
    if code.is_empty() {
        FALLBACK_PRODUCT_CODE.to_string()
    } else {
        code
    }
}

pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Escape text for a single-quoted JavaScript string literal.
pub(crate) fn js_escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "\\n")
        .replace("</", "<\\/")
}
