//! Heading-delimited section lookup.
//!
//! Any heading terminates a section regardless of level; there is no nesting.

/// Text after the leading `#` run if `line` is a heading line.
fn heading_text(line: &str) -> Option<&str> {
    let rest = line.trim_start_matches('#');
    if rest.len() == line.len() {
        return None;
    }
    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        Some(rest.trim())
    } else {
        None
    }
}

/// Return the trimmed body of the section titled `heading`, or `""`.
///
/// The heading match is exact and case-insensitive; the body runs up to the
/// next heading line of any level.
pub fn extract_section(heading: &str, body: &str) -> String {
    let wanted = heading.trim().to_lowercase();
    let mut lines = body.lines();

    let found = lines
        .by_ref()
        .any(|line| heading_text(line).is_some_and(|t| t.to_lowercase() == wanted));
    if !found {
        return String::new();
    }

    lines
        .take_while(|line| heading_text(line).is_none())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
