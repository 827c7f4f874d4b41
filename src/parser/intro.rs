use crate::inline;

pub const SECTION: &str = "Introduction";

/// Split on blank lines and run each paragraph through the inline processor.
pub fn parse(section: &str) -> Vec<String> {
    section
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(inline::process)
        .filter(|p| !p.is_empty())
        .collect()
}
