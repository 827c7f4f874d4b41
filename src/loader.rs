//! README loading: comment removal and YAML front-matter split.
//!
//! ```markdown
//! ---
//! title: ICP-10111 Barometric Sensor
//! subtitle: High accuracy pressure module
//! version: 1.2
//! ---
//!
//! ## Introduction
//! ...
//! ```

use crate::error::LoadError;
use crate::model::Document;
use regex::Regex;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, warn};

static RE_HTML_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

/// Read and parse a README, stamping it with today's local date.
pub fn load(path: &Path) -> Result<Document, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }
    let raw = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    Ok(Document::parse(&raw, date))
}

impl Document {
    /// Parse raw README text. Never fails: a bad front-matter block just
    /// yields an empty mapping.
    pub fn parse(raw: &str, date: String) -> Self {
        let cleaned = RE_HTML_COMMENT.replace_all(raw, "");
        let (front_matter, body) = split_front_matter(&cleaned);
        Document {
            front_matter,
            body: body.to_string(),
            date,
        }
    }
}

/// Split a leading `---` delimited YAML block from the body.
fn split_front_matter(content: &str) -> (Mapping, &str) {
    if !content.starts_with("---") {
        return (Mapping::new(), content);
    }

    let after_open = match content.find('\n') {
        Some(pos) => &content[pos + 1..],
        None => return (Mapping::new(), content),
    };

    let (yaml, rest) = if let Some(rest) = after_open.strip_prefix("---") {
        ("", rest)
    } else if let Some(pos) = after_open.find("\n---") {
        (&after_open[..pos], &after_open[pos + 4..])
    } else {
        warn!("front-matter opening delimiter without a closing one; ignoring");
        return (Mapping::new(), content);
    };

    // Drop the remainder of the closing delimiter line, then leading blank space.
    let body = match rest.find('\n') {
        Some(pos) => &rest[pos + 1..],
        None => "",
    };
    let body = body.trim_start();

    let front_matter = match serde_yaml::from_str::<Value>(yaml) {
        Ok(Value::Mapping(map)) => map,
        Ok(Value::Null) => {
            debug!("front-matter block is empty");
            Mapping::new()
        }
        Ok(other) => {
            warn!("front-matter is not a mapping ({:?}); ignoring", other);
            Mapping::new()
        }
        Err(e) => {
            warn!("failed to parse front-matter YAML: {e}");
            Mapping::new()
        }
    };

    (front_matter, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn parse(raw: &str) -> Document {
        Document::parse(raw, "2025-01-01".to_string())
    }

    #[test]
    fn reads_front_matter_and_body() {
        let doc = parse("---\ntitle: Sensor\nsubtitle: Tiny\nversion: 2.1\n---\n\n## Features\n- A\n");
        assert_eq!(doc.title(), "Sensor");
        assert_eq!(doc.subtitle(), "Tiny");
        assert_eq!(doc.version(), "2.1");
        assert_eq!(doc.body, "## Features\n- A\n");
    }

    #[test]
    fn no_front_matter_keeps_body() {
        let doc = parse("## Intro\ntext");
        assert!(doc.front_matter.is_empty());
        assert_eq!(doc.body, "## Intro\ntext");
    }

    #[test]
    fn malformed_front_matter_is_empty_and_stripped() {
        let doc = parse("---\ntitle: [unclosed\n---\nBody");
        assert!(doc.front_matter.is_empty());
        assert_eq!(doc.body, "Body");
        assert_eq!(doc.title(), "Electronic Module");
    }

    #[test]
    fn scalar_front_matter_is_empty() {
        let doc = parse("---\njust text\n---\nBody");
        assert!(doc.front_matter.is_empty());
        assert_eq!(doc.body, "Body");
    }

    #[test]
    fn unclosed_front_matter_is_body() {
        let doc = parse("---\ntitle: X\n\nno close");
        assert!(doc.front_matter.is_empty());
        assert_eq!(doc.body, "---\ntitle: X\n\nno close");
    }

    #[test]
    fn empty_front_matter_block() {
        let doc = parse("---\n---\nBody");
        assert!(doc.front_matter.is_empty());
        assert_eq!(doc.body, "Body");
    }

    #[test]
    fn html_comments_removed_across_lines() {
        let doc = parse("before <!-- one -->mid<!--\ntwo\n-->after");
        assert_eq!(doc.body, "before midafter");
    }

    #[test]
    fn comment_inside_front_matter_removed_first() {
        let doc = parse("<!-- lead -->---\ntitle: T\n---\nBody");
        assert_eq!(doc.title(), "T");
    }

    #[test]
    fn load_missing_file() {
        let err = load(Path::new("/nonexistent/README.md")).unwrap_err();
        assert!(matches!(err, LoadError::FileNotFound(_)));
        assert!(err.to_string().contains("README not found"));
    }

    #[test]
    fn load_stamps_date() {
        let mut f = NamedTempFile::with_suffix(".md").unwrap();
        f.write_all(b"---\ntitle: T\n---\nBody").unwrap();
        let doc = load(f.path()).unwrap();
        assert_eq!(doc.title(), "T");
        assert_eq!(doc.date.len(), 10);
        assert_eq!(doc.date.as_bytes()[4], b'-');
    }
}
