//! Front-matter parsing

use serde_yaml::Value;

/// Delimiter that opens and closes the metadata block
const DELIMITER: &str = "---";

/// Front-matter data from a post
///
/// Parsing is best-effort: a missing, empty or malformed metadata block
/// yields empty fields rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    pub title: Option<String>,
    /// Publication date, expected as `YYYY-MM-DD`
    pub date: Option<String>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> (Self, &str) {
        let Some(rest) = content.strip_prefix(DELIMITER) else {
            return (FrontMatter::default(), content);
        };

        // No closing delimiter, treat the whole input as body
        let Some(end_pos) = rest.find(DELIMITER) else {
            return (FrontMatter::default(), content);
        };

        let yaml_content = &rest[..end_pos];
        let remaining = rest[end_pos + DELIMITER.len()..].trim();

        (Self::decode(yaml_content), remaining)
    }

    /// Decode the text between the delimiters, keeping only `title` and `date`
    fn decode(yaml_content: &str) -> Self {
        if yaml_content.trim().is_empty() {
            return FrontMatter::default();
        }

        match serde_yaml::from_str::<Value>(yaml_content) {
            Ok(Value::Mapping(map)) => Self {
                title: map.get("title").and_then(scalar_to_string),
                date: map.get("date").and_then(scalar_to_string),
            },
            Ok(Value::Null) => FrontMatter::default(),
            Ok(other) => {
                tracing::warn!(
                    "Failed to parse frontmatter: expected key/value pairs, found {:?}",
                    other
                );
                FrontMatter::default()
            }
            Err(e) => {
                tracing::warn!("Failed to parse frontmatter: {}", e);
                FrontMatter::default()
            }
        }
    }
}

/// Render a YAML scalar as text; `title: 2024` is still a title
fn scalar_to_string(value: &Value) -> Option<String> {
    let s = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };

    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_frontmatter() {
        let content = r#"---
title: Test Post
date: 2026-01-15
---

This is the content."#;

        let (fm, remaining) = FrontMatter::parse(content);
        assert_eq!(fm.title.as_deref(), Some("Test Post"));
        assert_eq!(fm.date.as_deref(), Some("2026-01-15"));
        assert_eq!(remaining, "This is the content.");
    }

    #[test]
    fn test_no_frontmatter() {
        let content = "Just content without frontmatter.";
        let (fm, remaining) = FrontMatter::parse(content);
        assert_eq!(fm, FrontMatter::default());
        assert_eq!(remaining, content);
    }

    #[test]
    fn test_leading_whitespace_is_not_frontmatter() {
        let content = "\n---\ntitle: Nope\n---\nBody";
        let (fm, remaining) = FrontMatter::parse(content);
        assert_eq!(fm.title, None);
        assert_eq!(remaining, content);
    }

    #[test]
    fn test_only_title() {
        let content = "---\ntitle: Only Title\n---\n\nContent here.";
        let (fm, remaining) = FrontMatter::parse(content);
        assert_eq!(fm.title.as_deref(), Some("Only Title"));
        assert_eq!(fm.date, None);
        assert_eq!(remaining, "Content here.");
    }

    #[test]
    fn test_missing_closing_delimiter() {
        let content = "---\ntitle: Incomplete\nThis should not parse";
        let (fm, remaining) = FrontMatter::parse(content);
        assert_eq!(fm, FrontMatter::default());
        assert_eq!(remaining, content);
    }

    #[test]
    fn test_empty_metadata_block() {
        let (fm, remaining) = FrontMatter::parse("------\n\nBody text\n");
        assert_eq!(fm, FrontMatter::default());
        assert_eq!(remaining, "Body text");
    }

    #[test]
    fn test_malformed_yaml_degrades_to_empty() {
        let content = "---\ntitle: [unclosed\n---\nStill rendered";
        let (fm, remaining) = FrontMatter::parse(content);
        assert_eq!(fm, FrontMatter::default());
        assert_eq!(remaining, "Still rendered");
    }

    #[test]
    fn test_non_mapping_yaml_degrades_to_empty() {
        let (fm, remaining) = FrontMatter::parse("---\njust a sentence\n---\nBody");
        assert_eq!(fm, FrontMatter::default());
        assert_eq!(remaining, "Body");
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let content = "---\ntitle: Hello\ntags:\n  - rust\nauthor: someone\n---\nBody";
        let (fm, _) = FrontMatter::parse(content);
        assert_eq!(fm.title.as_deref(), Some("Hello"));
        assert_eq!(fm.date, None);
    }

    #[test]
    fn test_numeric_title_kept_as_text() {
        let (fm, _) = FrontMatter::parse("---\ntitle: 2048\n---\nBody");
        assert_eq!(fm.title.as_deref(), Some("2048"));
    }

    #[test]
    fn test_body_is_trimmed() {
        let (_, remaining) = FrontMatter::parse("---\ntitle: T\n---\n\n\n# Hi\n\n");
        assert_eq!(remaining, "# Hi");
    }
}
