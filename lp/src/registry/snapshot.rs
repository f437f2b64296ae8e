//! Snapshot encoding
//!
//! A snapshot is a JSON array of tools in collection order. Decoding is
//! all-or-nothing: one bad record rejects the whole snapshot.

use std::collections::HashSet;

use crate::domain::Tool;
use crate::domain::validation::normalize_url;

use super::error::SnapshotError;

/// Serialize the whole collection
pub fn encode(tools: &[Tool]) -> Result<String, serde_json::Error> {
    serde_json::to_string(tools)
}

/// Parse and schema-check a stored snapshot
pub fn decode(raw: &str) -> Result<Vec<Tool>, SnapshotError> {
    let tools: Vec<Tool> = serde_json::from_str(raw).map_err(SnapshotError::Malformed)?;

    let mut seen = HashSet::with_capacity(tools.len());
    for tool in &tools {
        if tool.id.as_str().trim().is_empty() {
            return Err(SnapshotError::BlankField {
                id: tool.id.clone(),
                field: "id",
            });
        }
        if tool.name.trim().is_empty() {
            return Err(SnapshotError::BlankField {
                id: tool.id.clone(),
                field: "name",
            });
        }
        if tool.url.trim().is_empty() {
            return Err(SnapshotError::BlankField {
                id: tool.id.clone(),
                field: "url",
            });
        }
        // Stored URLs must already be in the form Create produces
        if !matches!(normalize_url(&tool.url), Ok(ref normalized) if *normalized == tool.url) {
            return Err(SnapshotError::InvalidUrl {
                id: tool.id.clone(),
                url: tool.url.clone(),
            });
        }
        if !seen.insert(&tool.id) {
            return Err(SnapshotError::DuplicateId(tool.id.clone()));
        }
    }

    Ok(tools)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    const VALID: &str = r#"[
        {"id":"a","name":"Figma","url":"https://figma.com","description":"design tool","category":"design","createdAt":1},
        {"id":"b","name":"Notion","url":"https://notion.so","category":"production","createdAt":2}
    ]"#;

    #[test]
    fn test_decode_valid_snapshot_keeps_order() {
        let tools = decode(VALID).unwrap();
        assert_eq!(tools.len(), 2);
        assert_eq!(tools[0].name, "Figma");
        assert_eq!(tools[1].name, "Notion");
        assert_eq!(tools[1].category, Category::Production);
    }

    #[test]
    fn test_decode_empty_array() {
        assert!(decode("[]").unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_unknown_category() {
        let raw = r#"[{"id":"a","name":"X","url":"https://x.com","category":"nonexistent","createdAt":1}]"#;
        assert!(matches!(decode(raw), Err(SnapshotError::Malformed(_))));
    }

    #[test]
    fn test_decode_rejects_all_category() {
        let raw = r#"[{"id":"a","name":"X","url":"https://x.com","category":"all","createdAt":1}]"#;
        assert!(matches!(decode(raw), Err(SnapshotError::Malformed(_))));
    }

    #[test]
    fn test_decode_rejects_missing_required_fields() {
        for raw in [
            r#"[{"name":"X","url":"https://x.com","category":"design"}]"#,
            r#"[{"id":"a","url":"https://x.com","category":"design"}]"#,
            r#"[{"id":"a","name":"X","category":"design"}]"#,
            r#"[{"id":"a","name":"X","url":"https://x.com"}]"#,
        ] {
            assert!(matches!(decode(raw), Err(SnapshotError::Malformed(_))), "{}", raw);
        }
    }

    #[test]
    fn test_decode_rejects_non_array() {
        assert!(matches!(decode("{}"), Err(SnapshotError::Malformed(_))));
        assert!(matches!(decode("not json"), Err(SnapshotError::Malformed(_))));
    }

    #[test]
    fn test_decode_rejects_duplicate_ids() {
        let raw = r#"[
            {"id":"a","name":"X","url":"https://x.com","category":"design"},
            {"id":"a","name":"Y","url":"https://y.com","category":"design"}
        ]"#;
        assert!(matches!(decode(raw), Err(SnapshotError::DuplicateId(id)) if id.as_str() == "a"));
    }

    #[test]
    fn test_decode_rejects_blank_name() {
        let raw = r#"[{"id":"a","name":"  ","url":"https://x.com","category":"design"}]"#;
        assert!(matches!(
            decode(raw),
            Err(SnapshotError::BlankField { field: "name", .. })
        ));
    }

    #[test]
    fn test_decode_rejects_schemeless_url() {
        let raw = r#"[{"id":"a","name":"X","url":"example.com","category":"design","createdAt":1}]"#;
        assert!(matches!(
            decode(raw),
            Err(SnapshotError::InvalidUrl { id, url }) if id.as_str() == "a" && url == "example.com"
        ));
    }

    #[test]
    fn test_decode_rejects_urls_create_would_refuse() {
        for url in ["https://", "https://exa mple.com", "ftp://files.example.com", " https://x.com"] {
            let raw = format!(
                r#"[{{"id":"a","name":"X","url":{},"category":"design"}}]"#,
                serde_json::to_string(url).unwrap()
            );
            assert!(matches!(decode(&raw), Err(SnapshotError::InvalidUrl { .. })), "{}", url);
        }
    }

    #[test]
    fn test_decode_accepts_created_urls() {
        let raw = r#"[
            {"id":"a","name":"X","url":"http://localhost:3000/app","category":"design"},
            {"id":"b","name":"Y","url":"https://example.com/path?q=1","category":"design"}
        ]"#;
        assert_eq!(decode(raw).unwrap().len(), 2);
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let raw = r#"[{"id":"a","name":"X","url":"https://x.com","category":"design","pinned":true}]"#;
        assert_eq!(decode(raw).unwrap().len(), 1);
    }

    #[test]
    fn test_encode_decode_preserves_content() {
        let tools = decode(VALID).unwrap();
        let encoded = encode(&tools).unwrap();
        assert_eq!(decode(&encoded).unwrap(), tools);
    }
}
