pub mod google_scholar;
pub mod stubs;

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single normalized result from a scholarly source.
///
/// Records are immutable once produced by an adapter; the report pipeline
/// only reads them and derives citation strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paper {
    pub title: String,
    pub authors: Vec<Author>,
    /// Publication year as reported by the source. `None` renders as "Unknown".
    pub year: Option<String>,
    pub abstract_text: Option<String>,
    pub citation_count: u32,
    pub url: String,
    /// Identifier-type to value, e.g. `{"DOI": "10.1234/x"}`.
    pub external_ids: BTreeMap<String, String>,
    pub source: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
}

impl Paper {
    /// The DOI entry of `external_ids`, if present and non-empty.
    pub fn doi(&self) -> Option<&str> {
        self.external_ids
            .get("DOI")
            .map(String::as_str)
            .filter(|d| !d.is_empty())
    }

    /// Author names joined for display, or "Unknown" when unattributed.
    pub fn author_line(&self) -> String {
        if self.authors.is_empty() {
            return "Unknown".to_string();
        }
        self.authors
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Whether a registered source performs real fetches yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Available,
    NotImplemented,
}

/// One scholarly source. Implementations must not fail the request on a bad
/// upstream response: a non-success status yields an empty result list.
#[async_trait]
pub trait SourceAdapter: Send + Sync {
    fn name(&self) -> &str;

    fn availability(&self) -> Availability;

    async fn fetch(&self, topic: &str) -> Result<Vec<Paper>, SourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_paper() -> Paper {
        Paper {
            title: "T".into(),
            authors: vec![],
            year: None,
            abstract_text: None,
            citation_count: 0,
            url: "https://example.org/t".into(),
            external_ids: BTreeMap::new(),
            source: "test".into(),
        }
    }

    #[test]
    fn doi_ignores_empty_entries() {
        let mut p = base_paper();
        assert_eq!(p.doi(), None);
        p.external_ids.insert("DOI".into(), String::new());
        assert_eq!(p.doi(), None);
        p.external_ids.insert("DOI".into(), "10.1/x".into());
        assert_eq!(p.doi(), Some("10.1/x"));
    }

    #[test]
    fn author_line_joins_in_order() {
        let mut p = base_paper();
        assert_eq!(p.author_line(), "Unknown");
        p.authors = vec![
            Author { name: "Kanade, T.".into() },
            Author { name: "Rao, B.".into() },
        ];
        assert_eq!(p.author_line(), "Kanade, T., Rao, B.");
    }
}
