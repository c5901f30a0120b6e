use std::sync::Arc;

use crate::sources::{Paper, SourceAdapter};

/// Fetch from every registered source in order, one at a time, and merge the
/// results. A failing source is logged and skipped; it never fails the
/// request, it only thins the result set.
pub async fn gather_papers(sources: &[Arc<dyn SourceAdapter>], topic: &str) -> Vec<Paper> {
    let mut papers = Vec::new();
    for source in sources {
        match source.fetch(topic).await {
            Ok(results) => {
                tracing::info!(source = source.name(), count = results.len(), "source fetched");
                papers.extend(results);
            }
            Err(e) => tracing::warn!(source = source.name(), "source fetch failed: {e}"),
        }
    }
    papers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::{Author, Availability, SourceError};
    use async_trait::async_trait;
    use std::collections::BTreeMap;

    struct FixedSource {
        name: &'static str,
        titles: Vec<&'static str>,
    }

    struct FailingSource;

    fn paper(title: &str, source: &str) -> Paper {
        Paper {
            title: title.to_string(),
            authors: vec![Author { name: "Unknown".into() }],
            year: None,
            abstract_text: None,
            citation_count: 0,
            url: format!("https://example.org/{title}"),
            external_ids: BTreeMap::new(),
            source: source.to_string(),
        }
    }

    #[async_trait]
    impl SourceAdapter for FixedSource {
        fn name(&self) -> &str {
            self.name
        }
        fn availability(&self) -> Availability {
            Availability::Available
        }
        async fn fetch(&self, _topic: &str) -> Result<Vec<Paper>, SourceError> {
            Ok(self.titles.iter().map(|t| paper(t, self.name)).collect())
        }
    }

    #[async_trait]
    impl SourceAdapter for FailingSource {
        fn name(&self) -> &str {
            "broken"
        }
        fn availability(&self) -> Availability {
            Availability::Available
        }
        async fn fetch(&self, _topic: &str) -> Result<Vec<Paper>, SourceError> {
            Err(SourceError::Parse("markup changed".into()))
        }
    }

    #[tokio::test]
    async fn merges_in_registry_order_and_skips_failures() {
        let sources: Vec<Arc<dyn SourceAdapter>> = vec![
            Arc::new(FixedSource { name: "first", titles: vec!["A", "B"] }),
            Arc::new(FailingSource),
            Arc::new(FixedSource { name: "second", titles: vec!["C"] }),
        ];
        let papers = gather_papers(&sources, "topic").await;
        let titles: Vec<_> = papers.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn all_sources_empty_is_not_an_error() {
        let sources: Vec<Arc<dyn SourceAdapter>> =
            vec![Arc::new(FixedSource { name: "empty", titles: vec![] })];
        assert!(gather_papers(&sources, "topic").await.is_empty());
    }
}
