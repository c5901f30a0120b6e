use crate::sources::Paper;

/// Render one APA-style reference line:
/// `{authors} ({year}). {title}. {source}. {locator}`.
///
/// The locator prefers a DOI link over the raw result URL.
pub fn format_apa(paper: &Paper) -> String {
    let authors = paper.author_line();
    let year = paper.year.as_deref().unwrap_or("Unknown");
    let locator = match paper.doi() {
        Some(doi) => format!("https://doi.org/{doi}"),
        None => paper.url.clone(),
    };
    format!(
        "{authors} ({year}). {title}. {source}. {locator}",
        title = paper.title,
        source = paper.source,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::Author;
    use std::collections::BTreeMap;

    fn paper() -> Paper {
        Paper {
            title: "Topology of Timber Bridges".into(),
            authors: vec![
                Author { name: "Okafor, N.".into() },
                Author { name: "Silva, M.".into() },
            ],
            year: Some("2021".into()),
            abstract_text: Some("We survey timber bridge topologies.".into()),
            citation_count: 12,
            url: "https://example.org/timber".into(),
            external_ids: BTreeMap::new(),
            source: "Google Scholar".into(),
        }
    }

    #[test]
    fn doi_link_replaces_raw_url() {
        let mut p = paper();
        p.external_ids.insert("DOI".into(), "10.1/x".into());
        let cite = format_apa(&p);
        assert!(cite.contains("https://doi.org/10.1/x"));
        assert!(!cite.contains("https://example.org/timber"));
    }

    #[test]
    fn raw_url_used_without_doi() {
        let cite = format_apa(&paper());
        assert!(cite.contains("https://example.org/timber"));
        assert!(!cite.contains("doi.org"));
    }

    #[test]
    fn full_template_order() {
        let cite = format_apa(&paper());
        assert_eq!(
            cite,
            "Okafor, N., Silva, M. (2021). Topology of Timber Bridges. \
             Google Scholar. https://example.org/timber"
        );
    }

    #[test]
    fn unknown_year_and_authors() {
        let mut p = paper();
        p.year = None;
        p.authors.clear();
        let cite = format_apa(&p);
        assert!(cite.starts_with("Unknown (Unknown)."));
    }
}
