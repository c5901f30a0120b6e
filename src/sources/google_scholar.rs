use super::{Author, Availability, Paper, SourceAdapter, SourceError};
use async_trait::async_trait;
use scraper::{Html, Selector};
use std::collections::BTreeMap;

const BASE_URL: &str = "https://scholar.google.com";

/// Scrapes the Google Scholar results page. There is no official API, so this
/// adapter depends on the page markup; if Google changes the result-block
/// selectors the adapter degrades to empty results rather than erroring.
pub struct GoogleScholarClient {
    client: reqwest::Client,
    base_url: String,
    max_results: usize,
}

impl GoogleScholarClient {
    pub fn new(user_agent: &str, max_results: usize) -> Self {
        Self::with_base_url(BASE_URL, user_agent, max_results)
    }

    pub fn with_base_url(base_url: &str, user_agent: &str, max_results: usize) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(user_agent)
                .build()
                .unwrap(),
            base_url: base_url.trim_end_matches('/').to_string(),
            max_results,
        }
    }
}

#[async_trait]
impl SourceAdapter for GoogleScholarClient {
    fn name(&self) -> &str {
        "Google Scholar"
    }

    fn availability(&self) -> Availability {
        Availability::Available
    }

    async fn fetch(&self, topic: &str) -> Result<Vec<Paper>, SourceError> {
        let url = format!("{}/scholar?q={}", self.base_url, urlencoded(topic));
        let resp = self.client.get(&url).send().await?;
        if !resp.status().is_success() {
            tracing::warn!(status = %resp.status(), "Google Scholar returned non-success");
            return Ok(Vec::new());
        }
        let html = resp.text().await?;
        parse_results_html(&html, self.max_results)
    }
}

fn urlencoded(s: &str) -> String {
    s.replace(' ', "+")
}

fn parse_results_html(html: &str, max_results: usize) -> Result<Vec<Paper>, SourceError> {
    let document = Html::parse_document(html);

    let block_sel = selector(".gs_ri")?;
    let title_sel = selector("h3 a")?;
    let snippet_sel = selector(".gs_rs")?;

    let mut papers = Vec::new();
    for block in document.select(&block_sel).take(max_results) {
        // Blocks without a title link are citations-only entries; skip them.
        let Some(title_el) = block.select(&title_sel).next() else {
            continue;
        };
        let title = title_el.text().collect::<String>().trim().to_string();
        let url = title_el.value().attr("href").unwrap_or("").to_string();
        if title.is_empty() || url.is_empty() {
            continue;
        }

        let abstract_text = block
            .select(&snippet_sel)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|s| !s.is_empty());

        papers.push(Paper {
            title,
            authors: vec![Author { name: "Unknown".to_string() }],
            year: None,
            abstract_text,
            citation_count: 0,
            url,
            external_ids: BTreeMap::new(),
            source: "Google Scholar".to_string(),
        });
    }

    Ok(papers)
}

fn selector(css: &str) -> Result<Selector, SourceError> {
    Selector::parse(css).map_err(|e| SourceError::Parse(format!("{e:?}")))
}
