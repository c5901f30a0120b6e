use std::net::SocketAddr;
use std::sync::Arc;

use crate::similarity::DEFAULT_THRESHOLD;
use crate::sources::{self, SourceAdapter};

const DEFAULT_BIND: &str = "127.0.0.1:8080";
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";
const DEFAULT_MAX_RESULTS: usize = 10;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub user_agent: String,
    pub max_results: usize,
    pub similarity_threshold: f64,
    pub enabled_source_names: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults on missing or unparseable values.
    pub fn from_env() -> Self {
        let bind_addr = std::env::var("LITREVIEW_BIND")
            .ok()
            .and_then(|s| match s.parse() {
                Ok(addr) => Some(addr),
                Err(_) => {
                    tracing::warn!("invalid LITREVIEW_BIND {s:?}, using {DEFAULT_BIND}");
                    None
                }
            })
            .unwrap_or_else(|| DEFAULT_BIND.parse().unwrap());

        let user_agent = std::env::var("LITREVIEW_USER_AGENT")
            .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());

        let max_results = std::env::var("LITREVIEW_MAX_RESULTS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_MAX_RESULTS);

        let similarity_threshold = std::env::var("LITREVIEW_SIMILARITY_THRESHOLD")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_THRESHOLD);

        let enabled_source_names = std::env::var("LITREVIEW_SOURCES")
            .map(|s| s.split(',').map(|s| s.trim().to_lowercase()).collect())
            .unwrap_or_default();

        Self {
            bind_addr,
            user_agent,
            max_results,
            similarity_threshold,
            enabled_source_names,
        }
    }

    /// Build the adapter registry. The filter, when non-empty, restricts
    /// which sources are registered; order here is the fetch order.
    pub fn build_sources(&self) -> Vec<Arc<dyn SourceAdapter>> {
        let filter = &self.enabled_source_names;
        let filter_active = !filter.is_empty();
        let should_enable =
            |name: &str| -> bool { !filter_active || filter.contains(&name.to_lowercase()) };

        let mut registry: Vec<Arc<dyn SourceAdapter>> = Vec::new();
        if should_enable("google scholar") {
            registry.push(Arc::new(sources::google_scholar::GoogleScholarClient::new(
                &self.user_agent,
                self.max_results,
            )));
        }
        for name in sources::stubs::PENDING_SOURCES {
            if should_enable(name) {
                registry.push(Arc::new(sources::stubs::UnimplementedSource::new(name)));
            }
        }
        registry
    }
}
