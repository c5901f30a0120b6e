use super::{Availability, Paper, SourceAdapter, SourceError};
use async_trait::async_trait;

/// Placeholder for a scholarly source whose integration has not been written
/// yet. Registered so the source listing can report it as unimplemented
/// instead of it looking like a source that found nothing.
pub struct UnimplementedSource {
    name: &'static str,
}

impl UnimplementedSource {
    pub fn new(name: &'static str) -> Self {
        Self { name }
    }
}

#[async_trait]
impl SourceAdapter for UnimplementedSource {
    fn name(&self) -> &str {
        self.name
    }

    fn availability(&self) -> Availability {
        Availability::NotImplemented
    }

    async fn fetch(&self, _topic: &str) -> Result<Vec<Paper>, SourceError> {
        Ok(Vec::new())
    }
}

/// Publisher integrations that are planned but not built.
pub const PENDING_SOURCES: &[&str] = &[
    "Taylor & Francis",
    "ScienceDirect",
    "ASCE",
    "Wiley",
    "ASME",
];
