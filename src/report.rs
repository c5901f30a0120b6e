use std::fs::File;
use std::path::{Path, PathBuf};

use docx_rs::{BreakType, Docx, Paragraph, Run, Style, StyleType};
use tempfile::TempDir;
use thiserror::Error;

use crate::citation::format_apa;
use crate::similarity::is_duplicate;
use crate::sources::Paper;

const MISSING_ABSTRACT: &str = "No abstract available.";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode document: {0}")]
    Encode(String),
}

/// Owns the output directory for generated reports. The directory lives as
/// long as the store; dropping it (at process shutdown) removes every report.
pub struct ReportStore {
    dir: TempDir,
}

impl ReportStore {
    pub fn new() -> std::io::Result<Self> {
        Ok(Self { dir: tempfile::tempdir()? })
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Deduplicate, assemble, and persist the report for one request.
    /// Returns the path of the written `.docx`.
    ///
    /// Reports are keyed by topic only, so two in-flight requests for the
    /// same topic overwrite each other; the last write wins.
    pub fn write_report(
        &self,
        papers: &[Paper],
        topic: &str,
        threshold: f64,
    ) -> Result<PathBuf, ReportError> {
        let (kept, citations) = select_unique(papers, threshold);
        tracing::info!(total = papers.len(), kept = kept.len(), "assembling report");

        let path = self.dir.path().join(report_filename(topic));
        let file = File::create(&path)?;
        build_document(&kept, &citations, topic)
            .build()
            .pack(file)
            .map_err(|e| ReportError::Encode(e.to_string()))?;
        Ok(path)
    }
}

/// Single greedy pass over the input: a paper is kept iff its abstract is not
/// a near-duplicate of any already-kept abstract. Citations are rendered at
/// keep time, in kept order. Abstract-less papers dedup as the empty string.
pub fn select_unique(papers: &[Paper], threshold: f64) -> (Vec<Paper>, Vec<String>) {
    let mut findings: Vec<String> = Vec::new();
    let mut kept = Vec::new();
    let mut citations = Vec::new();
    for paper in papers {
        let finding = paper.abstract_text.clone().unwrap_or_default();
        if !is_duplicate(&finding, &findings, threshold) {
            findings.push(finding);
            citations.push(format_apa(paper));
            kept.push(paper.clone());
        }
    }
    (kept, citations)
}

/// File name for a topic's report: whitespace runs collapse to underscores.
pub fn report_filename(topic: &str) -> String {
    format!(
        "Literature_Review_Report_on_{}.docx",
        topic.split_whitespace().collect::<Vec<_>>().join("_")
    )
}

fn build_document(kept: &[Paper], citations: &[String], topic: &str) -> Docx {
    let mut doc = Docx::new()
        .add_style(
            Style::new("Title", StyleType::Paragraph)
                .name("Title")
                .size(40)
                .bold(),
        )
        .add_style(
            Style::new("Heading1", StyleType::Paragraph)
                .name("Heading 1")
                .size(28)
                .bold(),
        )
        .add_paragraph(heading("Title", &format!("Literature Review Summary: {topic}")));

    for (idx, paper) in kept.iter().enumerate() {
        let finding = paper.abstract_text.as_deref().unwrap_or(MISSING_ABSTRACT);
        doc = doc
            .add_paragraph(heading("Heading1", &format!("{}. {}", idx + 1, paper.title)))
            .add_paragraph(text(&format!("Source: {}", paper.source)))
            .add_paragraph(text(&format!("Authors: {}", paper.author_line())))
            .add_paragraph(text(&format!(
                "Year: {}",
                paper.year.as_deref().unwrap_or("Unknown")
            )))
            .add_paragraph(text("Main Finding:"))
            .add_paragraph(text(finding))
            .add_paragraph(text("APA Citation:"))
            .add_paragraph(text(&citations[idx]))
            .add_paragraph(text(&format!("Link: {}", paper.url)))
            .add_paragraph(Paragraph::new().add_run(Run::new().add_break(BreakType::Page)));
    }

    doc = doc.add_paragraph(heading("Heading1", "References"));
    for citation in citations {
        doc = doc.add_paragraph(text(citation));
    }
    doc
}

fn heading(style: &str, content: &str) -> Paragraph {
    Paragraph::new()
        .style(style)
        .add_run(Run::new().add_text(content))
}

fn text(content: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(content))
}
