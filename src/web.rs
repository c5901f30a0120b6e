use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use minijinja::{context, path_loader, Environment};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::report::{report_filename, ReportError, ReportStore};
use crate::search::gather_papers;
use crate::sources::{Availability, SourceAdapter};

const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Minimal form served when the template directory is unavailable.
const FALLBACK_FORM: &str = r#"<html><body>
<h2>Literature Review Assistant</h2>
<form action='/search' method='post'>
    <label>Enter Research Topic:</label>
    <input name='topic' type='text' required />
    <button type='submit'>Generate</button>
</form></body></html>"#;

pub struct AppState {
    pub config: Config,
    pub sources: Vec<Arc<dyn SourceAdapter>>,
    pub store: ReportStore,
    pub templates: Environment<'static>,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let sources = config.build_sources();
        let store = ReportStore::new()?;
        let mut templates = Environment::new();
        templates.set_loader(path_loader("templates"));
        Ok(Self { config, sources, store, templates })
    }
}

pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);
    Router::new()
        .route("/", get(topic_form))
        .route("/search", post(search))
        .route("/sources", get(list_sources))
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}

#[derive(Deserialize)]
pub struct SearchForm {
    pub topic: String,
}

#[derive(Serialize)]
pub struct SourceStatus {
    pub name: String,
    pub availability: Availability,
}

async fn topic_form(State(state): State<SharedState>) -> Html<String> {
    let rendered = state
        .templates
        .get_template("index.html")
        .and_then(|t| t.render(context! { title => "Literature Review Assistant" }));
    match rendered {
        Ok(html) => Html(html),
        Err(e) => {
            tracing::warn!("template unavailable, serving inline form: {e}");
            Html(FALLBACK_FORM.to_string())
        }
    }
}

async fn search(
    State(state): State<SharedState>,
    Form(form): Form<SearchForm>,
) -> Result<Response, AppError> {
    tracing::info!(topic = %form.topic, "search request");
    let papers = gather_papers(&state.sources, &form.topic).await;
    let path = state
        .store
        .write_report(&papers, &form.topic, state.config.similarity_threshold)?;
    let bytes = tokio::fs::read(&path).await.map_err(ReportError::Io)?;

    let headers = [
        (header::CONTENT_TYPE, DOCX_CONTENT_TYPE.to_string()),
        (header::CONTENT_DISPOSITION, content_disposition(&form.topic)),
    ];
    Ok((headers, bytes).into_response())
}

/// Attachment header for a topic's report. Quotes and control characters
/// are stripped from the download name: either would corrupt the
/// quoted-string or make the header value unrepresentable.
fn content_disposition(topic: &str) -> String {
    let filename: String = report_filename(topic)
        .chars()
        .filter(|c| !c.is_control() && *c != '"')
        .collect();
    format!("attachment; filename=\"{filename}\"")
}

async fn list_sources(State(state): State<SharedState>) -> Json<Vec<SourceStatus>> {
    let statuses = state
        .sources
        .iter()
        .map(|s| SourceStatus {
            name: s.name().to_string(),
            availability: s.availability(),
        })
        .collect();
    Json(statuses)
}

/// Report-generation failures abort the request with a 500.
pub struct AppError(ReportError);

impl From<ReportError> for AppError {
    fn from(e: ReportError) -> Self {
        Self(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("report generation failed: {}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, "report generation failed").into_response()
    }
}
