use tracing_subscriber::EnvFilter;

mod citation;
mod config;
mod report;
mod search;
mod similarity;
mod sources;
mod web;

use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    let addr = config.bind_addr;

    let state = web::AppState::new(config)?;
    tracing::info!(
        sources = state.sources.len(),
        reports = %state.store.dir().display(),
        "initialized"
    );

    let app = web::build_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on http://{addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
