use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use orzecznik::adjudicator::GeminiClient;
use orzecznik::api::{api_router, ApiContext};
use orzecznik::config;
use orzecznik::db::sqlite::open_database;
use orzecznik::export::TagTemplateEngine;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let data_dir = config::app_data_dir();
    std::fs::create_dir_all(&data_dir)?;

    let conn = open_database(&config::database_path())?;

    let api_key = std::env::var(config::GEMINI_API_KEY_ENV).unwrap_or_default();
    if api_key.is_empty() {
        tracing::warn!(
            "{} is not set; reasoning endpoints will fail upstream",
            config::GEMINI_API_KEY_ENV
        );
    }
    let llm = GeminiClient::new(
        config::GEMINI_BASE_URL,
        config::GEMINI_MODEL,
        &api_key,
        config::GEMINI_TIMEOUT_SECS,
    )?;

    // Missing rules file means empty rules, not a startup failure.
    let rules = std::fs::read_to_string(config::rules_path()).unwrap_or_default();
    if rules.is_empty() {
        tracing::warn!(path = %config::rules_path().display(), "Rules database not found, prompts go out without precedents");
    }

    let template = std::fs::read(config::template_path()).unwrap_or_default();
    if template.is_empty() {
        tracing::warn!(path = %config::template_path().display(), "Accident-card template not found, exports will render empty documents");
    }

    let ctx = ApiContext::new(conn, Arc::new(llm), rules, template, Arc::new(TagTemplateEngine));
    let app = api_router(ctx);

    let listener = tokio::net::TcpListener::bind(config::DEFAULT_BIND_ADDR).await?;
    tracing::info!("Listening on {}", config::DEFAULT_BIND_ADDR);
    axum::serve(listener, app).await?;

    Ok(())
}
