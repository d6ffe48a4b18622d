//! Community Finder HTTP server.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use community_finder::adapters::{
    api_router, http::with_middleware, CsvSurveyDataset, FileMetadataSource, FileModelRepository,
    LlmNarrativeService, OpenAIConfig, OpenAIProviderFactory,
};
use community_finder::application::AppContext;
use community_finder::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let data = &config.data;
    let dataset = CsvSurveyDataset::new(&data.dataset_path).with_delimiter(data.delimiter_byte()?);
    let providers = OpenAIProviderFactory::new(
        OpenAIConfig::new()
            .with_model(&config.ai.model)
            .with_base_url(&config.ai.base_url)
            .with_timeout(config.ai.timeout())
            .with_max_retries(config.ai.max_retries),
    )?;

    let context = Arc::new(AppContext::new(
        Arc::new(FileModelRepository::new(&data.model_dir)),
        data.model_name.clone(),
        Arc::new(dataset),
        Arc::new(FileMetadataSource::new(&data.metadata_path)),
        Arc::new(LlmNarrativeService::new(Arc::new(providers))),
    ));

    match context.warm_up().await {
        Ok(()) => tracing::info!(model = %data.model_name, "model, metadata and population loaded"),
        Err(e) => tracing::error!(error = %e, "warm-up failed; loads will be retried on demand"),
    }

    let app = with_middleware(
        api_router(context),
        config.server.request_timeout(),
        &config.server.cors_origins_list(),
    );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "community finder listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
