use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use doc_translator::application::services::TranslationService;
use doc_translator::domain::MAX_FILE_SIZE_BYTES;
use doc_translator::infrastructure::observability::{TracingConfig, init_tracing};
use doc_translator::infrastructure::storage::LocalStagingStore;
use doc_translator::infrastructure::text_processing::ExtractorFactory;
use doc_translator::infrastructure::translation::TranslationProviderFactory;
use doc_translator::presentation::config::API_KEY_ENV;
use doc_translator::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(|e: String| anyhow::anyhow!(e))
        .context("Failed to parse APP_ENVIRONMENT")?;

    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(
        &TracingConfig {
            environment: environment.to_string(),
            level: settings.logging.level.clone(),
            json_format: settings.logging.enable_json,
        },
        settings.server.port,
    );

    if !settings.api_key_configured() {
        tracing::warn!(
            env = API_KEY_ENV,
            "Translation API key not set; translation requests will fail until it is configured"
        );
    }

    let file_loader = Arc::new(ExtractorFactory::create(&settings.extraction));
    let provider = TranslationProviderFactory::create(&settings.provider)
        .context("Failed to create translation provider")?;

    let staging_store = Arc::new(
        LocalStagingStore::new(PathBuf::from(&settings.storage.upload_dir), MAX_FILE_SIZE_BYTES)
            .context("Failed to prepare upload directory")?,
    );
    tracing::info!(
        upload_dir = %staging_store.base_path().display(),
        max_file_size = MAX_FILE_SIZE_BYTES,
        "Staging store ready"
    );

    let translation_service = Arc::new(TranslationService::new(file_loader, provider));

    let state = AppState {
        translation_service,
        staging_store,
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
