use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{FileLoader, TranslationProvider};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    health_handler, languages_handler, translate_text_handler, upload_handler,
};
use crate::presentation::state::AppState;

/// Slack on top of the file ceiling for multipart framing and text fields.
const MULTIPART_OVERHEAD_BYTES: u64 = 1024 * 1024;

pub fn create_router<F, P>(state: AppState<F, P>) -> Router
where
    F: FileLoader + 'static,
    P: TranslationProvider + ?Sized + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let body_limit = state.staging_store.max_file_size() + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health_handler::<F, P>))
        .route("/languages", get(languages_handler::<F, P>))
        .route("/translate-text", post(translate_text_handler::<F, P>))
        .route("/upload", post(upload_handler::<F, P>))
        .layer(DefaultBodyLimit::max(body_limit as usize))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
