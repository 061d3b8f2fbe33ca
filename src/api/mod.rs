pub mod errors;
pub mod models;
pub mod routes;

use std::sync::Arc;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use crate::audit::EvaluationLog;
use crate::config::{ApiKey, Settings};
use crate::errors::OtesError;
use crate::llm::{OpenAIProvider, ThreatEvaluator};
use crate::storage::UploadStore;

/// Headroom for multipart boundaries and the url field on top of the file.
const FORM_OVERHEAD_BYTES: usize = 64 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    /// `None` when no API key resolved; every upload route then answers 500.
    pub evaluator: Option<ThreatEvaluator>,
    pub store: UploadStore,
    pub log: EvaluationLog,
}

pub fn create_app_state(settings: Settings, api_key: Option<ApiKey>) -> Result<AppState, OtesError> {
    let evaluator = match api_key {
        Some(key) => {
            let provider = OpenAIProvider::new(key, &settings.openai)?;
            Some(ThreatEvaluator::new(Arc::new(provider), settings.openai.label_png_as_jpeg))
        }
        None => None,
    };

    Ok(AppState {
        store: UploadStore::new(settings.upload_dir.clone()),
        log: EvaluationLog::new(settings.log_file.clone()),
        settings: Arc::new(settings),
        evaluator,
    })
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.settings.max_upload_bytes.saturating_add(FORM_OVERHEAD_BYTES);

    let upload = post(routes::upload::upload_screenshot).fallback(routes::upload::reject_method);

    Router::new()
        .route("/", upload.clone())
        .route("/evaluate", upload)
        .route("/health", get(routes::health::health_check))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
