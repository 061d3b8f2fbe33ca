use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::Method,
    Json,
};
use tracing::{info, warn};
use crate::api::models::UploadResponse;
use crate::api::AppState;
use crate::errors::OtesError;
use crate::llm::ThreatEvaluator;
use crate::models::UploadRequest;
use crate::storage::{ensure_allowed, sanitize_url};

pub const SCREENSHOT_FIELD: &str = "screenshot";
pub const URL_FIELD: &str = "url";

/// `POST /`: validate, persist, evaluate, log, respond.
#[tracing::instrument(skip_all, fields(operation = "evaluate_screenshot"))]
pub async fn upload_screenshot(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, OtesError> {
    let evaluator = require_evaluator(&state)?;

    let multipart = multipart.map_err(|e| OtesError::InvalidRequest(e.body_text()))?;
    let upload = read_upload(multipart).await?;

    let sniffed = ensure_allowed(&upload.screenshot_bytes)?;
    info!(
        url = %upload.url,
        bytes = upload.size(),
        sniffed = sniffed,
        declared = ?upload.declared_mime_type,
        "Screenshot accepted"
    );

    let stored = state.store.persist(&upload.screenshot_bytes, &upload.declared_file_name).await?;
    let threat = evaluator.evaluate_threat(&stored.path, sniffed).await;

    if let Err(e) = state.log.append(&upload.url, &threat).await {
        warn!(error = %e, path = %state.log.path().display(), "Failed to append evaluation log");
    }

    Ok(Json(UploadResponse::success(stored.file_name, upload.url, threat)))
}

/// Any non-POST method on an upload route.
pub async fn reject_method(
    State(state): State<AppState>,
    method: Method,
) -> Result<Json<UploadResponse>, OtesError> {
    require_evaluator(&state)?;
    Err(OtesError::InvalidRequest(format!("method {} not allowed", method)))
}

fn require_evaluator(state: &AppState) -> Result<ThreatEvaluator, OtesError> {
    state
        .evaluator
        .clone()
        .ok_or_else(|| OtesError::Config("OpenAI API key not configured".into()))
}

struct ScreenshotPart {
    file_name: String,
    content_type: Option<String>,
    bytes: Vec<u8>,
}

/// Pull the screenshot and url fields out of the form. Other fields are
/// drained and ignored; only the first screenshot file part counts.
async fn read_upload(mut multipart: Multipart) -> Result<UploadRequest, OtesError> {
    let mut screenshot: Option<ScreenshotPart> = None;
    let mut raw_url: Option<String> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return Err(OtesError::UploadTransport(e.body_text())),
        };

        let name = field.name().map(str::to_string);
        match name.as_deref() {
            // a part without a filename is a plain form value, not a file
            Some(SCREENSHOT_FIELD) if screenshot.is_none() && field.file_name().is_some() => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| OtesError::UploadTransport(e.body_text()))?;
                screenshot = Some(ScreenshotPart { file_name, content_type, bytes: bytes.to_vec() });
            }
            Some(URL_FIELD) if raw_url.is_none() => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| OtesError::UploadTransport(e.body_text()))?;
                raw_url = Some(text);
            }
            _ => {
                // drain so the stream advances past unknown parts
                field
                    .bytes()
                    .await
                    .map_err(|e| OtesError::UploadTransport(e.body_text()))?;
            }
        }
    }

    let part = screenshot
        .ok_or_else(|| OtesError::InvalidRequest(format!("missing '{}' field", SCREENSHOT_FIELD)))?;

    // a file input left empty arrives with `filename=""` and no bytes
    if part.bytes.is_empty() && part.file_name.is_empty() {
        return Err(OtesError::UploadTransport("no file selected".into()));
    }

    Ok(UploadRequest {
        url: sanitize_url(raw_url.as_deref()),
        screenshot_bytes: part.bytes,
        declared_file_name: part.file_name,
        declared_mime_type: part.content_type,
    })
}
