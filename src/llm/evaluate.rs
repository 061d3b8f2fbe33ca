use std::path::Path;
use std::sync::Arc;
use base64::Engine;
use tracing::{info, warn};
use crate::errors::OtesError;
use crate::models::ThreatLevel;
use super::prompt::PHISHING_PROMPT;
use super::provider::VisionProvider;

/// Runs one screenshot through a [`VisionProvider`]. Never fails: every
/// error becomes an `{"ERROR": ...}` threat level.
#[derive(Clone)]
pub struct ThreatEvaluator {
    provider: Arc<dyn VisionProvider>,
    label_png_as_jpeg: bool,
}

impl ThreatEvaluator {
    pub fn new(provider: Arc<dyn VisionProvider>, label_png_as_jpeg: bool) -> Self {
        Self { provider, label_png_as_jpeg }
    }

    pub fn model_name(&self) -> &str {
        self.provider.model_name()
    }

    pub async fn evaluate_threat(&self, path: &Path, sniffed_mime: &str) -> ThreatLevel {
        match self.try_evaluate(path, sniffed_mime).await {
            Ok(raw) => {
                let threat = ThreatLevel::from_raw(raw);
                let verdict = threat.verdict();
                info!(
                    provider = self.provider.provider_name(),
                    model = self.provider.model_name(),
                    verdict = verdict.label(),
                    percent = ?verdict.percent(),
                    "Screenshot evaluated"
                );
                threat
            }
            Err(e) => {
                warn!(error = %e, "Evaluation failed");
                let detail = e.evaluation_detail().unwrap_or_else(|| e.to_string());
                ThreatLevel::failure(&detail)
            }
        }
    }

    async fn try_evaluate(&self, path: &Path, sniffed_mime: &str) -> Result<String, OtesError> {
        if !path.exists() {
            return Err(OtesError::RemoteRead("Screenshot not found".into()));
        }
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|_| OtesError::RemoteRead("Unable to read screenshot".into()))?;

        let mime = if self.label_png_as_jpeg { "image/jpeg" } else { sniffed_mime };
        let uri = data_uri(&bytes, mime);

        self.provider.analyze_image(PHISHING_PROMPT, &uri).await
    }
}

pub fn data_uri(bytes: &[u8], mime: &str) -> String {
    format!(
        "data:{};base64,{}",
        mime,
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}
