use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};
use crate::config::{redact_credentials, ApiKey, ImageDetail, OpenAIConfig};
use crate::errors::OtesError;
use super::provider::VisionProvider;
use super::types::{ChatMessage, ChatRequest};

pub struct OpenAIProvider {
    client: Client,
    api_key: ApiKey,
    model: String,
    base_url: String,
    max_tokens: u32,
    detail: ImageDetail,
}

impl OpenAIProvider {
    pub fn new(api_key: ApiKey, config: &OpenAIConfig) -> Result<Self, OtesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| OtesError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_tokens: config.max_tokens,
            detail: config.image_detail,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Transport details end up in logs and in the caller-visible `ERROR`.
    fn transport_error(&self, e: reqwest::Error) -> OtesError {
        OtesError::RemoteTransport(redact_credentials(&e.to_string(), &[self.api_key.expose()]))
    }
}

#[async_trait]
impl VisionProvider for OpenAIProvider {
    async fn analyze_image(&self, prompt: &str, image_data_uri: &str) -> Result<String, OtesError> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage::user_with_image(prompt, image_data_uri, self.detail.as_str())],
            max_tokens: self.max_tokens,
        };

        // single attempt; the only await that leaves the process
        let resp = self.client
            .post(self.endpoint())
            .bearer_auth(self.api_key.expose())
            .json(&body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = resp.status();
        let text = resp.text()
            .await
            .map_err(|e| self.transport_error(e))?;

        if let Err(e) = serde_json::from_str::<serde_json::Value>(&text) {
            return Err(OtesError::RemoteParse(e.to_string()));
        }

        if status.is_success() {
            debug!(status = status.as_u16(), bytes = text.len(), "Completion received");
        } else {
            warn!(status = status.as_u16(), model = %self.model, "Completion API returned an error status");
        }

        Ok(text)
    }

    fn provider_name(&self) -> &str { "openai" }
    fn model_name(&self) -> &str { &self.model }
}
