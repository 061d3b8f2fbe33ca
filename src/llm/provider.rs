use async_trait::async_trait;
use crate::errors::OtesError;

#[async_trait]
pub trait VisionProvider: Send + Sync {
    /// Send `prompt` plus one inline image and return the raw response body.
    ///
    /// The body is returned even for non-2xx statuses as long as it is
    /// syntactically valid JSON.
    async fn analyze_image(
        &self,
        prompt: &str,
        image_data_uri: &str,
    ) -> Result<String, OtesError>;

    /// Provider name for logging
    fn provider_name(&self) -> &str;

    /// Model identifier
    fn model_name(&self) -> &str;
}
