use std::path::Path;
use crate::errors::OtesError;
use super::types::Settings;
use tracing::warn;

const MAX_CONFIG_BYTES: u64 = 1_048_576;

pub async fn parse_settings(path: &Path) -> Result<Settings, OtesError> {
    if !path.exists() {
        return Err(OtesError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > MAX_CONFIG_BYTES {
        return Err(OtesError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    if content.trim().is_empty() {
        warn!(path = %path.display(), "Config file is empty, using defaults");
        return Ok(Settings::default());
    }

    let settings: Settings = serde_yaml::from_str(&content)?;
    validate_settings(&settings)?;

    Ok(settings)
}

/// Reject values that would make the service unusable at request time.
pub fn validate_settings(settings: &Settings) -> Result<(), OtesError> {
    if settings.max_upload_bytes == 0 {
        return Err(OtesError::Config("max_upload_bytes must be greater than zero".into()));
    }
    if settings.openai.max_tokens == 0 {
        return Err(OtesError::Config("openai.max_tokens must be greater than zero".into()));
    }
    if settings.openai.timeout_secs == 0 {
        return Err(OtesError::Config("openai.timeout_secs must be greater than zero".into()));
    }
    if settings.openai.model.trim().is_empty() {
        return Err(OtesError::Config("openai.model must not be empty".into()));
    }
    if !settings.openai.base_url.starts_with("http://") && !settings.openai.base_url.starts_with("https://") {
        return Err(OtesError::Config(format!(
            "openai.base_url must be an http(s) URL, got '{}'",
            settings.openai.base_url
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::{ImageDetail, DEFAULT_VISION_MODEL};
    use std::io::Write;

    #[tokio::test]
    async fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port: 9090\nopenai:\n  image_detail: high").unwrap();

        let settings = parse_settings(file.path()).await.unwrap();
        assert_eq!(settings.port, 9090);
        assert_eq!(settings.host, "0.0.0.0");
        assert_eq!(settings.openai.image_detail, ImageDetail::High);
        assert_eq!(settings.openai.model, DEFAULT_VISION_MODEL);
        assert_eq!(settings.openai.max_tokens, 250);
    }

    #[tokio::test]
    async fn missing_file_is_config_error() {
        let err = parse_settings(Path::new("/nonexistent/otes.yaml")).await.unwrap_err();
        assert!(matches!(err, OtesError::Config(_)));
    }

    #[tokio::test]
    async fn zero_timeout_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "openai:\n  timeout_secs: 0").unwrap();

        let err = parse_settings(file.path()).await.unwrap_err();
        assert!(err.to_string().contains("timeout_secs"));
    }

    #[test]
    fn non_http_base_url_rejected() {
        let mut settings = Settings::default();
        settings.openai.base_url = "ftp://example.com".into();
        assert!(validate_settings(&settings).is_err());
    }
}
