use std::path::PathBuf;
use serde::{Deserialize, Serialize};

/// Vision model used when no override is configured.
pub const DEFAULT_VISION_MODEL: &str = "gpt-4.1-mini";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub upload_dir: PathBuf,
    pub log_file: PathBuf,
    pub key_file: PathBuf,
    pub max_upload_bytes: usize,
    pub openai: OpenAIConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            upload_dir: PathBuf::from("./uploads"),
            log_file: PathBuf::from("./otes_log.txt"),
            key_file: PathBuf::from("./init.key"),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            openai: OpenAIConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OpenAIConfig {
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub image_detail: ImageDetail,
    pub timeout_secs: u64,
    /// Label every inline image as `image/jpeg`, including PNG uploads.
    pub label_png_as_jpeg: bool,
}

impl Default for OpenAIConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            model: DEFAULT_VISION_MODEL.to_string(),
            max_tokens: 250,
            image_detail: ImageDetail::Low,
            timeout_secs: 30,
            label_png_as_jpeg: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ImageDetail {
    #[default]
    Low,
    High,
    Auto,
}

impl ImageDetail {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageDetail::Low => "low",
            ImageDetail::High => "high",
            ImageDetail::Auto => "auto",
        }
    }
}
