pub mod commands;
pub mod evaluate;
pub mod serve;

pub use commands::{Cli, Commands};

use std::path::PathBuf;
use otes::config::{parse_settings, resolve_api_key, validate_settings, ApiKey, Settings};
use otes::errors::OtesError;
use commands::SettingsArgs;
use tracing::debug;

/// Settings file (if any) with CLI overrides applied, plus the credential.
/// Both are resolved exactly once per process.
pub async fn load_settings(args: &SettingsArgs) -> Result<(Settings, Option<ApiKey>), OtesError> {
    let mut settings = match &args.config {
        Some(path) => parse_settings(&PathBuf::from(path)).await?,
        None => Settings::default(),
    };

    if let Some(key_file) = &args.key_file {
        settings.key_file = PathBuf::from(key_file);
    }
    if let Some(model) = &args.model {
        settings.openai.model = model.clone();
    }
    validate_settings(&settings)?;

    let api_key = resolve_api_key(&settings.key_file);
    debug!(configured = api_key.is_some(), model = %settings.openai.model, "Settings loaded");
    Ok((settings, api_key))
}
