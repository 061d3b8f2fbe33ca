use std::path::PathBuf;
use std::sync::Arc;
use crate::cli::commands::EvaluateArgs;
use otes::errors::OtesError;
use otes::llm::{OpenAIProvider, ThreatEvaluator};
use otes::storage::{ensure_allowed, sanitize_url};
use tracing::info;

/// Offline counterpart of the upload route: same sniffing and evaluation,
/// no persistence and no evaluation log.
pub async fn handle_evaluate(args: EvaluateArgs) -> Result<(), OtesError> {
    let (settings, api_key) = super::load_settings(&args.settings).await?;
    let api_key = api_key.ok_or_else(|| OtesError::Config("OpenAI API key not configured".into()))?;

    let path = PathBuf::from(&args.screenshot);
    let bytes = tokio::fs::read(&path).await?;
    let sniffed = ensure_allowed(&bytes)?;
    let url = sanitize_url(args.url.as_deref());

    let provider = OpenAIProvider::new(api_key, &settings.openai)?;
    let evaluator = ThreatEvaluator::new(Arc::new(provider), settings.openai.label_png_as_jpeg);

    info!(file = %path.display(), url = %url, model = evaluator.model_name(), "Evaluating screenshot");
    let threat = evaluator.evaluate_threat(&path, sniffed).await;

    println!("{}", threat);
    Ok(())
}
