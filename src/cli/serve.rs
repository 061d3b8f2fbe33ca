use std::path::PathBuf;
use crate::cli::commands::ServeArgs;
use otes::api;
use otes::config::API_KEY_ENV;
use otes::errors::OtesError;
use tracing::{info, warn};

pub async fn handle_serve(args: ServeArgs) -> Result<(), OtesError> {
    let (mut settings, api_key) = super::load_settings(&args.settings).await?;

    if let Some(host) = args.host {
        settings.host = host;
    }
    if let Some(port) = args.port {
        settings.port = port;
    }
    if let Some(dir) = args.upload_dir {
        settings.upload_dir = PathBuf::from(dir);
    }
    if let Some(file) = args.log_file {
        settings.log_file = PathBuf::from(file);
    }

    if api_key.is_none() {
        warn!(
            env = API_KEY_ENV,
            key_file = %settings.key_file.display(),
            "No API key configured; uploads will be answered with HTTP 500"
        );
    }

    let addr = format!("{}:{}", settings.host, settings.port);
    info!(
        addr = %addr,
        model = %settings.openai.model,
        upload_dir = %settings.upload_dir.display(),
        log_file = %settings.log_file.display(),
        "Starting API server"
    );

    let state = api::create_app_state(settings, api_key)?;
    let app = api::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| OtesError::Internal(format!("Server error: {}", e)))?;

    Ok(())
}
