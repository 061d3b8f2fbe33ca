mod cli;

use clap::Parser;
use otes::errors::OtesError;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .init();

    let result = match cli.command {
        cli::Commands::Serve(args) => cli::serve::handle_serve(args).await,
        cli::Commands::Evaluate(args) => cli::evaluate::handle_evaluate(args).await,
        cli::Commands::Validate(args) => handle_validate(args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let exit_code = match &e {
            OtesError::Config(_) => 2,
            _ => 1,
        };
        std::process::exit(exit_code);
    }
}

async fn handle_validate(args: cli::commands::ValidateArgs) -> Result<(), OtesError> {
    let (settings, api_key) = cli::load_settings(&args.settings).await?;
    println!("Configuration is valid");
    println!("  model:      {}", settings.openai.model);
    println!("  endpoint:   {}", settings.openai.base_url);
    println!("  upload dir: {}", settings.upload_dir.display());
    println!("  log file:   {}", settings.log_file.display());
    match api_key {
        Some(_) => println!("  api key:    configured"),
        None => {
            return Err(OtesError::Config(format!(
                "no API key in {} or {}",
                otes::config::API_KEY_ENV,
                settings.key_file.display()
            )));
        }
    }
    Ok(())
}
