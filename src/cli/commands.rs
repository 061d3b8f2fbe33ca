use clap::{Parser, Subcommand, Args};

#[derive(Parser)]
#[command(name = "otes", version, about = "Screenshot phishing evaluation service")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP upload endpoint
    Serve(ServeArgs),
    /// Evaluate a local screenshot once and print the threat level
    Evaluate(EvaluateArgs),
    /// Check configuration and credential resolution
    Validate(ValidateArgs),
}

/// Options shared by every command that needs settings.
#[derive(Args, Clone, Default)]
pub struct SettingsArgs {
    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Fallback file holding the API key when OPENAI_API_KEY is unset
    #[arg(long)]
    pub key_file: Option<String>,

    /// Vision model identifier
    #[arg(long)]
    pub model: Option<String>,
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Listen port
    #[arg(long)]
    pub port: Option<u16>,

    /// Listen address
    #[arg(long)]
    pub host: Option<String>,

    /// Directory for persisted screenshots
    #[arg(long)]
    pub upload_dir: Option<String>,

    /// Append-only evaluation log
    #[arg(long)]
    pub log_file: Option<String>,
}

#[derive(Args, Clone)]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Screenshot to evaluate (JPEG or PNG)
    pub screenshot: String,

    /// Page URL, used only as a label
    #[arg(short, long)]
    pub url: Option<String>,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,
}
