pub mod evaluate;
pub mod openai;
pub mod prompt;
pub mod provider;
pub mod types;

pub use evaluate::{data_uri, ThreatEvaluator};
pub use openai::OpenAIProvider;
pub use prompt::PHISHING_PROMPT;
pub use provider::VisionProvider;
