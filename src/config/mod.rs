pub mod credentials;
pub mod parser;
pub mod types;

pub use credentials::{redact_credentials, resolve_api_key, ApiKey, API_KEY_ENV};
pub use parser::{parse_settings, validate_settings};
pub use types::*;
