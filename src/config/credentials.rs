use std::fmt;
use std::path::Path;
use std::sync::OnceLock;
use regex::Regex;
use tracing::{debug, warn};

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Bearer credential for the completion API. Never printed in full.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Returns `None` for blank values.
    pub fn new(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

/// Resolve the API key: environment first, then the fallback key file.
pub fn resolve_api_key(fallback_file: &Path) -> Option<ApiKey> {
    if let Ok(value) = std::env::var(API_KEY_ENV) {
        if let Some(key) = ApiKey::new(&value) {
            debug!(var = API_KEY_ENV, "Resolved API key from environment");
            return Some(key);
        }
    }

    let content = match std::fs::read_to_string(fallback_file) {
        Ok(content) => content,
        Err(e) => {
            debug!(path = %fallback_file.display(), error = %e, "No fallback key file");
            return None;
        }
    };

    let key = parse_key_file(&content);
    match &key {
        Some(_) => debug!(path = %fallback_file.display(), "Resolved API key from fallback file"),
        None => warn!(path = %fallback_file.display(), "Fallback key file holds no usable key"),
    }
    key
}

/// Accepts either a bare key on the first non-empty line or a legacy
/// assignment such as `$api_key = 'sk-...';`.
pub fn parse_key_file(content: &str) -> Option<ApiKey> {
    static ASSIGNMENT: OnceLock<Regex> = OnceLock::new();
    let assignment = ASSIGNMENT.get_or_init(|| {
        Regex::new(r#"\$?api_key\s*=\s*["']([^"']*)["']"#).expect("valid key assignment regex")
    });

    if let Some(caps) = assignment.captures(content) {
        return ApiKey::new(&caps[1]);
    }

    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with("<?"))
        .find_map(ApiKey::new)
}

const MIN_REDACTED_LEN: usize = 4;

/// Mask every occurrence of the given secrets. Secrets shorter than
/// `MIN_REDACTED_LEN` are left alone.
pub fn redact_credentials(text: &str, secrets: &[&str]) -> String {
    secrets
        .iter()
        .filter(|secret| secret.len() >= MIN_REDACTED_LEN)
        .fold(text.to_string(), |acc, secret| acc.replace(secret, "[REDACTED]"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_key_is_none() {
        assert!(ApiKey::new("").is_none());
        assert!(ApiKey::new("   \n").is_none());
    }

    #[test]
    fn debug_never_shows_key() {
        let key = ApiKey::new("sk-supersecret").unwrap();
        assert!(!format!("{:?}", key).contains("supersecret"));
    }

    #[test]
    fn parse_bare_key_file() {
        let key = parse_key_file("\n  sk-abc123  \n").unwrap();
        assert_eq!(key.expose(), "sk-abc123");
    }

    #[test]
    fn parse_legacy_assignment() {
        let key = parse_key_file("<?php\n$api_key = 'sk-legacy';\n?>").unwrap();
        assert_eq!(key.expose(), "sk-legacy");
    }

    #[test]
    fn parse_empty_assignment_is_none() {
        assert!(parse_key_file("$api_key = \"\";").is_none());
    }

    #[test]
    fn redact_masks_every_occurrence_of_key() {
        let detail = "request to http://proxy/sk-abc123/v1 failed (token sk-abc123)";
        let redacted = redact_credentials(detail, &[ApiKey::new("sk-abc123").unwrap().expose()]);
        assert_eq!(redacted, "request to http://proxy/[REDACTED]/v1 failed (token [REDACTED])");
    }

    #[test]
    fn redact_skips_blank_and_tiny_secrets() {
        assert_eq!(redact_credentials("timeout after 30s", &["", "30"]), "timeout after 30s");
    }
}
