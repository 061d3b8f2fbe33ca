use serde::Serialize;
use crate::models::ThreatLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Envelope for every handled request. Upload outcome lives in `status`;
/// evaluation outcome lives inside `threat_level`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub status: ResponseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threat_level: Option<ThreatLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl UploadResponse {
    pub fn success(file: String, url: String, threat_level: ThreatLevel) -> Self {
        Self {
            status: ResponseStatus::Success,
            file: Some(file),
            url: Some(url),
            threat_level: Some(threat_level),
            message: None,
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            status: ResponseStatus::Error,
            file: None,
            url: None,
            threat_level: None,
            message: Some(message.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_envelope_has_only_status_and_message() {
        let body = serde_json::to_value(UploadResponse::error("Invalid request")).unwrap();
        assert_eq!(body, json!({"status": "error", "message": "Invalid request"}));
    }

    #[test]
    fn success_envelope_uses_camel_case() {
        let resp = UploadResponse::success(
            "abc_shot.png".into(),
            "http://example.com".into(),
            ThreatLevel::from_raw("{}".into()),
        );
        let body = serde_json::to_value(resp).unwrap();
        assert_eq!(body["threatLevel"], "{}");
        assert_eq!(body["file"], "abc_shot.png");
        assert!(body.get("message").is_none());
    }
}
