use serde::Serialize;
use serde_json::{json, Value};

/// Raw evaluation payload handed back to the caller as `threatLevel`.
///
/// Either the completion API's response body, verbatim, or an
/// `{"ERROR": "..."}` document produced locally when evaluation failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ThreatLevel(String);

impl ThreatLevel {
    pub fn from_raw(raw: String) -> Self {
        Self(raw)
    }

    pub fn failure(detail: &str) -> Self {
        Self(json!({ "ERROR": detail }).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compact form for line-oriented sinks. Valid JSON is re-serialized
    /// without whitespace; anything else has its line breaks escaped.
    pub fn single_line(&self) -> String {
        match serde_json::from_str::<Value>(&self.0) {
            Ok(value) => value.to_string(),
            Err(_) => self.0.replace('\r', "\\r").replace('\n', "\\n"),
        }
    }

    pub fn verdict(&self) -> Verdict {
        Verdict::from_completion(&self.0)
    }
}

impl std::fmt::Display for ThreatLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Best-effort typed reading of a [`ThreatLevel`]. Model output is untrusted,
/// so anything off-contract lands in `Unparsed` rather than failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Model scored the page.
    Assessment { percent: u8, justification: String },
    /// Model declined, e.g. blank page or browser error page.
    Refused { reason: String },
    /// Evaluation never produced a model answer.
    Failed { detail: String },
    Unparsed,
}

impl Verdict {
    pub fn from_completion(raw: &str) -> Self {
        let Ok(body) = serde_json::from_str::<Value>(raw) else {
            return Verdict::Unparsed;
        };

        if let Some(detail) = body.get("ERROR").and_then(Value::as_str) {
            return Verdict::Failed { detail: detail.to_string() };
        }

        if let Some(message) = body.pointer("/error/message").and_then(Value::as_str) {
            return Verdict::Failed { detail: message.to_string() };
        }

        let Some(content) = body.pointer("/choices/0/message/content").and_then(Value::as_str) else {
            return Verdict::Unparsed;
        };

        Self::from_model_output(content)
    }

    /// Parse the JSON the model was instructed to emit.
    pub fn from_model_output(content: &str) -> Self {
        let Ok(output) = serde_json::from_str::<Value>(strip_code_fence(content)) else {
            return Verdict::Unparsed;
        };

        if let Some(reason) = output.get("ERROR").and_then(Value::as_str) {
            return Verdict::Refused { reason: reason.to_string() };
        }

        let percent = output
            .get("phishing_likelihood_percent")
            .and_then(Value::as_f64)
            .filter(|p| (0.0..=100.0).contains(p));

        match percent {
            Some(p) => Verdict::Assessment {
                percent: p.round() as u8,
                justification: output
                    .get("justification")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
            },
            None => Verdict::Unparsed,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Assessment { .. } => "assessment",
            Verdict::Refused { .. } => "refused",
            Verdict::Failed { .. } => "failed",
            Verdict::Unparsed => "unparsed",
        }
    }

    pub fn percent(&self) -> Option<u8> {
        match self {
            Verdict::Assessment { percent, .. } => Some(*percent),
            _ => None,
        }
    }
}

fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}
