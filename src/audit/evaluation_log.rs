use std::path::{Path, PathBuf};
use chrono::Local;
use tokio::io::AsyncWriteExt;
use crate::errors::OtesError;
use crate::models::ThreatLevel;

/// Append-only text log, one line per evaluated upload.
#[derive(Debug, Clone)]
pub struct EvaluationLog {
    path: PathBuf,
}

impl EvaluationLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn append(&self, url: &str, threat: &ThreatLevel) -> Result<(), OtesError> {
        let line = format_line(&Local::now().format("%Y-%m-%d %H:%M:%S").to_string(), url, threat);
        let mut file = tokio::fs::OpenOptions::new()
            .create(true).append(true).open(&self.path).await?;
        // one write call per line so concurrent appends do not interleave
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}

fn format_line(timestamp: &str, url: &str, threat: &ThreatLevel) -> String {
    format!("{} - Evaluated {}, Threat: {}\n", timestamp, url, threat.single_line())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn line_format() {
        let threat = ThreatLevel::failure("x");
        assert_eq!(
            format_line("2024-01-02 03:04:05", "http://example.com", &threat),
            "2024-01-02 03:04:05 - Evaluated http://example.com, Threat: {\"ERROR\":\"x\"}\n"
        );
    }

    #[tokio::test]
    async fn appends_without_truncating() {
        let tmp = TempDir::new().unwrap();
        let log = EvaluationLog::new(tmp.path().join("otes_log.txt"));

        log.append("http://a.example", &ThreatLevel::from_raw("{}".into())).await.unwrap();
        log.append("http://b.example", &ThreatLevel::from_raw("{}".into())).await.unwrap();

        let content = std::fs::read_to_string(log.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(" - Evaluated http://a.example, Threat: {}"));
        assert!(lines[1].contains("Evaluated http://b.example"));
    }

    #[tokio::test]
    async fn pretty_printed_payload_is_one_line_on_disk() {
        let tmp = TempDir::new().unwrap();
        let log = EvaluationLog::new(tmp.path().join("otes_log.txt"));
        let raw = "{\n  \"id\": \"chatcmpl-1\",\n  \"choices\": []\n}\n";

        log.append("http://example.com", &ThreatLevel::from_raw(raw.into())).await.unwrap();

        let content = std::fs::read_to_string(log.path()).unwrap();
        assert_eq!(content.lines().count(), 1, "unexpected content {:?}", content);
        assert!(
            content.ends_with(" - Evaluated http://example.com, Threat: {\"choices\":[],\"id\":\"chatcmpl-1\"}\n"),
            "unexpected content {:?}",
            content
        );
    }

    #[tokio::test]
    async fn timestamp_prefix_shape() {
        let tmp = TempDir::new().unwrap();
        let log = EvaluationLog::new(tmp.path().join("log.txt"));
        log.append("unknown", &ThreatLevel::from_raw("{}".into())).await.unwrap();

        let content = std::fs::read_to_string(log.path()).unwrap();
        let re = regex::Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2} - Evaluated unknown, Threat: \{\}\n$").unwrap();
        assert!(re.is_match(&content), "unexpected line {:?}", content);
    }
}
