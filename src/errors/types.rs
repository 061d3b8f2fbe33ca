use thiserror::Error;

#[derive(Debug, Error)]
pub enum OtesError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Upload transport error: {0}")]
    UploadTransport(String),

    #[error("Invalid file type: {0}")]
    FileType(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Screenshot read error: {0}")]
    RemoteRead(String),

    #[error("Transport error: {0}")]
    RemoteTransport(String),

    #[error("Invalid JSON response: {0}")]
    RemoteParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl OtesError {
    /// Detail string placed under `ERROR` when an evaluation fails.
    /// `None` for kinds that never flow into a threat level.
    pub fn evaluation_detail(&self) -> Option<String> {
        match self {
            OtesError::RemoteRead(detail) => Some(detail.clone()),
            OtesError::RemoteTransport(_) | OtesError::RemoteParse(_) => Some(self.to_string()),
            _ => None,
        }
    }
}
