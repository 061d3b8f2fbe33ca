/// One screenshot submission, alive for the duration of a request.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    /// Caller-supplied label, already sanitized. Never parsed as a URI.
    pub url: String,
    pub screenshot_bytes: Vec<u8>,
    pub declared_file_name: String,
    /// What the client claimed. Only logged; validation uses sniffed bytes.
    pub declared_mime_type: Option<String>,
}

impl UploadRequest {
    pub fn size(&self) -> usize {
        self.screenshot_bytes.len()
    }
}
