pub mod sanitize;
pub mod sniff;
pub mod store;

pub use sanitize::{sanitize_filename, sanitize_url, unique_filename};
pub use sniff::{ensure_allowed, sniff_mime, ALLOWED_MIME_TYPES};
pub use store::{StoredUpload, UploadStore};
