use image::ImageFormat;
use crate::errors::OtesError;

pub const ALLOWED_MIME_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

/// Content type from the leading bytes. Client-declared types are ignored.
pub fn sniff_mime(bytes: &[u8]) -> Option<&'static str> {
    match image::guess_format(bytes).ok()? {
        ImageFormat::Jpeg => Some("image/jpeg"),
        ImageFormat::Png => Some("image/png"),
        ImageFormat::Gif => Some("image/gif"),
        ImageFormat::WebP => Some("image/webp"),
        ImageFormat::Bmp => Some("image/bmp"),
        ImageFormat::Tiff => Some("image/tiff"),
        ImageFormat::Ico => Some("image/x-icon"),
        _ => None,
    }
}

/// Sniff and check against [`ALLOWED_MIME_TYPES`].
pub fn ensure_allowed(bytes: &[u8]) -> Result<&'static str, OtesError> {
    match sniff_mime(bytes) {
        Some(mime) if ALLOWED_MIME_TYPES.contains(&mime) => Ok(mime),
        Some(other) => Err(OtesError::FileType(other.to_string())),
        None => Err(OtesError::FileType("unrecognized content".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JPEG_HEADER: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00];
    const PNG_HEADER: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

    #[test]
    fn sniffs_jpeg_and_png() {
        assert_eq!(sniff_mime(JPEG_HEADER), Some("image/jpeg"));
        assert_eq!(sniff_mime(PNG_HEADER), Some("image/png"));
    }

    #[test]
    fn gif_is_rejected() {
        let err = ensure_allowed(b"GIF89a\x01\x00\x01\x00").unwrap_err();
        assert!(matches!(err, OtesError::FileType(ref m) if m == "image/gif"));
    }

    #[test]
    fn text_disguised_as_image_is_rejected() {
        assert!(ensure_allowed(b"<html><body>not an image</body></html>").is_err());
        assert!(ensure_allowed(b"").is_err());
    }
}
