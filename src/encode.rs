use crate::error::EncodeError;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::path::Path;

/// MIME type sent when the extension does not name a known image format.
pub const DEFAULT_MIME: &str = "image/jpeg";

/// An image file encoded as an inline base64 payload.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedImage {
    mime: &'static str,
    payload: String,
}

impl EncodedImage {
    /// Reads the image at `path` and encodes its raw bytes.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, EncodeError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| EncodeError::FileError {
            path: path.to_path_buf(),
            source,
        })?;

        if bytes.is_empty() {
            return Err(EncodeError::EmptyImage(path.to_path_buf()));
        }

        log::debug!("Encoding {} ({} bytes)", path.display(), bytes.len());

        Ok(Self::from_bytes(&bytes, mime_from_path(path)))
    }

    pub fn from_bytes(bytes: &[u8], mime: &'static str) -> Self {
        Self {
            mime,
            payload: STANDARD.encode(bytes),
        }
    }

    pub fn mime(&self) -> &str {
        self.mime
    }

    /// The base64 payload, standard alphabet with padding.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Renders the payload as a `data:` URL.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.payload)
    }

    /// Decodes the payload back into the original bytes.
    pub fn decode(&self) -> Result<Vec<u8>, EncodeError> {
        Ok(STANDARD.decode(&self.payload)?)
    }
}

/// Guesses the MIME type of an image from its file extension.
pub fn mime_from_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => DEFAULT_MIME,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    // 1x1 white PNG
    const TINY_PNG: [u8; 67] = [
        0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1f,
        0x15, 0xc4, 0x89, 0x00, 0x00, 0x00, 0x0a, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9c, 0x63, 0x00,
        0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0d, 0x0a, 0x2d, 0xb4, 0x00, 0x00, 0x00, 0x00, 0x49,
        0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82,
    ];

    #[test]
    fn encode_decode_preserves_bytes() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("tiny.png");
        std::fs::write(&file_path, TINY_PNG)?;

        let encoded = EncodedImage::from_path(&file_path)?;
        assert_eq!(encoded.mime(), "image/png");
        assert_eq!(encoded.decode()?, TINY_PNG.to_vec());
        Ok(())
    }

    #[test]
    fn data_url_shape() {
        let encoded = EncodedImage::from_bytes(b"abc", "image/jpeg");
        assert_eq!(encoded.payload(), "YWJj");
        assert_eq!(encoded.data_url(), "data:image/jpeg;base64,YWJj");
    }

    #[test]
    fn mime_follows_extension() {
        assert_eq!(mime_from_path(&PathBuf::from("face.JPG")), "image/jpeg");
        assert_eq!(mime_from_path(&PathBuf::from("face.jpeg")), "image/jpeg");
        assert_eq!(mime_from_path(&PathBuf::from("face.png")), "image/png");
        assert_eq!(mime_from_path(&PathBuf::from("face.webp")), "image/webp");
        assert_eq!(mime_from_path(&PathBuf::from("face")), DEFAULT_MIME);
        assert_eq!(mime_from_path(&PathBuf::from("face.bmp")), DEFAULT_MIME);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = EncodedImage::from_path("does/not/exist.jpg").unwrap_err();
        assert!(matches!(err, EncodeError::FileError { .. }));
    }

    #[test]
    fn empty_file_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("empty.jpg");
        std::fs::write(&file_path, b"")?;

        let err = EncodedImage::from_path(&file_path).unwrap_err();
        assert!(matches!(err, EncodeError::EmptyImage(_)));
        Ok(())
    }
}
