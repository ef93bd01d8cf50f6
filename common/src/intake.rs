//! ファイル受付
//!
//! MIMEタイプの検証とプレビュー（Data URL）の生成。ネットワークI/Oは行わない。

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::IntakeError;

/// 受け付けるMIMEタイプの接頭辞
pub const IMAGE_MIME_PREFIX: &str = "image/";

/// 宣言されたMIMEタイプが画像かを検証
///
/// 大文字小文字は区別しない（`IMAGE/PNG` も受け付ける）
pub fn check_mime(mime: &str) -> Result<(), IntakeError> {
    let lower = mime.trim().to_ascii_lowercase();
    if lower.starts_with(IMAGE_MIME_PREFIX) {
        Ok(())
    } else {
        Err(IntakeError::NotAnImage { mime: mime.to_string() })
    }
}

/// 表示用にエンコードされた画像
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview(String);

impl Preview {
    /// FileReader などで得た Data URL をそのまま包む
    pub fn from_data_url(data_url: impl Into<String>) -> Self {
        Self(data_url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// バイト列から Data URL を生成
pub fn encode_data_url(mime: &str, bytes: &[u8]) -> Preview {
    Preview(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_mime_accepts_images() {
        assert!(check_mime("image/png").is_ok());
        assert!(check_mime("image/jpeg").is_ok());
        assert!(check_mime("image/webp").is_ok());
        assert!(check_mime("IMAGE/PNG").is_ok());
    }

    #[test]
    fn test_check_mime_rejects_non_images() {
        for mime in ["text/plain", "application/pdf", "", "video/mp4", "imagex/png"] {
            let err = check_mime(mime).unwrap_err();
            assert_eq!(err, IntakeError::NotAnImage { mime: mime.to_string() });
        }
    }

    #[test]
    fn test_encode_data_url() {
        let preview = encode_data_url("image/png", b"\x89PNG");
        assert_eq!(preview.as_str(), "data:image/png;base64,iVBORw==");
        assert!(!preview.is_empty());
    }

    #[test]
    fn test_encode_data_url_empty_bytes() {
        let preview = encode_data_url("image/png", b"");
        assert_eq!(preview.as_str(), "data:image/png;base64,");
    }

    #[test]
    fn test_preview_from_data_url_is_verbatim() {
        let preview = Preview::from_data_url("data:image/jpeg;base64,/9j/4AAQSkZJRg==");
        assert_eq!(preview.as_str(), "data:image/jpeg;base64,/9j/4AAQSkZJRg==");
        assert!(!preview.is_empty());
        assert!(Preview::from_data_url("").is_empty());
    }
}
