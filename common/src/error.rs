//! エラー型定義

use thiserror::Error;

/// ファイル受付エラー
///
/// 画面上ではブロッキングな通知として表示され、状態は一切変更しない
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntakeError {
    #[error("Please upload a valid image file (JPEG/PNG).")]
    NotAnImage { mime: String },
}

/// 判定処理のエラー
///
/// どのバリアントも結果ペインの ErrorState として表示される
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("Server Error: {status} {reason}")]
    Status { status: u16, reason: String },

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl ClassifyError {
    /// 結果ペインに表示するメッセージ
    pub fn user_message(&self) -> String {
        format!(
            "{}. Could not connect to the AI model. Make sure the inference server is running in a separate terminal.",
            self.to_string().trim_end()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intake_error_is_static_notice() {
        let error = IntakeError::NotAnImage { mime: "text/plain".to_string() };
        assert_eq!(error.to_string(), "Please upload a valid image file (JPEG/PNG).");
    }

    #[test]
    fn test_status_message_names_status() {
        let error = ClassifyError::Status {
            status: 500,
            reason: "Internal Server Error".to_string(),
        };
        let message = error.user_message();
        assert!(message.starts_with("Server Error: 500 Internal Server Error."));
        assert!(message.contains("inference server is running"));
    }

    #[test]
    fn test_status_message_without_reason() {
        let error = ClassifyError::Status { status: 502, reason: String::new() };
        assert!(error.user_message().starts_with("Server Error: 502."));
    }

    #[test]
    fn test_transport_message() {
        let error = ClassifyError::Transport("connection refused".to_string());
        let message = error.user_message();
        assert!(message.contains("connection refused"));
        assert!(message.contains("inference server is running"));
    }
}
