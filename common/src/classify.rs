//! 推論サーバーとの契約
//!
//! 送信方法（reqwest / fetch）はフロントエンドごとに異なるため、
//! ここではエンドポイント定数とレスポンスの解釈のみを共通化する。

use serde::Deserialize;

use crate::error::ClassifyError;
use crate::types::ClassificationResult;

/// 推論サーバーの既定エンドポイント
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/predict";

/// multipart のフィールド名
pub const FILE_FIELD: &str = "file";

/// サーバーがエラー時に返すJSON
#[derive(Deserialize)]
struct ServerError {
    error: String,
}

/// HTTPレスポンスを判定結果に変換
///
/// # Arguments
/// * `status` - HTTPステータスコード
/// * `reason` - ステータスの説明（"Internal Server Error" など、空でもよい）
/// * `body` - レスポンスボディ
pub fn interpret_response(
    status: u16,
    reason: &str,
    body: &str,
) -> Result<ClassificationResult, ClassifyError> {
    if !(200..300).contains(&status) {
        let mut reason = reason.trim().to_string();
        if let Ok(server) = serde_json::from_str::<ServerError>(body) {
            if reason.is_empty() {
                reason = server.error;
            } else {
                reason = format!("{} ({})", reason, server.error);
            }
        }
        return Err(ClassifyError::Status { status, reason });
    }

    serde_json::from_str(body).map_err(|e| ClassifyError::Malformed(e.to_string()))
}

/// エンドポイントURLからヘルスチェック用のルートURLを求める
///
/// "http://127.0.0.1:5000/predict" → "http://127.0.0.1:5000/"
pub fn health_url(endpoint: &str) -> String {
    let (scheme, rest) = match endpoint.split_once("://") {
        Some((scheme, rest)) => (Some(scheme), rest),
        None => (None, endpoint),
    };
    let authority = rest.split('/').next().unwrap_or(rest);
    match scheme {
        Some(scheme) => format!("{}://{}/", scheme, authority),
        None => format!("{}/", authority),
    }
}
