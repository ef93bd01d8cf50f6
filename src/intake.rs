//! ローカルファイルの受付
//!
//! ブラウザの `File.type` に相当する宣言MIMEタイプを拡張子から求める。

use crate::error::{NeuroScanError, Result};
use image::ImageFormat;
use neuroscan_common::{check_mime, encode_data_url, Preview, SelectedFile};
use std::path::Path;

const UNKNOWN_MIME: &str = "application/octet-stream";

/// 拡張子から宣言MIMEタイプを求める（不明なら application/octet-stream）
pub fn mime_from_path(path: &Path) -> String {
    ImageFormat::from_path(path)
        .map(|format| format.to_mime_type().to_string())
        .unwrap_or_else(|_| UNKNOWN_MIME.to_string())
}

/// 画像ファイルを読み込む
///
/// 画像以外は読み込む前に拒否する
pub fn read_image(path: &Path) -> Result<SelectedFile<Vec<u8>>> {
    if !path.is_file() {
        return Err(NeuroScanError::FileNotFound(path.display().to_string()));
    }

    let mime_type = mime_from_path(path);
    check_mime(&mime_type)?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let bytes = std::fs::read(path)?;

    tracing::debug!(file = %name, mime = %mime_type, size = bytes.len(), "image accepted");

    Ok(SelectedFile {
        name,
        mime_type,
        handle: bytes,
    })
}

pub fn preview_of(file: &SelectedFile<Vec<u8>>) -> Preview {
    encode_data_url(&file.mime_type, &file.handle)
}
