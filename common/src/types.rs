//! 判定結果・モード・選択ファイルの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - ClassificationResult: 推論サーバー（またはデモ）の判定結果
//! - Mode: ライブ推論 / デモ（ローカル疑似応答）の切替
//! - SelectedFile: 選択中の画像（ハンドルはプラットフォームごと）

use serde::{Deserialize, Serialize};

/// 陰性と判定されたときのラベル
pub const NO_TUMOR_LABEL: &str = "No Tumor";

/// 判定結果
///
/// フィールド名は推論サーバーのJSONと一致させる（`prediction`, `confidence`）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub prediction: String,

    /// "97.0%" のようなパーセント表記
    pub confidence: String,

    /// サーバーのデバッグ用生スコア
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_score: Option<String>,
}

impl ClassificationResult {
    pub fn new(prediction: impl Into<String>, confidence: impl Into<String>) -> Self {
        Self {
            prediction: prediction.into(),
            confidence: confidence.into(),
            raw_score: None,
        }
    }

    pub fn is_no_tumor(&self) -> bool {
        self.prediction == NO_TUMOR_LABEL
    }
}

/// 判定モード
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Live,
    Demo,
}

impl Mode {
    pub fn from_demo_flag(demo: bool) -> Self {
        if demo { Mode::Demo } else { Mode::Live }
    }

    pub fn is_demo(&self) -> bool {
        matches!(self, Mode::Demo)
    }

    pub fn toggled(self) -> Self {
        match self {
            Mode::Live => Mode::Demo,
            Mode::Demo => Mode::Live,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Live => "live",
            Mode::Demo => "demo",
        }
    }
}

/// 選択中の画像
///
/// `handle` はネイティブではバイト列、ブラウザでは `web_sys::File`
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile<H> {
    pub name: String,
    pub mime_type: String,
    pub handle: H,
}
