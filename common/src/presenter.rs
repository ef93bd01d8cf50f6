//! 結果ペインの表示モデル
//!
//! 表示状態から画面に出す内容を決める純粋関数。描画はフロントエンド側。

use crate::session::RenderState;
use crate::types::{ClassificationResult, Mode};

pub const SCAN_TYPE: &str = "MRI / T1-Weighted";
pub const LIVE_PROCESSING_TIME: &str = "0.45s";
pub const DEMO_PROCESSING_TIME: &str = "Simulated";
pub const ADVISORY_NOTE: &str =
    "This is an AI-generated result. Please consult a medical professional for verification.";

/// 判定の見た目（陰性は緑、それ以外は赤）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Clear,
    Detected,
}

impl Verdict {
    pub fn of(result: &ClassificationResult) -> Self {
        if result.is_no_tumor() {
            Verdict::Clear
        } else {
            Verdict::Detected
        }
    }

    /// CSSクラス名
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Clear => "clear",
            Verdict::Detected => "detected",
        }
    }
}

/// 結果カード
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCard {
    pub label: String,
    pub confidence: String,
    pub verdict: Verdict,
    pub scan_type: &'static str,
    pub processing_time: &'static str,
    pub note: &'static str,
}

/// 結果ペインの4状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultView {
    Empty,
    Loading,
    Error { message: String },
    Result(ResultCard),
}

pub fn processing_time(mode: Mode) -> &'static str {
    match mode {
        Mode::Live => LIVE_PROCESSING_TIME,
        Mode::Demo => DEMO_PROCESSING_TIME,
    }
}

pub fn present(state: &RenderState) -> ResultView {
    match state {
        RenderState::Empty => ResultView::Empty,
        RenderState::Loading => ResultView::Loading,
        RenderState::Error(message) => ResultView::Error { message: message.clone() },
        RenderState::Result { result, mode } => ResultView::Result(ResultCard {
            label: result.prediction.clone(),
            confidence: result.confidence.clone(),
            verdict: Verdict::of(result),
            scan_type: SCAN_TYPE,
            processing_time: processing_time(*mode),
            note: ADVISORY_NOTE,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_empty_and_loading() {
        assert_eq!(present(&RenderState::Empty), ResultView::Empty);
        assert_eq!(present(&RenderState::Loading), ResultView::Loading);
    }

    #[test]
    fn test_present_error_verbatim() {
        let view = present(&RenderState::Error("Server Error: 500".to_string()));
        assert_eq!(view, ResultView::Error { message: "Server Error: 500".to_string() });
    }

    #[test]
    fn test_present_live_no_tumor() {
        let state = RenderState::Result {
            result: ClassificationResult::new("No Tumor", "97.0%"),
            mode: Mode::Live,
        };
        let ResultView::Result(card) = present(&state) else {
            panic!("結果カードになるはず");
        };
        assert_eq!(card.label, "No Tumor");
        assert_eq!(card.confidence, "97.0%");
        assert_eq!(card.verdict, Verdict::Clear);
        assert_eq!(card.scan_type, "MRI / T1-Weighted");
        assert_eq!(card.processing_time, "0.45s");
    }

    #[test]
    fn test_present_demo_tumor() {
        let state = RenderState::Result {
            result: ClassificationResult::new("Glioma Tumor", "98.5%"),
            mode: Mode::Demo,
        };
        let ResultView::Result(card) = present(&state) else {
            panic!("結果カードになるはず");
        };
        assert_eq!(card.verdict, Verdict::Detected);
        assert_eq!(card.processing_time, "Simulated");
    }
}
