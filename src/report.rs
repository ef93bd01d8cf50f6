//! 結果ペインのテキスト表示

use neuroscan_common::{ResultView, Verdict};

pub fn render_text(view: &ResultView) -> String {
    match view {
        ResultView::Empty => "No results yet".to_string(),
        ResultView::Loading => "Analyzing...".to_string(),
        ResultView::Error { message } => format!("✖ Connection Failed\n  {}", message),
        ResultView::Result(card) => {
            let mark = match card.verdict {
                Verdict::Clear => "✔",
                Verdict::Detected => "⚠",
            };
            format!(
                "{} {}\n  Confidence:      {}\n  Scan Type:       {}\n  Processing Time: {}\n\nNote: {}",
                mark, card.label, card.confidence, card.scan_type, card.processing_time, card.note
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neuroscan_common::{present, ClassificationResult, Mode, RenderState};

    #[test]
    fn test_render_no_tumor_live() {
        let view = present(&RenderState::Result {
            result: ClassificationResult::new("No Tumor", "97.0%"),
            mode: Mode::Live,
        });
        let text = render_text(&view);
        assert!(text.starts_with("✔ No Tumor"));
        assert!(text.contains("Confidence:      97.0%"));
        assert!(text.contains("Processing Time: 0.45s"));
        assert!(text.contains("MRI / T1-Weighted"));
    }

    #[test]
    fn test_render_detected_demo() {
        let view = present(&RenderState::Result {
            result: ClassificationResult::new("Meningioma Tumor", "92.1%"),
            mode: Mode::Demo,
        });
        let text = render_text(&view);
        assert!(text.starts_with("⚠ Meningioma Tumor"));
        assert!(text.contains("Processing Time: Simulated"));
    }

    #[test]
    fn test_render_error_verbatim() {
        let text = render_text(&ResultView::Error { message: "Server Error: 500".into() });
        assert!(text.contains("Connection Failed"));
        assert!(text.contains("Server Error: 500"));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_text(&ResultView::Empty), "No results yet");
    }
}
