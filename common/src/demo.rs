//! デモモード
//!
//! ネットワークを使わず、固定の遅延後に3つの既定結果から1つを返す。

use crate::types::ClassificationResult;

/// 疑似処理時間（ミリ秒）
pub const DEMO_DELAY_MS: u32 = 2000;

/// デモで返す結果 (ラベル, 確信度)
pub const DEMO_OUTCOMES: [(&str, &str); 3] = [
    ("Glioma Tumor", "98.5%"),
    ("Meningioma Tumor", "92.1%"),
    ("No Tumor", "99.9%"),
];

/// インデックスから結果を選ぶ（範囲外は剰余で折り返す）
pub fn pick(index: usize) -> ClassificationResult {
    let (label, confidence) = DEMO_OUTCOMES[index % DEMO_OUTCOMES.len()];
    ClassificationResult::new(label, confidence)
}

/// [0, 1) の乱数から結果を選ぶ
///
/// ブラウザの `Math.random()` の値をそのまま渡せる
pub fn pick_unit(sample: f64) -> ClassificationResult {
    let len = DEMO_OUTCOMES.len();
    let index = (sample.clamp(0.0, 1.0) * len as f64) as usize;
    pick(index.min(len - 1))
}

/// 結果がデモの既定結果のいずれかか
pub fn is_demo_outcome(result: &ClassificationResult) -> bool {
    DEMO_OUTCOMES
        .iter()
        .any(|(label, confidence)| result.prediction == *label && result.confidence == *confidence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_each_outcome() {
        assert_eq!(pick(0), ClassificationResult::new("Glioma Tumor", "98.5%"));
        assert_eq!(pick(1), ClassificationResult::new("Meningioma Tumor", "92.1%"));
        assert_eq!(pick(2), ClassificationResult::new("No Tumor", "99.9%"));
    }

    #[test]
    fn test_pick_wraps() {
        assert_eq!(pick(3), pick(0));
        assert_eq!(pick(7), pick(1));
    }

    #[test]
    fn test_pick_unit_buckets() {
        assert_eq!(pick_unit(0.0), pick(0));
        assert_eq!(pick_unit(0.34), pick(1));
        assert_eq!(pick_unit(0.67), pick(2));
        assert_eq!(pick_unit(0.999_999), pick(2));
        assert_eq!(pick_unit(1.0), pick(2));
    }

    #[test]
    fn test_outcomes_are_recognised() {
        for i in 0..DEMO_OUTCOMES.len() {
            assert!(is_demo_outcome(&pick(i)));
        }
        assert!(!is_demo_outcome(&ClassificationResult::new("No Tumor", "97.0%")));
    }
}
