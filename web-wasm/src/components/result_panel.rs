//! 結果ペインコンポーネント

use leptos::prelude::*;
use neuroscan_common::{ResultCard, ResultView, Verdict};
use crate::app::SessionSignal;

#[component]
pub fn ResultPanel(session: SessionSignal) -> impl IntoView {
    view! {
        <section class=move || panel_classes(session.with(|s| s.render_state().as_str()))>
            <h2>"Analysis Results"</h2>
            {move || match session.with(|s| s.view()) {
                ResultView::Empty => view! {
                    <div class="result-empty">
                        <p>"No results yet"</p>
                    </div>
                }.into_any(),
                ResultView::Loading => view! {
                    <div class="result-empty">
                        <div class="spinner"></div>
                        <p>"Analyzing..."</p>
                    </div>
                }.into_any(),
                ResultView::Error { message } => view! {
                    <div class="result-error">
                        <p class="result-error-title">"Connection Failed"</p>
                        <p>{message}</p>
                    </div>
                }.into_any(),
                ResultView::Result(card) => view! { <ResultDetails card=card /> }.into_any(),
            }}
        </section>
    }
}

/// 結果ペインのCSSクラス（表示状態ごとに state-empty / state-loading / ...）
fn panel_classes(state: &str) -> String {
    format!("panel result-panel state-{}", state)
}

#[component]
fn ResultDetails(card: ResultCard) -> impl IntoView {
    let icon = match card.verdict {
        Verdict::Clear => "✔",
        Verdict::Detected => "⚠",
    };

    view! {
        <div class="result">
            <div class=format!("verdict {}", card.verdict.as_str())>
                <span class="verdict-icon">{icon}</span>
                <div>
                    <h3>{card.label}</h3>
                    <p>"Confidence: " {card.confidence}</p>
                </div>
            </div>

            <div class="details">
                <div class="detail">
                    <span class="detail-label">"Scan Type"</span>
                    <p>{card.scan_type}</p>
                </div>
                <div class="detail">
                    <span class="detail-label">"Processing Time"</span>
                    <p>{card.processing_time}</p>
                </div>
            </div>

            <div class="note">
                <strong>"Note: "</strong>
                {card.note}
            </div>
        </div>
    }
}
