//! 診断ボタンコンポーネント

use leptos::prelude::*;
use crate::app::SessionSignal;

#[component]
pub fn DiagnoseButton<FD>(session: SessionSignal, on_diagnose: FD) -> impl IntoView
where
    FD: Fn(()) + 'static + Clone,
{
    let is_analyzing = move || session.with(|s| s.is_loading());

    view! {
        <button
            class="btn btn-primary btn-diagnose"
            disabled=move || !session.with(|s| s.can_classify())
            on:click={
                let on_diagnose = on_diagnose.clone();
                move |_| on_diagnose(())
            }
        >
            {move || if is_analyzing() { "Analyzing..." } else { "Run Diagnosis" }}
        </button>
    }
}
