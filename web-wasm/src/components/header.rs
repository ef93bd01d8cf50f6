//! ヘッダーコンポーネント（デモモード切替つき）

use leptos::prelude::*;
use neuroscan_common::Mode;

#[component]
pub fn Header(mode: ReadSignal<Mode>, set_mode: WriteSignal<Mode>) -> impl IntoView {
    view! {
        <header class="header">
            <div class="brand">
                <span class="brand-icon">"🧠"</span>
                <span class="brand-name">"NeuroScan AI"</span>
            </div>

            <button
                class=move || if mode.get().is_demo() { "mode-toggle on" } else { "mode-toggle" }
                on:click=move |_| set_mode.update(|m| *m = m.toggled())
            >
                {move || if mode.get().is_demo() { "Demo Mode: ON" } else { "Demo Mode: OFF" }}
            </button>
        </header>
    }
}
