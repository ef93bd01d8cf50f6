//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;
use neuroscan_common::{Mode, Preview, Session};
use web_sys::File;

use crate::api::predict;
use crate::components::{
    diagnose_button::DiagnoseButton,
    header::Header,
    result_panel::ResultPanel,
    upload_area::{read_data_url, UploadArea},
};

/// 画面状態（`web_sys::File` は Send でないためローカル保存）
pub type SessionSignal = RwSignal<Session<File>, LocalStorage>;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let session: SessionSignal = RwSignal::new_local(Session::new());
    let (mode, set_mode) = signal(Mode::Live);

    // ファイル選択ハンドラ
    let on_file = move |file: File| {
        let selection = session.try_update(|s| s.select(file.name(), file.type_(), file.clone()));

        match selection {
            Some(Ok(ticket)) => {
                read_data_url(&file, move |data_url| {
                    session.try_update(|s| s.apply_preview(ticket, Preview::from_data_url(data_url)));
                });
            }
            Some(Err(e)) => gloo::dialogs::alert(&e.to_string()),
            None => {}
        }
    };

    // 診断開始ハンドラ
    let on_diagnose = move |_| {
        let mode = mode.get_untracked();
        let Some(ticket) = session.try_update(|s| s.begin_classify(mode)).flatten() else {
            return;
        };
        let Some(file) = session.with_untracked(|s| s.selected().map(|f| f.handle.clone())) else {
            return;
        };

        spawn_local(async move {
            let outcome = predict::classify(&file, ticket.mode()).await;
            if let Err(e) = &outcome {
                gloo::console::error!(format!("Error analyzing image: {}", e));
            }
            let applied = session.try_update(|s| s.complete(ticket, outcome));
            if applied == Some(false) {
                gloo::console::log!("Discarded stale classification response");
            }
        });
    };

    // リセットハンドラ
    let on_reset = move |_| {
        session.update(|s| s.reset());
    };

    view! {
        <div class="app">
            <Header mode=mode set_mode=set_mode />

            <main class="container">
                <div class="intro">
                    <h1>"Brain Tumor Detection System"</h1>
                    <p class="text-muted">"Upload an MRI scan to analyze it with your deep learning model."</p>
                </div>

                <div class="panels">
                    <section class="panel">
                        <UploadArea session=session on_file=on_file on_reset=on_reset />
                        <DiagnoseButton session=session on_diagnose=on_diagnose />
                    </section>

                    <ResultPanel session=session />
                </div>
            </main>
        </div>
    }
}
