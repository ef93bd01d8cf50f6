//! アップロードエリアコンポーネント
//!
//! クリック選択とドラッグ&ドロップの両方から1枚だけ受け付ける。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, File, FileReader, HtmlInputElement};
use crate::app::SessionSignal;

#[component]
pub fn UploadArea<F, FR>(session: SessionSignal, on_file: F, on_reset: FR) -> impl IntoView
where
    F: Fn(File) + 'static + Clone + Send + Sync,
    FR: Fn(()) + 'static + Clone + Send + Sync,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let preview = move || session.with(|s| s.preview().map(|p| p.as_str().to_string()));
    let has_preview = move || session.with(|s| s.preview().is_some());

    let on_drop = {
        let on_file = on_file.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            ev.stop_propagation();
            set_is_dragover.set(false);

            if let Some(file) = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0))
            {
                on_file(file);
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_change = {
        let on_file = on_file.clone();
        move |ev: web_sys::Event| {
            let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                on_file(file);
            }
            // 同じファイルを選び直しても change が発火するように
            input.set_value("");
        }
    };

    view! {
        <div
            class=move || area_classes(is_dragover.get(), has_preview())
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
        >
            <Show
                when=has_preview
                fallback=move || view! {
                    <div class="upload-prompt">
                        <div class="upload-icon">"⬆"</div>
                        <p class="upload-title">"Drag & Drop MRI Scan"</p>
                        <p class="text-muted">"or click to browse"</p>
                        <label class="btn btn-primary">
                            "Choose File"
                            <input
                                type="file"
                                class="hidden"
                                accept="image/*"
                                on:change=on_change.clone()
                            />
                        </label>
                    </div>
                }
            >
                <div class="preview">
                    <img src=move || preview().unwrap_or_default() alt="Preview" />
                    <button
                        class="btn-reset"
                        title="Reset"
                        on:click={
                            let on_reset = on_reset.clone();
                            move |_| on_reset(())
                        }
                    >
                        "✕"
                    </button>
                </div>
            </Show>
        </div>
    }
}

/// アップロードエリアのCSSクラス
fn area_classes(is_dragover: bool, has_preview: bool) -> String {
    let mut classes = vec!["upload-area"];
    if is_dragover {
        classes.push("dragover");
    }
    if has_preview {
        classes.push("has-preview");
    }
    classes.join(" ")
}

/// ファイルを Data URL として読み込み、完了時にコールバックする
pub fn read_data_url<F>(file: &File, on_loaded: F)
where
    F: Fn(String) + 'static,
{
    let reader = match FileReader::new() {
        Ok(reader) => reader,
        Err(e) => {
            gloo::console::error!(e);
            return;
        }
    };

    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Some(data_url) = reader_clone.result().ok().and_then(|r| r.as_string()) {
            on_loaded(data_url);
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onloadend(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    if let Err(e) = reader.read_as_data_url(file) {
        gloo::console::error!(e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_classes_idle() {
        assert_eq!(area_classes(false, false), "upload-area");
    }

    #[test]
    fn test_area_classes_dragover_with_preview() {
        assert_eq!(area_classes(true, true), "upload-area dragover has-preview");
    }
}
