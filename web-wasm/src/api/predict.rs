//! 推論サーバー連携
//!
//! ライブ: FormData で画像を `/predict` に POST
//! デモ: 2秒待ってから既定結果を返す（失敗しない）

use gloo::timers::future::TimeoutFuture;
use neuroscan_common::demo::{self, DEMO_DELAY_MS};
use neuroscan_common::{
    interpret_response, ClassificationResult, ClassifyError, Mode, DEFAULT_ENDPOINT, FILE_FIELD,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

/// fetch の結果（ステータス, ステータス文言, 本文）
struct RawResponse {
    status: u16,
    status_text: String,
    body: String,
}

/// モードに応じて判定する
pub async fn classify(file: &File, mode: Mode) -> Result<ClassificationResult, ClassifyError> {
    match mode {
        Mode::Demo => Ok(simulate().await),
        Mode::Live => predict(DEFAULT_ENDPOINT, file).await,
    }
}

/// デモ判定
pub async fn simulate() -> ClassificationResult {
    TimeoutFuture::new(DEMO_DELAY_MS).await;
    demo::pick_unit(js_sys::Math::random())
}

/// 画像を推論サーバーへ送信
pub async fn predict(endpoint: &str, file: &File) -> Result<ClassificationResult, ClassifyError> {
    let raw = post_file(endpoint, file)
        .await
        .map_err(|e| ClassifyError::Transport(js_error_message(&e)))?;

    interpret_response(raw.status, &raw.status_text, &raw.body)
}

async fn post_file(endpoint: &str, file: &File) -> Result<RawResponse, JsValue> {
    let form = FormData::new()?;
    form.append_with_blob_and_filename(FILE_FIELD, file, &file.name())?;

    // Content-Type（multipart境界）はブラウザに任せる
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form);

    let request = Request::new_with_str_and_init(endpoint, &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let body = JsFuture::from(resp.text()?).await?;

    Ok(RawResponse {
        status: resp.status(),
        status_text: resp.status_text(),
        body: body.as_string().unwrap_or_default(),
    })
}

/// JsValue のエラーから表示用メッセージを取り出す
///
/// fetch の失敗は `TypeError: Failed to fetch` のような Error オブジェクトで届く
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_error_message_from_type_error() {
        let error: JsValue = js_sys::TypeError::new("Failed to fetch").into();
        assert_eq!(js_error_message(&error), "Failed to fetch");
    }

    #[wasm_bindgen_test]
    fn wasm_error_message_from_string() {
        let error = JsValue::from_str("window is not available");
        assert_eq!(js_error_message(&error), "window is not available");
    }

    #[wasm_bindgen_test]
    async fn wasm_simulate_returns_canned_outcome() {
        let result = simulate().await;
        assert!(demo::is_demo_outcome(&result));
    }
}
