//! 判定クライアント
//!
//! ライブモードは推論サーバーへ multipart POST、デモモードは2秒後に既定結果を返す。

use crate::error::{NeuroScanError, Result};
use neuroscan_common::classify::health_url;
use neuroscan_common::demo::{self, DEMO_DELAY_MS, DEMO_OUTCOMES};
use neuroscan_common::{
    interpret_response, ClassificationResult, ClassifyError, Mode, SelectedFile, FILE_FIELD,
};
use rand::Rng;
use reqwest::multipart::{Form, Part};
use std::time::Duration;

pub struct Client {
    http: reqwest::Client,
    endpoint: String,
}

impl Client {
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// モードに応じて判定する
    pub async fn classify(
        &self,
        file: &SelectedFile<Vec<u8>>,
        mode: Mode,
    ) -> std::result::Result<ClassificationResult, ClassifyError> {
        match mode {
            Mode::Demo => Ok(simulate().await),
            Mode::Live => self.predict(file).await,
        }
    }

    /// 推論サーバーへ画像を送信
    pub async fn predict(
        &self,
        file: &SelectedFile<Vec<u8>>,
    ) -> std::result::Result<ClassificationResult, ClassifyError> {
        let part = Part::bytes(file.handle.clone())
            .file_name(file.name.clone())
            .mime_str(&file.mime_type)
            .map_err(|e| ClassifyError::Transport(e.to_string()))?;
        let form = Form::new().part(FILE_FIELD, part);

        tracing::debug!(endpoint = %self.endpoint, file = %file.name, "POST predict");

        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ClassifyError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClassifyError::Transport(e.to_string()))?;

        tracing::debug!(status = status.as_u16(), bytes = body.len(), "predict response");

        interpret_response(
            status.as_u16(),
            status.canonical_reason().unwrap_or_default(),
            &body,
        )
    }

    /// サーバーのルートにGETして応答本文を返す
    pub async fn health(&self) -> std::result::Result<String, ClassifyError> {
        let url = health_url(&self.endpoint);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ClassifyError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClassifyError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(ClassifyError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }
        Ok(body)
    }

    /// ヘルスチェック
    ///
    /// 接続できなければ Unreachable、応答がエラーステータスなら ServerStatus
    pub async fn check_health(&self) -> Result<String> {
        self.health().await.map_err(|e| match e {
            ClassifyError::Transport(_) => NeuroScanError::Unreachable(e.to_string()),
            ClassifyError::Status { .. } | ClassifyError::Malformed(_) => {
                NeuroScanError::ServerStatus(e.to_string())
            }
        })
    }
}

/// デモ判定（失敗しない）
pub async fn simulate() -> ClassificationResult {
    tokio::time::sleep(Duration::from_millis(u64::from(DEMO_DELAY_MS))).await;
    let index = rand::rng().random_range(0..DEMO_OUTCOMES.len());
    demo::pick(index)
}
