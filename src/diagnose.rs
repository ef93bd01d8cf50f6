//! 受付 → 判定 → 表示 の一連の流れ

use crate::client::Client;
use crate::error::{NeuroScanError, Result};
use crate::intake;
use neuroscan_common::{Mode, Session};
use std::path::Path;

/// 画像1枚を診断し、完了後のセッションを返す
pub async fn run(client: &Client, path: &Path, mode: Mode) -> Result<Session<Vec<u8>>> {
    let file = intake::read_image(path)?;
    let preview = intake::preview_of(&file);

    let mut session = Session::new();
    let selection = session.select(file.name, file.mime_type, file.handle)?;
    session.apply_preview(selection, preview);

    let ticket = session
        .begin_classify(mode)
        .ok_or_else(|| NeuroScanError::Diagnosis("no file selected".into()))?;

    tracing::info!(file = %path.display(), mode = ticket.mode().as_str(), "classification started");

    let outcome = match session.selected() {
        Some(file) => client.classify(file, ticket.mode()).await,
        None => return Err(NeuroScanError::Diagnosis("no file selected".into())),
    };

    if let Err(e) = &outcome {
        tracing::warn!(error = %e, "classification failed");
    }
    session.complete(ticket, outcome);

    Ok(session)
}
