//! 画面状態（セッション）
//!
//! 選択ファイル・プレビュー・表示状態を1か所で管理する。
//! 表示状態は `RenderState` の直和型なので、空/解析中/エラー/結果は構造的に排他。
//!
//! 非同期処理（プレビュー生成・判定）はチケットを受け取って開始し、
//! 完了時にチケットを返す。選択し直しやリセットの後に届いた古い応答は破棄される。

use crate::error::{ClassifyError, IntakeError};
use crate::intake::{check_mime, Preview};
use crate::presenter::{present, ResultView};
use crate::types::{ClassificationResult, Mode, SelectedFile};

/// 表示状態
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RenderState {
    #[default]
    Empty,
    Loading,
    Error(String),
    Result {
        result: ClassificationResult,
        mode: Mode,
    },
}

impl RenderState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RenderState::Loading)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RenderState::Empty => "empty",
            RenderState::Loading => "loading",
            RenderState::Error(_) => "error",
            RenderState::Result { .. } => "result",
        }
    }
}

/// プレビュー生成のチケット
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionTicket(u64);

/// 判定リクエストのチケット
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifyTicket {
    request: u64,
    mode: Mode,
}

impl ClassifyTicket {
    /// リクエスト発行時点のモード
    pub fn mode(&self) -> Mode {
        self.mode
    }
}

/// 画面1枚分の状態
#[derive(Debug, Clone)]
pub struct Session<H> {
    selected: Option<SelectedFile<H>>,
    preview: Option<Preview>,
    render: RenderState,
    selection_id: u64,
    request_id: u64,
}

impl<H> Default for Session<H> {
    fn default() -> Self {
        Self {
            selected: None,
            preview: None,
            render: RenderState::Empty,
            selection_id: 0,
            request_id: 0,
        }
    }
}

impl<H> Session<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// ファイルを選択する
    ///
    /// 画像以外なら何も変更せずにエラーを返す。
    /// 受け付けた場合は前回の結果・エラー・プレビューを消し、プレビュー生成用のチケットを返す。
    pub fn select(
        &mut self,
        name: impl Into<String>,
        mime_type: impl Into<String>,
        handle: H,
    ) -> Result<SelectionTicket, IntakeError> {
        let mime_type = mime_type.into();
        check_mime(&mime_type)?;

        self.selected = Some(SelectedFile {
            name: name.into(),
            mime_type,
            handle,
        });
        self.preview = None;
        self.render = RenderState::Empty;
        self.selection_id += 1;
        self.request_id += 1;
        Ok(SelectionTicket(self.selection_id))
    }

    /// プレビューを反映する。古い選択のチケットなら無視して false
    pub fn apply_preview(&mut self, ticket: SelectionTicket, preview: Preview) -> bool {
        if self.selected.is_none() || ticket.0 != self.selection_id {
            return false;
        }
        self.preview = Some(preview);
        true
    }

    /// 判定を開始できるか（ボタンの有効/無効）
    pub fn can_classify(&self) -> bool {
        self.selected.is_some() && !self.render.is_loading()
    }

    /// 判定を開始する
    ///
    /// ファイル未選択または解析中なら None（何もしない）
    pub fn begin_classify(&mut self, mode: Mode) -> Option<ClassifyTicket> {
        if !self.can_classify() {
            return None;
        }
        self.request_id += 1;
        self.render = RenderState::Loading;
        Some(ClassifyTicket {
            request: self.request_id,
            mode,
        })
    }

    /// 判定結果を反映する
    ///
    /// 最新のリクエストのチケットでなければ状態を変えずに false を返す。
    /// 最新なら成功・失敗に関わらず解析中状態を抜ける。
    pub fn complete(
        &mut self,
        ticket: ClassifyTicket,
        outcome: Result<ClassificationResult, ClassifyError>,
    ) -> bool {
        if ticket.request != self.request_id || !self.render.is_loading() {
            return false;
        }
        self.render = match outcome {
            Ok(result) => RenderState::Result {
                result,
                mode: ticket.mode,
            },
            Err(e) => RenderState::Error(e.user_message()),
        };
        true
    }

    /// すべてを空に戻す
    pub fn reset(&mut self) {
        self.selected = None;
        self.preview = None;
        self.render = RenderState::Empty;
        self.selection_id += 1;
        self.request_id += 1;
    }

    pub fn selected(&self) -> Option<&SelectedFile<H>> {
        self.selected.as_ref()
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn render_state(&self) -> &RenderState {
        &self.render
    }

    pub fn is_loading(&self) -> bool {
        self.render.is_loading()
    }

    pub fn view(&self) -> ResultView {
        present(&self.render)
    }
}
