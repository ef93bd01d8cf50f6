//! NeuroScan Common Library
//!
//! CLIとWeb(WASM)で共有される型・受付・セッション状態・表示モデル

pub mod types;
pub mod error;
pub mod intake;
pub mod classify;
pub mod demo;
pub mod session;
pub mod presenter;

pub use types::{ClassificationResult, Mode, SelectedFile, NO_TUMOR_LABEL};
pub use error::{ClassifyError, IntakeError};
pub use intake::{check_mime, encode_data_url, Preview};
pub use classify::{health_url, interpret_response, DEFAULT_ENDPOINT, FILE_FIELD};
pub use session::{ClassifyTicket, RenderState, SelectionTicket, Session};
pub use presenter::{present, ResultCard, ResultView, Verdict};
