//! NeuroScan CLI
//!
//! MRI画像を推論サーバーに送信し、判定結果を表示する

pub mod cli;
pub mod client;
pub mod config;
pub mod diagnose;
pub mod error;
pub mod intake;
pub mod report;
