use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "neuroscan")]
#[command(about = "Brain tumor detection client: upload an MRI scan and classify it", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像を推論サーバーへ送信して判定結果を表示
    Diagnose {
        /// MRI画像ファイル (JPEG/PNG)
        #[arg(required = true)]
        file: PathBuf,

        /// デモモード（サーバーを使わず疑似結果を返す）
        #[arg(long)]
        demo: bool,

        /// 推論サーバーのエンドポイント
        #[arg(short, long)]
        endpoint: Option<String>,

        /// 結果をJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 画像のプレビュー（Data URL）を出力
    Preview {
        /// 画像ファイル
        #[arg(required = true)]
        file: PathBuf,

        /// 出力ファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 推論サーバーの稼働確認
    Health {
        /// 推論サーバーのエンドポイント
        #[arg(short, long)]
        endpoint: Option<String>,
    },

    /// 設定管理
    Config {
        /// エンドポイントを設定
        #[arg(long)]
        set_endpoint: Option<String>,

        /// デモモードの既定値 (on/off)
        #[arg(long)]
        demo: Option<Toggle>,

        /// リクエストのタイムアウト秒数（0でタイムアウトなし）
        #[arg(long)]
        timeout: Option<u64>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

impl Toggle {
    pub fn is_on(&self) -> bool {
        matches!(self, Toggle::On)
    }
}
