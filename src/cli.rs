use clap::{Parser, Subcommand};
use portfolio_common::ProjectId;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "ポートフォリオのプロジェクトカタログ確認ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// フィルタ後のプロジェクト一覧を表示
    List {
        /// カテゴリ（all/web/ml/software/game …）
        #[arg(short, long)]
        filter: Option<String>,

        /// カタログJSONファイル（省略時は設定値 → 組み込みカタログ）
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// フィルタバー（カテゴリと件数）を表示
    Categories {
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// プロジェクトの詳細を表示
    Show {
        /// プロジェクトID
        #[arg(required = true)]
        id: ProjectId,

        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// カタログJSONを検証
    Check {
        #[arg(required = true)]
        path: PathBuf,
    },

    /// 組み込みカタログをJSONに書き出す
    Export {
        /// 出力ファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 設定
    Config {
        /// 既定のカタログファイルを設定
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// 既定のフィルタを設定
        #[arg(long)]
        set_filter: Option<String>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}
