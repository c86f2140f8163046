use portfolio_common::ProjectId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("プロジェクトが見つかりません: id={0}")]
    ProjectNotFound(ProjectId),

    #[error("カタログエラー: {0}")]
    Catalog(#[from] portfolio_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
