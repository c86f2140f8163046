//! エラー型定義

use crate::types::ProjectId;
use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate project id: {0}")]
    DuplicateProjectId(ProjectId),

    #[error("Invalid project {id}: {reason}")]
    InvalidProject { id: ProjectId, reason: String },
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
