//! カタログの読み込み元の決定
//!
//! 優先順位: コマンドライン引数 → 設定ファイル → 組み込みカタログ

use crate::config::Config;
use crate::error::{PortfolioError, Result};
use portfolio_common::Catalog;
use std::path::Path;

pub fn resolve_catalog(arg: Option<&Path>, config: &Config) -> Result<Catalog> {
    let path = match arg.or(config.catalog.as_deref()) {
        Some(path) => path,
        None => {
            log::debug!("using builtin catalog");
            return Ok(Catalog::builtin());
        }
    };

    if !path.exists() {
        return Err(PortfolioError::FileNotFound(path.display().to_string()));
    }
    log::debug!("loading catalog: {}", path.display());
    Ok(Catalog::load(path)?)
}

/// `check` 用。設定ファイルには依存しない
pub fn check_catalog(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        return Err(PortfolioError::FileNotFound(path.display().to_string()));
    }
    Ok(Catalog::load(path)?)
}
