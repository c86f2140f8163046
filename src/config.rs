use crate::error::{PortfolioError, Result};
use portfolio_common::ALL_TOKEN;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// 既定のカタログファイル（未設定なら組み込みカタログ）
    pub catalog: Option<PathBuf>,
    /// `list` の既定フィルタ
    pub default_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: None,
            default_filter: ALL_TOKEN.into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            log::debug!("config loaded: {}", path.display());
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PortfolioError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("portfolio").join("config.json"))
    }
}
