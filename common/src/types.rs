//! プロジェクトとフィルタの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - Project: ギャラリーに並ぶ1件のプロジェクト
//! - Filter: カテゴリ絞り込み（"all" は絞り込みなし）
//! - FilterOption: フィルタボタン1つ分の表示情報

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// プロジェクトID（カタログ内で一意）
pub type ProjectId = u32;

/// 絞り込みなしを表すトークン
pub const ALL_TOKEN: &str = "all";

/// 既知カテゴリ（フィルタバーの表示順）
pub const KNOWN_CATEGORIES: [(&str, &str); 4] = [
    ("web", "Web Apps"),
    ("ml", "ML & AI"),
    ("software", "Software"),
    ("game", "Games"),
];

/// プロジェクト
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub image: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,

    /// 所属カテゴリ（複数可）
    #[serde(default)]
    pub categories: BTreeSet<String>,

    /// 表示用タグ（チップ）
    #[serde(default)]
    pub tags: Vec<String>,

    /// デモURL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_url: Option<String>,

    /// ソースリポジトリURL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<String>,
}

impl Project {
    /// カテゴリに属するか（完全一致ではなく集合の包含判定）
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.contains(category)
    }

    /// デモリンク（空文字は未設定扱い）
    pub fn demo_link(&self) -> Option<&str> {
        non_empty(self.project_url.as_deref())
    }

    /// ソースリンク（空文字は未設定扱い）
    pub fn source_link(&self) -> Option<&str> {
        non_empty(self.github_url.as_deref())
    }

    pub fn video_link(&self) -> Option<&str> {
        non_empty(self.video.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// 絞り込み条件
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    /// 任意の文字列から生成（未知のカテゴリも受け付ける）
    pub fn parse(token: &str) -> Self {
        if token == ALL_TOKEN {
            Filter::All
        } else {
            Filter::Category(token.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Filter::All => ALL_TOKEN,
            Filter::Category(c) => c,
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(c) => project.has_category(c),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Filter {
    fn from(token: &str) -> Self {
        Filter::parse(token)
    }
}

/// フィルタボタン
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub token: String,
    pub label: String,
    pub count: usize,
}

/// カテゴリの表示名（未知カテゴリはトークンそのまま）
pub fn category_label(token: &str) -> &str {
    if token == ALL_TOKEN {
        return "All Projects";
    }
    KNOWN_CATEGORIES
        .iter()
        .find(|(t, _)| *t == token)
        .map(|(_, label)| *label)
        .unwrap_or(token)
}
