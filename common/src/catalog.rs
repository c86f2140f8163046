//! プロジェクトカタログ
//!
//! ページに組み込まれた固定リスト、またはJSONファイルから読み込む。
//! 読み込み時にIDの一意性とタイトルの有無を検証する。

use crate::error::{Error, Result};
use crate::types::{Project, ProjectId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

/// JSONの受け付け形式（配列 or {"projects": [...]}）
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    List(Vec<Project>),
    Wrapped { projects: Vec<Project> },
}

#[derive(Serialize)]
struct CatalogFileOut<'a> {
    projects: &'a [Project],
}

/// 検証済みの読み取り専用プロジェクト一覧
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    projects: Arc<[Project]>,
}

impl Catalog {
    pub fn new(projects: Vec<Project>) -> Result<Self> {
        let mut seen = HashSet::new();
        for project in &projects {
            if !seen.insert(project.id) {
                return Err(Error::DuplicateProjectId(project.id));
            }
            if project.title.trim().is_empty() {
                return Err(Error::InvalidProject {
                    id: project.id,
                    reason: "title is empty".into(),
                });
            }
        }
        Ok(Self {
            projects: projects.into(),
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let projects = match serde_json::from_str::<CatalogFile>(json)? {
            CatalogFile::List(p) => p,
            CatalogFile::Wrapped { projects } => projects,
        };
        log::debug!("catalog parsed: {} projects", projects.len());
        Self::new(projects)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&CatalogFileOut {
            projects: &self.projects,
        })?)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// 共有用のハンドル
    pub fn shared(&self) -> Arc<[Project]> {
        Arc::clone(&self.projects)
    }

    pub fn get(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// ページに組み込まれたプロジェクト一覧
    pub fn builtin() -> Self {
        Self {
            projects: builtin_projects().into(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn project(
    id: ProjectId,
    title: &str,
    description: &str,
    image: &str,
    categories: &[&str],
    tags: &[&str],
    project_url: &str,
    github_url: &str,
) -> Project {
    Project {
        id,
        title: title.into(),
        description: description.into(),
        image: image.into(),
        video: None,
        categories: categories.iter().map(|c| c.to_string()).collect(),
        tags: strings(tags),
        project_url: Some(project_url.into()),
        github_url: Some(github_url.into()),
        highlights: Vec::new(),
    }
}

fn builtin_projects() -> Vec<Project> {
    vec![
        project(
            1,
            "AI-Powered Quiz Web App",
            "Interactive quiz application powered by AI with dynamic question generation and real-time scoring.",
            "https://images.pexels.com/photos/3862130/pexels-photo-3862130.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
            &["web"],
            &["JavaScript", "AI", "Web App"],
            "#",
            "#",
        ),
        project(
            2,
            "Super Store Analysis System",
            "End-to-end analytics system for Super Store sales, combining ML-driven insights, and a modern React UI.",
            "/Images/Store.png",
            &["ml", "software", "web"],
            &["Python", "ML"],
            "#",
            "https://github.com/Dhruv-Tikhande/Super_Store_Analysis",
        ),
        project(
            3,
            "Diamond Price Prediction",
            "Machine learning model for predicting diamond prices using regression algorithms and feature engineering.",
            "https://media.istockphoto.com/id/184303311/photo/three-beautiful-diamonds-on-a-black-background.jpg?s=612x612&w=0&k=20&c=_TUKoUkjTrsD78SHfFm4Oyy4r2RHv27-VczB-Zcxivo=",
            &["ml"],
            &["Python", "ML", "Regression"],
            "#",
            "https://github.com/Dhruv-Tikhande/Diamond_Price_Prediction",
        ),
        project(
            4,
            "Mushroom Classification",
            "Classification model to identify edible vs poisonous mushrooms using various ML algorithms.",
            "https://media.istockphoto.com/id/621261052/photo/amanita-muscaria-family.jpg?s=612x612&w=0&k=20&c=mvATY1PM8SaY99rE_wo2lURjW-Ggf99cePP59Vp1-8o=",
            &["ml"],
            &["Python", "Classification", "Data Science"],
            "#",
            "https://github.com/Dhruv-Tikhande/Mushroom_Edibility_Prediction",
        ),
        project(
            5,
            "Unity Game Project - KickOff",
            "Collection of interactive games built with Unity engine featuring 2D/3D gameplay mechanics.",
            "/Images/KickOff.png",
            &["game"],
            &["Unity", "C#", "Game Dev"],
            "#",
            "https://github.com/Dhruv-Tikhande/KickOFF_UnityGame",
        ),
        project(
            6,
            "Flight Management System",
            "A database-backed application to manage flights, passengers, bookings, and schedules with a clean UI and CRUD operations.",
            "https://images.pexels.com/photos/358319/pexels-photo-358319.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
            &["software"],
            &["Java", "MySQL", "GUI"],
            "",
            "https://github.com/Dhruv-Tikhande/Flight-Management-System",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let builtin = Catalog::builtin();
        assert_eq!(builtin.len(), 6);
        // 検証を通ること
        let validated = Catalog::new(builtin.projects().to_vec()).expect("検証失敗");
        assert_eq!(validated, builtin);
    }

    #[test]
    fn test_builtin_projects_have_no_highlights() {
        // 組み込みデータにハイライトは無い（JSONカタログでのみ指定）
        let catalog = Catalog::builtin();
        assert!(catalog.projects().iter().all(|p| p.highlights.is_empty()));
    }

    #[test]
    fn test_builtin_flight_project_has_no_demo() {
        let catalog = Catalog::builtin();
        let flight = catalog.get(6).expect("プロジェクトが見つからない");
        assert_eq!(flight.demo_link(), None);
        assert!(flight.source_link().is_some());
    }

    #[test]
    fn test_from_json_array() {
        let json = r#"[
            {"id": 1, "title": "A", "categories": ["web"]},
            {"id": 2, "title": "B", "categories": ["ml", "web"]}
        ]"#;
        let catalog = Catalog::from_json(json).expect("読み込み失敗");
        assert_eq!(catalog.len(), 2);
        assert!(catalog.get(2).unwrap().has_category("ml"));
        assert!(catalog.get(3).is_none());
    }

    #[test]
    fn test_from_json_wrapped() {
        let json = r#"{"projects": [{"id": 9, "title": "Wrapped"}]}"#;
        let catalog = Catalog::from_json(json).expect("読み込み失敗");
        assert_eq!(catalog.projects()[0].title, "Wrapped");
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let json = r#"[{"id": 1, "title": "A"}, {"id": 1, "title": "B"}]"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(err, Error::DuplicateProjectId(1)));
    }

    #[test]
    fn test_empty_title_rejected() {
        let json = r#"[{"id": 4, "title": "  "}]"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(err, Error::InvalidProject { id: 4, .. }));
    }

    #[test]
    fn test_invalid_json() {
        let err = Catalog::from_json("{not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_export_then_load_keeps_projects() {
        let catalog = Catalog::builtin();
        let json = catalog.to_json_pretty().expect("シリアライズ失敗");
        assert!(json.contains("\"projects\""));
        let restored = Catalog::from_json(&json).expect("読み込み失敗");
        assert_eq!(restored, catalog);
    }
}
