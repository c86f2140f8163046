//! 自己紹介セクションのスキルカード
//!
//! カードをクリックすると対応カテゴリでギャラリーを絞り込む。

use crate::types::ALL_TOKEN;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub title: &'static str,
    pub description: &'static str,
    /// アクセントカラー（CSS変数 --skill-color）
    pub color: &'static str,
}

impl Skill {
    /// カードに対応する絞り込みトークン（対応なしは "all"）
    pub fn filter_token(&self) -> &'static str {
        skill_filter(self.title)
    }
}

pub fn skill_filter(title: &str) -> &'static str {
    match title {
        "AI & Machine Learning" => "ml",
        "Web Development" => "web",
        "Game Development" => "game",
        "Database Management" => "software",
        _ => ALL_TOKEN,
    }
}

pub fn builtin_skills() -> Vec<Skill> {
    vec![
        Skill {
            title: "Programming",
            description: "C, Java, JavaScript, Python",
            color: "#3B82F6",
        },
        Skill {
            title: "Web Development",
            description: "HTML, CSS, JavaScript, React, Responsive Design",
            color: "#10B981",
        },
        Skill {
            title: "AI & Machine Learning",
            description: "Machine Learning, Data Analysis, AI Applications",
            color: "#8B5CF6",
        },
        Skill {
            title: "Game Development",
            description: "Unity, C#, 2D/3D Game Design",
            color: "#F59E0B",
        },
        Skill {
            title: "Database Management",
            description: "Database Design, SQL, Data Modeling",
            color: "#EF4444",
        },
        Skill {
            title: "Design Tools",
            description: "AutoCAD, UI/UX Basics, Prototyping",
            color: "#EC4899",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_filter_mapping() {
        assert_eq!(skill_filter("AI & Machine Learning"), "ml");
        assert_eq!(skill_filter("Web Development"), "web");
        assert_eq!(skill_filter("Game Development"), "game");
        assert_eq!(skill_filter("Database Management"), "software");
    }

    #[test]
    fn test_unmapped_skill_resets_filter() {
        assert_eq!(skill_filter("Programming"), "all");
        assert_eq!(skill_filter("Design Tools"), "all");
        assert_eq!(skill_filter(""), "all");
    }

    #[test]
    fn test_builtin_skills() {
        let skills = builtin_skills();
        assert_eq!(skills.len(), 6);
        let tokens: Vec<&str> = skills.iter().map(Skill::filter_token).collect();
        assert_eq!(tokens, vec!["all", "web", "ml", "game", "software", "all"]);
    }
}
