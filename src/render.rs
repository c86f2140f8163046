//! 端末表示用の整形

use portfolio_common::{Catalog, FilterOption, GalleryState, Project};
use std::fmt::Write;

/// 一覧（1行1件）
pub fn render_list(gallery: &GalleryState) -> String {
    let mut out = String::new();
    for project in gallery.visible() {
        let categories: Vec<&str> = project.categories.iter().map(String::as_str).collect();
        let _ = writeln!(
            out,
            "{:>3}  {}  [{}]",
            project.id,
            project.title,
            categories.join(", ")
        );
    }
    if out.is_empty() {
        let _ = writeln!(out, "(該当なし: {})", gallery.filter());
    }
    out
}

/// フィルタバー（有効なフィルタに * を付ける）
pub fn render_categories(options: &[FilterOption], active: &str) -> String {
    let mut out = String::new();
    for option in options {
        let marker = if option.token == active { "*" } else { " " };
        let _ = writeln!(
            out,
            "{} {:<10} {:<14} ({})",
            marker, option.token, option.label, option.count
        );
    }
    out
}

pub fn render_detail(project: &Project) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "#{} {}", project.id, project.title);
    let _ = writeln!(out, "{}", project.description);
    let _ = writeln!(out);

    let categories: Vec<&str> = project.categories.iter().map(String::as_str).collect();
    let _ = writeln!(out, "  カテゴリ: {}", categories.join(", "));
    let _ = writeln!(out, "  タグ:     {}", project.tags.join(", "));
    let _ = writeln!(out, "  画像:     {}", project.image);
    if let Some(video) = project.video_link() {
        let _ = writeln!(out, "  動画:     {}", video);
    }
    if let Some(url) = project.demo_link() {
        let _ = writeln!(out, "  デモ:     {}", url);
    }
    if let Some(url) = project.source_link() {
        let _ = writeln!(out, "  ソース:   {}", url);
    }
    if !project.highlights.is_empty() {
        let _ = writeln!(out, "  ポイント:");
        for highlight in &project.highlights {
            let _ = writeln!(out, "    - {}", highlight);
        }
    }
    out
}

pub fn render_check_summary(catalog: &Catalog) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "✔ {}件のプロジェクト", catalog.len());
    let gallery = GalleryState::new(catalog);
    out.push_str(&render_categories(&gallery.filter_options(), ""));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_list_builtin_ml() {
        let mut gallery = GalleryState::new(&Catalog::builtin());
        gallery.set_filter("ml");

        let out = render_list(&gallery);
        let ids: Vec<&str> = out
            .lines()
            .map(|l| l.split_whitespace().next().unwrap())
            .collect();
        assert_eq!(ids, vec!["2", "3", "4"]);
    }

    #[test]
    fn test_render_list_empty() {
        let mut gallery = GalleryState::new(&Catalog::builtin());
        gallery.set_filter("robotics");
        assert_eq!(render_list(&gallery), "(該当なし: robotics)\n");
    }

    #[test]
    fn test_render_categories_marks_active() {
        let gallery = GalleryState::new(&Catalog::builtin());
        let out = render_categories(&gallery.filter_options(), "web");
        let active: Vec<&str> = out.lines().filter(|l| l.starts_with('*')).collect();
        assert_eq!(active.len(), 1);
        assert!(active[0].contains("Web Apps"));
        assert!(active[0].ends_with("(2)"));
    }

    #[test]
    fn test_render_detail_hides_empty_demo() {
        let catalog = Catalog::builtin();
        let out = render_detail(catalog.get(6).unwrap());
        assert!(out.starts_with("#6 Flight Management System"));
        assert!(!out.contains("デモ"));
        assert!(out.contains("ソース"));
    }

    #[test]
    fn test_render_detail_highlights() {
        let project = Project {
            id: 11,
            title: "Route Planner".to_string(),
            highlights: vec!["Offline maps".to_string(), "Turn-by-turn".to_string()],
            ..Default::default()
        };
        let out = render_detail(&project);
        assert!(out.contains("    - Offline maps\n    - Turn-by-turn\n"));
    }

    #[test]
    fn test_render_detail_without_highlights() {
        let catalog = Catalog::builtin();
        let out = render_detail(catalog.get(1).unwrap());
        assert!(!out.contains("    - "));
    }
}
