//! プロジェクトギャラリーのビューモデル
//!
//! 固定のプロジェクト一覧・有効なフィルタ・詳細表示中のプロジェクトを保持し、
//! フィルタから表示対象を導出する。
//!
//! - フィルタ: 初期値 "all"。ボタン選択または外部通知で切り替わる
//! - 選択: 初期値なし。カード選択で設定、閉じる操作で解除
//!
//! どの操作も失敗しない。未知のカテゴリは空の表示結果になるだけ。

use crate::catalog::Catalog;
use crate::types::{category_label, Filter, FilterOption, Project, ProjectId, ALL_TOKEN, KNOWN_CATEGORIES};
use std::collections::BTreeSet;
use std::sync::Arc;

/// フィルタに一致するプロジェクトを元の順序のまま返す
pub fn compute_visible_projects<'a>(projects: &'a [Project], filter: &Filter) -> Vec<&'a Project> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

/// フィルタバーのボタン一覧（件数付き）
///
/// 並び順: all → 既知カテゴリ（web, ml, software, game）→ データ中のその他カテゴリ（昇順）
pub fn filter_options(projects: &[Project]) -> Vec<FilterOption> {
    let count = |token: &str| projects.iter().filter(|p| p.has_category(token)).count();

    let mut options = vec![FilterOption {
        token: ALL_TOKEN.to_string(),
        label: category_label(ALL_TOKEN).to_string(),
        count: projects.len(),
    }];

    for (token, label) in KNOWN_CATEGORIES {
        options.push(FilterOption {
            token: token.to_string(),
            label: label.to_string(),
            count: count(token),
        });
    }

    let extra: BTreeSet<&str> = projects
        .iter()
        .flat_map(|p| p.categories.iter().map(String::as_str))
        .filter(|c| *c != ALL_TOKEN && !KNOWN_CATEGORIES.iter().any(|(t, _)| t == c))
        .collect();
    for token in extra {
        options.push(FilterOption {
            token: token.to_string(),
            label: category_label(token).to_string(),
            count: count(token),
        });
    }

    options
}

/// ギャラリーの状態
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryState {
    projects: Arc<[Project]>,
    filter: Filter,
    selected: Option<ProjectId>,
    /// 表示対象（projects のインデックス）
    visible: Vec<usize>,
}

impl GalleryState {
    pub fn new(catalog: &Catalog) -> Self {
        Self::from_projects(catalog.shared())
    }

    pub fn from_projects(projects: Arc<[Project]>) -> Self {
        let visible = (0..projects.len()).collect();
        Self {
            projects,
            filter: Filter::All,
            selected: None,
            visible,
        }
    }

    /// フィルタを切り替えて表示対象を再計算する
    pub fn set_filter(&mut self, category: &str) {
        self.filter = Filter::parse(category);
        self.recompute();
        log::debug!(
            "gallery: filter '{}' -> {} visible",
            self.filter,
            self.visible.len()
        );
    }

    /// 外部（スキルカード等）からの絞り込み通知
    pub fn on_external_filter_change(&mut self, category: &str) {
        self.set_filter(category);
    }

    /// 詳細表示の選択/解除。状態が変わった場合に true を返す
    ///
    /// 一覧に存在しないIDは無視する。
    pub fn select_project(&mut self, id: Option<ProjectId>) -> bool {
        if self.selected == id {
            return false;
        }
        if let Some(id) = id {
            if !self.projects.iter().any(|p| p.id == id) {
                log::warn!("gallery: unknown project id {}", id);
                return false;
            }
        }
        log::debug!("gallery: selection {:?} -> {:?}", self.selected, id);
        self.selected = id;
        true
    }

    fn recompute(&mut self) {
        let filter = &self.filter;
        self.visible = self
            .projects
            .iter()
            .enumerate()
            .filter(|(_, p)| filter.matches(p))
            .map(|(i, _)| i)
            .collect();
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn is_active(&self, token: &str) -> bool {
        self.filter.as_str() == token
    }

    pub fn visible(&self) -> impl Iterator<Item = &Project> + '_ {
        self.visible.iter().map(|&i| &self.projects[i])
    }

    pub fn visible_ids(&self) -> Vec<ProjectId> {
        self.visible().map(|p| p.id).collect()
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn selected_id(&self) -> Option<ProjectId> {
        self.selected
    }

    pub fn selected(&self) -> Option<&Project> {
        let id = self.selected?;
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn filter_options(&self) -> Vec<FilterOption> {
        filter_options(&self.projects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter_bus::FilterBus;
    use std::sync::Mutex;

    fn p(id: ProjectId, categories: &[&str]) -> Project {
        Project {
            id,
            title: format!("Project {}", id),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            ..Default::default()
        }
    }

    fn scenario() -> Arc<[Project]> {
        vec![p(1, &["web"]), p(2, &["ml", "web"]), p(3, &["game"])].into()
    }

    fn ids(projects: &[&Project]) -> Vec<ProjectId> {
        projects.iter().map(|p| p.id).collect()
    }

    // =============================================
    // compute_visible_projects
    // =============================================

    #[test]
    fn test_all_returns_everything_in_order() {
        let projects = scenario();
        let visible = compute_visible_projects(&projects, &Filter::All);
        assert_eq!(ids(&visible), vec![1, 2, 3]);
    }

    #[test]
    fn test_category_uses_contains() {
        let projects = scenario();
        let visible = compute_visible_projects(&projects, &Filter::parse("web"));
        assert_eq!(ids(&visible), vec![1, 2]);
        let visible = compute_visible_projects(&projects, &Filter::parse("ml"));
        assert_eq!(ids(&visible), vec![2]);
    }

    #[test]
    fn test_subset_is_complete_and_ordered() {
        let projects = Catalog::builtin().shared();
        for option in filter_options(&projects) {
            let filter = Filter::parse(&option.token);
            let visible = compute_visible_projects(&projects, &filter);
            let expected: Vec<ProjectId> = projects
                .iter()
                .filter(|p| option.token == ALL_TOKEN || p.has_category(&option.token))
                .map(|p| p.id)
                .collect();
            assert_eq!(ids(&visible), expected, "filter {}", option.token);
            assert_eq!(visible.len(), option.count);
        }
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let projects = scenario();
        assert!(compute_visible_projects(&projects, &Filter::parse("robotics")).is_empty());
        assert!(compute_visible_projects(&[], &Filter::All).is_empty());
    }

    // =============================================
    // GalleryState
    // =============================================

    #[test]
    fn test_initial_state() {
        let state = GalleryState::from_projects(scenario());
        assert_eq!(state.filter(), &Filter::All);
        assert!(state.is_active("all"));
        assert_eq!(state.visible_ids(), vec![1, 2, 3]);
        assert_eq!(state.selected_id(), None);
    }

    #[test]
    fn test_filter_scenario() {
        let mut state = GalleryState::from_projects(scenario());

        state.set_filter("web");
        assert_eq!(state.visible_ids(), vec![1, 2]);
        state.set_filter("ml");
        assert_eq!(state.visible_ids(), vec![2]);
        state.set_filter("all");
        assert_eq!(state.visible_ids(), vec![1, 2, 3]);
    }

    #[test]
    fn test_set_filter_unknown_is_not_an_error() {
        let mut state = GalleryState::from_projects(scenario());
        state.set_filter("does-not-exist");
        assert_eq!(state.visible_len(), 0);
        assert!(state.is_active("does-not-exist"));
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut state = GalleryState::from_projects(scenario());

        assert!(state.select_project(Some(2)));
        assert!(!state.select_project(Some(2)));
        assert_eq!(state.selected_id(), Some(2));
        assert_eq!(state.selected().map(|p| p.id), Some(2));
    }

    #[test]
    fn test_select_replaces_and_clears() {
        let mut state = GalleryState::from_projects(scenario());

        state.select_project(Some(1));
        state.select_project(Some(3));
        assert_eq!(state.selected_id(), Some(3));

        assert!(state.select_project(None));
        assert_eq!(state.selected_id(), None);
        // 空の状態で解除しても変化なし
        assert!(!state.select_project(None));
        assert!(state.selected().is_none());
    }

    #[test]
    fn test_select_unknown_id_is_ignored() {
        let mut state = GalleryState::from_projects(scenario());
        state.select_project(Some(1));

        assert!(!state.select_project(Some(99)));
        assert_eq!(state.selected_id(), Some(1));
    }

    #[test]
    fn test_selection_survives_filter_change() {
        let mut state = GalleryState::from_projects(scenario());
        state.select_project(Some(3));
        state.set_filter("web");
        assert_eq!(state.selected_id(), Some(3));
    }

    #[test]
    fn test_external_change_matches_direct_set() {
        let mut direct = GalleryState::from_projects(scenario());
        direct.set_filter("ml");

        let shared = Arc::new(Mutex::new(GalleryState::from_projects(scenario())));
        let bus = FilterBus::new();
        let target = Arc::clone(&shared);
        let _sub = bus.subscribe(move |c| target.lock().unwrap().on_external_filter_change(c));

        bus.publish("ml");
        assert_eq!(*shared.lock().unwrap(), direct);
    }

    #[test]
    fn test_torn_down_gallery_ignores_notifications() {
        let shared = Arc::new(Mutex::new(GalleryState::from_projects(scenario())));
        let bus = FilterBus::new();
        let target = Arc::clone(&shared);
        let sub = bus.subscribe(move |c| target.lock().unwrap().on_external_filter_change(c));

        drop(sub);
        assert_eq!(bus.publish("game"), 0);
        assert!(shared.lock().unwrap().is_active("all"));
    }

    // =============================================
    // filter_options
    // =============================================

    #[test]
    fn test_filter_options_builtin_counts() {
        let options = filter_options(Catalog::builtin().projects());
        let summary: Vec<(&str, usize)> =
            options.iter().map(|o| (o.token.as_str(), o.count)).collect();
        assert_eq!(
            summary,
            vec![("all", 6), ("web", 2), ("ml", 3), ("software", 2), ("game", 1)]
        );
        assert_eq!(options[2].label, "ML & AI");
    }

    #[test]
    fn test_filter_options_extra_categories() {
        let projects = vec![p(1, &["robotics"]), p(2, &["audio", "web"])];
        let options = filter_options(&projects);
        let tokens: Vec<&str> = options.iter().map(|o| o.token.as_str()).collect();
        assert_eq!(tokens, vec!["all", "web", "ml", "software", "game", "audio", "robotics"]);
        assert_eq!(options.last().unwrap().label, "robotics");
        assert_eq!(options[2].count, 0);
    }
}
