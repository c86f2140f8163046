//! 表示用の小さなヘルパー

use portfolio_common::{Project, ProjectId};

/// カードの出現アニメーション遅延（1枚あたり0.1秒）
pub fn animation_delay(index: usize) -> String {
    format!("animation-delay: {:.1}s", index as f64 * 0.1)
}

/// 表示中の一覧でのカード位置（見つからなければ0）
pub fn visible_position(visible: &[Project], id: ProjectId) -> usize {
    visible.iter().position(|p| p.id == id).unwrap_or_default()
}

/// スキルカードのスタイル
pub fn skill_card_style(index: usize, color: &str) -> String {
    format!("{}; --skill-color: {}", animation_delay(index), color)
}

/// フィルタボタンの件数表示
pub fn count_badge(count: usize) -> String {
    format!("({})", count)
}

pub fn copyright_line(year: u32, owner: &str) -> String {
    format!("© {} {}. Made with ♥ in India", year, owner)
}
