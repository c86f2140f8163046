//! DOM操作

use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// セクションまでスムーズスクロール（要素がなければ何もしない）
pub fn scroll_to_section(section_id: &str) {
    let Some(section) = gloo::utils::document().get_element_by_id(section_id) else {
        log::debug!("section not found: {}", section_id);
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    section.scroll_into_view_with_scroll_into_view_options(&options);
}
