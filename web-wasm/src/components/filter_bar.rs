//! カテゴリフィルタバー

use leptos::prelude::*;
use portfolio_common::FilterOption;
use crate::view_helpers::count_badge;

#[component]
pub fn FilterBar<F>(
    options: Vec<FilterOption>,
    active: Signal<String>,
    on_select: F,
) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="portfolio__filters">
            <div class="filters">
                {options.into_iter().map(|option| {
                    let is_active = {
                        let token = option.token.clone();
                        move || active.with(|a| *a == token)
                    };
                    let on_click = {
                        let on_select = on_select.clone();
                        let token = option.token.clone();
                        move |_| on_select(token.clone())
                    };
                    view! {
                        <button
                            class="filter-btn"
                            class:filter-btn--active=is_active
                            on:click=on_click
                        >
                            <span>{option.label}</span>
                            <span class="filter-count">{count_badge(option.count)}</span>
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
