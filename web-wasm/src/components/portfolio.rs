//! プロジェクトギャラリーコンポーネント
//!
//! `GalleryState` をシグナルで保持し、フィルタバー・カード一覧・詳細モーダルを描画する。
//! 絞り込み通知はマウント時に購読し、破棄時に解除する。

use leptos::prelude::*;
use portfolio_common::{Catalog, FilterBus, GalleryState, Project, ProjectId};
use crate::view_helpers::visible_position;
use crate::components::{
    filter_bar::FilterBar,
    project_card::ProjectCard,
    project_modal::ProjectModal,
};

/// 絞り込み通知をギャラリーに接続する。現在のOwner破棄時に解除される
pub fn connect_gallery(bus: &FilterBus, gallery: RwSignal<GalleryState>) {
    let subscription = bus.subscribe(move |category| {
        gallery.update(|g| g.on_external_filter_change(category));
    });
    on_cleanup(move || drop(subscription));
}

#[component]
pub fn Portfolio(catalog: Catalog, bus: FilterBus) -> impl IntoView {
    let gallery = RwSignal::new(GalleryState::new(&catalog));

    connect_gallery(&bus, gallery);

    let options = gallery.with_untracked(|g| g.filter_options());
    let active = Signal::derive(move || gallery.with(|g| g.filter().to_string()));
    let visible = Memo::new(move |_| {
        gallery.with(|g| g.visible().cloned().collect::<Vec<Project>>())
    });
    let selected = Memo::new(move |_| gallery.with(|g| g.selected().cloned()));

    let on_filter = move |token: String| gallery.update(|g| g.set_filter(&token));
    let on_open = move |id: ProjectId| {
        gallery.update(|g| {
            g.select_project(Some(id));
        });
    };
    let on_close = move || {
        gallery.update(|g| {
            g.select_project(None);
        });
    };

    view! {
        <section id="portfolio" class="portfolio">
            <div class="container">
                <header class="portfolio__header">
                    <h2 class="portfolio__title">"My Projects"</h2>
                    <p class="portfolio__subtitle">
                        "Here are some of my works showcasing my skills in coding, machine learning, and web development."
                    </p>
                </header>

                <FilterBar options=options active=active on_select=on_filter />

                <Show
                    when=move || !visible.with(|v| v.is_empty())
                    fallback=|| view! { <p class="portfolio__empty">"No projects in this category yet."</p> }
                >
                    <div class="portfolio__grid">
                        <For
                            each=move || visible.get()
                            key=|project| project.id
                            children=move |project| {
                                // 絞り込みで並びが変わるたびに遅延を再計算する
                                let id = project.id;
                                let index = Signal::derive(move || {
                                    visible.with(|v| visible_position(v, id))
                                });
                                view! { <ProjectCard project=project index=index on_open=on_open /> }
                            }
                        />
                    </div>
                </Show>

                {move || selected.get().map(|project| {
                    view! { <ProjectModal project=project on_close=on_close /> }
                })}
            </div>
        </section>
    }
}
