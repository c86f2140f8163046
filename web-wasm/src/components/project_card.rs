//! プロジェクトカード

use leptos::prelude::*;
use portfolio_common::{Project, ProjectId};
use crate::view_helpers::animation_delay;

#[component]
pub fn ProjectCard<F>(
    project: Project,
    index: Signal<usize>,
    on_open: F,
) -> impl IntoView
where
    F: Fn(ProjectId) + 'static + Clone + Send + Sync,
{
    let id = project.id;
    let demo = project.demo_link().map(str::to_string);
    let source = project.source_link().map(str::to_string);

    view! {
        <article
            class="project-card"
            style=move || animation_delay(index.get())
            on:click=move |_| on_open(id)
        >
            <div class="project-card__image">
                <img src=project.image.clone() alt=project.title.clone() />
                <div class="project-card__overlay">
                    <ProjectLinks demo=demo source=source />
                </div>
            </div>

            <div class="project-card__content">
                <h3 class="project-card__title">{project.title.clone()}</h3>
                <p class="project-card__description">{project.description.clone()}</p>
                <div class="project-card__tags">
                    {project.tags.iter().map(|tag| view! {
                        <span class="tag">{tag.clone()}</span>
                    }).collect_view()}
                </div>
            </div>
        </article>
    }
}

/// 外部リンク（デモ / ソース）。クリックはカードに伝播させない
#[component]
pub fn ProjectLinks(demo: Option<String>, source: Option<String>) -> impl IntoView {
    view! {
        <div class="project-card__actions">
            {demo.map(|url| view! {
                <a
                    href=url
                    class="project-action"
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label="View project"
                    on:click=|ev| ev.stop_propagation()
                >
                    "Live"
                </a>
            })}
            {source.map(|url| view! {
                <a
                    href=url
                    class="project-action"
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label="View code"
                    on:click=|ev| ev.stop_propagation()
                >
                    "Code"
                </a>
            })}
        </div>
    }
}
