//! プロジェクト詳細モーダル
//!
//! 閉じるボタン・背景クリック・Escapeキーで閉じる。

use leptos::ev;
use leptos::prelude::*;
use portfolio_common::Project;
use crate::components::project_card::ProjectLinks;

#[component]
pub fn ProjectModal<F>(project: Project, on_close: F) -> impl IntoView
where
    F: Fn() + 'static + Clone + Send + Sync,
{
    let handle = window_event_listener(ev::keydown, {
        let on_close = on_close.clone();
        move |ev| {
            if ev.key() == "Escape" {
                on_close();
            }
        }
    });
    on_cleanup(move || handle.remove());

    let video = project.video_link().map(str::to_string);
    let demo = project.demo_link().map(str::to_string);
    let source = project.source_link().map(str::to_string);
    let highlights = (!project.highlights.is_empty()).then(|| {
        view! {
            <ul class="modal__highlights">
                {project.highlights.iter().map(|h| view! { <li>{h.clone()}</li> }).collect_view()}
            </ul>
        }
    });

    let media = match video {
        Some(url) => view! {
            <video class="modal__video" src=url controls=true></video>
        }.into_any(),
        None => view! {
            <img class="modal__image" src=project.image.clone() alt=project.title.clone() />
        }.into_any(),
    };

    view! {
        <div
            class="modal-backdrop"
            on:click={
                let on_close = on_close.clone();
                move |_| on_close()
            }
        >
            <div
                class="modal"
                role="dialog"
                aria-modal="true"
                on:click=|ev| ev.stop_propagation()
            >
                <button
                    class="modal__close"
                    aria-label="Close"
                    on:click={
                        let on_close = on_close.clone();
                        move |_| on_close()
                    }
                >
                    "✕"
                </button>

                <div class="modal__media">{media}</div>

                <div class="modal__body">
                    <h3 class="modal__title">{project.title.clone()}</h3>
                    <p class="modal__description">{project.description.clone()}</p>

                    <div class="project-card__tags">
                        {project.tags.iter().map(|tag| view! {
                            <span class="tag">{tag.clone()}</span>
                        }).collect_view()}
                    </div>

                    {highlights}

                    <ProjectLinks demo=demo source=source />
                </div>
            </div>
        </div>
    }
}
