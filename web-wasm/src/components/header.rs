//! ヘッダーコンポーネント（プロフィールとナビゲーション）

use leptos::prelude::*;
use crate::dom::scroll_to_section;

const NAV_ITEMS: [(&str, &str); 2] = [
    ("about", "About"),
    ("portfolio", "Projects"),
];

#[component]
pub fn Header() -> impl IntoView {
    let (is_menu_open, set_is_menu_open) = signal(false);

    view! {
        <header class="header" class:header--open=move || is_menu_open.get()>
            <div class="header__content">
                <div class="header__profile">
                    <div class="profile-image">
                        <img src="/Images/me.png" alt="Dhruv Tikhande" class="profile-image__img" />
                        <div class="profile-image__ring"></div>
                    </div>
                    <h1 class="header__name">"Dhruv Tikhande"</h1>
                    <p class="header__title">"B.Tech IT | Aspiring Engineer"</p>
                </div>

                <nav class="header__nav">
                    <ul class="nav-list">
                        {NAV_ITEMS.into_iter().map(|(id, label)| view! {
                            <li class="nav-list__item">
                                <button
                                    class="nav-link"
                                    on:click=move |_| {
                                        scroll_to_section(id);
                                        set_is_menu_open.set(false);
                                    }
                                >
                                    <span class="nav-link__text">{label}</span>
                                </button>
                            </li>
                        }).collect_view()}
                    </ul>
                </nav>

                <div class="header__social">
                    <a
                        href="https://github.com/Dhruv-Tikhande"
                        class="social-link"
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="GitHub Profile"
                    >
                        "GitHub"
                    </a>
                    <a href="mailto:dhruvtikhande23915@gmail.com" class="social-link" aria-label="Email">
                        "Email"
                    </a>
                    <a
                        href="https://linkedin.com/in/dhruv-tikhande-3010b8296/"
                        class="social-link"
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="LinkedIn Profile"
                    >
                        "LinkedIn"
                    </a>
                    <a href="/Resume.pdf" download="" class="resume-btn" aria-label="Download Resume">
                        "Resume"
                    </a>
                </div>
            </div>
        </header>

        <div class="mobile-header">
            <button
                class="mobile-menu-toggle"
                aria-label="Toggle menu"
                on:click=move |_| set_is_menu_open.update(|open| *open = !*open)
            >
                {move || if is_menu_open.get() { "✕" } else { "☰" }}
            </button>
        </div>

        <Show when=move || is_menu_open.get()>
            <div class="mobile-overlay" on:click=move |_| set_is_menu_open.set(false)></div>
        </Show>
    }
}
