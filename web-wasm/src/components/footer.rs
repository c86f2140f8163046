//! フッターコンポーネント

use leptos::prelude::*;
use crate::view_helpers::copyright_line;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer__content">
                    <div class="footer__copyright">
                        <p>{copyright_line(year, "Dhruv Tikhande")}</p>
                    </div>
                    <div class="footer__links">
                        <a
                            href="https://html5up.net"
                            target="_blank"
                            rel="noopener noreferrer"
                            class="footer__link"
                        >
                            "Design Inspiration: HTML5 UP"
                        </a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
