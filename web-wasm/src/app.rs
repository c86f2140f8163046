//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use crate::components::{
    header::Header,
    about::About,
    portfolio::Portfolio,
    footer::Footer,
};
use portfolio_common::{Catalog, FilterBus};

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let catalog = Catalog::builtin();
    // スキルカード → ギャラリーの絞り込み通知
    let bus = FilterBus::new();

    log::info!("portfolio: {} projects loaded", catalog.len());

    view! {
        <div class="app">
            <Header />
            <main class="main-content">
                <About bus=bus.clone() />
                <Portfolio catalog=catalog bus=bus />
            </main>
            <Footer />
        </div>
    }
}
