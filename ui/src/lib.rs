//! Browser rendition of the page blocks
//!
//! `/` mounts a demo page built in-process; `/pages` and `/view/:name`
//! fetch page documents from the preview server's API.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

mod api;
mod components;
mod demo;
mod types;

pub use components::blocks::{BlockList, ButtonBlock, HeadingBlock};
pub use components::form::FormBlock;

use components::pages::{DemoPage, PageList, PageView};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <nav class="top-nav">
                <A href="/">"Demo"</A>
                " | "
                <A href="/pages">"Pages"</A>
            </nav>
            <main>
                <Routes fallback=|| "Not found.">
                    <Route path=path!("/") view=DemoPage/>
                    <Route path=path!("/pages") view=PageList/>
                    <Route path=path!("/view/:name") view=PageView/>
                </Routes>
            </main>
        </Router>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        leptos::logging::warn!("Logger already initialised");
    }
    leptos::mount::mount_to_body(App);
}
