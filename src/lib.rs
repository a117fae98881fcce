#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod articles;
#[cfg(any(feature = "ssr", feature = "rss"))]
pub mod config;
pub mod contact;
pub mod effects;
#[cfg(any(feature = "ssr", feature = "rss"))]
mod highlight;
pub mod nav;
pub mod portfolio;
#[cfg(feature = "rss")]
pub mod rss;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).ok();
    leptos::mount::hydrate_body(App);
}
