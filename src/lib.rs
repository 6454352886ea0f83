#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod blog;
pub mod contact;
pub mod filter;
#[cfg(any(feature = "ssr", feature = "rss"))]
mod highlight;
pub mod nav;
pub mod notify;
pub mod portfolio;
pub mod profile;
#[cfg(feature = "rss")]
pub mod rss;
pub mod site;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // a second init (e.g. hot reload) is harmless
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hydrating {}", site::SITE.domain);
    leptos::mount::hydrate_body(App);
}
