//! # client
//!
//! Leptos + WASM frontend for the EduLend site.
//!
//! This crate contains the routed pages, shared components, page state, the
//! JSON API client, and small browser utilities. Calculator math lives in
//! the `tools` crate and static copy in `content`; pages here only wire
//! them to signals and markup. The server renders every page with the
//! `ssr` feature and the browser bundle hydrates it with `hydrate`.


#![recursion_limit = "256"]
pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: attach to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    // Reveal animations are only armed once scripts run.
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.class_list().add_1("js");
    }

    leptos::mount::hydrate_body(app::App);
}
