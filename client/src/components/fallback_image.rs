//! `<img>` that falls back to the site placeholder once.

use leptos::prelude::*;

use crate::util::image::{ImageFallback, resolve_src};

#[component]
pub fn FallbackImage(
    #[prop(into)] src: Option<String>,
    #[prop(into)] alt: String,
    #[prop(into, optional)] class: String,
    #[prop(optional)] eager: bool,
) -> impl IntoView {
    let fallback = RwSignal::new(ImageFallback::default());
    let current = move || resolve_src(src.as_deref(), fallback.get().failed());

    view! {
        <img
            class=class
            src=current
            alt=alt
            loading=if eager { "eager" } else { "lazy" }
            on:error=move |_| {
                let mut next = fallback.get_untracked();
                if next.on_error() {
                    fallback.set(next);
                }
            }
        />
    }
}
