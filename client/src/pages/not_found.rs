use leptos::prelude::*;
use leptos_meta::Title;

use crate::pages::page_title;

/// Inline copy for unknown slugs and CMS misses.
#[component]
pub fn NotFoundCopy(
    #[prop(into)] heading: String,
    #[prop(into)] back_href: String,
    #[prop(into)] back_label: String,
) -> impl IntoView {
    view! {
        <section class="not-found">
            <h1 class="not-found__heading">{heading}</h1>
            <p>"We couldn't find what you were looking for. It may have moved or never existed."</p>
            <a class="btn btn--primary" href=back_href>{back_label}</a>
        </section>
    }
}

/// Router fallback.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text=page_title("Page not found")/>
        <NotFoundCopy heading="Page not found" back_href="/" back_label="Back to home"/>
    }
}
