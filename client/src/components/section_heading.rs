use leptos::prelude::*;

#[component]
pub fn SectionHeading(
    #[prop(into)] title: String,
    #[prop(into, optional)] eyebrow: Option<String>,
    #[prop(into, optional)] subtitle: Option<String>,
    #[prop(optional)] centered: bool,
) -> impl IntoView {
    view! {
        <header class="section-heading" class:section-heading--centered=centered>
            {eyebrow.map(|text| view! { <span class="section-heading__eyebrow">{text}</span> })}
            <h2 class="section-heading__title">{title}</h2>
            {subtitle.map(|text| view! { <p class="section-heading__subtitle">{text}</p> })}
        </header>
    }
}
