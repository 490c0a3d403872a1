use content::site::ToolLink;
use leptos::prelude::*;

#[component]
pub fn ToolCard(tool: &'static ToolLink) -> impl IntoView {
    view! {
        <a class="tool-card" href=tool.href()>
            <h3 class="tool-card__title">{tool.title}</h3>
            <p class="tool-card__summary">{tool.summary}</p>
            <span class="tool-card__cta">"Open tool"</span>
        </a>
    }
}
