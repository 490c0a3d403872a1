use content::site::TOOLS;
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::hero::Hero;
use crate::components::tool_card::ToolCard;
use crate::pages::page_title;

#[component]
pub fn ToolsPage() -> impl IntoView {
    view! {
        <Title text=page_title("Free study-abroad tools")/>
        <Hero
            heading="Free study-abroad tools"
            subheading="Loan EMIs, living costs, currency, time zones and packing, all in one place."
        />
        <section class="section">
            <div class="card-grid">
                {TOOLS.iter().map(|tool| view! { <ToolCard tool/> }).collect_view()}
            </div>
        </section>
    }
}
