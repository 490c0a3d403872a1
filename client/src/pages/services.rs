use content::services::SERVICES;
use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::components::hero::Hero;
use crate::components::reveal::Reveal;
use crate::components::service_card::ServiceCard;
use crate::pages::page_title;

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <Title text=page_title("Services")/>
        <Meta name="description" content="Education loans, admissions counselling, visa help and more for students going abroad."/>
        <Hero
            heading="Everything between your offer letter and your first lecture"
            subheading="Pick a service to see how we help and what it costs you: nothing."
            with_schedule=true
        />
        <section class="section">
            <Reveal>
                <div class="card-grid">
                    {SERVICES.iter().map(|service| view! { <ServiceCard service/> }).collect_view()}
                </div>
            </Reveal>
        </section>
    }
}
