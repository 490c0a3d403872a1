use content::services::ServiceSummary;
use leptos::prelude::*;

#[component]
pub fn ServiceCard(service: &'static ServiceSummary) -> impl IntoView {
    view! {
        <a class="service-card" href=service.href()>
            <span class="service-card__icon" aria-hidden="true">{service.icon}</span>
            <h3 class="service-card__title">{service.title}</h3>
            <p class="service-card__summary">{service.summary}</p>
            <span class="service-card__more">"Learn more →"</span>
        </a>
    }
}
