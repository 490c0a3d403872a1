use content::partners::Partner;
use leptos::prelude::*;

use crate::components::fallback_image::FallbackImage;

#[component]
pub fn PartnerCard(partner: &'static Partner) -> impl IntoView {
    view! {
        <a class="partner-card" href=partner.href()>
            <FallbackImage
                src=Some(partner.logo.to_owned())
                alt=format!("{} logo", partner.name)
                class="partner-card__logo"
            />
            <span class="partner-card__name">{partner.name}</span>
            <span class="partner-card__kind">{partner.kind.label()}</span>
            <p class="partner-card__blurb">{partner.blurb}</p>
        </a>
    }
}
