use content::partners::{PartnerKind, partners_by_kind};
use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::components::partner_card::PartnerCard;
use crate::components::reveal::Reveal;
use crate::components::section_heading::SectionHeading;
use crate::pages::page_title;

#[component]
pub fn PartnersPage() -> impl IntoView {
    view! {
        <Title text=page_title("Our partners")/>
        <Meta name="description" content="Banks, NBFCs and international lenders we work with to fund your studies."/>
        <section class="section">
            <SectionHeading
                title="Lending partners"
                subtitle="We compare offers across every partner so you don't have to."
                centered=true
            />
            {PartnerKind::ALL
                .into_iter()
                .filter_map(|kind| {
                    let partners = partners_by_kind(kind);
                    (!partners.is_empty()).then(|| view! {
                        <Reveal>
                            <h2 class="partner-group__title">{kind.label()}</h2>
                            <div class="card-grid">
                                {partners.into_iter().map(|partner| view! { <PartnerCard partner/> }).collect_view()}
                            </div>
                        </Reveal>
                    })
                })
                .collect_view()}
        </section>
    }
}
