//! Lender detail page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The static partner table decides whether the slug exists at all. Known
//! partners then fetch their bank layout from the CMS; when the CMS has no
//! layout or is unreachable, the partner's static blurb renders instead.

use content::cms::BankLayout;
use content::partners::{Partner, find_partner};
use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::hooks::use_params_map;

use crate::components::fallback_image::FallbackImage;
use crate::components::hero::Hero;
use crate::components::reveal::Reveal;
use crate::components::schedule_button::ScheduleButton;
use crate::components::section_heading::SectionHeading;
use crate::components::skeleton::BankLayoutSkeleton;
use crate::net::api::fetch_bank;
use crate::pages::not_found::NotFoundCopy;
use crate::pages::page_title;
use crate::state::load::{LoadState, use_fetch};

#[component]
pub fn PartnerDetailPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.with(|p| p.get("slug").unwrap_or_default());

    move || match find_partner(&slug()) {
        Some(partner) => view! { <PartnerLayout partner/> }.into_any(),
        None => view! {
            <Title text=page_title("Partner not found")/>
            <NotFoundCopy heading="Partner not found" back_href="/partners" back_label="See all partners"/>
        }
        .into_any(),
    }
}

#[component]
fn PartnerLayout(partner: &'static Partner) -> impl IntoView {
    let layout = use_fetch(move || partner.slug.to_owned(), |slug: String| async move { fetch_bank(&slug).await });

    view! {
        <Title text=page_title(partner.name)/>
        <Meta name="description" content=partner.blurb/>
        {move || match layout.get() {
            LoadState::Loading => view! { <BankLayoutSkeleton/> }.into_any(),
            LoadState::Ready(bank) => view! { <BankLayoutView bank/> }.into_any(),
            LoadState::Missing | LoadState::Failed => view! { <PartnerFallback partner/> }.into_any(),
        }}
    }
}

#[component]
fn PartnerFallback(partner: &'static Partner) -> impl IntoView {
    view! {
        <section class="partner-fallback">
            <FallbackImage
                src=Some(partner.logo.to_owned())
                alt=format!("{} logo", partner.name)
                class="partner-fallback__logo"
            />
            <h1>{partner.name}</h1>
            <span class="partner-card__kind">{partner.kind.label()}</span>
            <p>{partner.blurb}</p>
            <ScheduleButton label="Talk to us about this lender"/>
        </section>
    }
}

#[component]
fn BankLayoutView(bank: BankLayout) -> impl IntoView {
    let facts: Vec<(&'static str, String)> = [
        ("Interest rate", bank.interest_rate),
        ("Maximum loan", bank.max_loan),
        ("Processing fee", bank.processing_fee),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.map(|v| (label, v)))
    .collect();
    let logo = bank.logo.map(|m| (m.alt_or(&bank.name), m.url));

    view! {
        <Hero
            heading=bank.name.clone()
            subheading=bank.tagline
            image=bank.hero_image.map(|m| m.url)
            with_schedule=true
        />
        <section class="section bank-layout">
            {logo.map(|(alt, url)| view! { <FallbackImage src=Some(url) alt class="bank-layout__logo"/> })}
            <p class="bank-layout__description">{bank.description}</p>
            {(!facts.is_empty()).then(|| view! {
                <dl class="stats">
                    {facts
                        .into_iter()
                        .map(|(label, value)| view! {
                            <div class="stats__item">
                                <dt class="stats__label">{label}</dt>
                                <dd class="stats__value">{value}</dd>
                            </div>
                        })
                        .collect_view()}
                </dl>
            })}
        </section>
        {(!bank.features.is_empty()).then(|| view! {
            <section class="section">
                <SectionHeading title="Why students choose it"/>
                <Reveal>
                    <ul class="feature-list">
                        {bank.features
                            .into_iter()
                            .map(|f| view! {
                                <li class="feature-list__item">
                                    <strong>{f.title}</strong>
                                    <p>{f.description}</p>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </Reveal>
            </section>
        })}
        <section class="section bank-layout__columns">
            {(!bank.eligibility.is_empty()).then(|| view! {
                <div>
                    <SectionHeading title="Eligibility"/>
                    <ul class="check-list">
                        {bank.eligibility
                            .into_iter()
                            .map(|c| view! {
                                <li>
                                    <strong>{c.title}</strong>
                                    {c.detail.map(|d| view! { <p>{d}</p> })}
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </div>
            })}
            {(!bank.documents.is_empty()).then(|| view! {
                <div>
                    <SectionHeading title="Documents you'll need"/>
                    <ul class="check-list">
                        {bank.documents
                            .into_iter()
                            .map(|d| view! {
                                <li>
                                    <strong>{d.title}</strong>
                                    {d.description.map(|text| view! { <p>{text}</p> })}
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </div>
            })}
        </section>
        {(!bank.trusted_by.is_empty()).then(|| view! {
            <section class="section">
                <SectionHeading title="Trusted by students at" centered=true/>
                <div class="logo-strip">
                    {bank.trusted_by
                        .into_iter()
                        .map(|m| {
                            let alt = m.alt_or("University logo");
                            view! { <FallbackImage src=Some(m.url) alt class="logo-strip__logo"/> }
                        })
                        .collect_view()}
                </div>
            </section>
        })}
    }
}
