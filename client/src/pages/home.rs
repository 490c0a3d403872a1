//! Home page assembled from CMS blocks.
//!
//! SYSTEM CONTEXT
//! ==============
//! The landing entry is fetched on mount. While it loads the landing
//! skeleton renders; if the CMS is down or has no home entry, a static
//! version of the page renders instead so the site never shows an empty
//! home.

use content::cms::{FaqBlock, HeroBlock, LandingBlock, LandingPage, StatsBlock, TestimonialsBlock};
use content::partners::PARTNERS;
use content::services::SERVICES;
use content::site::{BRAND, TAGLINE, TOOLS};
use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::components::fallback_image::FallbackImage;
use crate::components::hero::Hero;
use crate::components::partner_card::PartnerCard;
use crate::components::reveal::Reveal;
use crate::components::section_heading::SectionHeading;
use crate::components::service_card::ServiceCard;
use crate::components::skeleton::LandingSkeleton;
use crate::components::tool_card::ToolCard;
use crate::state::load::{LoadState, use_fetch};

#[component]
pub fn HomePage() -> impl IntoView {
    let landing = use_fetch(String::new, |_| crate::net::api::fetch_landing());

    view! {
        <Title text=format!("{BRAND} | Education loans and study abroad")/>
        <Meta name="description" content=TAGLINE/>
        {move || match landing.get() {
            LoadState::Loading => view! { <LandingSkeleton/> }.into_any(),
            LoadState::Ready(page) => view! { <LandingBlocks page/> }.into_any(),
            LoadState::Missing | LoadState::Failed => view! { <StaticHome/> }.into_any(),
        }}
        <ServicesSection/>
        <ToolsSection/>
    }
}

#[component]
fn LandingBlocks(page: LandingPage) -> impl IntoView {
    page.blocks
        .into_iter()
        .filter_map(|block| match block {
            LandingBlock::Hero(hero) => Some(view! { <HeroBlockView hero/> }.into_any()),
            LandingBlock::Stats(stats) => Some(view! { <StatsBlockView stats/> }.into_any()),
            LandingBlock::Testimonials(block) => Some(view! { <TestimonialsBlockView block/> }.into_any()),
            LandingBlock::Faq(faq) => Some(view! { <FaqBlockView faq/> }.into_any()),
            LandingBlock::PartnerStrip(strip) => {
                Some(view! { <PartnerStrip heading=strip.heading/> }.into_any())
            }
            LandingBlock::Unknown => None,
        })
        .collect_view()
}

#[component]
fn HeroBlockView(hero: HeroBlock) -> impl IntoView {
    view! {
        <Hero
            heading=hero.heading
            subheading=hero.subheading
            cta_label=hero.cta_label
            cta_href=hero.cta_href
            image=hero.image.map(|m| m.url)
            with_schedule=true
        />
    }
}

#[component]
fn StatsBlockView(stats: StatsBlock) -> impl IntoView {
    view! {
        <Reveal>
            <dl class="stats">
                {stats
                    .items
                    .into_iter()
                    .map(|stat| {
                        view! {
                            <div class="stats__item">
                                <dt class="stats__label">{stat.label}</dt>
                                <dd class="stats__value">{stat.value}</dd>
                            </div>
                        }
                    })
                    .collect_view()}
            </dl>
        </Reveal>
    }
}

#[component]
fn TestimonialsBlockView(block: TestimonialsBlock) -> impl IntoView {
    view! {
        <section class="section testimonials">
            <SectionHeading title=block.heading.unwrap_or_else(|| "Students who flew with us".to_owned()) centered=true/>
            <div class="testimonials__grid">
                {block
                    .items
                    .into_iter()
                    .enumerate()
                    .map(|(i, item)| {
                        let alt = item.avatar.as_ref().map_or_else(|| item.name.clone(), |m| m.alt_or(&item.name));
                        #[allow(clippy::cast_possible_truncation)]
                        let delay = (i as u32).min(5) * 80;
                        view! {
                            <Reveal delay_ms=delay>
                                <figure class="testimonial">
                                    <FallbackImage src=item.avatar.map(|m| m.url) alt=alt class="testimonial__avatar"/>
                                    <blockquote class="testimonial__quote">{item.quote}</blockquote>
                                    <figcaption class="testimonial__author">
                                        <strong>{item.name}</strong>
                                        {item.university.map(|u| view! { <span>{u}</span> })}
                                    </figcaption>
                                </figure>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn FaqBlockView(faq: FaqBlock) -> impl IntoView {
    view! {
        <section class="section faq">
            <SectionHeading title=faq.heading.unwrap_or_else(|| "Frequently asked questions".to_owned())/>
            {faq
                .items
                .into_iter()
                .map(|item| {
                    view! {
                        <details class="faq__item">
                            <summary class="faq__question">{item.question}</summary>
                            <p class="faq__answer">{item.answer}</p>
                        </details>
                    }
                })
                .collect_view()}
        </section>
    }
}

#[component]
fn PartnerStrip(heading: Option<String>) -> impl IntoView {
    view! {
        <section class="section partner-strip">
            <SectionHeading
                title=heading.unwrap_or_else(|| "Our lending partners".to_owned())
                subtitle=format!("{} banks and lenders, one application.", PARTNERS.len())
                centered=true
            />
            <div class="partner-strip__logos">
                {PARTNERS
                    .iter()
                    .map(|partner| {
                        view! {
                            <a class="partner-strip__logo" href=partner.href() title=partner.name>
                                <FallbackImage src=Some(partner.logo.to_owned()) alt=partner.name/>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn StaticHome() -> impl IntoView {
    view! {
        <Hero
            heading="Fund your degree abroad, without the paperwork maze"
            subheading=TAGLINE
            cta_label="Check your EMI"
            cta_href="/tools/emi-calculator"
            with_schedule=true
        />
        <PartnerStrip heading=None/>
        <section class="section partners-preview">
            <SectionHeading title="Popular lenders"/>
            <div class="card-grid">
                {PARTNERS.iter().take(3).map(|partner| view! { <PartnerCard partner/> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ServicesSection() -> impl IntoView {
    view! {
        <section class="section">
            <SectionHeading eyebrow="What we do" title="From admit to arrival"/>
            <div class="card-grid">
                {SERVICES
                    .iter()
                    .map(|service| view! { <Reveal><ServiceCard service/></Reveal> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ToolsSection() -> impl IntoView {
    view! {
        <section class="section section--alt">
            <SectionHeading eyebrow="Free tools" title="Plan the numbers before you apply"/>
            <div class="card-grid">
                {TOOLS.iter().take(4).map(|tool| view! { <ToolCard tool/> }).collect_view()}
            </div>
            <a class="btn btn--ghost" href="/tools">"All tools"</a>
        </section>
    }
}
