//! Service detail page.
//!
//! The body is Markdown from the CMS. When the CMS has no entry but the
//! slug is in the static catalogue, the catalogue summary renders instead.

use content::cms::Service;
use content::services::find_service;
use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::hooks::use_params_map;

use crate::components::fallback_image::FallbackImage;
use crate::components::hero::Hero;
use crate::components::section_heading::SectionHeading;
use crate::components::skeleton::ServiceSkeleton;
use crate::net::api::fetch_service;
use crate::pages::not_found::NotFoundCopy;
use crate::pages::page_title;
use crate::state::load::{LoadState, use_fetch};
use crate::util::markdown::render_markdown_html;

#[component]
pub fn ServiceDetailPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.with(|p| p.get("slug").unwrap_or_default());
    let service = use_fetch(slug, |slug: String| async move { fetch_service(&slug).await });

    view! {
        {move || match service.get() {
            LoadState::Loading => view! { <ServiceSkeleton/> }.into_any(),
            LoadState::Ready(service) => view! { <ServiceBody service/> }.into_any(),
            LoadState::Missing => match find_service(&slug()) {
                Some(summary) => view! {
                    <Title text=page_title(summary.title)/>
                    <Hero heading=summary.title subheading=summary.summary with_schedule=true/>
                }
                .into_any(),
                None => view! {
                    <Title text=page_title("Service not found")/>
                    <NotFoundCopy heading="Service not found" back_href="/services" back_label="See all services"/>
                }
                .into_any(),
            },
            LoadState::Failed => view! {
                <Title text=page_title("Services")/>
                <section class="notice">
                    <p>"We couldn't load this service right now. Please try again in a moment, or book a call and we'll walk you through it."</p>
                    <a class="btn btn--ghost" href="/services">"See all services"</a>
                </section>
            }
            .into_any(),
        }}
    }
}

#[component]
fn ServiceBody(service: Service) -> impl IntoView {
    let body_html = render_markdown_html(&service.body);
    let image_alt = service.image.as_ref().map(|m| m.alt_or(&service.title)).unwrap_or_default();
    let image_src = service.image.map(|m| m.url);
    let description = service.summary.clone();

    view! {
        <Title text=page_title(&service.title)/>
        <Meta name="description" content=description/>
        <Hero heading=service.title subheading=service.summary with_schedule=true/>
        <article class="service-detail">
            {image_src.map(|src| view! {
                <FallbackImage src=Some(src) alt=image_alt class="service-detail__image"/>
            })}
            <div class="prose" inner_html=body_html></div>
            {(!service.highlights.is_empty()).then(|| view! {
                <section class="section">
                    <SectionHeading title="Highlights"/>
                    <ul class="feature-list">
                        {service.highlights
                            .into_iter()
                            .map(|f| view! {
                                <li class="feature-list__item">
                                    <strong>{f.title}</strong>
                                    <p>{f.description}</p>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </section>
            })}
            {(!service.faqs.is_empty()).then(|| view! {
                <section class="section">
                    <SectionHeading title="Questions students ask"/>
                    {service.faqs
                        .into_iter()
                        .map(|faq| view! {
                            <details class="faq">
                                <summary class="faq__question">{faq.question}</summary>
                                <p class="faq__answer">{faq.answer}</p>
                            </details>
                        })
                        .collect_view()}
                </section>
            })}
        </article>
    }
}
