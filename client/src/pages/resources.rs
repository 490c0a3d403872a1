use content::cms::Gallery;
use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::components::fallback_image::FallbackImage;
use crate::components::section_heading::SectionHeading;
use crate::components::skeleton::GallerySkeleton;
use crate::net::api::fetch_galleries;
use crate::pages::page_title;
use crate::state::load::{LoadState, use_fetch};

#[component]
pub fn ResourcesPage() -> impl IntoView {
    let galleries = use_fetch(String::new, |_| fetch_galleries());

    view! {
        <Title text=page_title("Resources")/>
        <Meta name="description" content="Photos and stories from students we've helped, plus our free planning tools."/>
        <section class="section">
            <SectionHeading
                eyebrow="Resources"
                title="From our students"
                subtitle="Send-offs, campus visits and counselling days."
            />
            {move || match galleries.get() {
                LoadState::Loading => view! { <GallerySkeleton/> }.into_any(),
                LoadState::Ready(list) if !list.is_empty() => {
                    list.into_iter().map(|gallery| view! { <GalleryView gallery/> }).collect_view().into_any()
                }
                LoadState::Ready(_) | LoadState::Missing => view! {
                    <p class="notice">"No galleries yet. Check back soon."</p>
                }
                .into_any(),
                LoadState::Failed => view! {
                    <p class="notice">"We couldn't load the gallery right now. Please try again later."</p>
                }
                .into_any(),
            }}
            <p class="resources__tools">
                "Planning your budget? Try our " <a href="/tools">"free calculators"</a> "."
            </p>
        </section>
    }
}

#[component]
fn GalleryView(gallery: Gallery) -> impl IntoView {
    let title = gallery.title.clone();

    view! {
        <article class="gallery">
            <h3 class="gallery__title">{gallery.title}</h3>
            {gallery.description.map(|d| view! { <p class="gallery__description">{d}</p> })}
            <div class="gallery__grid">
                {gallery.images
                    .into_iter()
                    .map(|image| {
                        let alt = image.alt_or(&title);
                        view! {
                            <figure class="gallery__item">
                                <FallbackImage src=Some(image.url) alt class="gallery__image"/>
                                {image.caption.map(|c| view! { <figcaption>{c}</figcaption> })}
                            </figure>
                        }
                    })
                    .collect_view()}
            </div>
        </article>
    }
}
