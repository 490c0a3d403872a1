//! Page-top banner used by static pages and the CMS hero block.

use leptos::prelude::*;

use crate::components::fallback_image::FallbackImage;
use crate::components::schedule_button::ScheduleButton;

#[component]
pub fn Hero(
    #[prop(into)] heading: String,
    #[prop(into, optional)] subheading: MaybeProp<String>,
    #[prop(into, optional)] cta_label: MaybeProp<String>,
    #[prop(into, optional)] cta_href: MaybeProp<String>,
    #[prop(into, optional)] image: MaybeProp<String>,
    /// Show the "book a free call" button next to the primary CTA.
    #[prop(optional)]
    with_schedule: bool,
) -> impl IntoView {
    let image = image.get_untracked();
    let has_image = image.is_some();
    let cta = cta_label.get_untracked().zip(cta_href.get_untracked());
    let subheading = subheading.get_untracked();

    view! {
        <section class="hero" class:hero--with-image=has_image>
            <div class="hero__copy">
                <h1 class="hero__heading">{heading.clone()}</h1>
                {subheading.map(|text| view! { <p class="hero__subheading">{text}</p> })}
                <div class="hero__actions">
                    {cta.map(|(label, href)| view! { <a class="btn btn--primary" href=href>{label}</a> })}
                    {with_schedule.then(|| view! { <ScheduleButton label="Book a free call" class="btn btn--ghost"/> })}
                </div>
            </div>
            {image.map(|src| view! {
                <div class="hero__media">
                    <FallbackImage src=Some(src) alt=heading class="hero__image" eager=true/>
                </div>
            })}
        </section>
    }
}
