//! Loading placeholders shown while CMS content is in flight.
//!
//! Pure markup: shimmer blocks sized like the content they stand in for.

use leptos::prelude::*;

#[component]
fn Bone(#[prop(into, optional)] class: String) -> impl IntoView {
    view! { <span class=format!("skeleton__bone {class}") aria-hidden="true"></span> }
}

#[component]
pub fn CardGridSkeleton(#[prop(default = 6)] count: usize) -> impl IntoView {
    view! {
        <div class="skeleton skeleton--grid" aria-busy="true" aria-label="Loading">
            {(0..count)
                .map(|_| {
                    view! {
                        <div class="skeleton__card">
                            <Bone class="skeleton__bone--media"/>
                            <Bone class="skeleton__bone--title"/>
                            <Bone class="skeleton__bone--line"/>
                            <Bone class="skeleton__bone--line skeleton__bone--short"/>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn BankLayoutSkeleton() -> impl IntoView {
    view! {
        <div class="skeleton skeleton--bank" aria-busy="true" aria-label="Loading lender details">
            <div class="skeleton__hero">
                <Bone class="skeleton__bone--logo"/>
                <Bone class="skeleton__bone--heading"/>
                <Bone class="skeleton__bone--line"/>
            </div>
            <div class="skeleton__facts">
                {(0..3).map(|_| view! { <Bone class="skeleton__bone--fact"/> }).collect_view()}
            </div>
            <div class="skeleton__columns">
                <div>{(0..4).map(|_| view! { <Bone class="skeleton__bone--line"/> }).collect_view()}</div>
                <div>{(0..4).map(|_| view! { <Bone class="skeleton__bone--line"/> }).collect_view()}</div>
            </div>
        </div>
    }
}

#[component]
pub fn ServiceSkeleton() -> impl IntoView {
    view! {
        <div class="skeleton skeleton--service" aria-busy="true" aria-label="Loading service">
            <Bone class="skeleton__bone--heading"/>
            <Bone class="skeleton__bone--media skeleton__bone--wide"/>
            {(0..6).map(|_| view! { <Bone class="skeleton__bone--line"/> }).collect_view()}
        </div>
    }
}

#[component]
pub fn GallerySkeleton() -> impl IntoView {
    view! {
        <div class="skeleton skeleton--gallery" aria-busy="true" aria-label="Loading gallery">
            <Bone class="skeleton__bone--title"/>
            <div class="skeleton__tiles">
                {(0..8).map(|_| view! { <Bone class="skeleton__bone--tile"/> }).collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn LandingSkeleton() -> impl IntoView {
    view! {
        <div class="skeleton skeleton--landing" aria-busy="true" aria-label="Loading">
            <div class="skeleton__hero">
                <Bone class="skeleton__bone--heading"/>
                <Bone class="skeleton__bone--line"/>
                <Bone class="skeleton__bone--button"/>
            </div>
            <div class="skeleton__facts">
                {(0..4).map(|_| view! { <Bone class="skeleton__bone--fact"/> }).collect_view()}
            </div>
            <CardGridSkeleton count=3/>
        </div>
    }
}
