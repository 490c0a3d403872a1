//! Site header with primary navigation.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use content::site::BRAND;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::schedule_button::ScheduleButton;

const NAV_LINKS: [(&str, &str); 5] = [
    ("/tools", "Tools"),
    ("/services", "Services"),
    ("/partners", "Partners"),
    ("/resources", "Resources"),
    ("/contact", "Contact"),
];

fn is_active(pathname: &str, href: &str) -> bool {
    pathname == href || pathname.starts_with(&format!("{href}/"))
}

#[component]
pub fn Navbar() -> impl IntoView {
    let menu_open = RwSignal::new(false);
    let pathname = use_location().pathname;

    // Close the mobile menu after navigating.
    Effect::new(move || {
        pathname.track();
        menu_open.set(false);
    });

    view! {
        <header class="navbar">
            <a class="navbar__brand" href="/">{BRAND}</a>
            <button
                class="navbar__toggle"
                type="button"
                aria-label="Toggle navigation"
                aria-expanded=move || menu_open.get().to_string()
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                "☰"
            </button>
            <nav class="navbar__links" class:navbar__links--open=move || menu_open.get()>
                {NAV_LINKS
                    .into_iter()
                    .map(|(href, label)| {
                        view! {
                            <a
                                class="navbar__link"
                                class:navbar__link--active=move || is_active(&pathname.get(), href)
                                href=href
                            >
                                {label}
                            </a>
                        }
                    })
                    .collect_view()}
                <ScheduleButton label="Free counselling" class="btn btn--primary navbar__cta"/>
            </nav>
        </header>
    }
}
