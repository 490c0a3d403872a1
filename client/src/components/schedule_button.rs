//! "Book a call" button that opens the scheduling widget in a modal.
//!
//! The booking calendar is a third-party page embedded in an iframe; the
//! iframe is only mounted while the modal is open.

#[cfg(test)]
#[path = "schedule_button_test.rs"]
mod schedule_button_test;

use content::site::SCHEDULING_URL;
use leptos::prelude::*;

/// Embed URL for the scheduling page, with the host's chrome trimmed.
pub fn embed_url(base: &str) -> String {
    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{base}{separator}embed_type=Inline&hide_gdpr_banner=1&hide_event_type_details=1")
}

#[component]
pub fn ScheduleButton(
    #[prop(into, default = "Book a free call".to_owned())] label: String,
    #[prop(into, default = "btn btn--primary".to_owned())] class: String,
) -> impl IntoView {
    let open = RwSignal::new(false);

    view! {
        <button class=class type="button" on:click=move |_| open.set(true)>
            {label}
        </button>
        <Show when=move || open.get()>
            <div class="modal" role="dialog" aria-modal="true" aria-label="Book a call">
                <div class="modal__backdrop" on:click=move |_| open.set(false)></div>
                <div class="modal__panel modal__panel--wide">
                    <button
                        class="modal__close"
                        type="button"
                        aria-label="Close"
                        on:click=move |_| open.set(false)
                    >
                        "✕"
                    </button>
                    <iframe
                        class="modal__frame"
                        src=embed_url(SCHEDULING_URL)
                        title="Schedule a counselling call"
                    ></iframe>
                </div>
            </div>
        </Show>
    }
}
