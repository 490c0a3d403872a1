use content::site::{CONTACT_EMAIL, CONTACT_PHONE, OFFICE_ADDRESS};
use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::components::schedule_button::ScheduleButton;
use crate::components::section_heading::SectionHeading;
use crate::pages::page_title;

#[component]
pub fn ContactPage() -> impl IntoView {
    let phone_href = format!("tel:{}", CONTACT_PHONE.replace(' ', ""));

    view! {
        <Title text=page_title("Contact us")/>
        <Meta name="description" content="Talk to an EduLend counsellor by phone, email or a free video call."/>
        <section class="section contact">
            <SectionHeading
                title="Talk to a counsellor"
                subtitle="Free, no-obligation advice on loans, admissions and visas."
            />
            <div class="contact__grid">
                <div class="contact__card">
                    <h3>"Book a call"</h3>
                    <p>"Pick a 30-minute slot that suits you."</p>
                    <ScheduleButton/>
                </div>
                <div class="contact__card">
                    <h3>"Email"</h3>
                    <a href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a>
                </div>
                <div class="contact__card">
                    <h3>"Phone"</h3>
                    <a href=phone_href>{CONTACT_PHONE}</a>
                    <p class="contact__hours">"Mon to Sat, 10am to 7pm IST"</p>
                </div>
                <div class="contact__card">
                    <h3>"Office"</h3>
                    <address>{OFFICE_ADDRESS}</address>
                </div>
            </div>
        </section>
    }
}
