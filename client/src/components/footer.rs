use content::countries::COUNTRIES;
use content::site::{BRAND, CONTACT_EMAIL, CONTACT_PHONE, OFFICE_ADDRESS, TAGLINE, TOOLS};
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__grid">
                <div class="footer__brand">
                    <span class="footer__logo">{BRAND}</span>
                    <p>{TAGLINE}</p>
                    <address class="footer__contact">
                        <a href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a>
                        <a href=format!("tel:{}", CONTACT_PHONE.replace(' ', ""))>{CONTACT_PHONE}</a>
                        <span>{OFFICE_ADDRESS}</span>
                    </address>
                </div>
                <nav class="footer__column" aria-label="Tools">
                    <h4>"Tools"</h4>
                    {TOOLS.iter().map(|tool| view! { <a href=tool.href()>{tool.title}</a> }).collect_view()}
                </nav>
                <nav class="footer__column" aria-label="Study destinations">
                    <h4>"Study in"</h4>
                    {COUNTRIES
                        .iter()
                        .map(|country| view! { <a href=country.href()>{country.name}</a> })
                        .collect_view()}
                </nav>
                <nav class="footer__column" aria-label="Company">
                    <h4>"Company"</h4>
                    <a href="/services">"Services"</a>
                    <a href="/partners">"Lending partners"</a>
                    <a href="/resources">"Resources"</a>
                    <a href="/contact">"Contact"</a>
                </nav>
            </div>
            <p class="footer__legal">
                {format!("© {BRAND}. Loan approval, rates and terms are at the sole discretion of the lender.")}
            </p>
        </footer>
    }
}
