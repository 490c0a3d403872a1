//! Root application component with routing and page chrome.

use leptos::prelude::*;
use leptos_meta::{Link, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use content::site::BRAND;

use crate::components::{chat_widget::ChatWidget, footer::Footer, navbar::Navbar};
use crate::pages::{
    contact::ContactPage, country::CountryPage, currency_converter::CurrencyConverterPage,
    emi_calculator::EmiCalculatorPage, expense_calculator::ExpenseCalculatorPage, home::HomePage,
    loan_repayment::LoanRepaymentPage, not_found::NotFoundPage, packing_list::PackingListPage,
    partner_detail::PartnerDetailPage, partners::PartnersPage, resources::ResourcesPage,
    savings_calculator::SavingsCalculatorPage, service_detail::ServiceDetailPage, services::ServicesPage,
    time_zone::TimeZonePage, tools::ToolsPage,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Navbar, footer and the chat widget sit outside `<Routes>` so they stay
/// mounted across navigation; the chat transcript survives page changes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        crate::util::analytics::init();
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/edulend.css"/>
        <Link rel="icon" href="/assets/favicon.svg"/>
        <Title text=BRAND/>

        <Router>
            <Navbar/>
            <main class="page">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("tools") view=ToolsPage/>
                    <Route path=(StaticSegment("tools"), StaticSegment("emi-calculator")) view=EmiCalculatorPage/>
                    <Route
                        path=(StaticSegment("tools"), StaticSegment("loan-repayment-calculator"))
                        view=LoanRepaymentPage
                    />
                    <Route
                        path=(StaticSegment("tools"), StaticSegment("currency-converter"))
                        view=CurrencyConverterPage
                    />
                    <Route
                        path=(StaticSegment("tools"), StaticSegment("expense-calculator"))
                        view=ExpenseCalculatorPage
                    />
                    <Route
                        path=(StaticSegment("tools"), StaticSegment("savings-calculator"))
                        view=SavingsCalculatorPage
                    />
                    <Route path=(StaticSegment("tools"), StaticSegment("time-zone-converter")) view=TimeZonePage/>
                    <Route path=(StaticSegment("tools"), StaticSegment("packing-list")) view=PackingListPage/>
                    <Route path=(StaticSegment("countries"), ParamSegment("slug")) view=CountryPage/>
                    <Route path=StaticSegment("services") view=ServicesPage/>
                    <Route path=(StaticSegment("services"), ParamSegment("slug")) view=ServiceDetailPage/>
                    <Route path=StaticSegment("partners") view=PartnersPage/>
                    <Route path=(StaticSegment("partners"), ParamSegment("slug")) view=PartnerDetailPage/>
                    <Route path=StaticSegment("resources") view=ResourcesPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                </Routes>
            </main>
            <Footer/>
            <ChatWidget/>
        </Router>
    }
}
