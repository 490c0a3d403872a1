//! Service catalogue used for navigation and listing cards.
//!
//! Only slugs and teaser copy live here; the detail pages pull their body,
//! highlights and FAQs from the CMS by slug.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceSummary {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub icon: &'static str,
}

impl ServiceSummary {
    #[must_use]
    pub fn href(&self) -> String {
        format!("/services/{}", self.slug)
    }
}

pub const SERVICES: &[ServiceSummary] = &[
    ServiceSummary {
        slug: "education-loans",
        title: "Education Loans",
        summary: "Compare offers from public banks, private banks, NBFCs and international lenders.",
        icon: "🏦",
    },
    ServiceSummary {
        slug: "admissions",
        title: "Admissions Counselling",
        summary: "Shortlist universities, polish your SOP and stay on top of deadlines.",
        icon: "🎓",
    },
    ServiceSummary {
        slug: "visa-assistance",
        title: "Visa Assistance",
        summary: "Document checklists, financial proofs and mock interviews.",
        icon: "🛂",
    },
    ServiceSummary {
        slug: "forex-and-remittance",
        title: "Forex & Remittance",
        summary: "Pay tuition abroad and load forex cards at transparent rates.",
        icon: "💱",
    },
    ServiceSummary {
        slug: "accommodation",
        title: "Accommodation",
        summary: "Verified student housing close to campus.",
        icon: "🏠",
    },
    ServiceSummary {
        slug: "scholarships",
        title: "Scholarships",
        summary: "Find merit and need-based funding that reduces how much you borrow.",
        icon: "🏅",
    },
];

#[must_use]
pub fn find_service(slug: &str) -> Option<&'static ServiceSummary> {
    SERVICES.iter().find(|s| s.slug == slug)
}
