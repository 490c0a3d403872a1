//! Site-wide constants: brand, contact details, third-party ids, tool index.

use serde::Serialize;

pub const BRAND: &str = "EduLend";
pub const TAGLINE: &str = "Education loans and study-abroad guidance, in one place.";
pub const CONTACT_EMAIL: &str = "hello@edulend.in";
pub const CONTACT_PHONE: &str = "+91 80 4710 2200";
pub const OFFICE_ADDRESS: &str = "4th Floor, Prestige Meridian, MG Road, Bengaluru 560001";

/// Booking page opened inside the schedule modal.
pub const SCHEDULING_URL: &str = "https://calendly.com/edulend/free-counselling";

/// Analytics measurement id; an empty string disables analytics.
pub const ANALYTICS_ID: &str = "G-EDULEND01";

/// Fallback shown when a CMS or partner image fails to load.
pub const FALLBACK_IMAGE: &str = "/assets/placeholder.svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolLink {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
}

impl ToolLink {
    #[must_use]
    pub fn href(&self) -> String {
        format!("/tools/{}", self.slug)
    }
}

pub const TOOLS: &[ToolLink] = &[
    ToolLink {
        slug: "emi-calculator",
        title: "EMI Calculator",
        summary: "Monthly installment, total interest and total payment for any loan.",
    },
    ToolLink {
        slug: "loan-repayment-calculator",
        title: "Loan Repayment Calculator",
        summary: "See how interest during your course grows the amount you repay.",
    },
    ToolLink {
        slug: "currency-converter",
        title: "Currency Converter",
        summary: "Convert between rupees and the currencies of popular study destinations.",
    },
    ToolLink {
        slug: "expense-calculator",
        title: "Cost of Living Calculator",
        summary: "Estimate monthly and yearly expenses abroad, in rupees.",
    },
    ToolLink {
        slug: "savings-calculator",
        title: "Savings Planner",
        summary: "Work out how much to save each month before you fly.",
    },
    ToolLink {
        slug: "time-zone-converter",
        title: "Time Zone Converter",
        summary: "Line up IST with your university's time zone for calls and deadlines.",
    },
    ToolLink {
        slug: "packing-list",
        title: "Packing List",
        summary: "A checklist of everything to carry, exportable as CSV.",
    },
];
