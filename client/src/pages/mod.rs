//! Route-level pages.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route's state (slider signals, fetch lifecycle) and
//! delegates rendering details to `components`. Calculator pages are pure
//! client-side math over the `tools` crate; content pages fetch through
//! `/api/content` on mount.

pub mod contact;
pub mod country;
pub mod currency_converter;
pub mod emi_calculator;
pub mod expense_calculator;
pub mod home;
pub mod loan_repayment;
pub mod not_found;
pub mod packing_list;
pub mod partner_detail;
pub mod partners;
pub mod resources;
pub mod savings_calculator;
pub mod service_detail;
pub mod services;
pub mod time_zone;
pub mod tools;

use content::site::BRAND;

pub(crate) fn page_title(page: &str) -> String {
    format!("{page} | {BRAND}")
}
