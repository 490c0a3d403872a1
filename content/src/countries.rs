//! Study destinations with static copy and typical monthly costs.

#[cfg(test)]
#[path = "countries_test.rs"]
mod countries_test;

use serde::Serialize;
use tools::currency::Currency;
use tools::expense::CostProfile;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Country {
    pub slug: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
    pub currency: Currency,
    /// Annual tuition range in local currency.
    pub tuition_range: (f64, f64),
    pub intakes: &'static [&'static str],
    pub popular_courses: &'static [&'static str],
    pub visa: &'static str,
    pub work_rights: &'static str,
    pub costs: CostProfile,
}

impl Country {
    #[must_use]
    pub fn href(&self) -> String {
        format!("/countries/{}", self.slug)
    }
}

pub const COUNTRIES: &[Country] = &[
    Country {
        slug: "usa",
        name: "United States",
        flag: "🇺🇸",
        currency: Currency::Usd,
        tuition_range: (25_000.0, 60_000.0),
        intakes: &["Fall (August)", "Spring (January)"],
        popular_courses: &["Computer Science", "Data Science", "MBA", "Engineering Management"],
        visa: "F-1 student visa backed by an I-20 and proof of funds for the first year.",
        work_rights: "20 hours a week on campus during term; OPT of 12 months, 36 for STEM.",
        costs: CostProfile {
            currency: Currency::Usd,
            tuition: 3_500.0,
            accommodation: 1_100.0,
            food: 400.0,
            transport: 100.0,
            insurance: 150.0,
            miscellaneous: 200.0,
        },
    },
    Country {
        slug: "uk",
        name: "United Kingdom",
        flag: "🇬🇧",
        currency: Currency::Gbp,
        tuition_range: (15_000.0, 38_000.0),
        intakes: &["September", "January"],
        popular_courses: &["MSc Finance", "Business Analytics", "Law", "Public Health"],
        visa: "Student visa with a CAS and evidence of maintenance funds.",
        work_rights: "20 hours a week in term; two-year Graduate Route afterwards.",
        costs: CostProfile {
            currency: Currency::Gbp,
            tuition: 2_000.0,
            accommodation: 750.0,
            food: 250.0,
            transport: 80.0,
            insurance: 40.0,
            miscellaneous: 120.0,
        },
    },
    Country {
        slug: "canada",
        name: "Canada",
        flag: "🇨🇦",
        currency: Currency::Cad,
        tuition_range: (20_000.0, 45_000.0),
        intakes: &["September", "January", "May"],
        popular_courses: &["Computer Engineering", "Supply Chain", "Nursing", "Project Management"],
        visa: "Study permit with a letter of acceptance and GIC-backed proof of funds.",
        work_rights: "Part-time work during study; post-graduation work permit up to three years.",
        costs: CostProfile {
            currency: Currency::Cad,
            tuition: 2_500.0,
            accommodation: 1_000.0,
            food: 350.0,
            transport: 120.0,
            insurance: 75.0,
            miscellaneous: 150.0,
        },
    },
    Country {
        slug: "australia",
        name: "Australia",
        flag: "🇦🇺",
        currency: Currency::Aud,
        tuition_range: (30_000.0, 50_000.0),
        intakes: &["February", "July"],
        popular_courses: &["Information Technology", "Accounting", "Civil Engineering", "Nursing"],
        visa: "Subclass 500 student visa with a CoE and OSHC cover.",
        work_rights: "48 hours per fortnight in term; temporary graduate visa after study.",
        costs: CostProfile {
            currency: Currency::Aud,
            tuition: 3_300.0,
            accommodation: 1_200.0,
            food: 400.0,
            transport: 150.0,
            insurance: 60.0,
            miscellaneous: 180.0,
        },
    },
    Country {
        slug: "germany",
        name: "Germany",
        flag: "🇩🇪",
        currency: Currency::Eur,
        tuition_range: (0.0, 20_000.0),
        intakes: &["Winter (October)", "Summer (April)"],
        popular_courses: &["Mechanical Engineering", "Automotive Engineering", "Data Science", "Renewable Energy"],
        visa: "National student visa with a blocked account covering living costs.",
        work_rights: "140 full days a year; 18-month job seeker permit after graduation.",
        costs: CostProfile {
            currency: Currency::Eur,
            tuition: 300.0,
            accommodation: 450.0,
            food: 250.0,
            transport: 60.0,
            insurance: 120.0,
            miscellaneous: 100.0,
        },
    },
    Country {
        slug: "ireland",
        name: "Ireland",
        flag: "🇮🇪",
        currency: Currency::Eur,
        tuition_range: (12_000.0, 30_000.0),
        intakes: &["September", "January"],
        popular_courses: &["Cloud Computing", "Pharmaceutical Science", "Finance", "Marketing"],
        visa: "Study visa (Stamp 2) with proof of fees paid and funds.",
        work_rights: "20 hours a week in term; Stamp 1G stay-back of up to two years.",
        costs: CostProfile {
            currency: Currency::Eur,
            tuition: 1_700.0,
            accommodation: 800.0,
            food: 250.0,
            transport: 90.0,
            insurance: 50.0,
            miscellaneous: 120.0,
        },
    },
    Country {
        slug: "new-zealand",
        name: "New Zealand",
        flag: "🇳🇿",
        currency: Currency::Nzd,
        tuition_range: (22_000.0, 40_000.0),
        intakes: &["February", "July"],
        popular_courses: &["Agriculture", "Hospitality", "Software Engineering", "Tourism"],
        visa: "Fee-paying student visa with an offer of place and funds.",
        work_rights: "20 hours a week in term; post-study work visa up to three years.",
        costs: CostProfile {
            currency: Currency::Nzd,
            tuition: 2_700.0,
            accommodation: 1_000.0,
            food: 350.0,
            transport: 100.0,
            insurance: 50.0,
            miscellaneous: 150.0,
        },
    },
];

#[must_use]
pub fn find_country(slug: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|c| c.slug == slug)
}
