//! Static lender directory.
//!
//! The list is compiled in and never changes at runtime; the slug links a
//! directory card to the CMS-backed lender detail page.

#[cfg(test)]
#[path = "partners_test.rs"]
mod partners_test;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PartnerKind {
    PublicBank,
    PrivateBank,
    Nbfc,
    International,
}

impl PartnerKind {
    pub const ALL: [PartnerKind; 4] =
        [PartnerKind::PublicBank, PartnerKind::PrivateBank, PartnerKind::Nbfc, PartnerKind::International];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::PublicBank => "Public sector banks",
            Self::PrivateBank => "Private banks",
            Self::Nbfc => "NBFCs",
            Self::International => "International lenders",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Partner {
    pub name: &'static str,
    /// Asset path served from `/assets`.
    pub logo: &'static str,
    pub slug: &'static str,
    pub kind: PartnerKind,
    pub blurb: &'static str,
}

impl Partner {
    #[must_use]
    pub fn href(&self) -> String {
        format!("/partners/{}", self.slug)
    }
}

pub const PARTNERS: &[Partner] = &[
    Partner {
        name: "State Bank of India",
        logo: "/assets/partners/sbi.svg",
        slug: "sbi",
        kind: PartnerKind::PublicBank,
        blurb: "Scholar and Global Ed-Vantage schemes with concessional rates for premier institutes.",
    },
    Partner {
        name: "Bank of Baroda",
        logo: "/assets/partners/bank-of-baroda.svg",
        slug: "bank-of-baroda",
        kind: PartnerKind::PublicBank,
        blurb: "Baroda Scholar loans for studies abroad with collateral-backed limits.",
    },
    Partner {
        name: "Union Bank of India",
        logo: "/assets/partners/union-bank.svg",
        slug: "union-bank",
        kind: PartnerKind::PublicBank,
        blurb: "Union Education Loan with long repayment tenures.",
    },
    Partner {
        name: "ICICI Bank",
        logo: "/assets/partners/icici.svg",
        slug: "icici-bank",
        kind: PartnerKind::PrivateBank,
        blurb: "Pre-admission sanction letters and fast disbursal for top universities.",
    },
    Partner {
        name: "Axis Bank",
        logo: "/assets/partners/axis.svg",
        slug: "axis-bank",
        kind: PartnerKind::PrivateBank,
        blurb: "Secured and unsecured options covering tuition and living costs.",
    },
    Partner {
        name: "IDFC FIRST Bank",
        logo: "/assets/partners/idfc-first.svg",
        slug: "idfc-first-bank",
        kind: PartnerKind::PrivateBank,
        blurb: "Competitive floating rates with doorstep documentation.",
    },
    Partner {
        name: "HDFC Credila",
        logo: "/assets/partners/credila.svg",
        slug: "hdfc-credila",
        kind: PartnerKind::Nbfc,
        blurb: "Dedicated education lender with unsecured loans for select courses.",
    },
    Partner {
        name: "Avanse",
        logo: "/assets/partners/avanse.svg",
        slug: "avanse",
        kind: PartnerKind::Nbfc,
        blurb: "Flexible collateral norms and partial interest repayment during study.",
    },
    Partner {
        name: "Auxilo",
        logo: "/assets/partners/auxilo.svg",
        slug: "auxilo",
        kind: PartnerKind::Nbfc,
        blurb: "Loans for a wide range of universities and courses, including non-STEM.",
    },
    Partner {
        name: "InCred",
        logo: "/assets/partners/incred.svg",
        slug: "incred",
        kind: PartnerKind::Nbfc,
        blurb: "Quick sanctions with customised repayment structures.",
    },
    Partner {
        name: "Prodigy Finance",
        logo: "/assets/partners/prodigy.svg",
        slug: "prodigy-finance",
        kind: PartnerKind::International,
        blurb: "Collateral-free loans based on future earning potential.",
    },
    Partner {
        name: "MPOWER Financing",
        logo: "/assets/partners/mpower.svg",
        slug: "mpower-financing",
        kind: PartnerKind::International,
        blurb: "No-cosigner loans for students headed to the US and Canada.",
    },
];

/// Look up a partner by URL slug.
#[must_use]
pub fn find_partner(slug: &str) -> Option<&'static Partner> {
    PARTNERS.iter().find(|p| p.slug == slug)
}

#[must_use]
pub fn partners_by_kind(kind: PartnerKind) -> Vec<&'static Partner> {
    PARTNERS.iter().filter(|p| p.kind == kind).collect()
}
