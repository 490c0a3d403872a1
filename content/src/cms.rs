//! Payload shapes returned by the headless CMS.
//!
//! DESIGN
//! ======
//! The CMS speaks flat Strapi v5 JSON: a collection response is
//! `{ "data": [ {...}, ... ], "meta": {...} }` and relations/media only
//! appear when the request names them with `populate` parameters. Each
//! payload type declares its collection and populate list through
//! [`CmsCollection`], so the server's fetcher and these types cannot drift.
//!
//! Uploaded media come back with site-relative URLs (`/uploads/...`).
//! [`ResolveMedia`] rewrites them against the CMS origin before the payload
//! leaves the server, so the browser never needs to know where the CMS lives.

#[cfg(test)]
#[path = "cms_test.rs"]
mod cms_test;

use serde::{Deserialize, Serialize};

// =============================================================================
// ENVELOPE
// =============================================================================

/// Collection response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CmsList<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

impl<T: ResolveMedia> ResolveMedia for CmsList<T> {
    fn resolve_media(&mut self, base: &str) {
        self.data.resolve_media(base);
    }
}

impl<T> CmsList<T> {
    /// First entry, used for slug-filtered lookups.
    pub fn into_first(self) -> Option<T> {
        self.data.into_iter().next()
    }
}

/// A CMS collection and the relations it needs populated.
pub trait CmsCollection {
    /// REST path segment under `/api/`.
    const COLLECTION: &'static str;
    /// Relation/media fields requested via `populate[i]=<field>`.
    const POPULATE: &'static [&'static str];

    /// Query pairs selecting the populated fields.
    #[must_use]
    fn populate_params() -> Vec<(String, String)> {
        Self::POPULATE
            .iter()
            .enumerate()
            .map(|(i, field)| (format!("populate[{i}]"), (*field).to_owned()))
            .collect()
    }
}

// =============================================================================
// MEDIA
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Media {
    pub url: String,
    #[serde(default, rename = "alternativeText")]
    pub alternative_text: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

impl Media {
    /// Alt text, falling back to `fallback` when the CMS left it blank.
    #[must_use]
    pub fn alt_or(&self, fallback: &str) -> String {
        self.alternative_text
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(fallback)
            .to_owned()
    }
}

/// Join a CMS media URL onto `base` unless it is already absolute.
#[must_use]
pub fn resolve_url(base: &str, url: &str) -> String {
    if url.is_empty() || url.starts_with("http://") || url.starts_with("https://") || url.starts_with("//") {
        return url.to_owned();
    }
    let base = base.trim_end_matches('/');
    if url.starts_with('/') { format!("{base}{url}") } else { format!("{base}/{url}") }
}

/// Rewrite every media URL inside a payload to an absolute one.
pub trait ResolveMedia {
    fn resolve_media(&mut self, base: &str);
}

impl ResolveMedia for Media {
    fn resolve_media(&mut self, base: &str) {
        self.url = resolve_url(base, &self.url);
    }
}

impl<T: ResolveMedia> ResolveMedia for Option<T> {
    fn resolve_media(&mut self, base: &str) {
        if let Some(inner) = self {
            inner.resolve_media(base);
        }
    }
}

impl<T: ResolveMedia> ResolveMedia for Vec<T> {
    fn resolve_media(&mut self, base: &str) {
        for item in self {
            item.resolve_media(base);
        }
    }
}

// =============================================================================
// SHARED COMPONENTS
// =============================================================================

/// One eligibility criterion on a lender page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub title: String,
    #[serde(default)]
    pub detail: Option<String>,
}

/// One required document on a lender page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentItem {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

// =============================================================================
// BANK LAYOUT
// =============================================================================

/// Lender detail page content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankLayout {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub hero_image: Option<Media>,
    #[serde(default)]
    pub logo: Option<Media>,
    #[serde(default)]
    pub interest_rate: Option<String>,
    #[serde(default)]
    pub max_loan: Option<String>,
    #[serde(default)]
    pub processing_fee: Option<String>,
    #[serde(default)]
    pub eligibility: Vec<Criterion>,
    #[serde(default)]
    pub documents: Vec<DocumentItem>,
    #[serde(default)]
    pub trusted_by: Vec<Media>,
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl CmsCollection for BankLayout {
    const COLLECTION: &'static str = "banks";
    const POPULATE: &'static [&'static str] =
        &["hero_image", "logo", "eligibility", "documents", "trusted_by", "features"];
}

impl ResolveMedia for BankLayout {
    fn resolve_media(&mut self, base: &str) {
        self.hero_image.resolve_media(base);
        self.logo.resolve_media(base);
        self.trusted_by.resolve_media(base);
    }
}

// =============================================================================
// SERVICE
// =============================================================================

/// Service detail page content. `body` is Markdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub image: Option<Media>,
    #[serde(default)]
    pub highlights: Vec<Feature>,
    #[serde(default)]
    pub faqs: Vec<FaqItem>,
}

impl CmsCollection for Service {
    const COLLECTION: &'static str = "services";
    const POPULATE: &'static [&'static str] = &["image", "highlights", "faqs"];
}

impl ResolveMedia for Service {
    fn resolve_media(&mut self, base: &str) {
        self.image.resolve_media(base);
    }
}

// =============================================================================
// GALLERY
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gallery {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<Media>,
}

impl CmsCollection for Gallery {
    const COLLECTION: &'static str = "galleries";
    const POPULATE: &'static [&'static str] = &["images"];
}

impl ResolveMedia for Gallery {
    fn resolve_media(&mut self, base: &str) {
        self.images.resolve_media(base);
    }
}

// =============================================================================
// LANDING PAGE
// =============================================================================

/// Home page assembled from a dynamic zone of blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandingPage {
    pub title: String,
    #[serde(default)]
    pub seo_description: Option<String>,
    #[serde(default)]
    pub blocks: Vec<LandingBlock>,
}

impl LandingPage {
    /// Blocks the site knows how to render.
    pub fn known_blocks(&self) -> impl Iterator<Item = &LandingBlock> {
        self.blocks.iter().filter(|b| !matches!(b, LandingBlock::Unknown))
    }
}

impl CmsCollection for LandingPage {
    const COLLECTION: &'static str = "landing-pages";
    const POPULATE: &'static [&'static str] = &["blocks"];

    /// Dynamic zones need their nested media populated too.
    fn populate_params() -> Vec<(String, String)> {
        Self::POPULATE
            .iter()
            .map(|zone| (format!("populate[{zone}][populate]"), "*".to_owned()))
            .collect()
    }
}

impl ResolveMedia for LandingPage {
    fn resolve_media(&mut self, base: &str) {
        self.blocks.resolve_media(base);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "__component")]
pub enum LandingBlock {
    #[serde(rename = "blocks.hero")]
    Hero(HeroBlock),
    #[serde(rename = "blocks.stats")]
    Stats(StatsBlock),
    #[serde(rename = "blocks.testimonials")]
    Testimonials(TestimonialsBlock),
    #[serde(rename = "blocks.faq")]
    Faq(FaqBlock),
    #[serde(rename = "blocks.partner-strip")]
    PartnerStrip(PartnerStripBlock),
    /// Block types added in the CMS before the site learns to render them.
    #[serde(other)]
    Unknown,
}

impl ResolveMedia for LandingBlock {
    fn resolve_media(&mut self, base: &str) {
        match self {
            Self::Hero(hero) => hero.image.resolve_media(base),
            Self::Testimonials(t) => {
                for item in &mut t.items {
                    item.avatar.resolve_media(base);
                }
            }
            Self::Stats(_) | Self::Faq(_) | Self::PartnerStrip(_) | Self::Unknown => {}
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroBlock {
    pub heading: String,
    #[serde(default)]
    pub subheading: Option<String>,
    #[serde(default)]
    pub cta_label: Option<String>,
    #[serde(default)]
    pub cta_href: Option<String>,
    #[serde(default)]
    pub image: Option<Media>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsBlock {
    #[serde(default)]
    pub items: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestimonialsBlock {
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub items: Vec<Testimonial>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    #[serde(default)]
    pub university: Option<String>,
    pub quote: String,
    #[serde(default)]
    pub avatar: Option<Media>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqBlock {
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub items: Vec<FaqItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerStripBlock {
    #[serde(default)]
    pub heading: Option<String>,
}
