//! Headless CMS access.
//!
//! DESIGN
//! ======
//! Handlers depend on the [`ContentSource`] trait rather than the concrete
//! HTTP client, so route tests can swap in canned content. [`CmsClient`] is
//! the production implementation: plain GETs with `filters`/`populate`
//! query parameters, no retry, no caching.

pub mod client;

pub use client::CmsClient;

use content::cms::{BankLayout, Gallery, LandingPage, Service};

/// Errors produced while fetching CMS content.
#[derive(Debug, thiserror::Error)]
pub enum CmsError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request never produced a response.
    #[error("CMS request failed: {0}")]
    Request(String),

    /// The CMS answered with a non-success status.
    #[error("CMS response error: status {status}")]
    Status { status: u16, body: String },

    /// The response body did not match the expected payload shape.
    #[error("CMS response parse failed: {0}")]
    Parse(String),

    /// The slug filter matched no entry.
    #[error("{collection} entry not found: {slug}")]
    NotFound { collection: &'static str, slug: String },
}

/// Read-only content used by the page API routes.
#[async_trait::async_trait]
pub trait ContentSource: Send + Sync {
    async fn landing_page(&self) -> Result<LandingPage, CmsError>;
    async fn service(&self, slug: &str) -> Result<Service, CmsError>;
    async fn bank_layout(&self, slug: &str) -> Result<BankLayout, CmsError>;
    async fn galleries(&self) -> Result<Vec<Gallery>, CmsError>;
}
