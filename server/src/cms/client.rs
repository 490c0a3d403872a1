//! REST client for the headless CMS.
//!
//! Thin HTTP wrapper over `{base}/api/{collection}`. Pure parsing lives in
//! [`parse_list`] for testability.

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;

use std::time::Duration;

use content::cms::{BankLayout, CmsCollection, CmsList, Gallery, LandingPage, ResolveMedia, Service};
use serde::de::DeserializeOwned;

use super::{CmsError, ContentSource};
use crate::config::CmsConfig;

/// Slug of the landing-page entry rendered at `/`.
pub const HOME_SLUG: &str = "home";

// =============================================================================
// CLIENT
// =============================================================================

pub struct CmsClient {
    http: reqwest::Client,
    base_url: String,
    api_token: Option<String>,
}

impl CmsClient {
    /// Build a client from parsed config.
    ///
    /// # Errors
    ///
    /// Returns [`CmsError::HttpClientBuild`] if reqwest cannot build the client.
    pub fn new(config: &CmsConfig) -> Result<Self, CmsError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| CmsError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.trim_end_matches('/').to_owned(), api_token: config.api_token.clone() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET a collection with `extra` query pairs plus the type's populate list.
    async fn fetch<T>(&self, extra: Vec<(String, String)>) -> Result<CmsList<T>, CmsError>
    where
        T: CmsCollection + DeserializeOwned + ResolveMedia,
    {
        let url = collection_url(&self.base_url, T::COLLECTION);
        let mut query = extra;
        query.extend(T::populate_params());

        let mut request = self.http.get(&url).query(&query);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| CmsError::Request(e.to_string()))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| CmsError::Request(e.to_string()))?;

        tracing::debug!(collection = T::COLLECTION, status, bytes = text.len(), "cms fetch");

        if !(200..300).contains(&status) {
            return Err(CmsError::Status { status, body: text });
        }

        let mut list = parse_list::<T>(&text)?;
        list.resolve_media(&self.base_url);
        Ok(list)
    }

    async fn fetch_by_slug<T>(&self, slug: &str) -> Result<T, CmsError>
    where
        T: CmsCollection + DeserializeOwned + ResolveMedia,
    {
        self.fetch::<T>(slug_filter(slug))
            .await?
            .into_first()
            .ok_or_else(|| CmsError::NotFound { collection: T::COLLECTION, slug: slug.to_owned() })
    }
}

#[async_trait::async_trait]
impl ContentSource for CmsClient {
    async fn landing_page(&self) -> Result<LandingPage, CmsError> {
        self.fetch_by_slug(HOME_SLUG).await
    }

    async fn service(&self, slug: &str) -> Result<Service, CmsError> {
        self.fetch_by_slug(slug).await
    }

    async fn bank_layout(&self, slug: &str) -> Result<BankLayout, CmsError> {
        self.fetch_by_slug(slug).await
    }

    async fn galleries(&self) -> Result<Vec<Gallery>, CmsError> {
        let list = self.fetch(vec![("sort".to_owned(), "createdAt:desc".to_owned())]).await?;
        Ok(list.data)
    }
}

// =============================================================================
// PURE HELPERS
// =============================================================================

fn collection_url(base_url: &str, collection: &str) -> String {
    format!("{}/api/{collection}", base_url.trim_end_matches('/'))
}

fn slug_filter(slug: &str) -> Vec<(String, String)> {
    vec![("filters[slug][$eq]".to_owned(), slug.to_owned())]
}

fn parse_list<T: DeserializeOwned>(json: &str) -> Result<CmsList<T>, CmsError> {
    serde_json::from_str::<CmsList<T>>(json).map_err(|e| CmsError::Parse(e.to_string()))
}
