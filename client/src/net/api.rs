//! REST helpers for the content proxy and the chat endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`FetchError::Unavailable`]; pages
//! render skeletons on the server and fetch after hydration.
//!
//! ERROR HANDLING
//! ==============
//! One GET per mount, no retry. Callers turn [`FetchError`] into a
//! `LoadState` or a static chat message instead of surfacing it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::fmt;

use content::cms::{BankLayout, Gallery, LandingPage, Service};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchError {
    /// 404 from the proxy, or a slug that can never match.
    NotFound,
    Status(u16),
    Network(String),
    Decode(String),
    /// Called outside the browser.
    Unavailable,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "not found"),
            Self::Status(status) => write!(f, "request failed: {status}"),
            Self::Network(e) => write!(f, "network error: {e}"),
            Self::Decode(e) => write!(f, "unexpected response: {e}"),
            Self::Unavailable => write!(f, "not available on server"),
        }
    }
}

const LANDING_ENDPOINT: &str = "/api/content/landing";
const GALLERY_ENDPOINT: &str = "/api/content/gallery";
const CHAT_ENDPOINT: &str = "/api/chat";

/// Slugs are lowercase ASCII words joined by hyphens.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug.len() <= 96
        && slug
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

#[cfg(any(test, feature = "hydrate"))]
fn service_endpoint(slug: &str) -> String {
    format!("/api/content/services/{slug}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bank_endpoint(slug: &str) -> String {
    format!("/api/content/banks/{slug}")
}

#[cfg(any(test, feature = "hydrate"))]
fn classify_status(status: u16) -> Result<(), FetchError> {
    match status {
        200..=299 => Ok(()),
        404 => Err(FetchError::NotFound),
        other => Err(FetchError::Status(other)),
    }
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    classify_status(resp.status())?;
    resp.json::<T>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

/// Fetch the home page blocks.
///
/// # Errors
///
/// See [`FetchError`].
pub async fn fetch_landing() -> Result<LandingPage, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(LANDING_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = LANDING_ENDPOINT;
        Err(FetchError::Unavailable)
    }
}

/// Fetch one service page by slug.
///
/// # Errors
///
/// Invalid slugs short-circuit to [`FetchError::NotFound`] without a request.
pub async fn fetch_service(slug: &str) -> Result<Service, FetchError> {
    if !is_valid_slug(slug) {
        return Err(FetchError::NotFound);
    }
    #[cfg(feature = "hydrate")]
    {
        get_json(&service_endpoint(slug)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(FetchError::Unavailable)
    }
}

/// Fetch a lender's detail layout by slug.
///
/// # Errors
///
/// Invalid slugs short-circuit to [`FetchError::NotFound`] without a request.
pub async fn fetch_bank(slug: &str) -> Result<BankLayout, FetchError> {
    if !is_valid_slug(slug) {
        return Err(FetchError::NotFound);
    }
    #[cfg(feature = "hydrate")]
    {
        get_json(&bank_endpoint(slug)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(FetchError::Unavailable)
    }
}

/// Fetch every gallery, newest first.
///
/// # Errors
///
/// See [`FetchError`].
pub async fn fetch_galleries() -> Result<Vec<Gallery>, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(GALLERY_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = GALLERY_ENDPOINT;
        Err(FetchError::Unavailable)
    }
}

/// Send one chat query via `POST /api/chat` and return the answer text.
///
/// # Errors
///
/// Returns the HTTP status for non-2xx responses (429 when rate limited,
/// 503 when the assistant is not configured).
pub async fn ask_chat(query: &str) -> Result<String, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct ChatReply {
            answer: String,
        }
        let payload = serde_json::json!({ "query": query });
        let resp = gloo_net::http::Request::post(CHAT_ENDPOINT)
            .json(&payload)
            .map_err(|e| FetchError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        classify_status(resp.status())?;
        let body: ChatReply = resp.json().await.map_err(|e| FetchError::Decode(e.to_string()))?;
        Ok(body.answer)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (query, CHAT_ENDPOINT);
        Err(FetchError::Unavailable)
    }
}
