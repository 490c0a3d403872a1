//! CMS proxy routes.
//!
//! The browser never talks to the CMS directly; these handlers fetch through
//! [`crate::cms::ContentSource`] so the API token stays on the server and
//! media URLs arrive already absolute.

#[cfg(test)]
#[path = "content_test.rs"]
mod tests;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use content::cms::{BankLayout, Gallery, LandingPage, Service};

use crate::cms::CmsError;
use crate::state::AppState;

/// `GET /api/content/landing`: home page blocks.
pub async fn landing(State(state): State<AppState>) -> Result<Json<LandingPage>, StatusCode> {
    let page = state
        .content
        .landing_page()
        .await
        .map_err(cms_error_to_status)?;
    Ok(Json(page))
}

/// `GET /api/content/services/{slug}`
pub async fn service(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Service>, StatusCode> {
    let service = state
        .content
        .service(&slug)
        .await
        .map_err(cms_error_to_status)?;
    Ok(Json(service))
}

/// `GET /api/content/banks/{slug}`: lender detail layout.
pub async fn bank(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<BankLayout>, StatusCode> {
    let bank = state
        .content
        .bank_layout(&slug)
        .await
        .map_err(cms_error_to_status)?;
    Ok(Json(bank))
}

/// `GET /api/content/gallery`: every gallery, newest first.
pub async fn gallery(State(state): State<AppState>) -> Result<Json<Vec<Gallery>>, StatusCode> {
    let galleries = state
        .content
        .galleries()
        .await
        .map_err(cms_error_to_status)?;
    Ok(Json(galleries))
}

pub(crate) fn cms_error_to_status(err: CmsError) -> StatusCode {
    match err {
        CmsError::NotFound { collection, slug } => {
            tracing::debug!(collection, %slug, "cms entry not found");
            StatusCode::NOT_FOUND
        }
        other => {
            tracing::warn!(error = %other, "cms fetch failed");
            StatusCode::BAD_GATEWAY
        }
    }
}
