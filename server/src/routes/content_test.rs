use super::*;
use crate::state::test_helpers::{FakeContent, sample_bank, sample_service, test_app_state};

#[test]
fn cms_error_to_status_maps_not_found() {
    let err = CmsError::NotFound { collection: "banks", slug: "ghost".into() };
    assert_eq!(cms_error_to_status(err), StatusCode::NOT_FOUND);
}

#[test]
fn cms_error_to_status_maps_upstream_failures_to_bad_gateway() {
    for err in [
        CmsError::Request("timeout".into()),
        CmsError::Status { status: 500, body: String::new() },
        CmsError::Parse("expected struct".into()),
        CmsError::HttpClientBuild("tls".into()),
    ] {
        assert_eq!(cms_error_to_status(err), StatusCode::BAD_GATEWAY);
    }
}

#[tokio::test]
async fn service_returns_matching_entry() {
    let state = test_app_state(FakeContent {
        services: vec![sample_service("visa-assistance")],
        ..FakeContent::default()
    });
    let Json(service) = service(State(state), Path("visa-assistance".into())).await.unwrap();
    assert_eq!(service.slug, "visa-assistance");
}

#[tokio::test]
async fn unknown_bank_is_404() {
    let state = test_app_state(FakeContent { banks: vec![sample_bank("avanse")], ..FakeContent::default() });
    let status = bank(State(state), Path("nowhere".into())).await.unwrap_err();
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn offline_cms_is_502() {
    let state = test_app_state(FakeContent { offline: true, ..FakeContent::default() });
    assert_eq!(landing(State(state.clone())).await.unwrap_err(), StatusCode::BAD_GATEWAY);
    assert_eq!(gallery(State(state)).await.unwrap_err(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn empty_gallery_list_is_ok() {
    let state = test_app_state(FakeContent::default());
    let Json(galleries) = gallery(State(state)).await.unwrap();
    assert!(galleries.is_empty());
}
