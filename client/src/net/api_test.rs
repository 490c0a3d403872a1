use super::*;

#[test]
fn service_endpoint_formats_expected_path() {
    assert_eq!(service_endpoint("visa-assistance"), "/api/content/services/visa-assistance");
}

#[test]
fn bank_endpoint_formats_expected_path() {
    assert_eq!(bank_endpoint("hdfc-credila"), "/api/content/banks/hdfc-credila");
}

#[test]
fn classify_status_maps_404_to_not_found() {
    assert_eq!(classify_status(200), Ok(()));
    assert_eq!(classify_status(204), Ok(()));
    assert_eq!(classify_status(404), Err(FetchError::NotFound));
    assert_eq!(classify_status(502), Err(FetchError::Status(502)));
}

#[test]
fn slug_validation_rejects_paths_and_queries() {
    assert!(is_valid_slug("idfc-first-bank"));
    assert!(is_valid_slug("uk2025"));
    assert!(!is_valid_slug(""));
    assert!(!is_valid_slug("../admin"));
    assert!(!is_valid_slug("a?populate=*"));
    assert!(!is_valid_slug("Upper"));
}

#[test]
fn fetch_error_display_is_readable() {
    assert_eq!(FetchError::Status(503).to_string(), "request failed: 503");
    assert_eq!(FetchError::NotFound.to_string(), "not found");
}
