use super::*;

#[test]
fn default_is_loading() {
    assert_eq!(LoadState::<u8>::default(), LoadState::Loading);
}

#[test]
fn from_result_maps_ok_to_ready() {
    assert_eq!(LoadState::from_result(Ok::<_, FetchError>(7)), LoadState::Ready(7));
}

#[test]
fn not_found_is_missing_not_failed() {
    assert_eq!(LoadState::<u8>::from_result(Err(FetchError::NotFound)), LoadState::Missing);
}

#[test]
fn other_errors_are_failed() {
    assert_eq!(LoadState::<u8>::from_result(Err(FetchError::Status(502))), LoadState::Failed);
    assert_eq!(LoadState::<u8>::from_result(Err(FetchError::Network("offline".into()))), LoadState::Failed);
    assert_eq!(LoadState::<u8>::from_result(Err(FetchError::Unavailable)), LoadState::Failed);
}
