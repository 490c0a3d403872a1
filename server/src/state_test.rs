use super::test_helpers::*;
use super::*;

#[test]
fn chat_is_absent_without_backend() {
    let state = test_app_state(FakeContent::default());
    assert!(state.chat.is_none());
}

#[test]
fn chat_is_present_with_backend() {
    let state = test_app_state_with_chat(Arc::new(EchoChat::default()));
    assert!(state.chat.is_some());
}

#[test]
fn clones_share_the_rate_limiter() {
    let state = test_app_state(FakeContent::default());
    let clone = state.clone();
    state.rate_limiter.check_and_record("10.1.1.1").unwrap();
    assert_eq!(clone.rate_limiter.tracked_clients(), 1);
}

#[tokio::test]
async fn fake_content_reports_missing_slug() {
    let state = test_app_state(FakeContent { services: vec![sample_service("admissions")], ..FakeContent::default() });
    assert!(state.content.service("admissions").await.is_ok());
    assert!(matches!(
        state.content.service("nope").await,
        Err(crate::cms::CmsError::NotFound { collection: "services", .. })
    ));
}
