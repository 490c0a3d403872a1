use super::*;

#[test]
fn healthy_source_is_kept() {
    assert_eq!(resolve_src(Some("/assets/partners/sbi.png"), false), "/assets/partners/sbi.png");
}

#[test]
fn missing_or_blank_source_uses_fallback() {
    assert_eq!(resolve_src(None, false), FALLBACK_IMAGE);
    assert_eq!(resolve_src(Some("  "), false), FALLBACK_IMAGE);
}

#[test]
fn failed_source_uses_fallback() {
    assert_eq!(resolve_src(Some("https://cms.test/uploads/x.jpg"), true), FALLBACK_IMAGE);
}

#[test]
fn only_first_error_swaps() {
    let mut state = ImageFallback::default();
    assert!(!state.failed());
    assert!(state.on_error());
    assert!(state.failed());
    assert!(!state.on_error());
    assert!(!state.on_error());
}
