use super::*;

#[test]
fn link_is_active_on_its_own_path() {
    assert!(is_active("/tools", "/tools"));
}

#[test]
fn link_is_active_on_nested_paths() {
    assert!(is_active("/tools/emi-calculator", "/tools"));
    assert!(is_active("/partners/sbi", "/partners"));
}

#[test]
fn link_is_not_active_on_shared_prefix() {
    assert!(!is_active("/toolsmith", "/tools"));
    assert!(!is_active("/", "/tools"));
}
