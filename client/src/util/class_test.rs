use super::*;

#[test]
fn joins_enabled_classes_in_order() {
    assert_eq!(cn(&[("btn", true), ("btn--primary", true), ("btn--ghost", false)]), "btn btn--primary");
}

#[test]
fn skips_blank_entries() {
    assert_eq!(cn(&[("", true), ("  ", true), ("hero", true)]), "hero");
}

#[test]
fn nothing_enabled_is_empty() {
    assert_eq!(cn(&[("a", false)]), "");
}
