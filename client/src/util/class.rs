//! CSS class joiner.

#[cfg(test)]
#[path = "class_test.rs"]
mod class_test;

/// Join the enabled classes with single spaces, skipping blanks.
///
/// `cn(&[("card", true), ("card--active", is_active)])`
pub fn cn(parts: &[(&str, bool)]) -> String {
    let mut out = String::new();
    for (class, enabled) in parts {
        let class = class.trim();
        if !*enabled || class.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(class);
    }
    out
}
