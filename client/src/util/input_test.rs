use super::*;

#[test]
fn in_range_value_is_kept() {
    assert!((parse_clamped("2,50,000", 100_000.0, 30_000_000.0) - 250_000.0).abs() < f64::EPSILON);
}

#[test]
fn out_of_range_values_clamp() {
    assert!((parse_clamped("45", 8.0, 20.0) - 20.0).abs() < f64::EPSILON);
    assert!((parse_clamped("1", 8.0, 20.0) - 8.0).abs() < f64::EPSILON);
}

#[test]
fn garbage_falls_back_to_min() {
    assert!((parse_clamped("ten lakh", 100_000.0, 30_000_000.0) - 100_000.0).abs() < f64::EPSILON);
    assert!((parse_clamped("", 8.0, 20.0) - 8.0).abs() < f64::EPSILON);
}
