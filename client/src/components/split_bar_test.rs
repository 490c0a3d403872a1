use super::*;

#[test]
fn shares_sum_to_hundred() {
    let (p, i) = split_percentages(1_000_000.0, 250_000.0);
    assert!((p - 80.0).abs() < 1e-9);
    assert!((p + i - 100.0).abs() < 1e-9);
}

#[test]
fn zero_interest_is_all_principal() {
    assert_eq!(split_percentages(500_000.0, 0.0), (100.0, 0.0));
}

#[test]
fn empty_or_invalid_input_draws_nothing() {
    assert_eq!(split_percentages(0.0, 0.0), (0.0, 0.0));
    assert_eq!(split_percentages(f64::NAN, -5.0), (0.0, 0.0));
}
