use super::*;

#[test]
fn zero_return_splits_goal_evenly() {
    assert!((monthly_contribution(120_000.0, 12, 0.0) - 10_000.0).abs() < 1e-9);
}

#[test]
fn zero_months_requires_full_goal() {
    assert!((monthly_contribution(50_000.0, 0, 7.0) - 50_000.0).abs() < 1e-9);
}

#[test]
fn positive_return_needs_less_than_even_split() {
    let c = monthly_contribution(1_000_000.0, 36, 8.0);
    assert!(c < 1_000_000.0 / 36.0);
    assert!(c > 0.0);
}

#[test]
fn plan_reaches_goal_at_final_month() {
    let plan = SavingsPlan::new(800_000.0, 24, 6.5);
    assert!((plan.projected_balance(24) - 800_000.0).abs() < 1e-6);
    assert!(plan.projected_balance(12) < 800_000.0);
    assert!(plan.returns_earned() > 0.0);
    assert!((plan.total_contributed() + plan.returns_earned() - 800_000.0).abs() < 1e-6);
}

#[test]
fn plan_clamps_inputs() {
    let plan = SavingsPlan::new(f64::NAN, 0, 99.0);
    assert_eq!(plan.goal, 0.0);
    assert_eq!(plan.months, 1);
    assert_eq!(plan.annual_return_pct, RETURN_MAX_PCT);
}

#[test]
fn projected_balance_caps_at_plan_length() {
    let plan = SavingsPlan::new(60_000.0, 6, 0.0);
    assert!((plan.projected_balance(100) - 60_000.0).abs() < 1e-9);
}
