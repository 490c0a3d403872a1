use super::*;

#[test]
fn milestones_are_yearly_plus_final_month() {
    assert_eq!(milestones(30), vec![12, 24, 30]);
}

#[test]
fn milestones_do_not_repeat_a_whole_year_end() {
    assert_eq!(milestones(24), vec![12, 24]);
}

#[test]
fn short_plans_show_only_the_final_month() {
    assert_eq!(milestones(1), vec![1]);
    assert_eq!(milestones(12), vec![12]);
}

#[test]
fn month_captions_round() {
    assert_eq!(format_months(23.6), "24 mo");
}

#[test]
fn defaults_sit_inside_the_slider_ranges() {
    assert!((GOAL_MIN..=GOAL_MAX).contains(&DEFAULT_GOAL));
    assert!((1.0..=f64::from(MONTHS_MAX)).contains(&DEFAULT_MONTHS));
    assert!((0.0..=RETURN_MAX_PCT).contains(&DEFAULT_RETURN_PCT));
}

#[test]
fn default_plan_needs_less_than_the_goal_split_evenly() {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let plan = SavingsPlan::new(DEFAULT_GOAL, DEFAULT_MONTHS.round() as u32, DEFAULT_RETURN_PCT);
    assert!(plan.contribution() > 0.0);
    assert!(plan.contribution() < DEFAULT_GOAL / DEFAULT_MONTHS);
}
