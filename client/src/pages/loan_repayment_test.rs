use super::*;

#[test]
fn default_course_is_inside_the_slider_range() {
    assert!((0.0..=f64::from(COURSE_MAX_MONTHS)).contains(&DEFAULT_COURSE_MONTHS));
    assert_eq!(format_months(DEFAULT_COURSE_MONTHS), "24 months");
}

#[test]
fn default_course_accrues_interest_before_emi() {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let course_months = DEFAULT_COURSE_MONTHS.round() as u32;
    let plan = repayment_plan(&LoanInput { course_months, ..LoanInput::default() });
    assert!(plan.accrued_interest > 0.0);
    assert!(plan.effective_principal > LoanInput::default().principal);
}

#[test]
fn month_captions() {
    assert_eq!(format_months(0.2), "None");
    assert_eq!(format_months(1.0), "1 month");
    assert_eq!(format_months(36.4), "36 months");
}
