use super::*;

fn uk_profile() -> CostProfile {
    CostProfile {
        currency: Currency::Gbp,
        tuition: 1500.0,
        accommodation: 700.0,
        food: 250.0,
        transport: 80.0,
        insurance: 40.0,
        miscellaneous: 100.0,
    }
}

#[test]
fn empty_sheet_has_every_category() {
    let sheet = ExpenseSheet::empty(Currency::Usd);
    assert_eq!(sheet.items.len(), ExpenseCategory::ALL.len());
    assert_eq!(sheet.monthly_total(), 0.0);
}

#[test]
fn profile_sheet_totals() {
    let sheet = ExpenseSheet::for_profile(&uk_profile());
    assert_eq!(sheet.currency, Currency::Gbp);
    assert!((sheet.monthly_total() - 2670.0).abs() < 1e-9);
    assert!((sheet.annual_total() - 32_040.0).abs() < 1e-9);
}

#[test]
fn set_raw_treats_garbage_as_zero() {
    let mut sheet = ExpenseSheet::for_profile(&uk_profile());
    sheet.set_raw(ExpenseCategory::Tuition, "lots");
    assert!((sheet.monthly_total() - 1170.0).abs() < 1e-9);
    sheet.set_raw(ExpenseCategory::Food, "1,000");
    assert!((sheet.monthly_total() - 1920.0).abs() < 1e-9);
}

#[test]
fn converted_summary_matches_currency_table() {
    let sheet = ExpenseSheet::for_profile(&uk_profile());
    let summary = sheet.converted(Currency::Inr);
    let expected = currency::convert(2670.0, Currency::Gbp, Currency::Inr);
    assert_eq!(summary.currency, Currency::Inr);
    assert!((summary.monthly - expected).abs() < 1e-6);
    assert!((summary.annual - expected * 12.0).abs() < 1e-6);
}

#[test]
fn category_labels_are_distinct() {
    let mut labels: Vec<_> = ExpenseCategory::ALL.iter().map(|c| c.label()).collect();
    labels.sort_unstable();
    labels.dedup();
    assert_eq!(labels.len(), ExpenseCategory::ALL.len());
}
