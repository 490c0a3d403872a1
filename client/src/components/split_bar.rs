//! Principal vs interest proportion bar.

#[cfg(test)]
#[path = "split_bar_test.rs"]
mod split_bar_test;

use leptos::prelude::*;
use tools::currency::{Currency, format_amount};

/// Percent widths of the two segments; both zero when there is nothing to show.
pub fn split_percentages(principal: f64, interest: f64) -> (f64, f64) {
    let principal = if principal.is_finite() { principal.max(0.0) } else { 0.0 };
    let interest = if interest.is_finite() { interest.max(0.0) } else { 0.0 };
    let total = principal + interest;
    if total <= 0.0 {
        return (0.0, 0.0);
    }
    let p = principal / total * 100.0;
    (p, 100.0 - p)
}

#[component]
pub fn SplitBar(#[prop(into)] principal: Signal<f64>, #[prop(into)] interest: Signal<f64>) -> impl IntoView {
    let shares = move || split_percentages(principal.get(), interest.get());

    view! {
        <figure class="split-bar">
            <div class="split-bar__track" role="img" aria-label="Principal and interest share of total payment">
                <span class="split-bar__segment split-bar__segment--principal" style:width=move || format!("{:.2}%", shares().0)></span>
                <span class="split-bar__segment split-bar__segment--interest" style:width=move || format!("{:.2}%", shares().1)></span>
            </div>
            <figcaption class="split-bar__legend">
                <span class="split-bar__key split-bar__key--principal">
                    "Principal " {move || format_amount(principal.get(), Currency::Inr)}
                    {move || format!(" ({:.0}%)", shares().0)}
                </span>
                <span class="split-bar__key split-bar__key--interest">
                    "Interest " {move || format_amount(interest.get(), Currency::Inr)}
                    {move || format!(" ({:.0}%)", shares().1)}
                </span>
            </figcaption>
        </figure>
    }
}
