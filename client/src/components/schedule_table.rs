use leptos::prelude::*;
use tools::currency::{Currency, format_amount};
use tools::emi::ScheduleRow;

/// Year-by-year amortization table.
#[component]
pub fn ScheduleTable(#[prop(into)] rows: Signal<Vec<ScheduleRow>>) -> impl IntoView {
    let inr = |v: f64| format_amount(v, Currency::Inr);

    view! {
        <div class="schedule-table">
            <table>
                <thead>
                    <tr>
                        <th scope="col">"Year"</th>
                        <th scope="col">"Principal paid"</th>
                        <th scope="col">"Interest paid"</th>
                        <th scope="col">"Balance"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        rows.get()
                            .into_iter()
                            .map(|row| {
                                view! {
                                    <tr>
                                        <td>{row.year}</td>
                                        <td>{inr(row.principal_paid)}</td>
                                        <td>{inr(row.interest_paid)}</td>
                                        <td>{inr(row.closing_balance)}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}
