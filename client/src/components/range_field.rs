//! Slider paired with a numeric input.
//!
//! Both controls write the same signal. Typed values are clamped into the
//! slider's range when the input commits, so the two never disagree.

use leptos::prelude::*;

use crate::util::input::parse_clamped;

#[component]
pub fn RangeField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    min: f64,
    max: f64,
    step: f64,
    value: RwSignal<f64>,
    /// Caption formatter, e.g. compact rupees or `"10.5%"`.
    format: fn(f64) -> String,
) -> impl IntoView {
    let input_id = format!("{id}-input");
    let commit = move |raw: String| value.set(parse_clamped(&raw, min, max));

    view! {
        <div class="range-field">
            <div class="range-field__header">
                <label class="range-field__label" for=input_id.clone()>{label}</label>
                <input
                    id=input_id
                    class="range-field__number"
                    type="number"
                    inputmode="decimal"
                    min=min.to_string()
                    max=max.to_string()
                    step=step.to_string()
                    prop:value=move || value.get().to_string()
                    on:change=move |ev| commit(event_target_value(&ev))
                />
            </div>
            <input
                id=id
                class="range-field__slider"
                type="range"
                min=min.to_string()
                max=max.to_string()
                step=step.to_string()
                prop:value=move || value.get().to_string()
                on:input=move |ev| commit(event_target_value(&ev))
            />
            <div class="range-field__scale">
                <span>{format(min)}</span>
                <span class="range-field__current">{move || format(value.get())}</span>
                <span>{format(max)}</span>
            </div>
        </div>
    }
}
