//! Packing checklist with per-tab CSV export.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use tools::packing::{PackingList, PackingTab};

use crate::pages::page_title;
use crate::util::class::cn;
use crate::util::download::download_csv;

#[cfg(feature = "hydrate")]
const NOTICE_DURATION: std::time::Duration = std::time::Duration::from_secs(4);

#[component]
pub fn PackingListPage() -> impl IntoView {
    let list = RwSignal::new(PackingList::new());
    let tab = RwSignal::new(PackingTab::Documents);
    let notice = RwSignal::new(None::<String>);

    let on_download = move |_| {
        let current = tab.get_untracked();
        let file_name = current.csv_file_name();
        let result = list
            .with_untracked(|l| l.to_csv(current))
            .map_err(|e| e.to_string())
            .and_then(|csv| download_csv(&file_name, &csv));
        let message = match result {
            Ok(()) => format!("Saved {file_name}"),
            Err(e) => format!("Download failed: {e}"),
        };
        notice.set(Some(message.clone()));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(NOTICE_DURATION).await;
            // A newer notice may have replaced this one.
            if notice.get_untracked().as_deref() == Some(message.as_str()) {
                notice.set(None);
            }
        });
    };

    view! {
        <Title text=page_title("Study abroad packing list")/>
        <Meta name="description" content="A checklist of documents, clothing and essentials to pack before you fly."/>
        <section class="calculator">
            <header class="calculator__header">
                <h1>"Packing list"</h1>
                <p>"Tap an item to cycle it through not needed, need to buy and packed."</p>
            </header>
            <nav class="tabs" role="tablist">
                {PackingTab::ALL
                    .into_iter()
                    .map(|t| {
                        view! {
                            <button
                                class=move || cn(&[("tabs__tab", true), ("tabs__tab--active", tab.get() == t)])
                                role="tab"
                                type="button"
                                aria-selected=move || (tab.get() == t).to_string()
                                on:click=move |_| tab.set(t)
                            >
                                {t.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="packing">
                <ul class="packing__items">
                    {move || {
                        let current = tab.get();
                        list.with(|l| l.items(current).to_vec())
                            .into_iter()
                            .enumerate()
                            .map(|(index, item)| {
                                let class = format!("packing__item packing__item--{}", item.status.css_modifier());
                                view! {
                                    <li>
                                        <button
                                            class=class
                                            type="button"
                                            on:click=move |_| list.update(|l| {
                                                l.cycle(current, index);
                                            })
                                        >
                                            <span class="packing__name">{item.name}</span>
                                            <span class="packing__status">{item.status.label()}</span>
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
                <aside class="packing__summary">
                    {move || {
                        let counts = list.with(|l| l.summary(tab.get()));
                        view! {
                            <dl class="stats stats--compact">
                                <div class="stats__item"><dt class="stats__label">"Packed"</dt><dd class="stats__value">{counts.owned}</dd></div>
                                <div class="stats__item"><dt class="stats__label">"To buy"</dt><dd class="stats__value">{counts.need_to_buy}</dd></div>
                                <div class="stats__item"><dt class="stats__label">"Not needed"</dt><dd class="stats__value">{counts.not_needed}</dd></div>
                            </dl>
                        }
                    }}
                    <button class="btn btn--primary" type="button" on:click=on_download>"Download CSV"</button>
                    <button class="btn btn--ghost" type="button" on:click=move |_| list.update(|l| l.reset(tab.get_untracked()))>
                        "Reset tab"
                    </button>
                    <Show when=move || notice.get().is_some()>
                        <p class="packing__notice">{move || notice.get().unwrap_or_default()}</p>
                    </Show>
                </aside>
            </div>
        </section>
    }
}
