//! Scroll-reveal animation wrapper.
//!
//! Content is always rendered visible on the server. After hydration the
//! wrapper starts hidden (via the `js` class on `<html>`) and fades in the
//! first time it intersects the viewport; the observer then disconnects.
//! Unmounting disconnects the observer and frees its callback.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use leptos::prelude::*;

#[component]
pub fn Reveal(children: Children, #[prop(optional)] delay_ms: u32) -> impl IntoView {
    let visible = RwSignal::new(false);
    let node = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        let watch = StoredValue::new_local(None::<Watch<web_sys::IntersectionObserver, ViewportCallback>>);
        Effect::new(move || {
            if let Some(el) = node.get() {
                watch.set_value(observe_once(&el, visible));
            }
        });
        on_cleanup(move || {
            watch.try_update_value(Option::take);
        });
    }

    view! {
        <div
            class="reveal"
            class:reveal--in=move || visible.get()
            style=format!("transition-delay: {delay_ms}ms")
            node_ref=node
        >
            {children()}
        </div>
    }
}

/// Anything that can stop delivering callbacks.
#[cfg(any(feature = "hydrate", test))]
trait Disconnect {
    fn disconnect(&self);
}

#[cfg(feature = "hydrate")]
impl Disconnect for web_sys::IntersectionObserver {
    fn disconnect(&self) {
        web_sys::IntersectionObserver::disconnect(self);
    }
}

/// A live observer and the callback it invokes.
///
/// Dropping disconnects the observer before the callback is freed, so the
/// browser never calls into a dropped closure.
#[cfg(any(feature = "hydrate", test))]
struct Watch<O: Disconnect, C> {
    observer: O,
    _callback: C,
}

#[cfg(any(feature = "hydrate", test))]
impl<O: Disconnect, C> Watch<O, C> {
    fn new(observer: O, callback: C) -> Self {
        Self { observer, _callback: callback }
    }
}

#[cfg(any(feature = "hydrate", test))]
impl<O: Disconnect, C> Drop for Watch<O, C> {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(feature = "hydrate")]
type ViewportCallback = wasm_bindgen::closure::Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

#[cfg(feature = "hydrate")]
fn observe_once(
    el: &web_sys::HtmlDivElement,
    visible: RwSignal<bool>,
) -> Option<Watch<web_sys::IntersectionObserver, ViewportCallback>> {
    use wasm_bindgen::JsCast;

    let callback = ViewportCallback::new(move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
        let hit = entries
            .iter()
            .any(|entry| entry.unchecked_into::<web_sys::IntersectionObserverEntry>().is_intersecting());
        if hit {
            visible.set(true);
            observer.disconnect();
        }
    });

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&wasm_bindgen::JsValue::from_f64(0.15));
    match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(el);
            Some(Watch::new(observer, callback))
        }
        // No observer support: just show the content.
        Err(_) => {
            visible.set(true);
            None
        }
    }
}
