//! Analytics bootstrap.
//!
//! The only global side effect in the client: the tag script is injected
//! into `<head>` once per page load, however many times `init` is called.
//! SSR paths no-op.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use std::sync::atomic::{AtomicBool, Ordering};

use content::site::ANALYTICS_ID;

static INITIALIZED: AtomicBool = AtomicBool::new(false);

fn tag_script_src(id: &str) -> String {
    format!("https://www.googletagmanager.com/gtag/js?id={id}")
}

fn bootstrap_snippet(id: &str) -> String {
    format!(
        "window.dataLayer=window.dataLayer||[];function gtag(){{dataLayer.push(arguments);}}gtag('js',new Date());gtag('config','{id}');"
    )
}

/// Claim the one-time init slot. `true` only for the first caller.
fn claim() -> bool {
    INITIALIZED
        .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
        .is_ok()
}

/// Inject the analytics tag. Returns whether this call performed the init.
pub fn init() -> bool {
    if !claim() {
        return false;
    }
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = inject(ANALYTICS_ID) {
            log::warn!("analytics init failed: {e}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ANALYTICS_ID, tag_script_src, bootstrap_snippet);
    }
    true
}

#[cfg(feature = "hydrate")]
fn inject(id: &str) -> Result<(), String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("no document")?;
    let head = document.head().ok_or("no head")?;

    let loader = document
        .create_element("script")
        .map_err(|_| "create script failed")?
        .dyn_into::<web_sys::HtmlScriptElement>()
        .map_err(|_| "not a script element")?;
    loader.set_async(true);
    loader.set_src(&tag_script_src(id));

    let inline = document
        .create_element("script")
        .map_err(|_| "create script failed")?;
    inline.set_text_content(Some(&bootstrap_snippet(id)));

    head.append_child(&loader).map_err(|_| "append failed")?;
    head.append_child(&inline).map_err(|_| "append failed")?;
    Ok(())
}
