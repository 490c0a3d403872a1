//! Browser file download for generated CSV.
//!
//! Builds a `Blob`, points a temporary `<a download>` at its object URL,
//! clicks it, then revokes the URL. Only meaningful after hydration.

/// Offer `contents` to the visitor as `file_name`.
///
/// # Errors
///
/// Returns a message when any DOM call fails, or always on the server.
pub fn download_csv(file_name: &str, contents: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(contents));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("text/csv;charset=utf-8");
        let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
            .map_err(|_| "blob creation failed".to_owned())?;
        let url = web_sys::Url::create_object_url_with_blob(&blob)
            .map_err(|_| "object URL failed".to_owned())?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| "no document".to_owned())?;
        let anchor = document
            .create_element("a")
            .map_err(|_| "create anchor failed".to_owned())?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| "not an anchor".to_owned())?;
        anchor.set_href(&url);
        anchor.set_download(file_name);
        anchor.click();

        let _ = web_sys::Url::revoke_object_url(&url);
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (file_name, contents);
        Err("downloads are only available in the browser".to_owned())
    }
}
