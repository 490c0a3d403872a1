//! Broken-image fallback.
//!
//! An `<img>` whose source fails swaps once to the site placeholder. The
//! placeholder failing too must not trigger another swap, or the element
//! would loop on `error` events.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

use content::site::FALLBACK_IMAGE;

/// Source to render for an image that may have already failed.
pub fn resolve_src(src: Option<&str>, failed: bool) -> String {
    match src.map(str::trim) {
        Some(url) if !failed && !url.is_empty() => url.to_owned(),
        _ => FALLBACK_IMAGE.to_owned(),
    }
}

/// Per-element fallback state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImageFallback {
    failed: bool,
}

impl ImageFallback {
    /// Record a load error. Returns `true` only for the first one, when the
    /// source should be swapped.
    pub fn on_error(&mut self) -> bool {
        if self.failed {
            return false;
        }
        self.failed = true;
        true
    }

    pub fn failed(self) -> bool {
        self.failed
    }
}
