//! Fetch-on-mount lifecycle for CMS-backed pages.

#[cfg(test)]
#[path = "load_test.rs"]
mod load_test;

use std::future::Future;

use leptos::prelude::*;

use crate::net::api::FetchError;

/// Where a mount-time fetch currently stands.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState<T> {
    /// Request in flight (also the SSR state); skeletons render.
    #[default]
    Loading,
    Ready(T),
    /// The CMS has no entry for the requested slug.
    Missing,
    /// Network or upstream failure; a static fallback message renders.
    Failed,
}

impl<T> LoadState<T> {
    pub fn from_result(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(FetchError::NotFound) => Self::Missing,
            Err(_) => Self::Failed,
        }
    }
}

/// Fetch on mount (and again whenever `key` changes) into a `LoadState`.
///
/// A response for a key that is no longer current is dropped, so quick
/// navigation between slugs never shows the previous entry.
pub fn use_fetch<T, K, F, Fut>(key: K, fetch: F) -> RwSignal<LoadState<T>>
where
    T: Send + Sync + 'static,
    K: Fn() -> String + 'static,
    F: Fn(String) -> Fut + Copy + 'static,
    Fut: Future<Output = Result<T, FetchError>> + 'static,
{
    let state = RwSignal::new(LoadState::Loading);
    let latest = RwSignal::new(None::<String>);

    Effect::new(move || {
        let requested = key();
        latest.set(Some(requested.clone()));
        state.set(LoadState::Loading);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = fetch(requested.clone()).await;
            if let Err(e) = &result {
                log::warn!("fetch for {requested:?} failed: {e}");
            }
            if latest.get_untracked().as_deref() == Some(requested.as_str()) {
                state.set(LoadState::from_result(result));
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (requested, fetch);
        }
    });

    state
}
