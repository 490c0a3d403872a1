//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! carries the content source behind the CMS proxy routes, the optional chat
//! backend, and the chat rate limiter. Every field is cheap to clone.

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;

use std::sync::Arc;

use crate::chat::ChatBackend;
use crate::cms::ContentSource;
use crate::rate_limit::RateLimiter;

#[derive(Clone)]
pub struct AppState {
    pub content: Arc<dyn ContentSource>,
    /// `None` when `CHAT_BACKEND_URL` is not configured.
    pub chat: Option<Arc<dyn ChatBackend>>,
    pub rate_limiter: RateLimiter,
}

impl AppState {
    #[must_use]
    pub fn new(content: Arc<dyn ContentSource>, chat: Option<Arc<dyn ChatBackend>>) -> Self {
        Self { content, chat, rate_limiter: RateLimiter::default() }
    }

    #[must_use]
    pub fn with_rate_limiter(mut self, rate_limiter: RateLimiter) -> Self {
        self.rate_limiter = rate_limiter;
        self
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Mutex;

    use content::cms::{BankLayout, Gallery, LandingPage, Service};

    use super::*;
    use crate::chat::ChatError;
    use crate::cms::CmsError;

    /// Canned CMS content. With `offline` set every call fails as if the CMS
    /// were unreachable.
    #[derive(Default)]
    pub struct FakeContent {
        pub landing: Option<LandingPage>,
        pub services: Vec<Service>,
        pub banks: Vec<BankLayout>,
        pub galleries: Vec<Gallery>,
        pub offline: bool,
    }

    impl FakeContent {
        fn check_online(&self) -> Result<(), CmsError> {
            if self.offline {
                return Err(CmsError::Request("connection refused".into()));
            }
            Ok(())
        }
    }

    #[async_trait::async_trait]
    impl ContentSource for FakeContent {
        async fn landing_page(&self) -> Result<LandingPage, CmsError> {
            self.check_online()?;
            self.landing
                .clone()
                .ok_or_else(|| CmsError::NotFound { collection: "landing-pages", slug: "home".into() })
        }

        async fn service(&self, slug: &str) -> Result<Service, CmsError> {
            self.check_online()?;
            self.services
                .iter()
                .find(|s| s.slug == slug)
                .cloned()
                .ok_or_else(|| CmsError::NotFound { collection: "services", slug: slug.to_owned() })
        }

        async fn bank_layout(&self, slug: &str) -> Result<BankLayout, CmsError> {
            self.check_online()?;
            self.banks
                .iter()
                .find(|b| b.slug == slug)
                .cloned()
                .ok_or_else(|| CmsError::NotFound { collection: "banks", slug: slug.to_owned() })
        }

        async fn galleries(&self) -> Result<Vec<Gallery>, CmsError> {
            self.check_online()?;
            Ok(self.galleries.clone())
        }
    }

    /// Chat backend that echoes queries and remembers them.
    #[derive(Default)]
    pub struct EchoChat {
        pub fail: bool,
        pub seen: Mutex<Vec<String>>,
    }

    #[async_trait::async_trait]
    impl ChatBackend for EchoChat {
        async fn ask(&self, query: &str) -> Result<String, ChatError> {
            self.seen.lock().unwrap().push(query.to_owned());
            if self.fail {
                return Err(ChatError::Status { status: 500, body: "upstream down".into() });
            }
            Ok(format!("You asked: {query}"))
        }
    }

    #[must_use]
    pub fn sample_service(slug: &str) -> Service {
        Service {
            title: "Visa Assistance".into(),
            slug: slug.to_owned(),
            summary: "Document checklists and mock interviews.".into(),
            body: "## How it works\n\nBook a slot.".into(),
            image: None,
            highlights: Vec::new(),
            faqs: Vec::new(),
        }
    }

    #[must_use]
    pub fn sample_bank(slug: &str) -> BankLayout {
        BankLayout {
            name: "Avanse".into(),
            slug: slug.to_owned(),
            tagline: Some("Loans without collateral".into()),
            description: String::new(),
            hero_image: None,
            logo: None,
            interest_rate: Some("10.5% onwards".into()),
            max_loan: None,
            processing_fee: None,
            eligibility: Vec::new(),
            documents: Vec::new(),
            trusted_by: Vec::new(),
            features: Vec::new(),
        }
    }

    /// State backed by `content` with chat disabled.
    #[must_use]
    pub fn test_app_state(content: FakeContent) -> AppState {
        AppState::new(Arc::new(content), None)
    }

    /// State with chat enabled through `chat`.
    #[must_use]
    pub fn test_app_state_with_chat(chat: Arc<EchoChat>) -> AppState {
        AppState::new(Arc::new(FakeContent::default()), Some(chat))
    }
}
