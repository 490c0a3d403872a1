use super::*;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Serializes tests that mutate process env.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// # Safety
/// Callers must hold [`env_lock`].
unsafe fn clear_site_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("CMS_BASE_URL");
        std::env::remove_var("CMS_API_TOKEN");
        std::env::remove_var("CMS_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("CMS_CONNECT_TIMEOUT_SECS");
        std::env::remove_var("CHAT_BACKEND_URL");
        std::env::remove_var("CHAT_TIMEOUT_SECS");
        std::env::remove_var("ASSETS_DIR");
    }
}

#[test]
fn from_env_applies_defaults() {
    let _guard = env_lock();
    unsafe {
        clear_site_env();
        std::env::set_var("CMS_BASE_URL", "https://cms.example.test/");
    }

    let cfg = SiteConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.cms.base_url, "https://cms.example.test");
    assert_eq!(cfg.cms.api_token, None);
    assert_eq!(
        cfg.cms.timeouts,
        Timeouts { request_secs: DEFAULT_CMS_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CMS_CONNECT_TIMEOUT_SECS }
    );
    assert_eq!(cfg.chat, None);
    assert_eq!(cfg.assets_dir, DEFAULT_ASSETS_DIR);

    unsafe { clear_site_env() };
}

#[test]
fn from_env_parses_overrides() {
    let _guard = env_lock();
    unsafe {
        clear_site_env();
        std::env::set_var("PORT", "8080");
        std::env::set_var("CMS_BASE_URL", "http://localhost:1337");
        std::env::set_var("CMS_API_TOKEN", "tok");
        std::env::set_var("CMS_REQUEST_TIMEOUT_SECS", "9");
        std::env::set_var("CMS_CONNECT_TIMEOUT_SECS", "2");
        std::env::set_var("CHAT_BACKEND_URL", "http://localhost:8000/api/chat");
        std::env::set_var("CHAT_TIMEOUT_SECS", "12");
        std::env::set_var("ASSETS_DIR", "/srv/assets");
    }

    let cfg = SiteConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.cms.api_token.as_deref(), Some("tok"));
    assert_eq!(cfg.cms.timeouts, Timeouts { request_secs: 9, connect_secs: 2 });
    assert_eq!(
        cfg.chat,
        Some(ChatConfig { endpoint: "http://localhost:8000/api/chat".into(), timeout_secs: 12 })
    );
    assert_eq!(cfg.assets_dir, "/srv/assets");

    unsafe { clear_site_env() };
}

#[test]
fn from_env_requires_cms_base_url() {
    let _guard = env_lock();
    unsafe { clear_site_env() };

    let err = SiteConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("CMS_BASE_URL"));
}

#[test]
fn from_env_rejects_bad_port_and_scheme() {
    let _guard = env_lock();
    unsafe {
        clear_site_env();
        std::env::set_var("CMS_BASE_URL", "https://cms.example.test");
        std::env::set_var("PORT", "not-a-port");
    }
    let err = SiteConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("invalid value for PORT"));

    unsafe {
        std::env::remove_var("PORT");
        std::env::set_var("CMS_BASE_URL", "cms.example.test");
    }
    let err = SiteConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("invalid value for CMS_BASE_URL"));

    unsafe { clear_site_env() };
}

#[test]
fn blank_chat_url_disables_chat() {
    let _guard = env_lock();
    unsafe {
        clear_site_env();
        std::env::set_var("CMS_BASE_URL", "https://cms.example.test");
        std::env::set_var("CHAT_BACKEND_URL", "   ");
        std::env::set_var("CMS_REQUEST_TIMEOUT_SECS", "soon");
    }

    let cfg = SiteConfig::from_env().unwrap();
    assert!(cfg.chat.is_none());
    assert_eq!(cfg.cms.timeouts.request_secs, DEFAULT_CMS_REQUEST_TIMEOUT_SECS);

    unsafe { clear_site_env() };
}
