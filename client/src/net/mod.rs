//! Networking for the hydrated client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every request goes to the site's own server (`/api/...`), which proxies
//! the CMS and the chat backend.

pub mod api;
