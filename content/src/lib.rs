//! Shared content model for the EduLend site.
//!
//! This crate owns the JSON shapes returned by the headless CMS plus the
//! small static catalogues (partners, countries, services, site links) that
//! are compiled into the binary. Both `server` and `client` depend on it, so
//! the CMS proxy and the pages agree on one schema.

pub mod cms;
pub mod countries;
pub mod partners;
pub mod services;
pub mod site;
