//! Utility helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser side effects (analytics, downloads) are isolated here behind
//! `hydrate` gates so SSR stays deterministic.

pub mod analytics;
pub mod class;
pub mod download;
pub mod image;
pub mod input;
pub mod markdown;
