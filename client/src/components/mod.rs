//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leaf presentational pieces shared by the pages. Components take plain
//! props or signals; the only ones with their own state are the chat
//! widget, the schedule modal and the image fallback.

pub mod chat_widget;
pub mod fallback_image;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod partner_card;
pub mod range_field;
pub mod reveal;
pub mod schedule_button;
pub mod schedule_table;
pub mod section_heading;
pub mod service_card;
pub mod skeleton;
pub mod split_bar;
pub mod tool_card;
