//! Client-side state modules.
//!
//! DESIGN
//! ======
//! Page state lives in component-local signals. The types here are the
//! shapes those signals hold; none of them is shared across routes.

pub mod chat;
pub mod load;
