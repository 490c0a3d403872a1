//! Pure calculator logic shared by the `client` pages and the `server`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every tool on the site is a closed-form function of its current inputs.
//! Pages hold the inputs in local reactive state and re-derive outputs from
//! these functions on every change, so nothing in this crate performs I/O
//! or keeps state between calls.

pub mod currency;
pub mod emi;
pub mod expense;
pub mod packing;
pub mod savings;
pub mod timezone;

/// Errors produced by tool input parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToolError {
    /// The currency code is not in the static rate table.
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),

    /// The IANA time zone identifier could not be resolved.
    #[error("unknown time zone: {0}")]
    UnknownZone(String),

    /// CSV serialization of a packing list failed.
    #[error("csv export failed: {0}")]
    Csv(String),
}
