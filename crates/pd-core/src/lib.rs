//! # pd-core
//!
//! Core types and error definitions for paydate-rs.
//!
//! This crate provides the building blocks shared across the other crates in
//! the workspace: the error hierarchy with its `ensure!` macro, and
//! the calculator configuration.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Calculator configuration and output locale.
pub mod config;

/// Error types and the `ensure!` macro.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Integer type used for business-day counts.
pub type Natural = u32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use config::{CalculatorConfig, Locale};
pub use errors::{Error, ErrorKind, Result};
