//! # paydate
//!
//! Projects a payment date N business days after a base date, skipping
//! weekends and Brazilian national or state holidays, and explains every day
//! it skipped.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `pd-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use paydate::calc::{BusinessDayCalculator, RawCalculationRequest};
//! use paydate::time::BrazilHolidays;
//!
//! let raw = RawCalculationRequest {
//!     base_date: Some("2024-07-08".into()),
//!     rule: Some("2".into()),
//!     state: Some("SP".into()),
//!     ..Default::default()
//! };
//! let response = BusinessDayCalculator::default()
//!     .calculate_raw(&raw, &BrazilHolidays)
//!     .unwrap();
//! assert_eq!(response.payment_date, "10/07/2024");
//! assert_eq!(response.explanation, ["09/07/2024: Revolução Constitucionalista de 1932"]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and configuration.
pub use pd_core as core;

/// Dates, jurisdictions, and holiday lookups.
pub use pd_time as time;

/// The payment-date calculator.
pub use pd_calc as calc;

pub use pd_calc::{BusinessDayCalculator, CalculationRequest, CalculationResult};
pub use pd_core::{CalculatorConfig, Error, Locale, Result};
