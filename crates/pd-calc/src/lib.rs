//! # pd-calc
//!
//! The payment-date calculator: request validation, the business-day scan,
//! and the result records handed to the presentation layer.
//!
//! ```
//! use pd_calc::{BusinessDayCalculator, CalculationRequest};
//! use pd_time::{BrazilHolidays, Date};
//!
//! let calc = BusinessDayCalculator::default();
//! let request = CalculationRequest::new(Date::from_ymd(2024, 1, 1).unwrap(), 5);
//! let result = calc.calculate(&request, &BrazilHolidays).unwrap();
//! assert_eq!(result.payment_date, Date::from_ymd(2024, 1, 8).unwrap());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `BusinessDayCalculator`.
pub mod calculator;

/// Typed and raw calculation requests.
pub mod request;

/// Calculation results and the response view.
pub mod result;

/// The scan accumulator and per-day classification.
pub mod scan;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calculator::BusinessDayCalculator;
pub use request::{CalculationRequest, RawCalculationRequest};
pub use result::{
    CalculationResponse, CalculationResult, ObservedHolidays, ResponseDetails, SkipReason,
    SkippedDay,
};
pub use scan::{classify_day, DayVerdict, ScanState};
