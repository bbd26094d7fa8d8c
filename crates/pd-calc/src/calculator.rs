//! `BusinessDayCalculator` projects a payment date.
//!
//! The scan starts on the base date itself and walks forward one calendar
//! day at a time until the requested number of business days has been
//! counted; the day on which the count is reached is the candidate payment
//! date.  A Saturday candidate is then pulled back to Friday.

use crate::request::{CalculationRequest, RawCalculationRequest};
use crate::result::{CalculationResponse, CalculationResult};
use crate::scan::ScanState;
use pd_core::errors::{Error, Result};
use pd_core::CalculatorConfig;
use pd_time::HolidayLookup;

/// Computes payment dates.
///
/// Holds only immutable configuration, so one instance can serve any number
/// of concurrent calculations.
#[derive(Debug, Clone, Default)]
pub struct BusinessDayCalculator {
    config: CalculatorConfig,
}

impl BusinessDayCalculator {
    /// Create a calculator with the given configuration.
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Compute the payment date for a typed request.
    ///
    /// # Errors
    /// Validation errors for a zero target or null base date; a date error if
    /// the scan would run past 9999-12-31.
    pub fn calculate(
        &self,
        request: &CalculationRequest,
        lookup: &dyn HolidayLookup,
    ) -> Result<CalculationResult> {
        request.validate().map_err(rejected)?;

        let span = tracing::debug_span!(
            "calculate_payment_date",
            base_date = %request.base_date,
            target = request.target_business_days,
            jurisdiction = ?request.jurisdiction,
            source = lookup.name(),
        );
        let _enter = span.enter();

        let locale = self.config.locale;
        let mut state = ScanState::start(request.base_date);
        while !state.is_complete(request.target_business_days) {
            state = state.step(request, lookup, locale)?;
        }
        let result = state.finish(locale)?;

        tracing::debug!(
            payment_date = %result.payment_date,
            skipped = result.total_days_skipped(),
            "payment date computed"
        );
        Ok(result)
    }

    /// Validate a raw form request, compute, and build the response view.
    pub fn calculate_raw(
        &self,
        raw: &RawCalculationRequest,
        lookup: &dyn HolidayLookup,
    ) -> Result<CalculationResponse> {
        let request = raw.validate().map_err(rejected)?;
        let result = self.calculate(&request, lookup)?;
        Ok(result.to_response(request.jurisdiction, lookup.name(), self.config.locale))
    }
}

fn rejected(e: Error) -> Error {
    tracing::warn!(kind = %e.kind(), error = %e, "rejected calculation request");
    e
}
