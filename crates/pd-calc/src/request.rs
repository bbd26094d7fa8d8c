//! Calculation requests.
//!
//! [`RawCalculationRequest`] is what arrives from a form or query string:
//! every field optional and untyped.  [`RawCalculationRequest::validate`]
//! turns it into a [`CalculationRequest`], reporting the first problem as an
//! `InvalidDate`, `InvalidRule`, or `InvalidJurisdiction` error.  No
//! calculation starts until validation has succeeded.  A custom holiday that
//! is not a `YYYY-MM-DD` date can never match a scanned day, so it is dropped
//! rather than rejected.

use pd_core::errors::{Error, Result};
use pd_core::{ensure, Natural};
use pd_time::{Date, Jurisdiction};
use serde::{Deserialize, Serialize};

/// A validated request for a payment date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    /// First day examined by the scan.
    pub base_date: Date,
    /// Number of business days to count (≥ 1).
    pub target_business_days: Natural,
    /// Narrows the holiday calendar to one state.
    #[serde(default)]
    pub jurisdiction: Option<Jurisdiction>,
    /// A single extra holiday supplied by the user.
    #[serde(default)]
    pub custom_holiday: Option<Date>,
    /// Count Saturdays as business days.
    #[serde(default)]
    pub consider_saturdays: bool,
}

impl CalculationRequest {
    /// Create a request with no jurisdiction, no custom holiday, and
    /// Saturdays not counted.
    pub fn new(base_date: Date, target_business_days: Natural) -> Self {
        Self {
            base_date,
            target_business_days,
            jurisdiction: None,
            custom_holiday: None,
            consider_saturdays: false,
        }
    }

    /// Builder-style jurisdiction.
    pub fn with_jurisdiction(mut self, jurisdiction: Jurisdiction) -> Self {
        self.jurisdiction = Some(jurisdiction);
        self
    }

    /// Builder-style custom holiday.
    pub fn with_custom_holiday(mut self, date: Date) -> Self {
        self.custom_holiday = Some(date);
        self
    }

    /// Builder-style Saturday policy.
    pub fn counting_saturdays(mut self, consider_saturdays: bool) -> Self {
        self.consider_saturdays = consider_saturdays;
        self
    }

    /// Check the invariants a typed request can still violate.
    pub fn validate(&self) -> Result<()> {
        ensure!(InvalidDate => !self.base_date.is_null(), "base date is missing");
        ensure!(
            InvalidRule => self.target_business_days >= 1,
            "rule must be a positive number, got {}",
            self.target_business_days
        );
        Ok(())
    }
}

/// An unvalidated request as received from the web form.
///
/// Field names follow the form's query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawCalculationRequest {
    /// ISO `YYYY-MM-DD` base date.
    pub base_date: Option<String>,
    /// Number of business days, as text.
    pub rule: Option<String>,
    /// Two-letter state code, any case.
    pub state: Option<String>,
    /// ISO `YYYY-MM-DD` custom holiday.
    pub custom_holiday: Option<String>,
    /// `"true"` to count Saturdays; anything else means no.
    pub consider_saturdays: Option<String>,
}

impl RawCalculationRequest {
    /// Validate every field and build a [`CalculationRequest`].
    pub fn validate(&self) -> Result<CalculationRequest> {
        let base_date = match non_empty(&self.base_date) {
            Some(s) => Date::parse_iso(s)?,
            None => {
                return Err(Error::InvalidDate(
                    "base date is missing; use a YYYY-MM-DD date".into(),
                ))
            }
        };
        let target_business_days = parse_rule(non_empty(&self.rule))?;
        let jurisdiction = Jurisdiction::parse_optional(self.state.as_deref())?;
        let custom_holiday = non_empty(&self.custom_holiday).and_then(parse_custom_holiday);
        let consider_saturdays = self.consider_saturdays.as_deref() == Some("true");

        let request = CalculationRequest {
            base_date,
            target_business_days,
            jurisdiction,
            custom_holiday,
            consider_saturdays,
        };
        request.validate()?;
        Ok(request)
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn parse_custom_holiday(text: &str) -> Option<Date> {
    match Date::parse_iso(text) {
        Ok(date) => Some(date),
        Err(e) => {
            tracing::warn!(custom_holiday = text, error = %e, "ignoring unparseable custom holiday");
            None
        }
    }
}

fn parse_rule(rule: Option<&str>) -> Result<Natural> {
    let Some(rule) = rule else {
        return Err(Error::InvalidRule("rule is missing".into()));
    };
    let n: i64 = rule
        .parse()
        .map_err(|_| Error::InvalidRule(format!("rule must be a positive number, got '{rule}'")))?;
    ensure!(InvalidRule => n >= 1, "rule must be a positive number, got {n}");
    Natural::try_from(n).map_err(|_| Error::InvalidRule(format!("rule {n} is too large")))
}
