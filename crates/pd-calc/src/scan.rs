//! The business-day scan as an explicit fold.
//!
//! [`ScanState`] carries everything the scan accumulates.  Each call to
//! [`ScanState::step`] examines the current day, folds the verdict into the
//! state, and advances one calendar day unless the target has just been
//! reached.  Every step either counts a day (bounded by the target) or
//! appends a skipped day, so the fold terminates for any finite set of
//! holidays.

use crate::request::CalculationRequest;
use crate::result::{CalculationResult, ObservedHolidays, SkipReason, SkippedDay};
use pd_core::errors::Result;
use pd_core::{Locale, Natural};
use pd_time::{Date, HolidayLookup, HolidayRecord, Weekday};

/// What a single day turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayVerdict {
    /// The day counts toward the target.
    Business,
    /// The day is skipped; `holiday` is set when a holiday caused it.
    Skipped {
        /// Reason recorded in the skip list.
        reason: SkipReason,
        /// Holiday to record in the observed map.
        holiday: Option<HolidayRecord>,
    },
}

/// Classify `date` for `request`.
///
/// A qualifying holiday wins over a weekend label, and the custom holiday
/// wins over whatever the lookup reported.
pub fn classify_day(
    date: Date,
    request: &CalculationRequest,
    lookup: &dyn HolidayLookup,
    locale: Locale,
) -> DayVerdict {
    let weekday = date.weekday();
    let is_weekend = weekday.is_weekend(request.consider_saturdays);

    let mut holiday = lookup.blocking_holiday(date, request.jurisdiction);
    if request.custom_holiday == Some(date) {
        holiday = Some(HolidayRecord::statutory(date, locale.custom_holiday()));
    }

    match holiday {
        Some(h) => DayVerdict::Skipped {
            reason: SkipReason::Holiday {
                name: h.name.clone(),
                declared: h.date,
            },
            holiday: Some(h),
        },
        None if is_weekend => DayVerdict::Skipped {
            reason: if weekday == Weekday::Sunday {
                SkipReason::Sunday
            } else {
                SkipReason::Saturday
            },
            holiday: None,
        },
        None => DayVerdict::Business,
    }
}

/// Accumulator threaded through the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanState {
    /// Day under examination; the candidate payment date once complete.
    pub current: Date,
    /// Business days counted so far.
    pub counted: Natural,
    /// Skipped days in calendar order.
    pub skipped: Vec<SkippedDay>,
    /// Holidays met, first-seen wins.
    pub holidays: ObservedHolidays,
}

impl ScanState {
    /// Initial state: nothing counted, nothing skipped.
    pub fn start(base_date: Date) -> Self {
        Self {
            current: base_date,
            counted: 0,
            skipped: Vec::new(),
            holidays: ObservedHolidays::new(),
        }
    }

    /// Return `true` once `target` business days have been counted.
    pub fn is_complete(&self, target: Natural) -> bool {
        self.counted >= target
    }

    /// Fold `verdict` for the current day into the state.
    pub fn record(mut self, verdict: DayVerdict) -> Self {
        match verdict {
            DayVerdict::Business => self.counted += 1,
            DayVerdict::Skipped { reason, holiday } => {
                if let Some(h) = holiday {
                    self.holidays.insert(h.date, h.name);
                }
                self.skipped.push(SkippedDay {
                    date: self.current,
                    reason,
                });
            }
        }
        self
    }

    /// Examine the current day and advance, unless the target was just met.
    ///
    /// Fails only if advancing would leave the representable date range.
    pub fn step(
        self,
        request: &CalculationRequest,
        lookup: &dyn HolidayLookup,
        locale: Locale,
    ) -> Result<Self> {
        let verdict = classify_day(self.current, request, lookup, locale);
        tracing::trace!(date = %self.current, ?verdict, counted = self.counted, "scanned day");
        let mut next = self.record(verdict);
        if !next.is_complete(request.target_business_days) {
            next.current = next.current.succ()?;
        }
        Ok(next)
    }

    /// Apply the Saturday rule and produce the result.
    ///
    /// A Saturday candidate is always moved to the preceding Friday, even
    /// when Saturdays were counted as business days.
    pub fn finish(mut self, locale: Locale) -> Result<CalculationResult> {
        if self.current.weekday() == Weekday::Saturday {
            let friday = self.current.pred()?;
            tracing::debug!(
                candidate = %self.current,
                payment_date = %friday,
                "{}",
                locale.moved_to_friday()
            );
            self.skipped.push(SkippedDay {
                date: self.current,
                reason: SkipReason::MovedToFriday,
            });
            self.current = friday;
        }
        Ok(CalculationResult {
            payment_date: self.current,
            skipped_days: self.skipped,
            holidays_observed: self.holidays,
        })
    }
}
