//! Calculation results and their presentation view.

use pd_core::Locale;
use pd_time::{Date, Jurisdiction};
use serde::{Deserialize, Serialize};

/// Why a day did not count as a business day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SkipReason {
    /// The day is a Sunday.
    Sunday,
    /// The day is a Saturday and Saturdays are not being counted.
    Saturday,
    /// The day is a qualifying holiday (or the custom holiday).
    Holiday {
        /// Holiday name.
        name: String,
        /// The holiday's own date as reported by the lookup.
        declared: Date,
    },
    /// The candidate payment date was a Saturday and was pulled back to the
    /// preceding Friday.
    MovedToFriday,
}

impl SkipReason {
    /// Human-readable reason in the given locale.
    pub fn describe(&self, locale: Locale) -> String {
        match self {
            SkipReason::Sunday => locale.sunday().to_string(),
            SkipReason::Saturday => locale.saturday().to_string(),
            SkipReason::Holiday { name, .. } if name.is_empty() => locale.holiday().to_string(),
            SkipReason::Holiday { name, .. } => name.clone(),
            SkipReason::MovedToFriday => locale.moved_to_friday().to_string(),
        }
    }
}

/// A day passed over by the scan.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkippedDay {
    /// The calendar day that was skipped.
    pub date: Date,
    /// Why it was skipped.
    pub reason: SkipReason,
}

impl SkippedDay {
    /// `DD/MM/YYYY: <reason>`.
    ///
    /// Holidays are shown under their declared date, which can differ from
    /// the scanned day when the lookup reports a canonical date.
    pub fn describe(&self, locale: Locale) -> String {
        let shown = match &self.reason {
            SkipReason::Holiday { declared, .. } => *declared,
            _ => self.date,
        };
        format!("{}: {}", shown.format_dmy(), self.reason.describe(locale))
    }
}

/// Holidays met during a scan, keyed by date in first-seen order.
///
/// Inserting a date that is already present leaves the first name in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObservedHolidays {
    entries: Vec<(Date, String)>,
}

impl ObservedHolidays {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `name` under `date` unless `date` is already present.
    ///
    /// Returns `true` if the entry was inserted.
    pub fn insert(&mut self, date: Date, name: impl Into<String>) -> bool {
        if self.contains(date) {
            return false;
        }
        self.entries.push((date, name.into()));
        true
    }

    /// Return `true` if `date` has an entry.
    pub fn contains(&self, date: Date) -> bool {
        self.entries.iter().any(|(d, _)| *d == date)
    }

    /// Name recorded for `date`.
    pub fn get(&self, date: Date) -> Option<&str> {
        self.entries
            .iter()
            .find(|(d, _)| *d == date)
            .map(|(_, name)| name.as_str())
    }

    /// Number of distinct dates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` if no holiday was met.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (Date, &str)> + '_ {
        self.entries.iter().map(|(d, name)| (*d, name.as_str()))
    }
}

/// Outcome of a payment-date calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    /// Final payment date (never a Saturday).
    pub payment_date: Date,
    /// Days passed over, in calendar order, followed by the Friday move if
    /// one happened.
    pub skipped_days: Vec<SkippedDay>,
    /// Holidays met during the scan.
    pub holidays_observed: ObservedHolidays,
}

impl CalculationResult {
    /// Number of entries in [`skipped_days`](Self::skipped_days).
    pub fn total_days_skipped(&self) -> usize {
        self.skipped_days.len()
    }

    /// `DD/MM/YYYY: <reason>` for every skipped day.
    pub fn skipped_day_descriptions(&self, locale: Locale) -> Vec<String> {
        self.skipped_days.iter().map(|s| s.describe(locale)).collect()
    }

    /// `<name> (<DD/MM/YYYY>)` for every holiday observed.
    pub fn holiday_descriptions(&self) -> Vec<String> {
        self.holidays_observed
            .iter()
            .map(|(date, name)| format!("{name} ({})", date.format_dmy()))
            .collect()
    }

    /// Build the serialisable view consumed by the presentation layer.
    pub fn to_response(
        &self,
        jurisdiction: Option<Jurisdiction>,
        holiday_source: &str,
        locale: Locale,
    ) -> CalculationResponse {
        CalculationResponse {
            payment_date: self.payment_date.format_dmy(),
            holidays_observed: self.holiday_descriptions(),
            explanation: self.skipped_day_descriptions(locale),
            total_days_skipped: self.total_days_skipped(),
            details: ResponseDetails {
                jurisdiction: jurisdiction
                    .map(|j| j.code().to_string())
                    .unwrap_or_else(|| locale.no_jurisdiction().to_string()),
                holiday_source: holiday_source.to_string(),
            },
        }
    }
}

/// Presentation view of a [`CalculationResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResponse {
    /// `DD/MM/YYYY`.
    pub payment_date: String,
    /// `<name> (<DD/MM/YYYY>)` entries.
    pub holidays_observed: Vec<String>,
    /// `DD/MM/YYYY: <reason>` entries.
    pub explanation: Vec<String>,
    /// Length of `explanation`.
    pub total_days_skipped: usize,
    /// Request context echoed back.
    pub details: ResponseDetails,
}

/// Context block of a [`CalculationResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseDetails {
    /// State code, or the locale's "none" label.
    pub jurisdiction: String,
    /// Name of the holiday lookup used.
    pub holiday_source: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn first_seen_wins() {
        let mut map = ObservedHolidays::new();
        assert!(map.insert(date(2024, 1, 1), "Confraternização Universal"));
        assert!(!map.insert(date(2024, 1, 1), "Custom Holiday"));
        assert!(map.insert(date(2023, 12, 25), "Natal"));
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(date(2024, 1, 1)), Some("Confraternização Universal"));
        let order: Vec<_> = map.iter().map(|(d, _)| d).collect();
        assert_eq!(order, [date(2024, 1, 1), date(2023, 12, 25)]);
    }

    #[test]
    fn reason_descriptions() {
        let holiday = SkipReason::Holiday {
            name: "Tiradentes".into(),
            declared: date(2024, 4, 21),
        };
        assert_eq!(holiday.describe(Locale::English), "Tiradentes");
        assert_eq!(SkipReason::Sunday.describe(Locale::Portuguese), "Domingo");
        let unnamed = SkipReason::Holiday {
            name: String::new(),
            declared: date(2024, 4, 21),
        };
        assert_eq!(unnamed.describe(Locale::Portuguese), "Feriado");
    }

    #[test]
    fn skipped_day_format() {
        let s = SkippedDay {
            date: date(2024, 1, 6),
            reason: SkipReason::Saturday,
        };
        assert_eq!(s.describe(Locale::English), "06/01/2024: Saturday");
    }

    #[test]
    fn holiday_shown_under_declared_date() {
        let s = SkippedDay {
            date: date(2024, 12, 26),
            reason: SkipReason::Holiday {
                name: "Natal".into(),
                declared: date(2024, 12, 25),
            },
        };
        assert_eq!(s.describe(Locale::Portuguese), "25/12/2024: Natal");
    }

    #[test]
    fn response_view() {
        let mut holidays = ObservedHolidays::new();
        holidays.insert(date(2024, 1, 1), "Confraternização Universal");
        let result = CalculationResult {
            payment_date: date(2024, 1, 8),
            skipped_days: vec![
                SkippedDay {
                    date: date(2024, 1, 1),
                    reason: SkipReason::Holiday {
                        name: "Confraternização Universal".into(),
                        declared: date(2024, 1, 1),
                    },
                },
                SkippedDay {
                    date: date(2024, 1, 7),
                    reason: SkipReason::Sunday,
                },
            ],
            holidays_observed: holidays,
        };
        let response = result.to_response(None, "Brazil (built-in)", Locale::Portuguese);
        assert_eq!(response.payment_date, "08/01/2024");
        assert_eq!(
            response.holidays_observed,
            ["Confraternização Universal (01/01/2024)"]
        );
        assert_eq!(
            response.explanation,
            ["01/01/2024: Confraternização Universal", "07/01/2024: Domingo"]
        );
        assert_eq!(response.total_days_skipped, 2);
        assert_eq!(response.details.jurisdiction, "Nenhum");

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["paymentDate"], "08/01/2024");
        assert_eq!(json["details"]["holidaySource"], "Brazil (built-in)");
    }
}
