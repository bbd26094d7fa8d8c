//! `HolidayLookup` trait and the holiday record types it returns.
//!
//! A lookup answers one question: which holidays fall on a given date,
//! optionally narrowed to a jurisdiction.  The answer is always a (possibly
//! empty) vector of [`HolidayRecord`]s; callers never have to distinguish
//! "one record" from "many records".

use crate::date::Date;
use crate::jurisdiction::Jurisdiction;
use serde::{Deserialize, Serialize};

/// How binding a holiday is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidayCategory {
    /// A public holiday established by law.
    Statutory,
    /// A facultative day off (e.g. Carnival); work is not suspended by law.
    Optional,
    /// A commemorative date with no effect on working hours.
    Observance,
    /// Any other kind (bank or school holidays, ...).
    Other,
}

impl HolidayCategory {
    /// Return `true` if a holiday of this category blocks a business day.
    ///
    /// Only `Optional` and `Observance` holidays leave the day usable.
    pub fn is_blocking(&self) -> bool {
        !matches!(self, HolidayCategory::Optional | HolidayCategory::Observance)
    }
}

/// A single holiday as reported by a [`HolidayLookup`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HolidayRecord {
    /// The holiday's own date.
    pub date: Date,
    /// Display name.
    pub name: String,
    /// How binding the holiday is.
    pub category: HolidayCategory,
}

impl HolidayRecord {
    /// Create a record.
    pub fn new(date: Date, name: impl Into<String>, category: HolidayCategory) -> Self {
        Self {
            date,
            name: name.into(),
            category,
        }
    }

    /// Shorthand for a statutory holiday.
    pub fn statutory(date: Date, name: impl Into<String>) -> Self {
        Self::new(date, name, HolidayCategory::Statutory)
    }
}

/// A source of holiday records.
///
/// Implementations must be pure functions of `(date, jurisdiction)`: the
/// calculator queries once per scanned day and relies on identical answers
/// for identical questions.
pub trait HolidayLookup: std::fmt::Debug + Send + Sync {
    /// Human-readable name of the data source (e.g. `"Brazil (built-in)"`).
    fn name(&self) -> &str;

    /// Return every holiday on `date`, national ones first.
    ///
    /// Records normally carry `date` itself, but a source may report a
    /// holiday under its own canonical date.
    fn holidays_on(&self, date: Date, jurisdiction: Option<Jurisdiction>) -> Vec<HolidayRecord>;

    /// Return the first holiday on `date` whose category blocks business.
    fn blocking_holiday(
        &self,
        date: Date,
        jurisdiction: Option<Jurisdiction>,
    ) -> Option<HolidayRecord> {
        self.holidays_on(date, jurisdiction)
            .into_iter()
            .find(|h| h.category.is_blocking())
    }

    /// Return `true` if a blocking holiday falls on `date`.
    fn is_holiday(&self, date: Date, jurisdiction: Option<Jurisdiction>) -> bool {
        self.blocking_holiday(date, jurisdiction).is_some()
    }
}

impl<T: HolidayLookup + ?Sized> HolidayLookup for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn holidays_on(&self, date: Date, jurisdiction: Option<Jurisdiction>) -> Vec<HolidayRecord> {
        (**self).holidays_on(date, jurisdiction)
    }
}

impl<T: HolidayLookup + ?Sized> HolidayLookup for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn holidays_on(&self, date: Date, jurisdiction: Option<Jurisdiction>) -> Vec<HolidayRecord> {
        (**self).holidays_on(date, jurisdiction)
    }
}

/// A lookup with no holidays at all: only weekends are ever skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHolidays;

impl HolidayLookup for NoHolidays {
    fn name(&self) -> &str {
        "None"
    }

    fn holidays_on(&self, _date: Date, _jurisdiction: Option<Jurisdiction>) -> Vec<HolidayRecord> {
        Vec::new()
    }
}
