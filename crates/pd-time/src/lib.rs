//! # pd-time
//!
//! Date, weekday, jurisdiction, and holiday-lookup types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `HolidayLookup` trait and holiday record types.
pub mod calendar;

/// Concrete holiday lookups (bespoke, Brazil).
pub mod calendars;

/// `Date` type.
pub mod date;

/// Gregorian Easter computus.
pub mod easter;

/// Brazilian federative units.
pub mod jurisdiction;

/// Day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{HolidayCategory, HolidayLookup, HolidayRecord, NoHolidays};
pub use calendars::{BespokeHolidays, BrazilHolidays};
pub use date::Date;
pub use jurisdiction::Jurisdiction;
pub use weekday::Weekday;
