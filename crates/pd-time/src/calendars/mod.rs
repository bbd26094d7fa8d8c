//! Concrete holiday lookups.

/// Lookups populated at run time.
pub mod bespoke_calendar;

/// Built-in Brazilian national and state holidays.
pub mod brazil;

pub use bespoke_calendar::BespokeHolidays;
pub use brazil::BrazilHolidays;
