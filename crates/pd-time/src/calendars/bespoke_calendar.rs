//! Bespoke holidays: a lookup populated at run time.

use crate::calendar::{HolidayLookup, HolidayRecord};
use crate::date::Date;
use crate::jurisdiction::Jurisdiction;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
struct Entry {
    record: HolidayRecord,
    jurisdiction: Option<Jurisdiction>,
}

/// A lookup whose holidays are added manually.
///
/// Entries are returned in insertion order.  A national entry (no
/// jurisdiction) applies to every query; a regional entry only to queries
/// for its jurisdiction.
#[derive(Debug, Clone)]
pub struct BespokeHolidays {
    name: String,
    entries: BTreeMap<Date, Vec<Entry>>,
}

impl BespokeHolidays {
    /// Create an empty lookup with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Add a national holiday on its own date.
    pub fn add_holiday(&mut self, record: HolidayRecord) {
        self.insert(record.date, record, None);
    }

    /// Add a holiday observed only in `jurisdiction`.
    pub fn add_regional_holiday(&mut self, jurisdiction: Jurisdiction, record: HolidayRecord) {
        self.insert(record.date, record, Some(jurisdiction));
    }

    /// Report `record` when `on` is queried, keeping the record's own date.
    ///
    /// Models sources that return a holiday under a canonical date distinct
    /// from the day being asked about.
    pub fn add_observed(&mut self, on: Date, record: HolidayRecord) {
        self.insert(on, record, None);
    }

    fn insert(&mut self, on: Date, record: HolidayRecord, jurisdiction: Option<Jurisdiction>) {
        self.entries.entry(on).or_default().push(Entry {
            record,
            jurisdiction,
        });
    }
}

impl HolidayLookup for BespokeHolidays {
    fn name(&self) -> &str {
        &self.name
    }

    fn holidays_on(&self, date: Date, jurisdiction: Option<Jurisdiction>) -> Vec<HolidayRecord> {
        self.entries
            .get(&date)
            .map(|entries| {
                entries
                    .iter()
                    .filter(|e| e.jurisdiction.is_none() || e.jurisdiction == jurisdiction)
                    .map(|e| e.record.clone())
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::HolidayCategory;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn empty_bespoke_has_no_holidays() {
        let cal = BespokeHolidays::new("Test");
        assert_eq!(cal.name(), "Test");
        assert!(cal.holidays_on(date(2024, 1, 1), None).is_empty());
    }

    #[test]
    fn add_holiday() {
        let mut cal = BespokeHolidays::new("Custom");
        let holiday = date(2024, 3, 15);
        assert!(!cal.is_holiday(holiday, None));

        cal.add_holiday(HolidayRecord::statutory(holiday, "Founders' Day"));
        assert!(cal.is_holiday(holiday, None));
        assert!(!cal.is_holiday(holiday.succ().unwrap(), None));
    }

    #[test]
    fn regional_holidays_need_their_jurisdiction() {
        let mut cal = BespokeHolidays::new("Regional");
        let d = date(2024, 7, 9);
        cal.add_regional_holiday(
            Jurisdiction::SaoPaulo,
            HolidayRecord::statutory(d, "Revolução Constitucionalista"),
        );
        assert!(!cal.is_holiday(d, None));
        assert!(!cal.is_holiday(d, Some(Jurisdiction::RioDeJaneiro)));
        assert!(cal.is_holiday(d, Some(Jurisdiction::SaoPaulo)));
    }

    #[test]
    fn observed_entries_keep_their_own_date() {
        let mut cal = BespokeHolidays::new("Observed");
        let canonical = date(2024, 12, 25);
        let observed = date(2024, 12, 26);
        cal.add_observed(observed, HolidayRecord::statutory(canonical, "Christmas"));
        let records = cal.holidays_on(observed, None);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].date, canonical);
        assert!(cal.holidays_on(canonical, None).is_empty());
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut cal = BespokeHolidays::new("Order");
        let d = date(2024, 5, 30);
        cal.add_holiday(HolidayRecord::new(d, "A", HolidayCategory::Optional));
        cal.add_holiday(HolidayRecord::statutory(d, "B"));
        let names: Vec<_> = cal.holidays_on(d, None).into_iter().map(|h| h.name).collect();
        assert_eq!(names, ["A", "B"]);
        assert_eq!(cal.blocking_holiday(d, None).unwrap().name, "B");
    }
}
