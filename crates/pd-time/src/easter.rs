//! Gregorian Easter computus.
//!
//! Brazil's movable holidays (Carnival, Good Friday, Corpus Christi, ...)
//! are fixed offsets from Easter Sunday.

use crate::date::day_of_year;

/// Day-of-year (1-based) of Easter Sunday in `year`.
///
/// Uses the Anonymous Gregorian (Meeus/Jones/Butcher) algorithm.
pub fn easter_sunday_day_of_year(year: u16) -> u16 {
    let (month, day) = easter_sunday(year);
    day_of_year(year, month, day)
}

/// (month, day) of Easter Sunday in `year`.
pub fn easter_sunday(year: u16) -> (u8, u8) {
    let y = year as i32;
    let a = y % 19;
    let b = y / 100;
    let c = y % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    (month as u8, day as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_easter_sundays() {
        assert_eq!(easter_sunday(2000), (4, 23));
        assert_eq!(easter_sunday(2019), (4, 21));
        assert_eq!(easter_sunday(2023), (4, 9));
        assert_eq!(easter_sunday(2024), (3, 31));
        assert_eq!(easter_sunday(2025), (4, 20));
        assert_eq!(easter_sunday(2038), (4, 25));
    }

    #[test]
    fn day_of_year_accounts_for_leap_years() {
        // 2024-03-31: 31 + 29 + 31
        assert_eq!(easter_sunday_day_of_year(2024), 91);
        // 2025-04-20: 31 + 28 + 31 + 20
        assert_eq!(easter_sunday_day_of_year(2025), 110);
    }
}
