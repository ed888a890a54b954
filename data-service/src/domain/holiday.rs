use chrono::{Datelike, NaiveDate};

/// Fixed-date public-holiday rule set. A stand-in for a real regional
/// holiday feed (explicitly out of scope per the spec) — it only knows
/// holidays that fall on the same month/day every year, so movable
/// feasts (Good Friday, Ascension, ...) are not covered.
pub struct HolidayCalculator {
    fixed_dates: Vec<(u32, u32)>,
}

impl Default for HolidayCalculator {
    fn default() -> Self {
        Self {
            fixed_dates: vec![
                (1, 1),   // New Year's Day
                (1, 2),   // Berchtoldstag
                (5, 1),   // Labour Day
                (8, 1),   // National holiday
                (12, 25), // Christmas
                (12, 26), // Boxing Day
            ],
        }
    }
}

impl HolidayCalculator {
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.fixed_dates.contains(&(date.month(), date.day()))
    }
}
