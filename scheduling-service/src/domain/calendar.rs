use chrono::{Datelike, Duration, NaiveDate, Weekday};
use shared::DomainResult;

use crate::domain::repositories::HolidayProvider;

/// One calendar day of the roster period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Day {
    pub date: NaiveDate,
    pub is_weekend: bool,
    pub is_holiday: bool,
}

impl Day {
    /// Weekend unit membership and Ausbildung2's extra-Sunday/holiday rule
    /// both key off this: a day that is either a weekend day or a holiday.
    pub fn is_rest_eligible(&self) -> bool {
        self.is_weekend || self.is_holiday
    }
}

/// A Saturday/Sunday pair, greedily formed within the period. A lone
/// Saturday or Sunday at a month boundary (the period's first day is a
/// Sunday, or its last day is a Saturday) forms a unit of one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekendUnit {
    pub saturday: Option<NaiveDate>,
    pub sunday: Option<NaiveDate>,
}

impl WeekendUnit {
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        self.saturday.into_iter().chain(self.sunday)
    }
}

#[derive(Debug, Clone)]
pub struct Calendar {
    pub year: i32,
    pub month: i16,
    pub days: Vec<Day>,
    pub weekend_units: Vec<WeekendUnit>,
}

impl Calendar {
    /// Builds the full day list and weekend-unit pairing for a given
    /// month, consulting the holiday provider once per day.
    pub async fn build(
        year: i32,
        month: i16,
        holidays: &dyn HolidayProvider,
    ) -> DomainResult<Calendar> {
        let first = NaiveDate::from_ymd_opt(year, month as u32, 1)
            .ok_or_else(|| shared::DomainError::InvalidInput(format!("invalid year/month {year}-{month}")))?;
        let next_month_first = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month as u32 + 1, 1)
        }
        .expect("computed month boundary is always valid");

        let mut days = Vec::new();
        let mut cursor = first;
        while cursor < next_month_first {
            let is_weekend = matches!(cursor.weekday(), Weekday::Sat | Weekday::Sun);
            let is_holiday = holidays.is_holiday(cursor).await?;
            days.push(Day {
                date: cursor,
                is_weekend,
                is_holiday,
            });
            cursor += Duration::days(1);
        }

        let weekend_units = pair_weekends(&days);

        Ok(Calendar {
            year,
            month,
            days,
            weekend_units,
        })
    }

    pub fn day(&self, date: NaiveDate) -> Option<&Day> {
        self.days.iter().find(|d| d.date == date)
    }
}

/// Greedily pairs consecutive Saturday/Sunday into one unit. A Saturday
/// with no following Sunday in the period (month ends on a Saturday) and
/// a Sunday with no preceding Saturday in the period (month starts on a
/// Sunday) each form a unit of one.
fn pair_weekends(days: &[Day]) -> Vec<WeekendUnit> {
    let mut units = Vec::new();
    let mut iter = days.iter().peekable();
    while let Some(day) = iter.next() {
        match day.date.weekday() {
            Weekday::Sat => {
                let sunday = iter
                    .peek()
                    .filter(|next| next.date.weekday() == Weekday::Sun)
                    .map(|next| next.date);
                if sunday.is_some() {
                    iter.next();
                }
                units.push(WeekendUnit {
                    saturday: Some(day.date),
                    sunday,
                });
            }
            Weekday::Sun => {
                units.push(WeekendUnit {
                    saturday: None,
                    sunday: Some(day.date),
                });
            }
            _ => {}
        }
    }
    units
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct NoHolidays;

    #[async_trait]
    impl HolidayProvider for NoHolidays {
        async fn is_holiday(&self, _date: NaiveDate) -> DomainResult<bool> {
            Ok(false)
        }
    }

    #[tokio::test]
    async fn builds_every_day_of_the_month() {
        let calendar = Calendar::build(2026, 2, &NoHolidays).await.unwrap();
        assert_eq!(calendar.days.len(), 28);
    }

    #[tokio::test]
    async fn pairs_full_weekends() {
        // February 2026: Feb 1 is a Sunday, Feb 28 is a Saturday.
        let calendar = Calendar::build(2026, 2, &NoHolidays).await.unwrap();
        let first_unit = calendar.weekend_units.first().unwrap();
        assert!(first_unit.saturday.is_none());
        assert!(first_unit.sunday.is_some());

        let last_unit = calendar.weekend_units.last().unwrap();
        assert!(last_unit.saturday.is_some());
        assert!(last_unit.sunday.is_none());
    }
}
