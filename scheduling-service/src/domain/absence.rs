use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use shared::AbsenceKind;
use uuid::Uuid;

use crate::domain::repositories::RawAbsences;

/// Per-employee absence calendar: every day in the period the employee is
/// pre-occupied and therefore outside the solver's decision space.
pub type AbsenceMap = HashMap<Uuid, HashMap<NaiveDate, AbsenceKind>>;

/// Expands an employee's raw token strings (`sl`/`fe`/`uw`/`w`) into a
/// day-by-day map for the given period, skipping malformed tokens with a
/// warning rather than failing the whole run.
pub fn expand(employee_id: Uuid, raw: &RawAbsences, year: i32, month: i16) -> HashMap<NaiveDate, AbsenceKind> {
    let mut expanded = HashMap::new();
    for (field, kind) in [
        (&raw.sl, AbsenceKind::Sl),
        (&raw.fe, AbsenceKind::Fe),
        (&raw.uw, AbsenceKind::Uw),
        (&raw.w, AbsenceKind::W),
    ] {
        for token in field.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            match parse_token(token, year, month) {
                Ok(dates) => {
                    for date in dates {
                        expanded.insert(date, kind);
                    }
                }
                Err(reason) => {
                    tracing::warn!(
                        employee_id = %employee_id,
                        token,
                        reason,
                        "skipping malformed absence token"
                    );
                }
            }
        }
    }
    expanded
}

/// Parses one token: `D.M.` or `DD.MM.`, either a single date or a
/// `-`/`–`-separated range. A range may span at most one month boundary
/// from the period's own month; anything wider is rejected.
fn parse_token(token: &str, year: i32, month: i16) -> Result<Vec<NaiveDate>, &'static str> {
    let parts: Vec<&str> = token.splitn(2, ['-', '\u{2013}']).map(str::trim).collect();
    match parts.as_slice() {
        [single] => parse_day_month(single, year, month).map(|d| vec![d]),
        [start, end] => {
            let start_date = parse_day_month(start, year, month)?;
            let end_date = parse_day_month_near(end, year, month, start_date)?;
            if end_date < start_date {
                return Err("range end precedes range start");
            }
            if (end_date - start_date).num_days() > 62 {
                return Err("range spans more than two months");
            }
            let mut dates = Vec::new();
            let mut cursor = start_date;
            while cursor <= end_date {
                dates.push(cursor);
                cursor += chrono::Duration::days(1);
            }
            Ok(dates)
        }
        _ => Err("unrecognized token shape"),
    }
}

/// Parses `D.M.`/`DD.MM.` against the period's own year/month.
fn parse_day_month(text: &str, year: i32, month: i16) -> Result<NaiveDate, &'static str> {
    let mut fields = text.trim_end_matches('.').split('.');
    let day: u32 = fields
        .next()
        .ok_or("missing day")?
        .parse()
        .map_err(|_| "non-numeric day")?;
    let parsed_month: u32 = match fields.next() {
        Some(m) if !m.is_empty() => m.parse().map_err(|_| "non-numeric month")?,
        _ => month as u32,
    };
    NaiveDate::from_ymd_opt(year, parsed_month, day).ok_or("day does not exist in that month")
}

/// Parses the end of a range: if it names a month before `anchor`'s month,
/// the range has wrapped into the following year once; this only happens
/// at a December/January boundary within the one allowed extra month.
fn parse_day_month_near(
    text: &str,
    year: i32,
    month: i16,
    anchor: NaiveDate,
) -> Result<NaiveDate, &'static str> {
    let mut fields = text.trim_end_matches('.').split('.');
    let day: u32 = fields
        .next()
        .ok_or("missing day")?
        .parse()
        .map_err(|_| "non-numeric day")?;
    let parsed_month: u32 = match fields.next() {
        Some(m) if !m.is_empty() => m.parse().map_err(|_| "non-numeric month")?,
        _ => month as u32,
    };

    let candidate_year = if (parsed_month as i16) < (anchor.month() as i16) {
        year + 1
    } else {
        year
    };
    NaiveDate::from_ymd_opt(candidate_year, parsed_month, day).ok_or("day does not exist in that month")
}
