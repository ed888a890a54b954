use shared::{Qualification, ShiftCode};

use crate::domain::absence::AbsenceMap;
use crate::domain::calendar::Calendar;
use crate::domain::extractor::Roster;
use crate::domain::repositories::EmployeeInfo;

/// One post-solve sanity check over a finished roster. Where the teacher
/// repo's `Rule` trait validated one assignment as it was made, these
/// validate the whole accepted solution after the solver has committed
/// to it — the properties a correct solve can never violate, regardless
/// of how the objective weighted its way there.
pub trait Invariant: Send + Sync {
    fn name(&self) -> &'static str;
    fn check(&self, ctx: &InvariantContext) -> Vec<String>;
}

pub struct InvariantContext<'a> {
    pub roster: &'a Roster,
    pub employees: &'a [EmployeeInfo],
    pub calendar: &'a Calendar,
    pub absences: &'a AbsenceMap,
}

/// P1: an employee never holds two shifts on the same day — trivially
/// true by construction (`Roster::assignments` is keyed by
/// `(employee, date)`), checked anyway as a cheap regression guard.
pub struct OneShiftPerDay;
impl Invariant for OneShiftPerDay {
    fn name(&self) -> &'static str {
        "one_shift_per_day"
    }
    fn check(&self, ctx: &InvariantContext) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        let mut violations = Vec::new();
        for &(employee_id, date) in ctx.roster.assignments.keys() {
            if !seen.insert((employee_id, date)) {
                violations.push(format!("{employee_id} double-booked on {date}"));
            }
        }
        violations
    }
}

/// P2: no shift is ever assigned on a day the employee is recorded
/// absent.
pub struct AbsenceRespected;
impl Invariant for AbsenceRespected {
    fn name(&self) -> &'static str {
        "absence_respected"
    }
    fn check(&self, ctx: &InvariantContext) -> Vec<String> {
        let mut violations = Vec::new();
        for (&(employee_id, date), _) in ctx.roster.assignments.iter() {
            if let Some(kind) = ctx
                .absences
                .get(&employee_id)
                .and_then(|days| days.get(&date))
            {
                violations.push(format!(
                    "{employee_id} assigned on {date} despite recorded absence {kind:?}"
                ));
            }
        }
        violations
    }
}

/// P3: Leitung never works a weekend day, and on weekdays never holds a
/// shift other than `B Dienst` (the office shift `Bü Dienst` is tracked
/// separately via `y` and checked by `LeitungOfficeQuota`).
pub struct LeitungWeekdayOnly;
impl Invariant for LeitungWeekdayOnly {
    fn name(&self) -> &'static str {
        "leitung_weekday_only"
    }
    fn check(&self, ctx: &InvariantContext) -> Vec<String> {
        let mut violations = Vec::new();
        for employee in ctx.employees.iter().filter(|e| e.qualification == Qualification::Leitung) {
            for day in &ctx.calendar.days {
                let Some(&shift) = ctx.roster.assignments.get(&(employee.id, day.date)) else {
                    continue;
                };
                if day.is_weekend {
                    violations.push(format!("Leitung {} assigned on weekend {}", employee.id, day.date));
                } else if shift != ShiftCode::BDienst {
                    violations.push(format!(
                        "Leitung {} holds {shift:?} on weekday {}, only B Dienst is allowed",
                        employee.id, day.date
                    ));
                }
            }
        }
        violations
    }
}

/// P4: Leitung works exactly four office days over the period.
pub struct LeitungOfficeQuota;
impl Invariant for LeitungOfficeQuota {
    fn name(&self) -> &'static str {
        "leitung_office_quota"
    }
    fn check(&self, ctx: &InvariantContext) -> Vec<String> {
        let mut violations = Vec::new();
        for employee in ctx.employees.iter().filter(|e| e.qualification == Qualification::Leitung) {
            let count = ctx
                .roster
                .assignments
                .iter()
                .filter(|(&(eid, _), &shift)| eid == employee.id && shift == ShiftCode::BueDienst)
                .count();
            if count != 4 {
                violations.push(format!(
                    "Leitung {} has {count} office days, expected 4",
                    employee.id
                ));
            }
        }
        violations
    }
}

/// P5: apprentices (Ausbildung 1/2) never work a weekend day, and on
/// weekdays only ever hold `B Dienst` or `C Dienst`.
pub struct ApprenticeWeekdayOnly;
impl Invariant for ApprenticeWeekdayOnly {
    fn name(&self) -> &'static str {
        "apprentice_weekday_only"
    }
    fn check(&self, ctx: &InvariantContext) -> Vec<String> {
        let mut violations = Vec::new();
        for employee in ctx.employees.iter().filter(|e| e.qualification.is_apprentice()) {
            for day in &ctx.calendar.days {
                let Some(&shift) = ctx.roster.assignments.get(&(employee.id, day.date)) else {
                    continue;
                };
                if day.is_weekend {
                    violations.push(format!(
                        "apprentice {} assigned on weekend {}",
                        employee.id, day.date
                    ));
                } else if !matches!(shift, ShiftCode::BDienst | ShiftCode::CDienst) {
                    violations.push(format!(
                        "apprentice {} holds {shift:?} on weekday {}, only B/C Dienst is allowed",
                        employee.id, day.date
                    ));
                }
            }
        }
        violations
    }
}

/// P6: split shifts (BS/C4 Dienst) only ever go to PH/HF staff.
pub struct SplitShiftQualification;
impl Invariant for SplitShiftQualification {
    fn name(&self) -> &'static str {
        "split_shift_qualification"
    }
    fn check(&self, ctx: &InvariantContext) -> Vec<String> {
        let mut violations = Vec::new();
        for (&(employee_id, date), &shift) in ctx.roster.assignments.iter() {
            if matches!(shift, ShiftCode::BsDienst | ShiftCode::C4Dienst) {
                let qualification = ctx
                    .employees
                    .iter()
                    .find(|e| e.id == employee_id)
                    .map(|e| e.qualification);
                if !matches!(qualification, Some(Qualification::Ph) | Some(Qualification::Hf)) {
                    violations.push(format!(
                        "{employee_id} holds split shift {shift:?} on {date} without PH/HF qualification"
                    ));
                }
            }
        }
        violations
    }
}

/// P7: VS Dienst is assigned to at most one employee per day.
pub struct VsDienstUniqueness;
impl Invariant for VsDienstUniqueness {
    fn name(&self) -> &'static str {
        "vs_dienst_uniqueness"
    }
    fn check(&self, ctx: &InvariantContext) -> Vec<String> {
        let mut violations = Vec::new();
        for day in &ctx.calendar.days {
            let count = ctx
                .roster
                .assignments
                .iter()
                .filter(|(&(_, date), &shift)| date == day.date && shift == ShiftCode::VsDienst)
                .count();
            if count > 1 {
                violations.push(format!("{count} employees on VS Dienst on {}", day.date));
            }
        }
        violations
    }
}

/// P9: `S`/`BS` forbid both `B` and `C` the next day; `VS`/`C4` forbid
/// `B`/`BS`/`C4` the next day but leave `C` open — the only early shift
/// permitted after either.
pub struct NoLateToEarlyTransition;
impl Invariant for NoLateToEarlyTransition {
    fn name(&self) -> &'static str {
        "no_late_to_early_transition"
    }
    fn check(&self, ctx: &InvariantContext) -> Vec<String> {
        let mut violations = Vec::new();
        for employee in ctx.employees {
            for window in ctx.calendar.days.windows(2) {
                let (today, tomorrow) = (window[0], window[1]);
                let today_shift = ctx.roster.assignments.get(&(employee.id, today.date)).copied();
                let tomorrow_shift = ctx.roster.assignments.get(&(employee.id, tomorrow.date)).copied();

                let violates = match today_shift {
                    Some(ShiftCode::SDienst) | Some(ShiftCode::BsDienst) => {
                        matches!(tomorrow_shift, Some(ShiftCode::BDienst) | Some(ShiftCode::CDienst))
                    }
                    Some(ShiftCode::VsDienst) | Some(ShiftCode::C4Dienst) => matches!(
                        tomorrow_shift,
                        Some(ShiftCode::BDienst) | Some(ShiftCode::BsDienst) | Some(ShiftCode::C4Dienst)
                    ),
                    _ => false,
                };
                if violates {
                    violations.push(format!(
                        "{} works {:?} on {} then {:?} on {}",
                        employee.id, today_shift.unwrap(), today.date, tomorrow_shift.unwrap(), tomorrow.date
                    ));
                }
            }
        }
        violations
    }
}

/// P3: at most three split-shift (BS/C4 Dienst) staff per day.
pub struct SplitShiftDailyCap;
impl Invariant for SplitShiftDailyCap {
    fn name(&self) -> &'static str {
        "split_shift_daily_cap"
    }
    fn check(&self, ctx: &InvariantContext) -> Vec<String> {
        let mut violations = Vec::new();
        for day in &ctx.calendar.days {
            let count = ctx
                .roster
                .assignments
                .iter()
                .filter(|(&(_, date), &shift)| {
                    date == day.date && matches!(shift, ShiftCode::BsDienst | ShiftCode::C4Dienst)
                })
                .count();
            if count > 3 {
                violations.push(format!("{count} split-shift staff on {}, cap is 3", day.date));
            }
        }
        violations
    }
}

/// P8: no employee works a fully-staffed rolling 5-day window unless the
/// following two in-month days are both off.
pub struct ConsecutiveRestLimit;
impl Invariant for ConsecutiveRestLimit {
    fn name(&self) -> &'static str {
        "consecutive_rest_limit"
    }
    fn check(&self, ctx: &InvariantContext) -> Vec<String> {
        let mut violations = Vec::new();
        for employee in ctx.employees {
            for window in ctx.calendar.days.windows(5) {
                let all_worked = window
                    .iter()
                    .all(|day| ctx.roster.assignments.contains_key(&(employee.id, day.date)));
                if !all_worked {
                    continue;
                }
                let last_day = window[4].date;
                let following: Vec<_> = ctx
                    .calendar
                    .days
                    .iter()
                    .filter(|d| d.date > last_day)
                    .take(2)
                    .collect();
                for day in following {
                    if ctx.roster.assignments.contains_key(&(employee.id, day.date)) {
                        violations.push(format!(
                            "{} worked 5 straight days through {} but is also assigned on {}",
                            employee.id, last_day, day.date
                        ));
                    }
                }
            }
        }
        violations
    }
}

/// P9: at most two weekend units worked (one for Ausbildung 2).
pub struct WeekendLimit;
impl Invariant for WeekendLimit {
    fn name(&self) -> &'static str {
        "weekend_limit"
    }
    fn check(&self, ctx: &InvariantContext) -> Vec<String> {
        let mut violations = Vec::new();
        for employee in ctx.employees {
            let worked_units = ctx
                .calendar
                .weekend_units
                .iter()
                .filter(|unit| {
                    unit.days()
                        .any(|date| ctx.roster.assignments.contains_key(&(employee.id, date)))
                })
                .count();
            let cap = if employee.qualification == Qualification::Ausbildung2 { 1 } else { 2 };
            if worked_units > cap {
                violations.push(format!(
                    "{} worked {worked_units} weekend units, cap is {cap}",
                    employee.id
                ));
            }
        }
        violations
    }
}

/// P10: Ausbildung 2 apprentices work at most one Sunday/holiday beyond
/// their weekend allowance.
pub struct Ausbildung2RestLimit;
impl Invariant for Ausbildung2RestLimit {
    fn name(&self) -> &'static str {
        "ausbildung2_rest_limit"
    }
    fn check(&self, ctx: &InvariantContext) -> Vec<String> {
        let mut violations = Vec::new();
        for employee in ctx.employees.iter().filter(|e| e.qualification == Qualification::Ausbildung2) {
            let count = ctx
                .calendar
                .days
                .iter()
                .filter(|d| d.is_rest_eligible())
                .filter(|d| ctx.roster.assignments.contains_key(&(employee.id, d.date)))
                .count();
            if count > 1 {
                violations.push(format!(
                    "Ausbildung2 {} worked {count} Sunday/holiday days, cap is 1",
                    employee.id
                ));
            }
        }
        violations
    }
}

/// Runs every invariant and returns the combined list of violation
/// messages, empty when the roster is clean.
pub fn check_all(ctx: &InvariantContext) -> Vec<String> {
    let checks: Vec<Box<dyn Invariant>> = vec![
        Box::new(OneShiftPerDay),
        Box::new(AbsenceRespected),
        Box::new(LeitungWeekdayOnly),
        Box::new(LeitungOfficeQuota),
        Box::new(ApprenticeWeekdayOnly),
        Box::new(SplitShiftQualification),
        Box::new(VsDienstUniqueness),
        Box::new(NoLateToEarlyTransition),
        Box::new(WeekendLimit),
        Box::new(Ausbildung2RestLimit),
        Box::new(SplitShiftDailyCap),
        Box::new(ConsecutiveRestLimit),
    ];

    checks
        .iter()
        .flat_map(|check| check.check(ctx))
        .collect()
}
