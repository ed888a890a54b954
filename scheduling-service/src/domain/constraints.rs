use std::collections::HashMap;

use good_lp::{constraint, Constraint, Expression};
use shared::{AbsenceKind, Qualification, ShiftCategory, ShiftCode};
use uuid::Uuid;

use crate::domain::absence::AbsenceMap;
use crate::domain::calendar::Calendar;
use crate::domain::repositories::EmployeeInfo;
use crate::domain::variables::VariableSet;

/// Per-employee, per-soft-constraint slack terms, handed to the objective
/// assembler and, after solving, read back into the roster's slack
/// report.
#[derive(Default)]
pub struct SoftTerms {
    /// Shortfall below the early-coverage floor, per day.
    pub early_coverage_shortfall: Vec<good_lp::Variable>,
    /// Shortfall below the "at least one Fach on the early shift" floor.
    pub early_fach_shortfall: Vec<good_lp::Variable>,
    /// Shortfall below the non-Fach early-staffing lower band.
    pub non_fach_band_shortfall: Vec<good_lp::Variable>,
    /// Shortfall below the B Dienst coverage floor.
    pub b_dienst_shortfall: Vec<good_lp::Variable>,
    /// Shortfall below "at least one HF on B Dienst", per day.
    pub b_dienst_hf_shortfall: Vec<good_lp::Variable>,
    /// Shortfall below the late-coverage floor.
    pub late_coverage_shortfall: Vec<good_lp::Variable>,
    /// Shortfall below "at least one HF on the late shift".
    pub late_hf_shortfall: Vec<good_lp::Variable>,
    /// Excess Fach staff on the late shift above the soft cap.
    pub late_fach_excess: Vec<good_lp::Variable>,
    /// Forced-rest violations: a 6th consecutive working day.
    pub consecutive_rest_violation: Vec<good_lp::Variable>,
    /// Target-workday slack, split so under- and over-shoot carry
    /// different costs.
    pub target_under: HashMap<Uuid, good_lp::Variable>,
    pub target_over: HashMap<Uuid, good_lp::Variable>,
    /// Every auxiliary variable created purely to linearize a hard
    /// constraint (weekend-unit indicators). Included in the objective's
    /// tie-break tier at a vanishing weight so the solver never inflates
    /// them beyond what the schedule actually requires.
    pub tie_break_auxiliaries: Vec<good_lp::Variable>,
}

pub struct CompiledConstraints {
    pub hard: Vec<Constraint>,
    pub soft: SoftTerms,
}

const EARLY_COVERAGE_FLOOR: f64 = 5.0;
const NON_FACH_BAND_LOWER: f64 = 4.0;
const B_DIENST_FLOOR: f64 = 2.0;
const LATE_COVERAGE_FLOOR: f64 = 3.0;
const LATE_FACH_SOFT_CAP: f64 = 1.0;
const LEITUNG_OFFICE_DAYS_PER_MONTH: f64 = 4.0;
const MAX_WEEKENDS: u32 = 2;
const MAX_WEEKENDS_AUSBILDUNG2: u32 = 1;
const MAX_EXTRA_SUNDAY_HOLIDAY_AUSBILDUNG2: f64 = 1.0;
const MAX_CONSECUTIVE_WORKDAYS: usize = 5;

/// Compiles every hard constraint and every soft-constraint slack
/// linkage against the given variable set. Hard rules that can be
/// enforced by simply never creating the offending variable (Leitung/
/// apprentice weekend work, Leitung/apprentice weekday shift-code
/// restrictions, split shifts for non-PH/HF staff, Bü Dienst for
/// non-Leitung) are already baked into `VariableSet::build` and need no
/// constraint here.
pub fn compile(
    vars: &mut VariableSet,
    employees: &[EmployeeInfo],
    calendar: &Calendar,
    absences: &AbsenceMap,
) -> CompiledConstraints {
    let mut hard = Vec::new();
    let mut soft = SoftTerms::default();

    one_shift_per_day(vars, employees, calendar, &mut hard);
    leitung_office_day_quota(vars, employees, calendar, &mut hard);
    split_shift_daily_cap(vars, employees, calendar, &mut hard);
    vs_dienst_uniqueness(vars, employees, calendar, &mut hard);
    late_to_early_transition(vars, employees, calendar, &mut hard);
    weekend_limits(vars, employees, calendar, &mut hard, &mut soft);
    ausbildung2_extra_rest_day_limit(vars, employees, calendar, &mut hard);

    early_coverage_floor(vars, employees, calendar, &mut soft, &mut hard);
    non_fach_band(vars, employees, calendar, &mut soft, &mut hard);
    b_dienst_floor(vars, employees, calendar, &mut soft, &mut hard);
    late_coverage_floor(vars, employees, calendar, &mut soft, &mut hard);
    late_fach_cap(vars, employees, calendar, &mut soft, &mut hard);
    consecutive_rest(vars, employees, calendar, &mut soft, &mut hard);
    target_workdays(vars, employees, calendar, absences, &mut soft, &mut hard);

    CompiledConstraints { hard, soft }
}

/// H1: an employee occupies at most one shift (including the Leitung
/// office shift) per day.
fn one_shift_per_day(
    vars: &VariableSet,
    employees: &[EmployeeInfo],
    calendar: &Calendar,
    hard: &mut Vec<Constraint>,
) {
    for employee in employees {
        for day in &calendar.days {
            let mut expr = Expression::from(0.0);
            let mut any = false;
            for v in vars.x_on_day(employee.id, day.date) {
                expr += v;
                any = true;
            }
            if let Some(&y) = vars.y.get(&(employee.id, day.date)) {
                expr += y;
                any = true;
            }
            if any {
                hard.push(constraint!(expr <= 1));
            }
        }
    }
}

/// H4: Leitung works exactly four office days over the period.
fn leitung_office_day_quota(
    vars: &VariableSet,
    employees: &[EmployeeInfo],
    _calendar: &Calendar,
    hard: &mut Vec<Constraint>,
) {
    for employee in employees {
        if employee.qualification != Qualification::Leitung {
            continue;
        }
        let expr: Expression = vars
            .y
            .iter()
            .filter(|((eid, _), _)| *eid == employee.id)
            .map(|(_, v)| Expression::from(*v))
            .sum();
        hard.push(constraint!(expr == LEITUNG_OFFICE_DAYS_PER_MONTH));
    }
}

/// H8: at most three split-shift (BS/C4 Dienst) staff per day.
fn split_shift_daily_cap(
    vars: &VariableSet,
    employees: &[EmployeeInfo],
    calendar: &Calendar,
    hard: &mut Vec<Constraint>,
) {
    for day in &calendar.days {
        let mut expr = Expression::from(0.0);
        for employee in employees {
            for shift in [ShiftCode::BsDienst, ShiftCode::C4Dienst] {
                if let Some(&v) = vars.x.get(&(employee.id, day.date, shift)) {
                    expr += v;
                }
            }
        }
        hard.push(constraint!(expr <= 3));
    }
}

/// H9: VS Dienst is assigned to at most one employee per day.
fn vs_dienst_uniqueness(
    vars: &VariableSet,
    employees: &[EmployeeInfo],
    calendar: &Calendar,
    hard: &mut Vec<Constraint>,
) {
    for day in &calendar.days {
        let mut expr = Expression::from(0.0);
        for employee in employees {
            if let Some(&v) = vars.x.get(&(employee.id, day.date, ShiftCode::VsDienst)) {
                expr += v;
            }
        }
        hard.push(constraint!(expr <= 1));
    }
}

fn sum_shifts(
    vars: &VariableSet,
    employee_id: Uuid,
    date: chrono::NaiveDate,
    codes: &[ShiftCode],
) -> Expression {
    codes
        .iter()
        .filter_map(|s| vars.x.get(&(employee_id, date, *s)))
        .map(|v| Expression::from(*v))
        .sum()
}

/// H10: late→early transitions. `S`/`BS` today forbid both `B` and `C`
/// tomorrow; `VS`/`C4` today forbid `B`/`BS`/`C4` tomorrow but leave `C`
/// open (it is the only early shift permitted the day after either).
fn late_to_early_transition(
    vars: &VariableSet,
    employees: &[EmployeeInfo],
    calendar: &Calendar,
    hard: &mut Vec<Constraint>,
) {
    for employee in employees {
        for window in calendar.days.windows(2) {
            let (today, tomorrow) = (window[0], window[1]);

            let late_strict_today =
                sum_shifts(vars, employee.id, today.date, &[ShiftCode::SDienst, ShiftCode::BsDienst]);
            let b_and_c_tomorrow =
                sum_shifts(vars, employee.id, tomorrow.date, &[ShiftCode::BDienst, ShiftCode::CDienst]);
            hard.push(constraint!(late_strict_today + b_and_c_tomorrow <= 1));

            let vs_c4_today =
                sum_shifts(vars, employee.id, today.date, &[ShiftCode::VsDienst, ShiftCode::C4Dienst]);
            let b_bs_c4_tomorrow = sum_shifts(
                vars,
                employee.id,
                tomorrow.date,
                &[ShiftCode::BDienst, ShiftCode::BsDienst, ShiftCode::C4Dienst],
            );
            hard.push(constraint!(vs_c4_today + b_bs_c4_tomorrow <= 1));
        }
    }
}

/// H11: at most two weekend units worked per employee (one for
/// Ausbildung 2). Each unit gets a linking indicator: any shift worked on
/// a day in the unit forces the indicator to 1.
fn weekend_limits(
    vars: &mut VariableSet,
    employees: &[EmployeeInfo],
    calendar: &Calendar,
    hard: &mut Vec<Constraint>,
    soft: &mut SoftTerms,
) {
    for employee in employees {
        let mut indicators = Vec::new();
        for unit in &calendar.weekend_units {
            let mut worked = Expression::from(0.0);
            let mut any = false;
            for date in unit.days() {
                for v in vars.x_on_day(employee.id, date) {
                    worked += v;
                    any = true;
                }
            }
            if !any {
                continue;
            }
            let indicator = vars.add_binary();
            soft.tie_break_auxiliaries.push(indicator);
            hard.push(constraint!(worked <= 2.0 * indicator));
            indicators.push(indicator);
        }

        let cap = if employee.qualification == Qualification::Ausbildung2 {
            MAX_WEEKENDS_AUSBILDUNG2
        } else {
            MAX_WEEKENDS
        };
        let total: Expression = indicators.into_iter().map(Expression::from).sum();
        hard.push(constraint!(total <= cap as f64));
    }
}

/// H12: Ausbildung 2 apprentices work at most one additional
/// Sunday/holiday beyond their weekend-unit allowance.
fn ausbildung2_extra_rest_day_limit(
    vars: &VariableSet,
    employees: &[EmployeeInfo],
    calendar: &Calendar,
    hard: &mut Vec<Constraint>,
) {
    for employee in employees {
        if employee.qualification != Qualification::Ausbildung2 {
            continue;
        }
        let mut expr = Expression::from(0.0);
        for day in calendar.days.iter().filter(|d| d.is_rest_eligible()) {
            for v in vars.x_on_day(employee.id, day.date) {
                expr += v;
            }
        }
        hard.push(constraint!(expr <= MAX_EXTRA_SUNDAY_HOLIDAY_AUSBILDUNG2));
    }
}

fn shift_expr(vars: &VariableSet, employees: &[EmployeeInfo], date: chrono::NaiveDate, filter: impl Fn(&EmployeeInfo) -> bool, category: impl Fn(ShiftCategory) -> bool) -> Expression {
    let mut expr = Expression::from(0.0);
    for employee in employees.iter().filter(|e| filter(e)) {
        for shift in ShiftCode::ASSIGNABLE.iter().filter(|s| category(s.category())) {
            if let Some(&v) = vars.x.get(&(employee.id, date, *shift)) {
                expr += v;
            }
        }
    }
    expr
}

/// S1/S2: at least five staff on the early shift, at least one of them
/// Fach (Leitung/HF).
fn early_coverage_floor(
    vars: &mut VariableSet,
    employees: &[EmployeeInfo],
    calendar: &Calendar,
    soft: &mut SoftTerms,
    hard: &mut Vec<Constraint>,
) {
    for day in &calendar.days {
        let coverage = shift_expr(vars, employees, day.date, |_| true, |c| matches!(c, ShiftCategory::Early | ShiftCategory::Split));
        let shortfall = vars.add_slack(EARLY_COVERAGE_FLOOR);
        hard.push(constraint!(coverage + shortfall >= EARLY_COVERAGE_FLOOR));
        soft.early_coverage_shortfall.push(shortfall);

        let fach_coverage = shift_expr(vars, employees, day.date, |e| e.qualification.is_fach(), |c| matches!(c, ShiftCategory::Early | ShiftCategory::Split));
        let fach_shortfall = vars.add_slack(1.0);
        hard.push(constraint!(fach_coverage + fach_shortfall >= 1.0));
        soft.early_fach_shortfall.push(fach_shortfall);
    }
}

/// S3: non-Fach presence on the early shift should reach a lower band of
/// 4; the upper side (6) is not enforced, soft or hard — a higher
/// non-Fach presence just means less Fach coverage elsewhere, which this
/// constraint does not penalize.
fn non_fach_band(
    vars: &mut VariableSet,
    employees: &[EmployeeInfo],
    calendar: &Calendar,
    soft: &mut SoftTerms,
    hard: &mut Vec<Constraint>,
) {
    for day in &calendar.days {
        let non_fach_coverage = shift_expr(vars, employees, day.date, |e| e.qualification.is_non_fach(), |c| matches!(c, ShiftCategory::Early | ShiftCategory::Split));
        let shortfall = vars.add_slack(NON_FACH_BAND_LOWER);
        hard.push(constraint!(non_fach_coverage + shortfall >= NON_FACH_BAND_LOWER));
        soft.non_fach_band_shortfall.push(shortfall);
    }
}

/// S4/S5: at least two staff on B Dienst, at least one of them HF.
fn b_dienst_floor(
    vars: &mut VariableSet,
    employees: &[EmployeeInfo],
    calendar: &Calendar,
    soft: &mut SoftTerms,
    hard: &mut Vec<Constraint>,
) {
    for day in &calendar.days {
        let mut coverage = Expression::from(0.0);
        let mut hf_coverage = Expression::from(0.0);
        for employee in employees {
            if let Some(&v) = vars.x.get(&(employee.id, day.date, ShiftCode::BDienst)) {
                coverage += v;
                if employee.qualification == Qualification::Hf {
                    hf_coverage += v;
                }
            }
        }
        let shortfall = vars.add_slack(B_DIENST_FLOOR);
        hard.push(constraint!(coverage + shortfall >= B_DIENST_FLOOR));
        soft.b_dienst_shortfall.push(shortfall);

        let hf_shortfall = vars.add_slack(1.0);
        hard.push(constraint!(hf_coverage + hf_shortfall >= 1.0));
        soft.b_dienst_hf_shortfall.push(hf_shortfall);
    }
}

/// S6/S7: at least three staff on the late shift, at least one HF.
fn late_coverage_floor(
    vars: &mut VariableSet,
    employees: &[EmployeeInfo],
    calendar: &Calendar,
    soft: &mut SoftTerms,
    hard: &mut Vec<Constraint>,
) {
    for day in &calendar.days {
        let coverage = shift_expr(vars, employees, day.date, |_| true, |c| matches!(c, ShiftCategory::Late | ShiftCategory::Split));
        let shortfall = vars.add_slack(LATE_COVERAGE_FLOOR);
        hard.push(constraint!(coverage + shortfall >= LATE_COVERAGE_FLOOR));
        soft.late_coverage_shortfall.push(shortfall);

        let hf_coverage = shift_expr(vars, employees, day.date, |e| e.qualification == Qualification::Hf, |c| matches!(c, ShiftCategory::Late | ShiftCategory::Split));
        let hf_shortfall = vars.add_slack(1.0);
        hard.push(constraint!(hf_coverage + hf_shortfall >= 1.0));
        soft.late_hf_shortfall.push(hf_shortfall);
    }
}

/// S8: no more than one Fach (Leitung/HF) on the late shift; a second one
/// is a soft violation, not forbidden outright.
fn late_fach_cap(
    vars: &mut VariableSet,
    employees: &[EmployeeInfo],
    calendar: &Calendar,
    soft: &mut SoftTerms,
    hard: &mut Vec<Constraint>,
) {
    for day in &calendar.days {
        let fach_coverage = shift_expr(vars, employees, day.date, |e| e.qualification.is_fach(), |c| matches!(c, ShiftCategory::Late | ShiftCategory::Split));
        let excess = vars.add_slack(employees.len() as f64);
        hard.push(constraint!(fach_coverage - excess <= LATE_FACH_SOFT_CAP));
        soft.late_fach_excess.push(excess);
    }
}

/// S9: after five consecutive working days a rest day is required; the
/// sixth day's assignment is penalized rather than forbidden, via a
/// `Z[e,d]` violation indicator bound by the six-day work sum.
fn consecutive_rest(
    vars: &mut VariableSet,
    employees: &[EmployeeInfo],
    calendar: &Calendar,
    soft: &mut SoftTerms,
    hard: &mut Vec<Constraint>,
) {
    let window_len = MAX_CONSECUTIVE_WORKDAYS + 1;
    for employee in employees {
        for window in calendar.days.windows(window_len) {
            let mut worked_sum = Expression::from(0.0);
            for day in window {
                for v in vars.x_on_day(employee.id, day.date) {
                    worked_sum += v;
                }
                if let Some(&y) = vars.y.get(&(employee.id, day.date)) {
                    worked_sum += y;
                }
            }
            let violation = vars.add_binary();
            hard.push(constraint!(worked_sum - window_len as f64 * violation <= MAX_CONSECUTIVE_WORKDAYS as f64));
            soft.consecutive_rest_violation.push(violation);
        }
    }
}

/// S10: total assigned days (plus `Fe`/`Sl` absence credit) should meet
/// the employee's target workdays; shortfall and overshoot both get
/// their own slack so they can carry different costs in the objective.
fn target_workdays(
    vars: &mut VariableSet,
    employees: &[EmployeeInfo],
    calendar: &Calendar,
    absences: &AbsenceMap,
    soft: &mut SoftTerms,
    hard: &mut Vec<Constraint>,
) {
    for employee in employees {
        let credited_absences = absences
            .get(&employee.id)
            .map(|days| {
                days.values()
                    .filter(|kind| matches!(kind, AbsenceKind::Fe | AbsenceKind::Sl))
                    .count()
            })
            .unwrap_or(0) as f64;

        let mut worked = Expression::from(0.0);
        for day in &calendar.days {
            for v in vars.x_on_day(employee.id, day.date) {
                worked += v;
            }
            if let Some(&y) = vars.y.get(&(employee.id, day.date)) {
                worked += y;
            }
        }

        let under = vars.add_slack(employee.target_workdays as f64);
        let over = vars.add_slack(calendar.days.len() as f64);
        let target = employee.target_workdays as f64 - credited_absences;
        let balance = worked - under + over;
        hard.push(constraint!(balance == target));

        soft.target_under.insert(employee.id, under);
        soft.target_over.insert(employee.id, over);
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::calendar::{Calendar, Day};
    use crate::domain::variables::VariableSet;

    fn day(y: i32, m: u32, d: u32, is_weekend: bool) -> Day {
        Day {
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            is_weekend,
            is_holiday: false,
        }
    }

    /// Two weekdays (Monday, Tuesday) and no weekend units: enough to
    /// exercise per-day/per-employee constraint builders without the
    /// noise of a full month.
    fn two_weekdays() -> Calendar {
        Calendar {
            year: 2026,
            month: 2,
            days: vec![day(2026, 2, 2, false), day(2026, 2, 3, false)],
            weekend_units: Vec::new(),
        }
    }

    fn employee(qualification: Qualification) -> EmployeeInfo {
        EmployeeInfo {
            id: Uuid::new_v4(),
            name: "Test".to_string(),
            qualification,
            target_workdays: 10,
            pensum: 100,
        }
    }

    #[test]
    fn leitung_has_no_weekday_shift_variable_other_than_b_dienst() {
        let calendar = two_weekdays();
        let employees = vec![employee(Qualification::Leitung)];
        let absences = AbsenceMap::new();
        let vars = VariableSet::build(&employees, &calendar, &absences);

        let monday = calendar.days[0].date;
        assert!(vars.x.contains_key(&(employees[0].id, monday, ShiftCode::BDienst)));
        assert!(!vars.x.contains_key(&(employees[0].id, monday, ShiftCode::CDienst)));
        assert!(!vars.x.contains_key(&(employees[0].id, monday, ShiftCode::VsDienst)));
        assert!(!vars.x.contains_key(&(employees[0].id, monday, ShiftCode::SDienst)));
    }

    #[test]
    fn apprentice_has_no_weekday_shift_variable_outside_b_and_c_dienst() {
        let calendar = two_weekdays();
        let employees = vec![employee(Qualification::Ausbildung1)];
        let absences = AbsenceMap::new();
        let vars = VariableSet::build(&employees, &calendar, &absences);

        let monday = calendar.days[0].date;
        assert!(vars.x.contains_key(&(employees[0].id, monday, ShiftCode::BDienst)));
        assert!(vars.x.contains_key(&(employees[0].id, monday, ShiftCode::CDienst)));
        assert!(!vars.x.contains_key(&(employees[0].id, monday, ShiftCode::VsDienst)));
        assert!(!vars.x.contains_key(&(employees[0].id, monday, ShiftCode::SDienst)));
    }

    /// The fix for H10: a `VS Dienst` today must not forbid `C Dienst`
    /// tomorrow, only `B`/`BS`/`C4` Dienst. Solved directly against HiGHS
    /// rather than inspected as expression terms, since `good_lp`'s
    /// `Constraint` exposes no accessor for its contents.
    #[test]
    fn vs_dienst_today_permits_c_dienst_tomorrow() {
        use good_lp::{constraint, SolverModel};
        use good_lp::solvers::highs::highs;

        let calendar = two_weekdays();
        let employees = vec![employee(Qualification::Hf)];
        let absences = AbsenceMap::new();
        let mut vars = VariableSet::build(&employees, &calendar, &absences);

        let mut hard = Vec::new();
        late_to_early_transition(&vars, &employees, &calendar, &mut hard);
        assert_eq!(hard.len(), 2, "two separate transition constraints expected");

        let today = calendar.days[0].date;
        let tomorrow = calendar.days[1].date;
        let vs_today = vars.x[&(employees[0].id, today, ShiftCode::VsDienst)];
        let c_tomorrow = vars.x[&(employees[0].id, tomorrow, ShiftCode::CDienst)];

        let (problem, _) = vars.into_parts();
        let mut model = problem.minimise(Expression::from(0.0)).using(highs);
        for c in hard {
            model = model.with(c);
        }
        model = model.with(constraint!(vs_today == 1));
        model = model.with(constraint!(c_tomorrow == 1));

        assert!(
            model.solve().is_ok(),
            "VS Dienst today must permit C Dienst tomorrow"
        );
    }

    /// A `VS Dienst` today must still forbid `B Dienst` tomorrow.
    #[test]
    fn vs_dienst_today_forbids_b_dienst_tomorrow() {
        use good_lp::{constraint, SolverModel};
        use good_lp::solvers::highs::highs;

        let calendar = two_weekdays();
        let employees = vec![employee(Qualification::Hf)];
        let absences = AbsenceMap::new();
        let mut vars = VariableSet::build(&employees, &calendar, &absences);

        let mut hard = Vec::new();
        late_to_early_transition(&vars, &employees, &calendar, &mut hard);

        let today = calendar.days[0].date;
        let tomorrow = calendar.days[1].date;
        let vs_today = vars.x[&(employees[0].id, today, ShiftCode::VsDienst)];
        let b_tomorrow = vars.x[&(employees[0].id, tomorrow, ShiftCode::BDienst)];

        let (problem, _) = vars.into_parts();
        let mut model = problem.minimise(Expression::from(0.0)).using(highs);
        for c in hard {
            model = model.with(c);
        }
        model = model.with(constraint!(vs_today == 1));
        model = model.with(constraint!(b_tomorrow == 1));

        assert!(
            model.solve().is_err(),
            "VS Dienst today must still forbid B Dienst tomorrow"
        );
    }

    #[test]
    fn non_fach_band_adds_lower_bound_shortfall_not_upper_cap() {
        let calendar = two_weekdays();
        let employees = vec![employee(Qualification::Ausbildung1)];
        let absences = AbsenceMap::new();
        let mut vars = VariableSet::build(&employees, &calendar, &absences);
        let mut soft = SoftTerms::default();
        let mut hard = Vec::new();

        non_fach_band(&mut vars, &employees, &calendar, &mut soft, &mut hard);

        assert_eq!(soft.non_fach_band_shortfall.len(), calendar.days.len());
        assert_eq!(hard.len(), calendar.days.len());
    }

    #[test]
    fn split_shift_daily_cap_counts_only_bs_and_c4() {
        let calendar = two_weekdays();
        let employees = vec![employee(Qualification::Ph)];
        let absences = AbsenceMap::new();
        let vars = VariableSet::build(&employees, &calendar, &absences);
        let mut hard = Vec::new();

        split_shift_daily_cap(&vars, &employees, &calendar, &mut hard);

        assert_eq!(hard.len(), calendar.days.len());
    }
}
