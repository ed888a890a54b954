use std::collections::HashMap;

use chrono::NaiveDate;
use good_lp::Solution;
use shared::ShiftCode;
use uuid::Uuid;

use crate::domain::constraints::CompiledConstraints;
use crate::domain::variables::SolvedVariables;

/// The accepted roster: one shift code per (employee, date) the solver
/// chose to fill, and the slack incurred by every soft constraint.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    pub assignments: HashMap<(Uuid, NaiveDate), ShiftCode>,
    pub slack_report: HashMap<String, f64>,
}

const ROUNDING_THRESHOLD: f64 = 0.5;

/// Reads the solved variable values back into a `Roster`, iterating in
/// the variables' deterministic insertion order so that ties resolved
/// upstream by the objective's tie-break term are reflected faithfully
/// rather than depending on `HashMap` iteration order.
pub fn extract(
    solution: &dyn Solution,
    vars: &SolvedVariables,
    constraints: &CompiledConstraints,
) -> Roster {
    let mut x_entries: Vec<_> = vars.x.iter().collect();
    x_entries.sort_by_key(|(_, &var)| vars.var_index(var));

    let mut assignments = HashMap::new();
    for (&(employee_id, date, shift), &var) in x_entries {
        if solution.value(var) >= ROUNDING_THRESHOLD {
            assignments.insert((employee_id, date), shift);
        }
    }

    let mut y_entries: Vec<_> = vars.y.iter().collect();
    y_entries.sort_by_key(|(_, &var)| vars.var_index(var));
    for (&(employee_id, date), &var) in y_entries {
        if solution.value(var) >= ROUNDING_THRESHOLD {
            assignments.insert((employee_id, date), ShiftCode::BueDienst);
        }
    }

    let slack_report = build_slack_report(solution, constraints);

    Roster {
        assignments,
        slack_report,
    }
}

fn build_slack_report(solution: &dyn Solution, constraints: &CompiledConstraints) -> HashMap<String, f64> {
    let soft = &constraints.soft;
    let mut report = HashMap::new();

    report.insert(
        "early_coverage_shortfall".to_string(),
        sum(solution, &soft.early_coverage_shortfall),
    );
    report.insert(
        "early_fach_shortfall".to_string(),
        sum(solution, &soft.early_fach_shortfall),
    );
    report.insert(
        "non_fach_band_shortfall".to_string(),
        sum(solution, &soft.non_fach_band_shortfall),
    );
    report.insert(
        "b_dienst_shortfall".to_string(),
        sum(solution, &soft.b_dienst_shortfall),
    );
    report.insert(
        "b_dienst_hf_shortfall".to_string(),
        sum(solution, &soft.b_dienst_hf_shortfall),
    );
    report.insert(
        "late_coverage_shortfall".to_string(),
        sum(solution, &soft.late_coverage_shortfall),
    );
    report.insert(
        "late_hf_shortfall".to_string(),
        sum(solution, &soft.late_hf_shortfall),
    );
    report.insert(
        "late_fach_excess".to_string(),
        sum(solution, &soft.late_fach_excess),
    );
    report.insert(
        "consecutive_rest_violation".to_string(),
        sum(solution, &soft.consecutive_rest_violation),
    );
    report.insert(
        "target_workdays_under".to_string(),
        sum(solution, &soft.target_under.values().copied().collect::<Vec<_>>()),
    );
    report.insert(
        "target_workdays_over".to_string(),
        sum(solution, &soft.target_over.values().copied().collect::<Vec<_>>()),
    );

    report
}

fn sum(solution: &dyn Solution, vars: &[good_lp::Variable]) -> f64 {
    vars.iter().map(|&v| solution.value(v)).sum()
}
