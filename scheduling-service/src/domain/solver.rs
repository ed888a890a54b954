use std::collections::HashMap;
use std::time::Duration;

use good_lp::solvers::highs::highs;
use good_lp::{Expression, ResolutionError, Solution, SolverModel};
use shared::error::InfeasibilityReport;
use shared::{DomainError, DomainResult};

use crate::domain::constraints::CompiledConstraints;
use crate::domain::variables::{SolvedVariables, VariableSet};

/// Default wall-clock budget for one solve, used when no explicit
/// time limit is configured. The solver backend is expected to return
/// its best incumbent (or confirm infeasibility) within this window
/// rather than run unbounded.
pub const DEFAULT_SOLVE_TIME_LIMIT: Duration = Duration::from_secs(60);

/// Abstraction over the MIP backend, so the roster generator and its
/// tests do not depend on HiGHS being linked in.
pub trait Solver: Send + Sync {
    fn solve(
        &self,
        vars: VariableSet,
        objective: Expression,
        constraints: CompiledConstraints,
    ) -> DomainResult<(Box<dyn Solution>, SolvedVariables, CompiledConstraints)>;
}

/// HiGHS-backed MIP solver, the production implementation.
pub struct HighsSolver {
    time_limit: Duration,
}

impl HighsSolver {
    pub fn new(time_limit: Duration) -> Self {
        Self { time_limit }
    }
}

impl Default for HighsSolver {
    fn default() -> Self {
        Self::new(DEFAULT_SOLVE_TIME_LIMIT)
    }
}

impl Solver for HighsSolver {
    fn solve(
        &self,
        vars: VariableSet,
        objective: Expression,
        constraints: CompiledConstraints,
    ) -> DomainResult<(Box<dyn Solution>, SolvedVariables, CompiledConstraints)> {
        let (problem, solved_vars) = vars.into_parts();

        let mut model = problem.minimise(objective).using(highs);
        model.set_time_limit(self.time_limit.as_secs_f64());

        for c in constraints.hard.iter().cloned() {
            model = model.with(c);
        }

        match model.solve() {
            Ok(solution) => Ok((Box::new(solution), solved_vars, constraints)),
            Err(ResolutionError::Infeasible) => Err(DomainError::Infeasible(
                infeasibility_report(&solved_vars),
            )),
            Err(ResolutionError::Unbounded) => Err(DomainError::SolverError(
                "solver reported an unbounded problem, which should never happen for a bounded 0/1 formulation".to_string(),
            )),
            Err(ResolutionError::Other(reason)) => {
                if reason.to_lowercase().contains("time") {
                    Err(DomainError::Timeout)
                } else {
                    Err(DomainError::SolverError(reason))
                }
            }
            Err(other) => Err(DomainError::SolverError(other.to_string())),
        }
    }
}

/// Best-effort diagnostics for an infeasible model: per-day variable
/// counts, since HiGHS's open-source tier does not expose an irreducible
/// infeasible subsystem.
fn infeasibility_report(solved_vars: &SolvedVariables) -> InfeasibilityReport {
    let mut qualified_staff_per_day: HashMap<String, u32> = HashMap::new();
    for (_employee_id, date, _shift) in solved_vars.x.keys() {
        *qualified_staff_per_day
            .entry(date.to_string())
            .or_insert(0) += 1;
    }

    InfeasibilityReport {
        qualified_staff_per_day,
        remaining_target_per_employee: HashMap::new(),
        binding_constraints: Vec::new(),
    }
}
