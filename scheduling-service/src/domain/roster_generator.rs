use std::sync::Arc;

use shared::{DomainError, DomainResult};
use uuid::Uuid;

use crate::domain::absence::{self, AbsenceMap};
use crate::domain::calendar::Calendar;
use crate::domain::constraints;
use crate::domain::extractor::{self, Roster};
use crate::domain::invariants::{self, InvariantContext};
use crate::domain::objective::{self, PenaltyWeights};
use crate::domain::repositories::{AbsenceRepo, EmployeeRepo, HolidayProvider};
use crate::domain::solver::Solver;
use crate::domain::variables::VariableSet;

/// Orchestrates the full pipeline — calendar, absence expansion, variable
/// construction, constraint compilation, objective assembly, solve,
/// extraction — into a single accepted roster, or a `DomainError`
/// explaining why none exists.
pub struct RosterGenerator {
    employees: Arc<dyn EmployeeRepo>,
    absences: Arc<dyn AbsenceRepo>,
    holidays: Arc<dyn HolidayProvider>,
    solver: Arc<dyn Solver>,
    weights: PenaltyWeights,
}

impl RosterGenerator {
    pub fn new(
        employees: Arc<dyn EmployeeRepo>,
        absences: Arc<dyn AbsenceRepo>,
        holidays: Arc<dyn HolidayProvider>,
        solver: Arc<dyn Solver>,
    ) -> Self {
        Self {
            employees,
            absences,
            holidays,
            solver,
            weights: PenaltyWeights::default(),
        }
    }

    pub async fn generate(&self, ward_id: Uuid, year: i32, month: i16) -> DomainResult<Roster> {
        if !(1..=12).contains(&month) {
            return Err(DomainError::InvalidInput(format!(
                "month must be between 1 and 12, got {month}"
            )));
        }

        let employees = self.employees.list(ward_id).await?;
        if employees.is_empty() {
            return Err(DomainError::InvalidInput(format!(
                "ward {ward_id} has no assignable employees"
            )));
        }

        let calendar = Calendar::build(year, month, self.holidays.as_ref()).await?;

        let mut absences: AbsenceMap = AbsenceMap::new();
        for employee in &employees {
            let raw = self.absences.raw_strings(employee.id).await?;
            let expanded = absence::expand(employee.id, &raw, year, month);
            absences.insert(employee.id, expanded);
        }

        let mut vars = VariableSet::build(&employees, &calendar, &absences);
        let constraints = constraints::compile(&mut vars, &employees, &calendar, &absences);
        let objective = objective::build(&vars, &constraints.soft, &self.weights);

        let (solution, solved_vars, compiled) = self.solver.solve(vars, objective, constraints)?;
        let roster = extractor::extract(solution.as_ref(), &solved_vars, &compiled);

        let ctx = InvariantContext {
            roster: &roster,
            employees: &employees,
            calendar: &calendar,
            absences: &absences,
        };
        let violations = invariants::check_all(&ctx);
        if !violations.is_empty() {
            tracing::error!(
                ward_id = %ward_id,
                year,
                month,
                violations = ?violations,
                "solver produced a roster that fails post-solve invariants"
            );
            return Err(DomainError::SolverError(format!(
                "accepted roster violates {} invariant(s): {}",
                violations.len(),
                violations.join("; ")
            )));
        }

        Ok(roster)
    }
}
