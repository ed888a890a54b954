use std::collections::HashMap;

use chrono::NaiveDate;
use good_lp::{variable, ProblemVariables, Variable};
use shared::{Qualification, ShiftCode};
use uuid::Uuid;

use crate::domain::absence::AbsenceMap;
use crate::domain::calendar::Calendar;
use crate::domain::repositories::EmployeeInfo;

/// The full decision-variable set for one roster run: `x[e,d,s]` (is
/// employee `e` on shift `s` on day `d`) and `y[e,d]` (is Leitung `e` on
/// office duty on day `d`). Variables are never created for a day an
/// employee is absent, or for a shift/day combination a hard rule would
/// reject outright (Leitung/apprentice weekend work, Leitung/apprentice
/// weekday shift-code restrictions, split shifts for non-PH/HF staff) —
/// omission is cheaper and just as sound as an extra `== 0` constraint.
pub struct VariableSet {
    pub problem: ProblemVariables,
    pub x: HashMap<(Uuid, NaiveDate, ShiftCode), Variable>,
    pub y: HashMap<(Uuid, NaiveDate), Variable>,
    index: HashMap<Variable, usize>,
    next_index: usize,
}

impl VariableSet {
    pub fn build(employees: &[EmployeeInfo], calendar: &Calendar, absences: &AbsenceMap) -> Self {
        let mut set = VariableSet {
            problem: ProblemVariables::new(),
            x: HashMap::new(),
            y: HashMap::new(),
            index: HashMap::new(),
            next_index: 0,
        };

        for employee in employees {
            let employee_absences = absences.get(&employee.id);
            for day in &calendar.days {
                if employee_absences.is_some_and(|m| m.contains_key(&day.date)) {
                    continue;
                }

                let is_weekday = !day.is_weekend;
                let restricted_to_weekday = employee.qualification == Qualification::Leitung
                    || employee.qualification.is_apprentice();

                if employee.qualification == Qualification::Leitung && is_weekday {
                    set.insert_y(employee.id, day.date);
                }

                if restricted_to_weekday && !is_weekday {
                    continue;
                }

                for shift in ShiftCode::ASSIGNABLE {
                    if matches!(shift, ShiftCode::BsDienst | ShiftCode::C4Dienst)
                        && !matches!(employee.qualification, Qualification::Ph | Qualification::Hf)
                    {
                        continue;
                    }
                    if employee.qualification == Qualification::Leitung && shift != ShiftCode::BDienst {
                        continue;
                    }
                    if employee.qualification.is_apprentice()
                        && !matches!(shift, ShiftCode::BDienst | ShiftCode::CDienst)
                    {
                        continue;
                    }
                    set.insert_x(employee.id, day.date, shift);
                }
            }
        }

        set
    }

    fn insert_x(&mut self, employee_id: Uuid, date: NaiveDate, shift: ShiftCode) {
        let var = self.problem.add(variable().binary());
        self.index.insert(var, self.next_index);
        self.next_index += 1;
        self.x.insert((employee_id, date, shift), var);
    }

    fn insert_y(&mut self, employee_id: Uuid, date: NaiveDate) {
        let var = self.problem.add(variable().binary());
        self.index.insert(var, self.next_index);
        self.next_index += 1;
        self.y.insert((employee_id, date), var);
    }

    /// Allocates a fresh auxiliary binary variable (weekend/rest
    /// indicator) and registers it for deterministic ordering just like a
    /// decision variable.
    pub fn add_binary(&mut self) -> Variable {
        let var = self.problem.add(variable().binary());
        self.index.insert(var, self.next_index);
        self.next_index += 1;
        var
    }

    /// Allocates a fresh non-negative continuous slack variable (used by
    /// the soft constraints to absorb shortfall/excess) bounded above by
    /// `upper_bound`.
    pub fn add_slack(&mut self, upper_bound: f64) -> Variable {
        let var = self.problem.add(variable().min(0.0).max(upper_bound));
        self.index.insert(var, self.next_index);
        self.next_index += 1;
        var
    }

    /// Deterministic insertion-order index, used for the objective's
    /// symmetry-breaking tie-break term and by the extractor to read
    /// solved values back in a stable order.
    pub fn var_index(&self, var: Variable) -> usize {
        self.index[&var]
    }

    pub fn x_on_day(&self, employee_id: Uuid, date: NaiveDate) -> Vec<Variable> {
        ShiftCode::ASSIGNABLE
            .iter()
            .filter_map(|shift| self.x.get(&(employee_id, date, *shift)).copied())
            .collect()
    }

    /// Splits off the `good_lp` problem builder (consumed by the solver)
    /// from the lookup tables the extractor and invariant checks need
    /// after a solve. `Variable` handles stay valid independent of the
    /// `ProblemVariables` they were allocated from.
    pub fn into_parts(self) -> (ProblemVariables, SolvedVariables) {
        let VariableSet { problem, x, y, index, .. } = self;
        (problem, SolvedVariables { x, y, index })
    }
}

/// What remains of a `VariableSet` once its `ProblemVariables` has been
/// handed to the solver: the lookup tables needed to read a solution
/// back out.
pub struct SolvedVariables {
    pub x: HashMap<(Uuid, NaiveDate, ShiftCode), Variable>,
    pub y: HashMap<(Uuid, NaiveDate), Variable>,
    index: HashMap<Variable, usize>,
}

impl SolvedVariables {
    pub fn var_index(&self, var: Variable) -> usize {
        self.index[&var]
    }

    pub fn x_on_day(&self, employee_id: Uuid, date: NaiveDate) -> Vec<Variable> {
        ShiftCode::ASSIGNABLE
            .iter()
            .filter_map(|shift| self.x.get(&(employee_id, date, *shift)).copied())
            .collect()
    }
}
