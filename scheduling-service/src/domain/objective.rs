use good_lp::Expression;
use shared::ShiftCategory;

use crate::domain::constraints::SoftTerms;
use crate::domain::variables::VariableSet;

/// Per-tier weights for the soft-constraint objective, following the
/// lexicographic priority ladder: qualification composition first, then
/// group coverage, then banding/B-Dienst floors, then target overshoot,
/// consecutive-day violations, target undershoot, extra late-shift Fach,
/// shift-type preference, and finally the tie-break. Tiers are spaced
/// widely enough apart that no combination of lower-tier violations can
/// ever outweigh a single higher-tier one — the weighted sum behaves
/// like the lexicographic ordering it stands in for.
#[derive(Debug, Clone, Copy)]
pub struct PenaltyWeights {
    pub early_fach_floor: f64,
    pub b_dienst_hf: f64,
    pub late_hf_floor: f64,
    pub early_coverage: f64,
    pub late_coverage: f64,
    pub non_fach_band: f64,
    pub b_dienst_coverage: f64,
    pub target_over: f64,
    pub consecutive_rest: f64,
    pub target_under: f64,
    pub late_fach_excess: f64,
    pub early_shift_cost: f64,
    pub late_shift_cost: f64,
    pub split_shift_cost: f64,
    pub tie_break: f64,
}

impl Default for PenaltyWeights {
    fn default() -> Self {
        Self {
            // Tier 1 (5000): qualification composition (S2/S5/S7).
            early_fach_floor: 5000.0,
            b_dienst_hf: 5000.0,
            late_hf_floor: 5000.0,
            // Tier 2 (4000): group coverage (S1/S6).
            early_coverage: 4000.0,
            late_coverage: 4000.0,
            // Tier 3 (3000): non-Fach band, B Dienst floor (S3/S4).
            non_fach_band: 3000.0,
            b_dienst_coverage: 3000.0,
            // Tier 4 (2000): target overshoot (S10-excess).
            target_over: 2000.0,
            // Tier 5 (1000): consecutive-day violations (S9).
            consecutive_rest: 1000.0,
            // Tier 6 (100): target undershoot (S10-under).
            target_under: 100.0,
            // Tier 7 (50): extra late-shift Fach (S8).
            late_fach_excess: 50.0,
            // Tier 8 (1/3/5 per assignment): shift-type preference.
            early_shift_cost: 1.0,
            late_shift_cost: 3.0,
            split_shift_cost: 5.0,
            // Tier 9: deterministic tie-break.
            tie_break: 1e-6,
        }
    }
}

/// Builds the full weighted-sum objective: every soft-constraint slack
/// term at its tier's weight, plus a vanishing tie-break term over every
/// decision and auxiliary variable's deterministic index. The tie-break
/// breaks ties between otherwise-equal-cost solutions in a reproducible
/// way instead of leaving them to solver nondeterminism.
pub fn build(vars: &VariableSet, soft: &SoftTerms, weights: &PenaltyWeights) -> Expression {
    let mut objective = Expression::from(0.0);

    for &v in &soft.early_coverage_shortfall {
        objective += weights.early_coverage * v;
    }
    for &v in &soft.early_fach_shortfall {
        objective += weights.early_fach_floor * v;
    }
    for &v in &soft.non_fach_band_shortfall {
        objective += weights.non_fach_band * v;
    }
    for &v in &soft.b_dienst_shortfall {
        objective += weights.b_dienst_coverage * v;
    }
    for &v in &soft.b_dienst_hf_shortfall {
        objective += weights.b_dienst_hf * v;
    }
    for &v in &soft.late_coverage_shortfall {
        objective += weights.late_coverage * v;
    }
    for &v in &soft.late_hf_shortfall {
        objective += weights.late_hf_floor * v;
    }
    for &v in &soft.late_fach_excess {
        objective += weights.late_fach_excess * v;
    }
    for &v in &soft.consecutive_rest_violation {
        objective += weights.consecutive_rest * v;
    }
    for &v in soft.target_under.values() {
        objective += weights.target_under * v;
    }
    for &v in soft.target_over.values() {
        objective += weights.target_over * v;
    }

    for (&(_, _, shift), &var) in vars.x.iter() {
        let shift_cost = match shift.category() {
            ShiftCategory::Early => weights.early_shift_cost,
            ShiftCategory::Late => weights.late_shift_cost,
            ShiftCategory::Split => weights.split_shift_cost,
            ShiftCategory::Office => 0.0,
        };
        objective += shift_cost * var;
        objective += weights.tie_break * vars.var_index(var) as f64 * var;
    }
    for (&_employee_day, &var) in vars.y.iter() {
        objective += weights.tie_break * vars.var_index(var) as f64 * var;
    }
    for &var in &soft.tie_break_auxiliaries {
        objective += weights.tie_break * vars.var_index(var) as f64 * var;
    }

    objective
}
