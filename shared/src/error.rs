use std::collections::HashMap;
use thiserror::Error;

/// Diagnostic bundle attached to `DomainError::Infeasible`.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct InfeasibilityReport {
    /// Per-day count of qualified staff available (not absent).
    pub qualified_staff_per_day: HashMap<String, u32>,
    /// Per-employee remaining target workdays at the time of failure.
    pub remaining_target_per_employee: HashMap<String, i32>,
    /// Identity of the binding hard constraints, when the solver backend
    /// can compute an irreducible infeasible subsystem.
    pub binding_constraints: Vec<String>,
}

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    /// No assignment satisfies the hard constraints.
    #[error("No feasible roster exists for the given inputs")]
    Infeasible(InfeasibilityReport),

    /// The solver exceeded its wall-clock limit without a feasible
    /// incumbent.
    #[error("Solver exceeded its time limit without finding a feasible roster")]
    Timeout,

    /// Backend failure (license, internal assertion). Fatal, surfaced to
    /// the caller as-is.
    #[error("Solver backend error: {0}")]
    SolverError(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
