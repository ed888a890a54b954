pub mod absence;
pub mod calendar;
pub mod constraints;
pub mod entities;
pub mod extractor;
pub mod invariants;
pub mod objective;
pub mod repositories;
pub mod roster_generator;
pub mod solver;
pub mod variables;
