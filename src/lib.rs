//! Classical DPLL satisfiability checking for CNF formulas.
//!
//! [`core`] holds the formula types and the generic [`core::solver::Solver`]
//! interface, [`dpll`] the search engine and instance utilities.

pub use sat_oracle_core as core;
pub use sat_oracle_dpll as dpll;
