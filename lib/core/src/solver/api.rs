use std::borrow::Cow;

use crate::error::Result;
use crate::lit::Lit;

use super::types::*;

// Note: `Solver` trait is NOT object-safe.
// const _: Option<&dyn Solver> = None; // doesn't compile, see `rustc --explain E0038`

pub trait Solver: Sized {
    /// Return the signature of the solver as a `Cow<str>`.
    fn signature(&self) -> Cow<str>;

    /// Drop all clauses and any cached result, returning the solver to its initial state.
    fn reset(&mut self);

    /// Return the number of variables in the solver.
    fn num_vars(&self) -> usize;

    /// Return the number of clauses in the solver.
    fn num_clauses(&self) -> usize;

    /// Add a clause to the solver.
    /// The clause is represented by an iterator of DIMACS literals.
    ///
    /// Fails without modifying the solver if any literal is zero.
    fn add_clause<I>(&mut self, lits: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<i32>;

    /// Add a clause to the solver.
    /// The clause is represented by a slice of literals.
    fn add_clause_<L>(&mut self, lits: &[L]) -> Result<()>
    where
        L: Into<i32> + Copy,
    {
        self.add_clause(lits.iter().copied())
    }

    /// Add a unit clause to the solver.
    fn add_unit<L>(&mut self, lit: L) -> Result<()>
    where
        L: Into<i32>,
    {
        self.add_clause([lit.into()])
    }

    /// Solve the problem given to the solver and return the result as a [SolveResponse].
    fn solve(&mut self) -> SolveResponse;

    /// Return the value of the given literal in the last found model,
    /// or [LitValue::DontCare] if there is none.
    fn value(&self, lit: Lit) -> LitValue;
}
