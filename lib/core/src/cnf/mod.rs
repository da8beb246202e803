use std::fmt::{Display, Formatter};
use std::slice::Iter;

use log::debug;

use clause::Clause;

use crate::error::Result;

pub mod clause;

/// Conjunction of clauses.
///
/// Append-only except for [`Cnf::clear`]. `max_var` always equals the largest
/// variable index over all clauses added since the last clear.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Cnf {
    pub max_var: usize,
    pub clauses: Vec<Clause>,
}

impl Cnf {
    pub fn iter(&self) -> Iter<'_, Clause> {
        self.clauses.iter()
    }
}

impl Cnf {
    pub fn new() -> Self {
        Self {
            max_var: 0,
            clauses: Vec::new(),
        }
    }

    /// Build a formula from raw DIMACS clauses, rejecting any `0` literal.
    pub fn try_from_ints<I, C>(clauses: I) -> Result<Self>
    where
        I: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<i32>,
    {
        let mut cnf = Self::new();
        for clause in clauses {
            cnf.add_clause(Clause::try_from_ints(clause)?);
        }
        Ok(cnf)
    }
}

impl Default for Cnf {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> From<I> for Cnf
where
    I: IntoIterator,
    I::Item: Into<Clause>,
{
    fn from(iter: I) -> Self {
        let mut cnf = Self::new();
        for clause in iter.into_iter() {
            cnf.add_clause(clause)
        }
        cnf
    }
}

impl<'a> IntoIterator for &'a Cnf {
    type Item = &'a Clause;
    type IntoIter = Iter<'a, Clause>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for Cnf {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                write!(f, " AND ")?;
            }
            write!(f, "{}", clause)?;
        }
        Ok(())
    }
}

impl Cnf {
    pub fn add_clause(&mut self, clause: impl Into<Clause>) {
        let clause = clause.into();
        self.max_var = self.max_var.max(clause.max_var());
        self.clauses.push(clause);
    }

    pub fn clear(&mut self) {
        debug!("Clearing {} clauses over {} variables", self.clauses.len(), self.max_var);
        self.max_var = 0;
        self.clauses.clear();
    }

    pub fn num_vars(&self) -> usize {
        self.max_var
    }

    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Whether every clause has exactly `k` literals.
    ///
    /// Repeated variables and tautologies inside a clause are not checked.
    /// Vacuously true for the empty formula.
    pub fn is_k_sat(&self, k: usize) -> bool {
        self.clauses.iter().all(|clause| clause.len() == k)
    }

    pub fn is_3sat(&self) -> bool {
        self.is_k_sat(3)
    }

    /// Human-readable form, e.g. `(x1 OR NOT x2) AND (x2)`. Not meant to be parsed back.
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}
