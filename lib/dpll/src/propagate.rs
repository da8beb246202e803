use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use tracing::{debug, trace};

use sat_oracle_core::cnf::clause::Clause;
use sat_oracle_core::lit::Lit;

use crate::assignment::Assignment;
use crate::simplify::{has_empty_clause, simplify, Formula};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Propagation {
    /// No unit clauses are left. Carries the number of literals fixed.
    Fixpoint(usize),
    /// An empty clause appeared.
    Conflict,
}

/// Unit propagation to a fixed point.
///
/// Repeatedly takes the first unit clause, fixes its literal to true and
/// simplifies the formula, until no unit clause remains or an empty clause
/// shows up.
pub fn unit_propagate(formula: &mut Formula, assignment: &mut Assignment) -> Propagation {
    let mut propagated = 0;
    while let Some(lit) = formula.iter().find_map(Clause::as_unit) {
        trace!("unit {}", lit);
        assignment.satisfy(lit);
        *formula = simplify(formula, assignment);
        propagated += 1;
        if has_empty_clause(formula) {
            debug!("conflict after propagating {}", lit);
            return Propagation::Conflict;
        }
    }
    if has_empty_clause(formula) {
        Propagation::Conflict
    } else {
        Propagation::Fixpoint(propagated)
    }
}

/// Pure literal of the lowest variable occurring in `formula`, if any.
pub fn find_pure_literal(formula: &[Clause]) -> Option<Lit> {
    // {var: Some(lit) while all occurrences agree, None once both polarities were seen}
    let mut occurrences: BTreeMap<u32, Option<Lit>> = BTreeMap::new();
    for &lit in formula.iter().flat_map(|clause| clause.iter()) {
        match occurrences.entry(lit.var()) {
            Entry::Vacant(e) => {
                e.insert(Some(lit));
            }
            Entry::Occupied(mut e) => {
                if *e.get() != Some(lit) {
                    e.insert(None);
                }
            }
        }
    }
    occurrences.into_values().flatten().next()
}

/// Fix at most one pure literal and simplify.
///
/// Returns the literal that was fixed. Does not iterate to a fixed point.
pub fn pure_literal_eliminate(formula: &mut Formula, assignment: &mut Assignment) -> Option<Lit> {
    let lit = find_pure_literal(formula)?;
    debug!("pure literal {}", lit);
    assignment.satisfy(lit);
    *formula = simplify(formula, assignment);
    Some(lit)
}
