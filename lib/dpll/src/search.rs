//! DPLL search.
//!
//! Backtracking with unit propagation and a single pure-literal pass per node.
//! There is no clause learning and no restarts, so the running time is
//! exponential in the worst case.
//!
//! The search tree is walked with an explicit stack of pending `false`
//! branches instead of recursion, so deep instances do not exhaust the thread
//! stack. A pending branch keeps only the assignment of its parent node: the
//! parent formula is `simplify(cnf, assignment)` and is rebuilt on backtrack.

use tracing::{debug, trace};

use sat_oracle_core::cnf::clause::Clause;
use sat_oracle_core::cnf::Cnf;

use crate::assignment::Assignment;
use crate::options::Options;
use crate::propagate::{pure_literal_eliminate, unit_propagate, Propagation};
use crate::simplify::{has_empty_clause, simplify, Formula};

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SearchResult {
    /// Satisfying partial assignment: every clause is satisfied by an assigned literal.
    Sat(Assignment),
    Unsat,
    /// The decision budget ran out before the search could decide.
    Unknown,
}

/// Classification of a search node by its simplified formula.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum NodeState {
    Undetermined,
    Satisfied,
    Conflict,
}

impl NodeState {
    pub fn of(formula: &[Clause]) -> Self {
        if formula.is_empty() {
            NodeState::Satisfied
        } else if has_empty_clause(formula) {
            NodeState::Conflict
        } else {
            NodeState::Undetermined
        }
    }
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct SearchStats {
    pub decisions: usize,
    pub propagations: usize,
    pub pure_literals: usize,
    pub conflicts: usize,
}

/// Branching variable: the smallest variable index still occurring in `formula`.
pub fn choose_variable(formula: &[Clause]) -> Option<u32> {
    formula.iter().flat_map(|clause| clause.iter()).map(|lit| lit.var()).min()
}

#[derive(Debug)]
pub struct Search {
    options: Options,
    stats: SearchStats,
}

impl Search {
    pub fn new(options: Options) -> Self {
        Self {
            options,
            stats: SearchStats::default(),
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Run DPLL on a private copy of `cnf`, starting from the all-unassigned assignment.
    pub fn run(&mut self, cnf: &Cnf) -> SearchResult {
        let mut pending: Vec<Branch> = Vec::new();
        let mut node = Some((cnf.clauses.clone(), Assignment::new(cnf.num_vars()), 0));

        loop {
            while let Some((formula, assignment, level)) = node.take() {
                match self.visit(formula, assignment, level) {
                    Step::Satisfied(assignment) => return SearchResult::Sat(assignment),
                    Step::Conflict => {}
                    Step::Branch { formula, assignment, var } => {
                        if self.budget_exhausted() {
                            debug!("decision budget exhausted at level {}", level);
                            return SearchResult::Unknown;
                        }
                        pending.push(Branch {
                            assignment: assignment.clone(),
                            var,
                            level,
                        });
                        node = Some(self.decide(&formula, assignment, var, true, level));
                    }
                }
            }

            let Some(Branch { assignment, var, level }) = pending.pop() else {
                return SearchResult::Unsat;
            };
            if self.budget_exhausted() {
                debug!("decision budget exhausted at level {}", level);
                return SearchResult::Unknown;
            }
            node = Some(self.decide(&cnf.clauses, assignment, var, false, level));
        }
    }

    fn budget_exhausted(&self) -> bool {
        matches!(self.options.max_decisions, Some(max) if self.stats.decisions >= max)
    }

    /// Fix `var = value` on top of `assignment` and build the child node.
    fn decide(
        &mut self,
        formula: &[Clause],
        mut assignment: Assignment,
        var: u32,
        value: bool,
        level: usize,
    ) -> (Formula, Assignment, usize) {
        self.stats.decisions += 1;
        debug!("level {}: branch x{} = {}", level, var, value);
        assignment.assign_var(var, value);
        let simplified = simplify(formula, &assignment);
        (simplified, assignment, level + 1)
    }

    /// Classify, propagate and pick a branching variable for one node.
    fn visit(&mut self, mut formula: Formula, mut assignment: Assignment, level: usize) -> Step {
        match NodeState::of(&formula) {
            NodeState::Satisfied => return Step::Satisfied(assignment),
            NodeState::Conflict => {
                trace!("conflict at level {}", level);
                self.stats.conflicts += 1;
                return Step::Conflict;
            }
            NodeState::Undetermined => {}
        }

        match unit_propagate(&mut formula, &mut assignment) {
            Propagation::Conflict => {
                trace!("propagation conflict at level {}", level);
                self.stats.conflicts += 1;
                return Step::Conflict;
            }
            Propagation::Fixpoint(n) => self.stats.propagations += n,
        }

        if self.options.pure_literal && pure_literal_eliminate(&mut formula, &mut assignment).is_some() {
            self.stats.pure_literals += 1;
        }

        match choose_variable(&formula) {
            Some(var) => Step::Branch { formula, assignment, var },
            None => Step::Satisfied(assignment),
        }
    }
}

/// Outcome of visiting a single node.
enum Step {
    Satisfied(Assignment),
    Conflict,
    Branch {
        formula: Formula,
        assignment: Assignment,
        var: u32,
    },
}

/// The `false` branch of a node whose `true` branch is being explored.
struct Branch {
    assignment: Assignment,
    var: u32,
    level: usize,
}
