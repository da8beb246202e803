use std::borrow::Cow;
use std::fmt::{Display, Formatter};
use std::time::Duration;

use tracing::info;

use sat_oracle_core::cnf::clause::Clause;
use sat_oracle_core::cnf::Cnf;
use sat_oracle_core::error::Result;
use sat_oracle_core::lit::Lit;
use sat_oracle_core::model::Model;
use sat_oracle_core::solver::{LitValue, SolveResponse, Solver};

use crate::options::Options;
use crate::search::{Search, SearchResult, SearchStats};
use crate::utils::measure_time;

/// Result of the last satisfiability query for the currently stored formula.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Cache {
    Unknown,
    Satisfiable(Model),
    Unsatisfiable,
}

/// DPLL solver over an append-only clause store.
///
/// Every query re-runs the search on a private copy of the stored formula, so
/// results always refer to the clauses currently held. Adding a clause or
/// clearing the solver invalidates the cached model.
#[derive(Debug)]
pub struct DpllSolver {
    cnf: Cnf,
    options: Options,
    cache: Cache,
    stats: SearchStats,
    pub time_search: Duration,
}

impl DpllSolver {
    pub fn new() -> Self {
        Self::new_custom(Options::default())
    }

    pub fn new_custom(options: Options) -> Self {
        Self {
            cnf: Cnf::new(),
            options,
            cache: Cache::Unknown,
            stats: SearchStats::default(),
            time_search: Duration::ZERO,
        }
    }

    /// Create a solver holding the given DIMACS clauses.
    pub fn from_clauses<I, C>(clauses: I) -> Result<Self>
    where
        I: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<i32>,
    {
        Ok(Self::from(Cnf::try_from_ints(clauses)?))
    }
}

impl Default for DpllSolver {
    fn default() -> Self {
        DpllSolver::new()
    }
}

impl From<Cnf> for DpllSolver {
    fn from(cnf: Cnf) -> Self {
        let mut solver = DpllSolver::new();
        solver.cnf = cnf;
        solver
    }
}

impl Display for DpllSolver {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({} clauses, {} variables)",
            tynm::type_name::<Self>(),
            self.num_clauses(),
            self.num_variables()
        )
    }
}

impl DpllSolver {
    pub fn cnf(&self) -> &Cnf {
        &self.cnf
    }
    pub fn options(&self) -> &Options {
        &self.options
    }
    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    pub fn num_variables(&self) -> usize {
        self.cnf.num_vars()
    }
    pub fn num_clauses(&self) -> usize {
        self.cnf.num_clauses()
    }
    pub fn num_decisions(&self) -> usize {
        self.stats.decisions
    }
    pub fn num_propagations(&self) -> usize {
        self.stats.propagations
    }
    pub fn num_pure_literals(&self) -> usize {
        self.stats.pure_literals
    }
    pub fn num_conflicts(&self) -> usize {
        self.stats.conflicts
    }

    pub fn is_k_sat(&self, k: usize) -> bool {
        self.cnf.is_k_sat(k)
    }
    pub fn is_3sat(&self) -> bool {
        self.cnf.is_3sat()
    }

    pub fn to_display_string(&self) -> String {
        self.cnf.to_display_string()
    }

    /// Append an already validated clause.
    pub fn push_clause(&mut self, clause: Clause) {
        self.cnf.add_clause(clause);
        self.cache = Cache::Unknown;
    }

    pub fn clear(&mut self) {
        self.cnf.clear();
        self.cache = Cache::Unknown;
    }

    /// Whether the stored formula is satisfiable.
    ///
    /// With a decision budget configured an exhausted search also yields `false`;
    /// use [`Solver::solve`] to tell it apart from a proof of unsatisfiability.
    pub fn is_satisfiable(&mut self) -> bool {
        matches!(self.solve(), SolveResponse::Sat)
    }

    /// Model of the stored formula, total over `1..=num_variables()`.
    ///
    /// Served from the cache when it is valid, otherwise computed on demand.
    pub fn satisfying_assignment(&mut self) -> Option<&Model> {
        if matches!(self.cache, Cache::Unknown) {
            self.solve();
        }
        match &self.cache {
            Cache::Satisfiable(model) => Some(model),
            _ => None,
        }
    }
}

impl Solver for DpllSolver {
    fn signature(&self) -> Cow<str> {
        "dpll".into()
    }

    fn reset(&mut self) {
        self.clear();
    }

    fn num_vars(&self) -> usize {
        self.num_variables()
    }
    fn num_clauses(&self) -> usize {
        self.cnf.num_clauses()
    }

    fn add_clause<I>(&mut self, lits: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<i32>,
    {
        let clause = Clause::try_from_ints(lits)?;
        self.push_clause(clause);
        Ok(())
    }

    fn solve(&mut self) -> SolveResponse {
        info!(
            "DpllSolver::solve() on {} clauses over {} variables",
            self.num_clauses(),
            self.num_variables()
        );
        self.cache = Cache::Unknown;

        let mut search = Search::new(self.options);
        let (time_search, result) = measure_time(|| search.run(&self.cnf));
        self.time_search += time_search;
        self.stats = search.stats();

        let response = match result {
            SearchResult::Sat(assignment) => {
                let model = assignment.to_model(self.options.default_polarity);
                debug_assert!(model.satisfies(&self.cnf), "search returned a non-model");
                self.cache = Cache::Satisfiable(model);
                SolveResponse::Sat
            }
            SearchResult::Unsat => {
                self.cache = Cache::Unsatisfiable;
                SolveResponse::Unsat
            }
            SearchResult::Unknown => SolveResponse::Unknown,
        };
        info!(
            "DpllSolver::solve() -> {} ({} decisions, {} conflicts) in {:?}",
            response, self.stats.decisions, self.stats.conflicts, time_search
        );
        response
    }

    fn value(&self, lit: Lit) -> LitValue {
        match &self.cache {
            Cache::Satisfiable(model) => match model.get(lit.var()) {
                Some(value) => LitValue::from(value ^ lit.is_negated()),
                None => LitValue::DontCare,
            },
            _ => LitValue::DontCare,
        }
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use crate::options::DEFAULT_OPTIONS;

    use super::*;

    #[test]
    fn test_new_solver_is_empty() {
        let solver = DpllSolver::new();
        assert_eq!(solver.num_variables(), 0);
        assert_eq!(solver.num_clauses(), 0);
        assert_eq!(solver.cache(), &Cache::Unknown);
    }

    #[test]
    fn test_add_clause() -> Result<()> {
        let mut solver = DpllSolver::new();
        solver.add_clause([1, 2, 3])?;
        solver.add_clause(vec![-1, 2, -3])?;
        assert_eq!(solver.num_clauses(), 2);
        assert_eq!(solver.num_variables(), 3);
        assert!(solver.is_3sat());
        Ok(())
    }

    #[test]
    fn test_zero_literal_leaves_solver_untouched() -> Result<()> {
        let mut solver = DpllSolver::new();
        solver.add_clause([1, 2])?;
        assert!(solver.is_satisfiable());
        assert!(solver.add_clause([3, 0, 4]).is_err());
        assert_eq!(solver.num_clauses(), 1);
        assert_eq!(solver.num_variables(), 2);
        assert!(matches!(solver.cache(), Cache::Satisfiable(_)));
        Ok(())
    }

    #[test]
    fn test_satisfiable_witness() -> Result<()> {
        let mut solver = DpllSolver::from_clauses([[1, 2, 3], [-1, 2, -3]])?;
        assert!(solver.is_satisfiable());
        let model = solver.satisfying_assignment().cloned().expect("model");
        assert_eq!(model.num_vars(), 3);
        assert!(model.satisfies(solver.cnf()));
        assert_eq!(solver.value(Lit::from_i32(2)?), LitValue::from(model[2]));
        assert_eq!(solver.value(Lit::from_i32(-2)?), LitValue::from(!model[2]));
        assert_eq!(solver.value(Lit::from_i32(7)?), LitValue::DontCare);
        Ok(())
    }

    #[test]
    fn test_unsatisfiable() -> Result<()> {
        let mut solver = DpllSolver::from_clauses([[1, 1, 1], [-1, -1, -1]])?;
        assert!(!solver.is_satisfiable());
        assert!(solver.satisfying_assignment().is_none());
        assert_eq!(solver.cache(), &Cache::Unsatisfiable);
        assert_eq!(solver.value(Lit::from_i32(1)?), LitValue::DontCare);
        Ok(())
    }

    #[test]
    fn test_add_clause_invalidates_cache() -> Result<()> {
        let mut solver = DpllSolver::new();
        solver.add_clause([1, 2])?;
        assert!(solver.is_satisfiable());
        solver.add_unit(-1)?;
        assert_eq!(solver.cache(), &Cache::Unknown);
        solver.add_unit(-2)?;
        assert!(solver.satisfying_assignment().is_none());
        Ok(())
    }

    #[test]
    fn test_clear() -> Result<()> {
        let mut solver = DpllSolver::from_clauses([[1], [-1]])?;
        assert!(!solver.is_satisfiable());
        solver.clear();
        assert_eq!(solver.num_variables(), 0);
        assert_eq!(solver.num_clauses(), 0);
        assert!(solver.is_satisfiable());
        assert_eq!(solver.satisfying_assignment().map(|m| m.num_vars()), Some(0));
        Ok(())
    }

    #[test]
    fn test_repeated_queries_agree() -> Result<()> {
        let mut solver = DpllSolver::from_clauses(vec![vec![1, -2, 3], vec![-1, 2], vec![2, -3], vec![-2, -3, 1]])?;
        let first = solver.is_satisfiable();
        let model = solver.satisfying_assignment().cloned();
        assert_eq!(solver.is_satisfiable(), first);
        assert_eq!(solver.satisfying_assignment().cloned(), model);
        Ok(())
    }

    #[test]
    fn test_default_polarity() -> Result<()> {
        // x3 only appears in a clause satisfied by the pure literal x1.
        let options = Options {
            default_polarity: true,
            ..DEFAULT_OPTIONS
        };
        let mut solver = DpllSolver::new_custom(options);
        solver.add_clause([1, 3])?;
        solver.add_clause([1, -3])?;
        assert_eq!(solver.solve(), SolveResponse::Sat);
        assert_eq!(solver.satisfying_assignment().map(|m| m.to_vec()), Some(vec![true, true, true]));
        Ok(())
    }

    #[test]
    fn test_budget_unknown_is_not_cached() -> Result<()> {
        let options = Options {
            max_decisions: Some(0),
            ..DEFAULT_OPTIONS
        };
        let mut solver = DpllSolver::new_custom(options);
        solver.add_clause([1, 2])?;
        solver.add_clause([-1, -2])?;
        solver.add_clause([1, -2])?;
        solver.add_clause([-1, 2])?;
        assert_eq!(solver.solve(), SolveResponse::Unknown);
        assert_eq!(solver.cache(), &Cache::Unknown);
        assert!(!solver.is_satisfiable());
        Ok(())
    }

    #[test]
    fn test_display() -> Result<()> {
        let solver = DpllSolver::from_clauses([[1, 2, 3]])?;
        assert_eq!(solver.to_string(), "DpllSolver(1 clauses, 3 variables)");
        assert_eq!(solver.to_display_string(), "(x1 OR x2 OR x3)");
        assert_eq!(solver.signature(), "dpll");
        Ok(())
    }
}
