//! Random instances and a cheap equivalence check, mostly for testing.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use snafu::{ensure, OptionExt};
use tracing::debug;

use sat_oracle_core::cnf::clause::Clause;
use sat_oracle_core::cnf::Cnf;
use sat_oracle_core::error::{InvalidInstanceSnafu, Result};
use sat_oracle_core::lit::Lit;

use crate::solver::DpllSolver;

/// Random k-SAT formula with `num_clauses` clauses of exactly `k` literals each.
///
/// Every literal draws its variable uniformly from `1..=num_vars` and its
/// polarity uniformly, independently of all other literals. Repeated variables
/// and tautologies are kept. The same `seed` always gives the same formula.
pub fn generate_random_k_sat(num_vars: usize, num_clauses: usize, k: usize, seed: u64) -> Result<Cnf> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_random_k_sat_with(&mut rng, num_vars, num_clauses, k)
}

pub fn generate_random_3sat(num_vars: usize, num_clauses: usize, seed: u64) -> Result<Cnf> {
    generate_random_k_sat(num_vars, num_clauses, 3, seed)
}

/// Same as [`generate_random_k_sat`], drawing from the given `rng`.
pub fn generate_random_k_sat_with<R>(rng: &mut R, num_vars: usize, num_clauses: usize, k: usize) -> Result<Cnf>
where
    R: Rng,
{
    ensure!(
        num_vars > 0 || num_clauses == 0 || k == 0,
        InvalidInstanceSnafu { num_vars, k }
    );
    let max_var = u32::try_from(num_vars)
        .ok()
        .filter(|&v| v <= i32::MAX as u32)
        .context(InvalidInstanceSnafu { num_vars, k })?;
    debug!("Generating random {}-SAT with {} vars and {} clauses", k, num_vars, num_clauses);

    let mut cnf = Cnf::new();
    for _ in 0..num_clauses {
        let mut lits = Vec::with_capacity(k);
        for _ in 0..k {
            let var = rng.gen_range(1..=max_var);
            let negated = rng.gen_bool(0.5);
            lits.push(Lit::from_var(var, negated)?);
        }
        cnf.add_clause(Clause::new(lits));
    }
    Ok(cnf)
}

/// Best-effort equivalence check.
///
/// Returns `true` when both formulas are unsatisfiable or both are satisfiable.
/// This only compares satisfiability: two satisfiable formulas with different
/// sets of models are reported as equivalent.
pub fn are_equivalent(lhs: &Cnf, rhs: &Cnf) -> bool {
    let lhs_sat = DpllSolver::from(lhs.clone()).is_satisfiable();
    let rhs_sat = DpllSolver::from(rhs.clone()).is_satisfiable();
    debug!("are_equivalent: lhs sat = {}, rhs sat = {}", lhs_sat, rhs_sat);
    lhs_sat == rhs_sat
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use test_log::test;

    use sat_oracle_core::error::SolverError;

    use super::*;

    #[test]
    fn test_random_shape() -> Result<()> {
        let cnf = generate_random_k_sat(5, 10, 3, 42)?;
        assert_eq!(cnf.num_clauses(), 10);
        assert!(cnf.is_3sat());
        assert!(cnf.num_vars() <= 5);
        assert!(cnf.iter().flat_map(|c| c.iter()).all(|lit| (1..=5).contains(&lit.var())));
        Ok(())
    }

    #[test]
    fn test_random_is_seeded() -> Result<()> {
        let a = generate_random_k_sat(5, 10, 3, 42)?;
        let b = generate_random_k_sat(5, 10, 3, 42)?;
        assert_eq!(a, b);

        let c = generate_random_3sat(5, 10, 42)?;
        assert_eq!(a, c);
        Ok(())
    }

    #[test]
    fn test_random_other_k() -> Result<()> {
        let cnf = generate_random_k_sat(4, 7, 2, 1)?;
        assert!(cnf.is_k_sat(2));
        assert_eq!(generate_random_k_sat(4, 7, 0, 1)?.iter().map(|c| c.len()).collect_vec(), vec![0; 7]);
        Ok(())
    }

    #[test]
    fn test_random_no_vars() -> Result<()> {
        assert!(generate_random_k_sat(0, 0, 3, 7)?.is_empty());
        let res = generate_random_k_sat(0, 3, 3, 7);
        assert!(matches!(res, Err(SolverError::InvalidInstance { num_vars: 0, k: 3 })));
        Ok(())
    }

    #[test]
    fn test_equivalent_both_unsat() -> Result<()> {
        let a = Cnf::try_from_ints([[1], [-1]])?;
        let b = Cnf::try_from_ints([[2], [-2]])?;
        assert!(are_equivalent(&a, &b));
        Ok(())
    }

    #[test]
    fn test_equivalent_is_approximate() -> Result<()> {
        // x1 and NOT x1 have disjoint models, but both are satisfiable.
        let a = Cnf::try_from_ints([[1]])?;
        let b = Cnf::try_from_ints([[-1]])?;
        assert!(are_equivalent(&a, &b));

        let unsat = Cnf::try_from_ints([[1], [-1]])?;
        assert!(!are_equivalent(&a, &unsat));
        assert!(are_equivalent(&Cnf::new(), &a));
        Ok(())
    }
}
