use sat_oracle::core::cnf::Cnf;
use sat_oracle::dpll::instance::{are_equivalent, generate_random_3sat, generate_random_k_sat};
use sat_oracle::dpll::solver::DpllSolver;

#[test]
fn random_3sat_is_reproducible() -> color_eyre::Result<()> {
    let a = generate_random_k_sat(5, 10, 3, 42)?;
    let b = generate_random_k_sat(5, 10, 3, 42)?;
    assert_eq!(a.clauses, b.clauses);
    assert_eq!(a.num_clauses(), 10);
    assert!(a.is_3sat());
    Ok(())
}

#[test]
fn random_3sat_feeds_the_solver() -> color_eyre::Result<()> {
    let cnf = generate_random_3sat(3, 5, 2024)?;
    let mut solver = DpllSolver::new();
    for clause in cnf.iter() {
        solver.push_clause(clause.clone());
    }
    assert_eq!(solver.num_clauses(), 5);
    assert!(solver.is_3sat());
    assert_eq!(solver.to_display_string(), cnf.to_display_string());
    Ok(())
}

#[test]
fn different_seeds_differ() -> color_eyre::Result<()> {
    let a = generate_random_k_sat(20, 30, 3, 1)?;
    let b = generate_random_k_sat(20, 30, 3, 2)?;
    assert_ne!(a.clauses, b.clauses);
    Ok(())
}

#[test]
fn both_unsat_are_equivalent() -> color_eyre::Result<()> {
    let a = Cnf::try_from_ints([[1], [-1]])?;
    let b = Cnf::try_from_ints([[2], [-2]])?;
    assert!(are_equivalent(&a, &b));
    Ok(())
}

#[test]
fn equivalence_only_compares_satisfiability() -> color_eyre::Result<()> {
    let a = Cnf::try_from_ints([[1, 2, 3]])?;
    let b = Cnf::try_from_ints([[-1], [-2], [-3]])?;
    assert!(are_equivalent(&a, &b));

    let unsat = Cnf::try_from_ints([[1], [-1]])?;
    assert!(!are_equivalent(&a, &unsat));
    assert!(!are_equivalent(&unsat, &b));
    Ok(())
}
