use std::fmt::Display;

use sat_oracle::core::cnf::Cnf;
use sat_oracle::core::eval::Eval;
use sat_oracle::core::lit::Lit;
use sat_oracle::core::model::Model;
use sat_oracle::core::solver::*;

/// Every total assignment over `1..=num_vars`, with variable 1 as the lowest bit.
pub fn all_models(num_vars: usize) -> impl Iterator<Item = Model> {
    assert!(num_vars < 32, "too many variables to enumerate: {}", num_vars);
    (0..1u64 << num_vars).map(move |bits| Model::from_values((0..num_vars).map(|i| (bits >> i) & 1 == 1)))
}

/// Reference oracle: a model found by exhaustive enumeration, if any.
pub fn brute_force_model(cnf: &Cnf) -> Option<Model> {
    all_models(cnf.num_vars()).find(|model| cnf.eval(model))
}

pub fn brute_force_satisfiable(cnf: &Cnf) -> bool {
    brute_force_model(cnf).is_some()
}

pub fn run_test_1<S>(mut solver: S) -> color_eyre::Result<()>
where
    S: Solver + Display,
{
    println!("Solver signature: {}", solver.signature());
    println!("solver = {}", solver);

    solver.add_clause([1, 2])?;
    solver.add_clause(vec![3, 4])?;
    solver.add_clause([-1, -2])?;
    solver.add_clause(vec![-3, -4])?;
    solver.add_unit(5)?;
    assert_eq!(solver.num_vars(), 5);
    assert_eq!(solver.num_clauses(), 5);
    let response = solver.solve();
    println!("Solver returned: {:?}", response);
    assert!(matches!(response, SolveResponse::Sat));

    let lits = (1..=5).map(Lit::from_i32).collect::<Result<Vec<_>, _>>()?;
    for &lit in lits.iter() {
        println!("solver.value({}) = {:?}", lit, solver.value(lit));
    }
    assert_eq!(solver.value(lits[4]), LitValue::True);
    assert_ne!(solver.value(lits[0]), solver.value(lits[1]));
    assert_ne!(solver.value(lits[2]), solver.value(lits[3]));

    solver.add_clause_(&[1, 2, 3, 4])?;
    solver.add_clause_(&[-5, 1])?;
    solver.add_clause_(&[-5, 2])?;
    let response = solver.solve();
    println!("Solver returned: {:?}", response);
    assert!(matches!(response, SolveResponse::Unsat));
    assert_eq!(solver.value(lits[0]), LitValue::DontCare);

    solver.reset();
    assert_eq!(solver.num_vars(), 0);
    assert_eq!(solver.num_clauses(), 0);
    let response = solver.solve();
    println!("Solver returned: {:?}", response);
    assert!(matches!(response, SolveResponse::Sat));

    Ok(())
}
