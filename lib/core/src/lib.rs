pub mod cnf;
pub mod error;
pub mod eval;
pub mod lit;
pub mod model;
pub mod solver;
