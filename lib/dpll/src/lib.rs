pub mod solver;

pub mod assignment;
pub mod instance;
pub mod lbool;
pub mod options;
pub mod propagate;
pub mod search;
pub mod simplify;
pub mod utils;
