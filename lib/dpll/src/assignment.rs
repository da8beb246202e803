use std::ops::Index;

use sat_oracle_core::lit::Lit;
use sat_oracle_core::model::Model;

use crate::lbool::LBool;

/// Partial assignment used during search.
///
/// Indexed by variable (1-based); slot `0` is reserved and stays [`LBool::Undef`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Assignment {
    values: Vec<LBool>, // {var: value}
}

impl Assignment {
    /// All-unassigned assignment over variables `1..=num_vars`.
    pub fn new(num_vars: usize) -> Self {
        Self {
            values: vec![LBool::Undef; num_vars + 1],
        }
    }

    pub fn num_vars(&self) -> usize {
        self.values.len() - 1
    }

    pub fn num_assigned(&self) -> usize {
        self.values.iter().filter(|v| !v.is_undef()).count()
    }
}

// assignment[var]
impl Index<u32> for Assignment {
    type Output = LBool;

    fn index(&self, var: u32) -> &Self::Output {
        &self.values[var as usize]
    }
}

impl Assignment {
    pub fn value_var(&self, var: u32) -> LBool {
        self.values[var as usize]
    }

    /// Value of `lit`: [`LBool::True`] if it is satisfied, [`LBool::False`] if falsified.
    pub fn value(&self, lit: Lit) -> LBool {
        self.value_var(lit.var()) ^ lit.is_negated()
    }

    pub fn assign_var(&mut self, var: u32, value: bool) {
        debug_assert!(var != 0, "variable 0 is reserved");
        self.values[var as usize] = LBool::from(value);
    }

    /// Fix the variable of `lit` so that `lit` becomes true.
    pub fn satisfy(&mut self, lit: Lit) {
        self.assign_var(lit.var(), !lit.is_negated());
    }

    /// Complete the assignment into a total [`Model`], giving unassigned variables `default`.
    pub fn to_model(&self, default: bool) -> Model {
        Model::from_values(self.values[1..].iter().map(|v| v.to_option().unwrap_or(default)))
    }
}
