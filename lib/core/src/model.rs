use std::fmt::{Display, Formatter};
use std::ops::Index;

use crate::cnf::Cnf;
use crate::eval::Eval;
use crate::lit::Lit;

/// Total assignment of truth values to variables `1..=num_vars`.
///
/// Stored 1-indexed: slot `0` is reserved and always `false`.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Model {
    data: Vec<bool>,
}

impl Model {
    /// Model over `num_vars` variables, all set to `value`.
    pub fn filled(num_vars: usize, value: bool) -> Self {
        let mut data = vec![value; num_vars + 1];
        data[0] = false;
        Self { data }
    }

    /// Model from the values of variables `1..=n`, in order.
    pub fn from_values(values: impl IntoIterator<Item = bool>) -> Self {
        let data = std::iter::once(false).chain(values).collect();
        Self { data }
    }
}

impl Model {
    pub fn num_vars(&self) -> usize {
        self.data.len() - 1
    }

    /// Value of `var`, or `None` if the model does not cover it.
    pub fn get(&self, var: u32) -> Option<bool> {
        match var {
            0 => None,
            _ => self.data.get(var as usize).copied(),
        }
    }

    /// Whether `lit` is true. A literal over a variable the model does not
    /// cover is never true, in either polarity.
    pub fn value(&self, lit: Lit) -> bool {
        self.get(lit.var()).map_or(false, |value| value ^ lit.is_negated())
    }

    /// Values of variables `1..=n`, without the reserved slot.
    pub fn to_vec(&self) -> Vec<bool> {
        self.data[1..].to_vec()
    }

    /// Iterate over `(var, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (u32, bool)> + '_ {
        self.data.iter().copied().enumerate().skip(1).map(|(var, value)| (var as u32, value))
    }

    pub fn satisfies(&self, cnf: &Cnf) -> bool {
        cnf.eval(self)
    }
}

// model[var]
impl Index<u32> for Model {
    type Output = bool;

    fn index(&self, var: u32) -> &Self::Output {
        &self.data[var as usize]
    }
}

impl Display for Model {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (var, value) in self.iter() {
            if var > 1 {
                write!(f, " ")?;
            }
            write!(f, "{}", if value { var as i64 } else { -(var as i64) })?;
        }
        Ok(())
    }
}
