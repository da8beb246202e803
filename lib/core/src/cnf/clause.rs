use std::fmt::{Display, Formatter};
use std::num::NonZeroI32;
use std::slice::Iter;

use itertools::Itertools;
use snafu::OptionExt;

use crate::error::{Result, ZeroLiteralInClauseSnafu};
use crate::lit::Lit;

/// Disjunction of literals.
///
/// The order of literals is preserved. A clause may be empty: an empty clause
/// is falsified under every assignment.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Clause {
    pub lits: Vec<Lit>,
}

impl Clause {
    pub fn iter(&self) -> Iter<'_, Lit> {
        self.lits.iter()
    }
}

impl Clause {
    pub const fn new(lits: Vec<Lit>) -> Self {
        Clause { lits }
    }

    /// Build a clause from raw DIMACS integers, rejecting any `0`.
    pub fn try_from_ints<I>(ints: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<i32>,
    {
        let lits = ints
            .into_iter()
            .enumerate()
            .map(|(position, x)| {
                NonZeroI32::new(x.into())
                    .map(Lit::new)
                    .context(ZeroLiteralInClauseSnafu { position })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(lits))
    }

    pub fn len(&self) -> usize {
        self.lits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lits.is_empty()
    }

    /// The single literal of a unit clause.
    pub fn as_unit(&self) -> Option<Lit> {
        match self.lits.as_slice() {
            &[lit] => Some(lit),
            _ => None,
        }
    }

    /// Largest variable index mentioned in the clause, `0` for the empty clause.
    pub fn max_var(&self) -> usize {
        self.lits.iter().map(|lit| lit.var() as usize).max().unwrap_or(0)
    }
}

impl<I> From<I> for Clause
where
    I: IntoIterator,
    I::Item: Into<Lit>,
{
    fn from(iter: I) -> Self {
        Self::new(iter.into_iter().map_into::<Lit>().collect())
    }
}

impl<'a> IntoIterator for &'a Clause {
    type Item = &'a Lit;
    type IntoIter = Iter<'a, Lit>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for Clause {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (i, lit) in self.lits.iter().enumerate() {
            if i > 0 {
                write!(f, " OR ")?;
            }
            if lit.is_negated() {
                write!(f, "NOT x{}", lit.var())?;
            } else {
                write!(f, "x{}", lit.var())?;
            }
        }
        write!(f, ")")
    }
}
