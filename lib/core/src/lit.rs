use std::fmt::{Display, Formatter};
use std::num::NonZeroI32;
use std::ops::Neg;

use snafu::OptionExt;

use crate::error::{Result, SolverError, VariableOutOfRangeSnafu, ZeroLiteralSnafu};

/// A literal in DIMACS convention: the magnitude is the 1-based variable index,
/// the sign is the polarity.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct Lit(NonZeroI32);

impl Lit {
    pub const fn new(val: NonZeroI32) -> Self {
        Lit(val)
    }

    /// Construct a literal from a raw integer, rejecting `0`.
    pub fn from_i32(val: i32) -> Result<Self> {
        NonZeroI32::new(val).map(Lit).context(ZeroLiteralSnafu)
    }

    /// Construct a positive or negative literal of `var`.
    pub fn from_var(var: u32, negated: bool) -> Result<Self> {
        let val = i32::try_from(var).ok().context(VariableOutOfRangeSnafu { var })?;
        Self::from_i32(if negated { -val } else { val })
    }

    pub const fn get(self) -> i32 {
        self.0.get()
    }

    pub const fn var(self) -> u32 {
        self.get().unsigned_abs()
    }

    pub const fn is_negated(self) -> bool {
        self.get() < 0
    }
}

impl Display for Lit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get())
    }
}

impl From<NonZeroI32> for Lit {
    fn from(val: NonZeroI32) -> Self {
        Self::new(val)
    }
}

impl TryFrom<i32> for Lit {
    type Error = SolverError;

    fn try_from(val: i32) -> Result<Self> {
        Self::from_i32(val)
    }
}

// Into<i32>
impl From<Lit> for i32 {
    fn from(lit: Lit) -> Self {
        lit.get()
    }
}

// -Lit
impl Neg for Lit {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Lit(NonZeroI32::new(self.get().wrapping_neg()).unwrap_or(self.0))
    }
}
