use std::ops::BitXor;

/// Lifted boolean: value of a variable under a partial assignment.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
#[repr(u8)]
pub enum LBool {
    False = 0,
    True = 1,
    #[default]
    Undef = 2,
}

impl LBool {
    #[inline]
    pub const fn is_undef(self) -> bool {
        matches!(self, LBool::Undef)
    }

    pub const fn to_option(self) -> Option<bool> {
        match self {
            LBool::False => Some(false),
            LBool::True => Some(true),
            LBool::Undef => None,
        }
    }
}

impl From<bool> for LBool {
    fn from(b: bool) -> Self {
        if b {
            LBool::True
        } else {
            LBool::False
        }
    }
}

// LBool ^ bool
impl BitXor<bool> for LBool {
    type Output = LBool;

    fn bitxor(self, rhs: bool) -> Self::Output {
        match (self, rhs) {
            (LBool::Undef, _) => LBool::Undef,
            (value, false) => value,
            (LBool::True, true) => LBool::False,
            (LBool::False, true) => LBool::True,
        }
    }
}
