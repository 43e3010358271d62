use std::ops::BitOr;

/// Whether more input may still arrive for the stream being parsed
///
/// Once a driver has signalled [`More::Complete`] it must keep doing so;
/// combining flags therefore treats `Complete` as absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum More {
    /// No further input will ever arrive
    Complete,
    /// More input may still arrive
    #[default]
    Incomplete,
}

impl More {
    pub fn is_complete(self) -> bool {
        self == More::Complete
    }

    /// Logical OR over "is complete", with `Incomplete` as identity
    pub fn combine(self, other: More) -> More {
        match self {
            More::Complete => More::Complete,
            More::Incomplete => other,
        }
    }
}

impl BitOr for More {
    type Output = More;

    fn bitor(self, rhs: More) -> More {
        self.combine(rhs)
    }
}
