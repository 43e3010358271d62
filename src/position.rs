use std::fmt;

/// Offset of the next unconsumed element, in the buffer's position units
///
/// Position units are bytes for both chunk representations; see
/// [`Chunk`](crate::Chunk).
///
/// Combinators only carry positions from one continuation to the next;
/// the element primitives are the ones that advance them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Pos(usize);

impl Pos {
    pub const ZERO: Pos = Pos(0);

    pub fn new(offset: usize) -> Self {
        Pos(offset)
    }

    pub fn offset(self) -> usize {
        self.0
    }

    /// The position `n` units further on, saturating at `usize::MAX`
    pub fn advance(self, n: usize) -> Self {
        Pos(self.0.saturating_add(n))
    }
}

impl From<usize> for Pos {
    fn from(offset: usize) -> Self {
        Pos(offset)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance() {
        let pos = Pos::ZERO.advance(3).advance(2);
        assert_eq!(pos.offset(), 5);
        assert_eq!(pos, Pos::new(5));
        assert!(Pos::ZERO < pos);
    }

    #[test]
    fn test_advance_saturates() {
        let pos = Pos::new(usize::MAX - 1).advance(5);
        assert_eq!(pos.offset(), usize::MAX);
    }

    #[test]
    fn test_display() {
        assert_eq!(Pos::from(42).to_string(), "42");
    }
}
