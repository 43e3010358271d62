use crate::more::More;
use crate::outcome::Outcome;
use crate::parser::{Failure, Parser, Success, success};
use crate::position::Pos;
use std::rc::Rc;
use std::sync::Arc;

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Note: When chaining multiple `.and()` calls, this produces nested tuples like
/// `(((a, b), c), d)` rather than flat tuples like `(a, b, c, d)`.
///
/// The first result is held while the second parser runs, possibly across
/// suspensions, and is cloned into the pair; hence the `Clone` bound.
///
/// Example:
/// ```
/// use parsistream::{ByteChunk, More, Outcome, Parser};
/// use parsistream::and::AndExt;
/// use parsistream::element::element;
///
/// let parser = element(b'A').and(element(b'5'));
/// let outcome = parser.parse_with(ByteChunk::from(b"A5x"), More::Complete);
/// assert_eq!(
///     outcome,
///     Outcome::Succeeded { leftover: ByteChunk::from(b"x"), value: (b'A', b'5') }
/// );
/// ```
pub struct And<P1, P2> {
    parser1: P1,
    parser2: Arc<P2>,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And {
            parser1,
            parser2: Arc::new(parser2),
        }
    }
}

impl<P1, P2> Parser for And<P1, P2>
where
    P1: Parser,
    P1::Output: Clone,
    P2: Parser<Chunk = P1::Chunk> + 'static,
{
    type Chunk = P1::Chunk;
    type Output = (P1::Output, P2::Output);

    fn run<R: 'static>(
        &self,
        input: P1::Chunk,
        pos: Pos,
        more: More,
        lose: Failure<P1::Chunk, R>,
        succ: Success<P1::Chunk, Self::Output, R>,
    ) -> Outcome<P1::Chunk, R> {
        let parser2 = Arc::clone(&self.parser2);
        let lose2 = Rc::clone(&lose);
        self.parser1.run(
            input,
            pos,
            more,
            lose,
            success(move |input, pos, more, first: P1::Output| {
                let succ = Rc::clone(&succ);
                parser2.run(
                    input,
                    pos,
                    more,
                    Rc::clone(&lose2),
                    success(move |input, pos, more, second: P2::Output| {
                        succ(input, pos, more, (first.clone(), second))
                    }),
                )
            }),
        )
    }
}

/// Convenience function to create an And parser
pub fn and<P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser,
    P2: Parser<Chunk = P1::Chunk>,
{
    And::new(parser1, parser2)
}

/// Extension trait to add .and() method support for parsers
pub trait AndExt: Parser + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<Chunk = Self::Chunk>,
    {
        And::new(self, other)
    }
}

/// Implement AndExt for all parsers
impl<P> AndExt for P where P: Parser {}
