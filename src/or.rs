use crate::more::More;
use crate::outcome::Outcome;
use crate::parser::{Failure, Parser, Success, failure};
use crate::position::Pos;
use std::rc::Rc;
use std::sync::Arc;

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// The second parser starts from the position the first one started from,
/// however much input the first one consumed before failing. The failure of
/// the first parser is discarded.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: Arc<P2>,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or {
            parser1,
            parser2: Arc::new(parser2),
        }
    }
}

impl<P1, P2> Parser for Or<P1, P2>
where
    P1: Parser,
    P2: Parser<Chunk = P1::Chunk, Output = P1::Output> + 'static,
{
    type Chunk = P1::Chunk;
    type Output = P1::Output;

    fn run<R: 'static>(
        &self,
        input: P1::Chunk,
        pos: Pos,
        more: More,
        lose: Failure<P1::Chunk, R>,
        succ: Success<P1::Chunk, P1::Output, R>,
    ) -> Outcome<P1::Chunk, R> {
        let parser2 = Arc::clone(&self.parser2);
        let succ2 = Rc::clone(&succ);
        // The buffer handed to the failure continuation may have grown while
        // the first parser was suspended; `pos` still names the same element.
        let backtrack = failure(move |input, failed_at: Pos, more, _context, _message| {
            tracing::trace!(from = %failed_at, to = %pos, "backtracking to alternative");
            parser2.run(input, pos, more, Rc::clone(&lose), Rc::clone(&succ2))
        });
        self.parser1.run(input, pos, more, backtrack, succ)
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt: Parser + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<Chunk = Self::Chunk, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<P> OrExt for P where P: Parser {}

/// Convenience function to create an Or parser
pub fn or<P1, P2>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser,
    P2: Parser<Chunk = P1::Chunk, Output = P1::Output>,
{
    Or::new(parser1, parser2)
}
