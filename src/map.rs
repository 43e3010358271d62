use crate::more::More;
use crate::outcome::Outcome;
use crate::parser::{Failure, Parser, Success, success};
use crate::position::Pos;
use std::sync::Arc;

/// Parser combinator that transforms the output of a parser using a mapping function
pub struct Map<P, F> {
    parser: P,
    mapper: Arc<F>,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map {
            parser,
            mapper: Arc::new(mapper),
        }
    }
}

impl<P, F, U> Parser for Map<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> U + 'static,
    U: 'static,
{
    type Chunk = P::Chunk;
    type Output = U;

    fn run<R: 'static>(
        &self,
        input: P::Chunk,
        pos: Pos,
        more: More,
        lose: Failure<P::Chunk, R>,
        succ: Success<P::Chunk, U, R>,
    ) -> Outcome<P::Chunk, R> {
        let mapper = Arc::clone(&self.mapper);
        self.parser.run(
            input,
            pos,
            more,
            lose,
            success(move |input, pos, more, value: P::Output| succ(input, pos, more, mapper(value))),
        )
    }
}

/// Convenience function to create a Map parser
pub fn map<P, F, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> U + 'static,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt: Parser + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U + 'static,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<P> MapExt for P where P: Parser {}
