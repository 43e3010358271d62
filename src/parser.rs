use crate::chunk::Chunk;
use crate::more::More;
use crate::outcome::{self, Outcome};
use crate::position::Pos;
use std::rc::Rc;

/// Failure continuation: receives the buffer, position and completion flag in
/// effect where the parse failed, the context labels and a message
pub type Failure<T, R> = Rc<dyn Fn(T, Pos, More, Vec<String>, String) -> Outcome<T, R>>;

/// Success continuation: receives the buffer, the position after the parsed
/// value, the completion flag and the value
pub type Success<T, A, R> = Rc<dyn Fn(T, Pos, More, A) -> Outcome<T, R>>;

/// Build a [`Failure`] continuation from a closure
pub fn failure<T, R, F>(f: F) -> Failure<T, R>
where
    F: Fn(T, Pos, More, Vec<String>, String) -> Outcome<T, R> + 'static,
{
    Rc::new(f)
}

/// Build a [`Success`] continuation from a closure
pub fn success<T, A, R, F>(f: F) -> Success<T, A, R>
where
    F: Fn(T, Pos, More, A) -> Outcome<T, R> + 'static,
{
    Rc::new(f)
}

/// Core parser trait for parser combinators
///
/// A parser is a reusable description of how to consume input. Running it
/// never returns a value directly: it reports through the continuation it
/// is handed, and whatever that continuation builds is the [`Outcome`].
/// Because [`Parser::run`] is generic over the final result type `R`, the
/// same parser value can be driven by callers that want entirely different
/// results.
pub trait Parser {
    /// The buffer representation this parser consumes
    type Chunk: Chunk;
    /// The value produced on success
    type Output: 'static;

    /// Run the parser at `pos` in `input`
    ///
    /// Exactly one of `lose` or `succ` ends up determining the returned
    /// outcome, unless the parser suspends, in which case the returned
    /// [`Outcome::Suspended`] continuation carries them forward.
    fn run<R: 'static>(
        &self,
        input: Self::Chunk,
        pos: Pos,
        more: More,
        lose: Failure<Self::Chunk, R>,
        succ: Success<Self::Chunk, Self::Output, R>,
    ) -> Outcome<Self::Chunk, R>;

    /// Parse `input` from its beginning, stating whether more will follow
    fn parse_with(&self, input: Self::Chunk, more: More) -> Outcome<Self::Chunk, Self::Output> {
        self.run(
            input,
            Pos::ZERO,
            more,
            outcome::failed(),
            outcome::succeeded(),
        )
    }

    /// Parse the first increment of a stream that may continue
    ///
    /// Feed further increments with [`Outcome::feed`]; feed an empty chunk
    /// to signal the end of the stream.
    fn parse(&self, input: Self::Chunk) -> Outcome<Self::Chunk, Self::Output> {
        self.parse_with(input, More::Incomplete)
    }
}
