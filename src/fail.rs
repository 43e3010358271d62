use crate::chunk::Chunk;
use crate::more::More;
use crate::outcome::Outcome;
use crate::parser::{Failure, Parser, Success};
use crate::position::Pos;
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that always fails without consuming input
pub struct Fail<T, A> {
    message: Cow<'static, str>,
    _marker: PhantomData<fn() -> (T, A)>,
}

impl<T, A> Fail<T, A> {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Fail {
            message: message.into(),
            _marker: PhantomData,
        }
    }
}

impl<T, A> Parser for Fail<T, A>
where
    T: Chunk,
    A: 'static,
{
    type Chunk = T;
    type Output = A;

    fn run<R: 'static>(
        &self,
        input: T,
        pos: Pos,
        more: More,
        lose: Failure<T, R>,
        _succ: Success<T, A, R>,
    ) -> Outcome<T, R> {
        lose(
            input,
            pos,
            more,
            Vec::new(),
            format!("Failed reading: {}", self.message),
        )
    }
}

/// Convenience function to create a Fail parser
pub fn fail<T: Chunk, A: 'static>(message: impl Into<Cow<'static, str>>) -> Fail<T, A> {
    Fail::new(message)
}

/// Parser that never succeeds; the identity for [`or`](crate::or::or)
pub fn never<T: Chunk, A: 'static>() -> Fail<T, A> {
    Fail::new("empty")
}
