use crate::chunk::Chunk;
use crate::more::More;
use crate::outcome::Outcome;
use crate::parser::{Failure, Parser, Success};
use crate::position::Pos;
use std::marker::PhantomData;

/// Parser that always succeeds without consuming input and returns a clone of its value
pub struct Succeed<T, A> {
    value: A,
    _chunk: PhantomData<fn() -> T>,
}

impl<T, A> Succeed<T, A> {
    pub fn new(value: A) -> Self {
        Succeed {
            value,
            _chunk: PhantomData,
        }
    }
}

impl<T, A> Parser for Succeed<T, A>
where
    T: Chunk,
    A: Clone + 'static,
{
    type Chunk = T;
    type Output = A;

    fn run<R: 'static>(
        &self,
        input: T,
        pos: Pos,
        more: More,
        _lose: Failure<T, R>,
        succ: Success<T, A, R>,
    ) -> Outcome<T, R> {
        succ(input, pos, more, self.value.clone())
    }
}

/// Convenience function to create a Succeed parser
pub fn succeed<T: Chunk, A: Clone + 'static>(value: A) -> Succeed<T, A> {
    Succeed::new(value)
}
