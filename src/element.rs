use crate::chunk::Chunk;
use crate::input::run_ensure;
use crate::more::More;
use crate::outcome::Outcome;
use crate::parser::{Failure, Parser, Success, success};
use crate::position::Pos;
use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::Arc;

/// Parser that consumes one element for which the predicate holds
pub struct Satisfy<T, F> {
    predicate: Arc<F>,
    _chunk: PhantomData<fn() -> T>,
}

impl<T, F> Satisfy<T, F> {
    pub fn new(predicate: F) -> Self {
        Satisfy {
            predicate: Arc::new(predicate),
            _chunk: PhantomData,
        }
    }
}

impl<T, F> Parser for Satisfy<T, F>
where
    T: Chunk,
    F: Fn(T::Element) -> bool + 'static,
{
    type Chunk = T;
    type Output = T::Element;

    fn run<R: 'static>(
        &self,
        input: T,
        pos: Pos,
        more: More,
        lose: Failure<T, R>,
        succ: Success<T, T::Element, R>,
    ) -> Outcome<T, R> {
        let predicate = Arc::clone(&self.predicate);
        let mismatch = Rc::clone(&lose);
        run_ensure(
            1,
            input,
            pos,
            more,
            lose,
            success(move |input, pos: Pos, more, window: T| {
                let found = window.unchecked_head();
                if predicate(found) {
                    succ(input, pos.advance(window.width()), more, found)
                } else {
                    mismatch(input, pos, more, Vec::new(), "Failed reading: satisfy".to_owned())
                }
            }),
        )
    }
}

/// Convenience function to create a Satisfy parser
pub fn satisfy<T, F>(predicate: F) -> Satisfy<T, F>
where
    T: Chunk,
    F: Fn(T::Element) -> bool + 'static,
{
    Satisfy::new(predicate)
}

/// Parser that consumes one element equal to the expected one
pub struct Element<T: Chunk> {
    expected: T::Element,
}

impl<T: Chunk> Element<T> {
    pub fn new(expected: T::Element) -> Self {
        Element { expected }
    }
}

impl<T: Chunk> Parser for Element<T> {
    type Chunk = T;
    type Output = T::Element;

    fn run<R: 'static>(
        &self,
        input: T,
        pos: Pos,
        more: More,
        lose: Failure<T, R>,
        succ: Success<T, T::Element, R>,
    ) -> Outcome<T, R> {
        let expected = self.expected;
        let mismatch = Rc::clone(&lose);
        run_ensure(
            1,
            input,
            pos,
            more,
            lose,
            success(move |input, pos: Pos, more, window: T| {
                let found = window.unchecked_head();
                if found == expected {
                    succ(input, pos.advance(window.width()), more, found)
                } else {
                    let message = format!(
                        "Failed reading: expected {:?}, found {:?}",
                        T::to_char(expected),
                        T::to_char(found)
                    );
                    mismatch(input, pos, more, Vec::new(), message)
                }
            }),
        )
    }
}

/// Convenience function to create an Element parser
pub fn element<T: Chunk>(expected: T::Element) -> Element<T> {
    Element::new(expected)
}

/// Parser that consumes any one element
pub struct AnyElement<T> {
    _chunk: PhantomData<fn() -> T>,
}

impl<T> AnyElement<T> {
    pub fn new() -> Self {
        AnyElement {
            _chunk: PhantomData,
        }
    }
}

impl<T> Default for AnyElement<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Chunk> Parser for AnyElement<T> {
    type Chunk = T;
    type Output = T::Element;

    fn run<R: 'static>(
        &self,
        input: T,
        pos: Pos,
        more: More,
        lose: Failure<T, R>,
        succ: Success<T, T::Element, R>,
    ) -> Outcome<T, R> {
        run_ensure(
            1,
            input,
            pos,
            more,
            lose,
            success(move |input, pos: Pos, more, window: T| {
                succ(input, pos.advance(window.width()), more, window.unchecked_head())
            }),
        )
    }
}

pub fn any_element<T: Chunk>() -> AnyElement<T> {
    AnyElement::new()
}
