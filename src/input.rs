use crate::chunk::Chunk;
use crate::more::More;
use crate::outcome::{Outcome, Resume};
use crate::parser::{Failure, Parser, Success, success};
use crate::position::Pos;
use std::marker::PhantomData;
use std::rc::Rc;

/// Message of every failure caused by running out of input
pub const NOT_ENOUGH_INPUT: &str = "not enough input";

/// Suspend the parse until the next increment arrives
///
/// An empty increment means the stream has ended: `lose` is called with the
/// buffer as it stands and [`More::Complete`]. Otherwise `succ` is called
/// with the increment appended to the buffer and [`More::Incomplete`].
/// The position is passed through untouched either way.
pub fn prompt<T, R, L, S>(input: T, pos: Pos, lose: L, succ: S) -> Outcome<T, R>
where
    T: Chunk,
    R: 'static,
    L: FnOnce(T, Pos, More) -> Outcome<T, R> + 'static,
    S: FnOnce(T, Pos, More) -> Outcome<T, R> + 'static,
{
    tracing::trace!(%pos, buffered = input.width(), "suspending for more input");
    Outcome::Suspended(Resume::new(move |increment: T| {
        if increment.is_empty() {
            tracing::trace!(%pos, "end of input signalled");
            lose(input, pos, More::Complete)
        } else {
            tracing::trace!(%pos, received = increment.width(), "resuming with more input");
            succ(input.append(&increment), pos, More::Incomplete)
        }
    }))
}

/// Wait until `n` elements are buffered past `pos`, then hand them to `succ`
///
/// The elements are not consumed: `succ` receives `pos` unchanged.
pub(crate) fn run_ensure<T, R>(
    n: usize,
    input: T,
    pos: Pos,
    more: More,
    lose: Failure<T, R>,
    succ: Success<T, T, R>,
) -> Outcome<T, R>
where
    T: Chunk,
    R: 'static,
{
    if pos.offset().checked_add(n).is_none() {
        return lose(input, pos, more, Vec::new(), NOT_ENOUGH_INPUT.to_owned());
    }
    if input.length_at_least(pos.offset(), n) {
        let window = input.substring(pos.offset(), n);
        return succ(input, pos, more, window);
    }
    if more.is_complete() {
        return lose(input, pos, more, Vec::new(), NOT_ENOUGH_INPUT.to_owned());
    }
    let exhausted = Rc::clone(&lose);
    prompt(
        input,
        pos,
        move |input, pos, more| exhausted(input, pos, more, Vec::new(), NOT_ENOUGH_INPUT.to_owned()),
        move |input, pos, more| run_ensure(n, input, pos, more, lose, succ),
    )
}

/// Parser that asks for another increment of input
///
/// Fails with "not enough input" once the stream is known to be complete.
pub struct DemandInput<T> {
    _chunk: PhantomData<fn() -> T>,
}

impl<T> DemandInput<T> {
    pub fn new() -> Self {
        DemandInput {
            _chunk: PhantomData,
        }
    }
}

impl<T> Default for DemandInput<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Chunk> Parser for DemandInput<T> {
    type Chunk = T;
    type Output = ();

    fn run<R: 'static>(
        &self,
        input: T,
        pos: Pos,
        more: More,
        lose: Failure<T, R>,
        succ: Success<T, (), R>,
    ) -> Outcome<T, R> {
        if more.is_complete() {
            return lose(input, pos, more, Vec::new(), NOT_ENOUGH_INPUT.to_owned());
        }
        prompt(
            input,
            pos,
            move |input, pos, more| lose(input, pos, more, Vec::new(), NOT_ENOUGH_INPUT.to_owned()),
            move |input, pos, more| succ(input, pos, more, ()),
        )
    }
}

pub fn demand_input<T: Chunk>() -> DemandInput<T> {
    DemandInput::new()
}

/// Parser that answers whether any input is available past the current position,
/// suspending only when it cannot tell yet
pub struct WantInput<T> {
    _chunk: PhantomData<fn() -> T>,
}

impl<T> WantInput<T> {
    pub fn new() -> Self {
        WantInput {
            _chunk: PhantomData,
        }
    }
}

impl<T> Default for WantInput<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Chunk> Parser for WantInput<T> {
    type Chunk = T;
    type Output = bool;

    fn run<R: 'static>(
        &self,
        input: T,
        pos: Pos,
        more: More,
        _lose: Failure<T, R>,
        succ: Success<T, bool, R>,
    ) -> Outcome<T, R> {
        if input.length_at_least(pos.offset(), 1) {
            return succ(input, pos, more, true);
        }
        if more.is_complete() {
            return succ(input, pos, more, false);
        }
        let exhausted = Rc::clone(&succ);
        prompt(
            input,
            pos,
            move |input, pos, more| exhausted(input, pos, more, false),
            move |input, pos, more| succ(input, pos, more, true),
        )
    }
}

pub fn want_input<T: Chunk>() -> WantInput<T> {
    WantInput::new()
}

/// Parser that looks at the next `n` elements without consuming them
pub struct Ensure<T> {
    n: usize,
    _chunk: PhantomData<fn() -> T>,
}

impl<T> Ensure<T> {
    pub fn new(n: usize) -> Self {
        Ensure {
            n,
            _chunk: PhantomData,
        }
    }
}

impl<T: Chunk> Parser for Ensure<T> {
    type Chunk = T;
    type Output = T;

    fn run<R: 'static>(
        &self,
        input: T,
        pos: Pos,
        more: More,
        lose: Failure<T, R>,
        succ: Success<T, T, R>,
    ) -> Outcome<T, R> {
        run_ensure(self.n, input, pos, more, lose, succ)
    }
}

pub fn ensure<T: Chunk>(n: usize) -> Ensure<T> {
    Ensure::new(n)
}

/// Parser that consumes exactly `n` elements and returns them
pub struct Take<T> {
    n: usize,
    _chunk: PhantomData<fn() -> T>,
}

impl<T> Take<T> {
    pub fn new(n: usize) -> Self {
        Take {
            n,
            _chunk: PhantomData,
        }
    }
}

impl<T: Chunk> Parser for Take<T> {
    type Chunk = T;
    type Output = T;

    fn run<R: 'static>(
        &self,
        input: T,
        pos: Pos,
        more: More,
        lose: Failure<T, R>,
        succ: Success<T, T, R>,
    ) -> Outcome<T, R> {
        run_ensure(
            self.n,
            input,
            pos,
            more,
            lose,
            success(move |input, pos: Pos, more, taken: T| {
                let width = taken.width();
                succ(input, pos.advance(width), more, taken)
            }),
        )
    }
}

pub fn take<T: Chunk>(n: usize) -> Take<T> {
    Take::new(n)
}

/// Parser that succeeds only once the stream is complete and fully consumed
pub struct EndOfInput<T> {
    _chunk: PhantomData<fn() -> T>,
}

impl<T> EndOfInput<T> {
    pub fn new() -> Self {
        EndOfInput {
            _chunk: PhantomData,
        }
    }
}

impl<T> Default for EndOfInput<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Chunk> Parser for EndOfInput<T> {
    type Chunk = T;
    type Output = ();

    fn run<R: 'static>(
        &self,
        input: T,
        pos: Pos,
        more: More,
        lose: Failure<T, R>,
        succ: Success<T, (), R>,
    ) -> Outcome<T, R> {
        if input.length_at_least(pos.offset(), 1) {
            return lose(input, pos, more, Vec::new(), "endOfInput".to_owned());
        }
        if more.is_complete() {
            return succ(input, pos, more, ());
        }
        prompt(
            input,
            pos,
            move |input, pos, more| succ(input, pos, more, ()),
            move |input, pos, more| lose(input, pos, more, Vec::new(), "endOfInput".to_owned()),
        )
    }
}

pub fn end_of_input<T: Chunk>() -> EndOfInput<T> {
    EndOfInput::new()
}

/// Parser that answers whether the stream is complete and fully consumed
///
/// Never fails and never consumes input.
pub struct AtEnd<T> {
    want: WantInput<T>,
}

impl<T> AtEnd<T> {
    pub fn new() -> Self {
        AtEnd {
            want: WantInput::new(),
        }
    }
}

impl<T> Default for AtEnd<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Chunk> Parser for AtEnd<T> {
    type Chunk = T;
    type Output = bool;

    fn run<R: 'static>(
        &self,
        input: T,
        pos: Pos,
        more: More,
        lose: Failure<T, R>,
        succ: Success<T, bool, R>,
    ) -> Outcome<T, R> {
        self.want.run(
            input,
            pos,
            more,
            lose,
            success(move |input, pos, more, wanted: bool| succ(input, pos, more, !wanted)),
        )
    }
}

pub fn at_end<T: Chunk>() -> AtEnd<T> {
    AtEnd::new()
}
