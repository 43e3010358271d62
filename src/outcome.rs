use crate::chunk::Chunk;
use crate::error::ParseError;
use crate::parser::{Failure, Success, failure, success};
use crate::position::Pos;
use std::fmt;

/// Continuation of a suspended parse
///
/// Holds everything needed to carry on once the next increment of input is
/// available. Consumed by [`Resume::resume`], so it can only be resumed once.
pub struct Resume<T, R> {
    k: Box<dyn FnOnce(T) -> Outcome<T, R>>,
}

impl<T, R> Resume<T, R> {
    pub fn new(k: impl FnOnce(T) -> Outcome<T, R> + 'static) -> Self {
        Resume { k: Box::new(k) }
    }

    /// Continue the parse with the next increment of input
    ///
    /// An empty increment signals that no more input will ever arrive.
    pub fn resume(self, input: T) -> Outcome<T, R> {
        (self.k)(input)
    }
}

impl<T, R> fmt::Debug for Resume<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<continuation>")
    }
}

/// Result of running a parser over the input seen so far
#[derive(Debug)]
pub enum Outcome<T, R> {
    /// The parse failed; `leftover` is what remained unconsumed where it did
    Failed {
        leftover: T,
        context: Vec<String>,
        message: String,
    },
    /// The parse needs more input before it can decide
    Suspended(Resume<T, R>),
    /// The parse succeeded with `value`, leaving `leftover` unconsumed
    Succeeded { leftover: T, value: R },
}

impl<T: Chunk, R: 'static> Outcome<T, R> {
    /// Supply more input
    ///
    /// A suspended parse is resumed with `input`. A finished one keeps its
    /// result and gets `input` appended to its leftover.
    pub fn feed(self, input: T) -> Outcome<T, R> {
        match self {
            Outcome::Failed {
                leftover,
                context,
                message,
            } => Outcome::Failed {
                leftover: leftover.append(&input),
                context,
                message,
            },
            Outcome::Suspended(resume) => resume.resume(input),
            Outcome::Succeeded { leftover, value } => Outcome::Succeeded {
                leftover: leftover.append(&input),
                value,
            },
        }
    }

    /// Transform the value of a successful parse, including one that only
    /// succeeds after being resumed
    pub fn map<S: 'static>(self, f: impl FnOnce(R) -> S + 'static) -> Outcome<T, S> {
        match self {
            Outcome::Failed {
                leftover,
                context,
                message,
            } => Outcome::Failed {
                leftover,
                context,
                message,
            },
            Outcome::Suspended(resume) => {
                Outcome::Suspended(Resume::new(move |input| resume.resume(input).map(f)))
            }
            Outcome::Succeeded { leftover, value } => Outcome::Succeeded {
                leftover,
                value: f(value),
            },
        }
    }

    /// Convert a finished outcome into a `Result`
    ///
    /// A suspended outcome becomes [`ParseError::Incomplete`]: calling this
    /// is the caller's decision not to supply any more input.
    pub fn into_result(self) -> Result<(T, R), ParseError> {
        match self {
            Outcome::Failed {
                context, message, ..
            } => Err(ParseError::Failed { context, message }),
            Outcome::Suspended(_) => Err(ParseError::Incomplete),
            Outcome::Succeeded { leftover, value } => Ok((leftover, value)),
        }
    }
}

impl<T, R> Outcome<T, R> {
    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed { .. })
    }

    pub fn is_suspended(&self) -> bool {
        matches!(self, Outcome::Suspended(_))
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self, Outcome::Succeeded { .. })
    }

    /// Unconsumed input of a finished outcome
    pub fn leftover(&self) -> Option<&T> {
        match self {
            Outcome::Failed { leftover, .. } | Outcome::Succeeded { leftover, .. } => Some(leftover),
            Outcome::Suspended(_) => None,
        }
    }
}

/// Structural equality of finished outcomes; a suspension equals nothing
impl<T: PartialEq, R: PartialEq> PartialEq for Outcome<T, R> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Outcome::Failed {
                    leftover,
                    context,
                    message,
                },
                Outcome::Failed {
                    leftover: other_leftover,
                    context: other_context,
                    message: other_message,
                },
            ) => leftover == other_leftover && context == other_context && message == other_message,
            (
                Outcome::Succeeded { leftover, value },
                Outcome::Succeeded {
                    leftover: other_leftover,
                    value: other_value,
                },
            ) => leftover == other_leftover && value == other_value,
            _ => false,
        }
    }
}

/// Failure continuation that ends the parse with [`Outcome::Failed`]
pub fn failed<T: Chunk, R: 'static>() -> Failure<T, R> {
    failure(|input: T, pos: Pos, _more, context, message| Outcome::Failed {
        leftover: input.unchecked_drop(pos.offset()),
        context,
        message,
    })
}

/// Success continuation that ends the parse with [`Outcome::Succeeded`]
pub fn succeeded<T: Chunk, A: 'static>() -> Success<T, A, A> {
    success(|input: T, pos: Pos, _more, value| Outcome::Succeeded {
        leftover: input.unchecked_drop(pos.offset()),
        value,
    })
}
