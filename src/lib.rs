//! # ParsiStream - Incremental Parser Combinators
//!
//! The execution core of a backtracking parser combinator engine that can be
//! fed its input in pieces.
//!
//! Parsers are written in continuation-passing style: running one hands the
//! result to a success or a failure continuation instead of returning it.
//! When a parser runs out of buffered input before it can decide, the run
//! returns [`Outcome::Suspended`] holding the rest of the computation, and
//! the caller resumes it with the next increment. An empty increment tells
//! the parser that the stream has ended.
//!
//! - **Incremental**: any split of the input into increments yields the same result
//! - **Backtracking**: [`or`](or::or) retries from where the failed alternative began,
//!   even if that alternative consumed input across several increments
//! - **Representation independent**: the same combinators run over
//!   [`ByteChunk`] and [`TextChunk`] buffers
//!
//! ```
//! use parsistream::{ByteChunk, Chunk, Outcome, Parser};
//! use parsistream::element::satisfy;
//! use parsistream::many::many;
//!
//! let digits = many(satisfy(|b: u8| b.is_ascii_digit()));
//!
//! let outcome = digits.parse(ByteChunk::from(b"12"));
//! assert!(outcome.is_suspended());
//!
//! let outcome = outcome.feed(ByteChunk::from(b"3;")).feed(ByteChunk::empty());
//! assert_eq!(
//!     outcome,
//!     Outcome::Succeeded { leftover: ByteChunk::from(b";"), value: b"123".to_vec() }
//! );
//! ```

pub mod and;
pub mod and_then;
pub mod chunk;
pub mod chunks;
pub mod element;
pub mod error;
pub mod fail;
pub mod input;
pub mod label;
pub mod many;
pub mod map;
pub mod more;
pub mod or;
pub mod outcome;
pub mod parser;
pub mod position;
pub mod some;
pub mod succeed;

pub use and::{AndExt, and};
pub use and_then::{AndThenExt, and_then};
pub use chunk::Chunk;
pub use chunks::{ByteChunk, TextChunk};
pub use element::{any_element, element, satisfy};
pub use error::ParseError;
pub use fail::{fail, never};
pub use input::{at_end, demand_input, end_of_input, ensure, prompt, take, want_input};
pub use label::LabelExt;
pub use many::many;
pub use map::{MapExt, map};
pub use more::More;
pub use or::{OrExt, or};
pub use outcome::{Outcome, Resume};
pub use parser::{Failure, Parser, Success};
pub use position::Pos;
pub use some::some;
pub use succeed::succeed;
