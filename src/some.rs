use crate::many::repeat;
use crate::more::More;
use crate::outcome::Outcome;
use crate::parser::{Failure, Parser, Success, success};
use crate::position::Pos;
use std::rc::Rc;
use std::sync::Arc;

/// Parser combinator that matches one or more occurrences of the given parser
///
/// The first occurrence is mandatory and its failure is the failure of the
/// whole parser. The rest are collected the way [`many`](crate::many::many)
/// collects them.
pub struct Some<P> {
    parser: Arc<P>,
}

impl<P> Some<P> {
    pub fn new(parser: P) -> Self {
        Some {
            parser: Arc::new(parser),
        }
    }
}

impl<P> Parser for Some<P>
where
    P: Parser + 'static,
{
    type Chunk = P::Chunk;
    type Output = Vec<P::Output>;

    fn run<R: 'static>(
        &self,
        input: P::Chunk,
        pos: Pos,
        more: More,
        lose: Failure<P::Chunk, R>,
        succ: Success<P::Chunk, Vec<P::Output>, R>,
    ) -> Outcome<P::Chunk, R> {
        let parser = Arc::clone(&self.parser);
        self.parser.run(
            input,
            pos,
            more,
            lose,
            success(move |input, pos, more, first: P::Output| {
                repeat(Arc::clone(&parser), vec![first], input, pos, more, Rc::clone(&succ))
            }),
        )
    }
}

/// Convenience function to create a Some parser
pub fn some<P>(parser: P) -> Some<P>
where
    P: Parser,
{
    Some::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunk::Chunk;
    use crate::chunks::{ByteChunk, TextChunk};
    use crate::element::{element, satisfy};
    use crate::succeed::succeed;

    #[test]
    fn test_some_zero_matches_fails() {
        let parser = some(element(b'a'));

        let outcome = parser.parse_with(ByteChunk::from(b"xyz"), More::Complete);
        assert!(outcome.is_failed());
        assert_eq!(outcome.leftover(), Option::Some(&ByteChunk::from(b"xyz")));
    }

    #[test]
    fn test_some_one_match() {
        let parser = some(element(b'a'));

        let outcome = parser.parse_with(ByteChunk::from(b"abc"), More::Complete);
        assert_eq!(
            outcome,
            Outcome::Succeeded {
                leftover: ByteChunk::from(b"bc"),
                value: vec![b'a'],
            }
        );
    }

    #[test]
    fn test_some_multiple_matches() {
        let parser = some(satisfy(|c: char| c.is_ascii_digit()));

        let outcome = parser.parse_with(TextChunk::from("2024-"), More::Complete);
        assert_eq!(
            outcome,
            Outcome::Succeeded {
                leftover: TextChunk::from("-"),
                value: vec!['2', '0', '2', '4'],
            }
        );
    }

    #[test]
    fn test_some_non_consuming_parser_keeps_first_value() {
        let parser = some(succeed::<ByteChunk, _>(7u8));

        let outcome = parser.parse_with(ByteChunk::from(b"abc"), More::Complete);
        assert_eq!(
            outcome,
            Outcome::Succeeded {
                leftover: ByteChunk::from(b"abc"),
                value: vec![7],
            }
        );
    }

    #[test]
    fn test_some_first_occurrence_suspends() {
        let parser = some(element(b'a'));

        let outcome = parser.parse(ByteChunk::empty());
        assert!(outcome.is_suspended());

        let outcome = outcome.feed(ByteChunk::from(b"aa")).feed(ByteChunk::empty());
        assert_eq!(
            outcome,
            Outcome::Succeeded {
                leftover: ByteChunk::empty(),
                value: vec![b'a', b'a'],
            }
        );
    }
}
