use crate::more::More;
use crate::outcome::Outcome;
use crate::parser::{Failure, Parser, Success, success};
use crate::position::Pos;
use std::rc::Rc;
use std::sync::Arc;

/// Parser combinator that feeds the output of one parser into a function
/// choosing the parser to run next
///
/// Failures of either parser are passed to the same failure continuation,
/// unchanged.
pub struct AndThen<P, F> {
    parser: P,
    next: Arc<F>,
}

impl<P, F> AndThen<P, F> {
    pub fn new(parser: P, next: F) -> Self {
        AndThen {
            parser,
            next: Arc::new(next),
        }
    }
}

impl<P, F, Q> Parser for AndThen<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> Q + 'static,
    Q: Parser<Chunk = P::Chunk>,
{
    type Chunk = P::Chunk;
    type Output = Q::Output;

    fn run<R: 'static>(
        &self,
        input: P::Chunk,
        pos: Pos,
        more: More,
        lose: Failure<P::Chunk, R>,
        succ: Success<P::Chunk, Q::Output, R>,
    ) -> Outcome<P::Chunk, R> {
        let next = Arc::clone(&self.next);
        let lose_next = Rc::clone(&lose);
        self.parser.run(
            input,
            pos,
            more,
            lose,
            success(move |input, pos, more, value: P::Output| {
                next(value).run(input, pos, more, Rc::clone(&lose_next), Rc::clone(&succ))
            }),
        )
    }
}

/// Convenience function to create an AndThen parser
pub fn and_then<P, F, Q>(parser: P, next: F) -> AndThen<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> Q + 'static,
    Q: Parser<Chunk = P::Chunk>,
{
    AndThen::new(parser, next)
}

/// Extension trait to add .and_then() method support for parsers
pub trait AndThenExt: Parser + Sized {
    fn and_then<F, Q>(self, next: F) -> AndThen<Self, F>
    where
        F: Fn(Self::Output) -> Q + 'static,
        Q: Parser<Chunk = Self::Chunk>,
    {
        AndThen::new(self, next)
    }
}

/// Implement AndThenExt for all parsers
impl<P> AndThenExt for P where P: Parser {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunk::Chunk;
    use crate::chunks::ByteChunk;
    use crate::element::{any_element, element};
    use crate::input::take;
    use crate::succeed::succeed;
    use proptest::prelude::*;

    fn run_complete<P: Parser<Chunk = ByteChunk>>(
        parser: &P,
        data: &[u8],
    ) -> Outcome<ByteChunk, P::Output> {
        parser.parse_with(ByteChunk::from(data), More::Complete)
    }

    #[test]
    fn test_and_then_chooses_next_parser() {
        // a length byte followed by that many bytes
        let parser = any_element::<ByteChunk>().and_then(|n| take(usize::from(n)));

        let (leftover, value) = run_complete(&parser, b"\x03abcde").into_result().unwrap();
        assert_eq!(value.as_bytes(), b"abc");
        assert_eq!(leftover.as_bytes(), b"de");
    }

    #[test]
    fn test_and_then_first_fails() {
        let parser = element(b'A').and_then(|_| element(b'B'));

        let outcome = run_complete(&parser, b"XB");
        assert_eq!(outcome.leftover(), Some(&ByteChunk::from(b"XB")));
        assert!(outcome.is_failed());
    }

    #[test]
    fn test_and_then_second_fails_at_its_position() {
        let parser = element(b'A').and_then(|_| element(b'B'));

        let outcome = run_complete(&parser, b"AX");
        assert_eq!(outcome.leftover(), Some(&ByteChunk::from(b"X")));
        assert!(outcome.is_failed());
    }

    #[test]
    fn test_and_then_suspends_between_steps() {
        let parser = element(b'A').and_then(|_| element(b'B'));

        let outcome = parser.parse(ByteChunk::from(b"A"));
        assert!(outcome.is_suspended());

        let outcome = outcome.feed(ByteChunk::from(b"BC"));
        assert_eq!(
            outcome,
            Outcome::Succeeded {
                leftover: ByteChunk::from(b"C"),
                value: b'B',
            }
        );
    }

    #[test]
    fn test_and_then_function_syntax() {
        let parser = and_then(succeed::<ByteChunk, _>(2usize), take::<ByteChunk>);

        let (_, value) = run_complete(&parser, b"xyz").into_result().unwrap();
        assert_eq!(value.as_bytes(), b"xy");
    }

    #[test]
    fn test_long_chain_of_sequencing() {
        let parser = element(b'a')
            .and_then(|_| element(b'b'))
            .and_then(|_| element(b'c'))
            .and_then(|_| element(b'd'))
            .and_then(|_| element(b'e'));

        let (leftover, value) = run_complete(&parser, b"abcdef").into_result().unwrap();
        assert_eq!(value, b'e');
        assert_eq!(leftover.as_bytes(), b"f");
    }

    proptest! {
        // succeed(a) >>= f  ==  f(a)
        #[test]
        fn test_left_identity(data in proptest::collection::vec(any::<u8>(), 0..8), a in 0usize..10) {
            let f = |n: usize| take::<ByteChunk>(n);
            let bound = succeed::<ByteChunk, _>(a).and_then(f);
            prop_assert_eq!(run_complete(&bound, &data), run_complete(&f(a), &data));
        }

        // p >>= succeed  ==  p
        #[test]
        fn test_right_identity(data in proptest::collection::vec(any::<u8>(), 0..8), n in 0usize..10) {
            let bound = take::<ByteChunk>(n).and_then(succeed::<ByteChunk, ByteChunk>);
            prop_assert_eq!(run_complete(&bound, &data), run_complete(&take::<ByteChunk>(n), &data));
        }

        // (p >>= f) >>= g  ==  p >>= (\x -> f x >>= g)
        #[test]
        fn test_associativity(data in proptest::collection::vec(any::<u8>(), 0..8)) {
            let f = |b: u8| take::<ByteChunk>(usize::from(b % 3));
            let g = |chunk: ByteChunk| take::<ByteChunk>(chunk.len() + 1);
            let left = any_element::<ByteChunk>().and_then(f).and_then(g);
            let right = any_element::<ByteChunk>().and_then(move |b| f(b).and_then(g));
            prop_assert_eq!(run_complete(&left, &data), run_complete(&right, &data));
        }
    }
}
