use crate::more::More;
use crate::outcome::{Outcome, Resume};
use crate::parser::{Failure, Parser, Success, failure, success};
use crate::position::Pos;
use std::sync::Arc;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Repetition stops at the first attempt that fails, with the input restored
/// to where that attempt began, and the values collected so far are returned.
/// An attempt that succeeds without consuming anything also stops the
/// repetition; its value is dropped, so `many` always terminates.
pub struct Many<P> {
    parser: Arc<P>,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many {
            parser: Arc::new(parser),
        }
    }
}

impl<P> Parser for Many<P>
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
        _lose: Failure<P::Chunk, R>,
        succ: Success<P::Chunk, Vec<P::Output>, R>,
    ) -> Outcome<P::Chunk, R> {
        repeat(Arc::clone(&self.parser), Vec::new(), input, pos, more, succ)
    }
}

/// Convenience function to create a Many parser
pub fn many<P>(parser: P) -> Many<P>
where
    P: Parser,
{
    Many::new(parser)
}

/// How a single attempt of the repeated parser ended
enum Attempt<T, A> {
    Matched {
        input: T,
        pos: Pos,
        more: More,
        value: A,
    },
    Missed {
        input: T,
        more: More,
    },
}

/// Run one attempt with continuations that report back instead of carrying on
///
/// Running the attempt to its own outcome, rather than continuing the
/// repetition from inside the success continuation, keeps the stack flat no
/// matter how many repetitions there are.
fn attempt<P: Parser>(
    parser: &P,
    input: P::Chunk,
    pos: Pos,
    more: More,
) -> Outcome<P::Chunk, Attempt<P::Chunk, P::Output>> {
    parser.run(
        input,
        pos,
        more,
        failure(|input: P::Chunk, _pos, more, _context, _message| Outcome::Succeeded {
            leftover: input.clone(),
            value: Attempt::Missed { input, more },
        }),
        success(|input: P::Chunk, pos, more, value| Outcome::Succeeded {
            leftover: input.clone(),
            value: Attempt::Matched {
                input,
                pos,
                more,
                value,
            },
        }),
    )
}

/// Repeat `parser` from `pos`, appending to `values`, then hand the values to `succ`
pub(crate) fn repeat<P, R>(
    parser: Arc<P>,
    values: Vec<P::Output>,
    input: P::Chunk,
    pos: Pos,
    more: More,
    succ: Success<P::Chunk, Vec<P::Output>, R>,
) -> Outcome<P::Chunk, R>
where
    P: Parser + 'static,
    R: 'static,
{
    let first = attempt(&*parser, input, pos, more);
    settle(parser, values, pos, first, succ)
}

/// Drive the repetition forward from the outcome of the attempt begun at `pos`
///
/// The buffer lives only inside the attempt's outcome, so a suspended
/// repetition holds no view of it besides the one waiting for the increment.
fn settle<P, R>(
    parser: Arc<P>,
    mut values: Vec<P::Output>,
    mut pos: Pos,
    mut outcome: Outcome<P::Chunk, Attempt<P::Chunk, P::Output>>,
    succ: Success<P::Chunk, Vec<P::Output>, R>,
) -> Outcome<P::Chunk, R>
where
    P: Parser + 'static,
    R: 'static,
{
    loop {
        match outcome {
            Outcome::Succeeded {
                value:
                    Attempt::Matched {
                        input,
                        pos: next_pos,
                        more,
                        value,
                    },
                ..
            } => {
                if next_pos == pos {
                    tracing::trace!(%pos, count = values.len(), "repetition made no progress");
                    return succ(input, pos, more, values);
                }
                values.push(value);
                pos = next_pos;
                outcome = attempt(&*parser, input, pos, more);
            }
            Outcome::Succeeded {
                value: Attempt::Missed { input, more },
                ..
            } => {
                tracing::trace!(%pos, count = values.len(), "repetition stopped");
                return succ(input, pos, more, values);
            }
            // Only reachable if the repeated parser built an outcome without
            // going through its continuations.
            Outcome::Failed {
                leftover,
                context,
                message,
            } => {
                return Outcome::Failed {
                    leftover,
                    context,
                    message,
                };
            }
            Outcome::Suspended(resume) => {
                return Outcome::Suspended(Resume::new(move |increment| {
                    let outcome = resume.resume(increment);
                    settle(parser, values, pos, outcome, succ)
                }));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunk::Chunk;
    use crate::chunks::{ByteChunk, TextChunk};
    use crate::element::{any_element, element, satisfy};
    use crate::succeed::succeed;

    #[test]
    fn test_many_zero_matches() {
        let parser = many(element(b'a'));

        let outcome = parser.parse_with(ByteChunk::from(b"xyz"), More::Complete);
        assert_eq!(
            outcome,
            Outcome::Succeeded {
                leftover: ByteChunk::from(b"xyz"),
                value: vec![],
            }
        );
    }

    #[test]
    fn test_many_multiple_matches() {
        let parser = many(element(0x2C));

        let outcome = parser.parse_with(ByteChunk::from(&[0x2C, 0x2C, 0x58]), More::Complete);
        assert_eq!(
            outcome,
            Outcome::Succeeded {
                leftover: ByteChunk::from(&[0x58]),
                value: vec![0x2C, 0x2C],
            }
        );
    }

    #[test]
    fn test_many_all_matches() {
        let parser = many(element('a'));

        let outcome = parser.parse_with(TextChunk::from("aaaa"), More::Complete);
        assert_eq!(
            outcome,
            Outcome::Succeeded {
                leftover: TextChunk::empty(),
                value: vec!['a'; 4],
            }
        );
    }

    #[test]
    fn test_many_empty_input_complete() {
        let parser = many(element(b'a'));

        let outcome = parser.parse_with(ByteChunk::empty(), More::Complete);
        assert_eq!(
            outcome,
            Outcome::Succeeded {
                leftover: ByteChunk::empty(),
                value: vec![],
            }
        );
    }

    #[test]
    fn test_many_terminates_on_non_consuming_parser() {
        let parser = many(succeed::<ByteChunk, _>('x'));

        let outcome = parser.parse_with(ByteChunk::from(b"abc"), More::Complete);
        assert_eq!(
            outcome,
            Outcome::Succeeded {
                leftover: ByteChunk::from(b"abc"),
                value: vec![],
            }
        );
    }

    #[test]
    fn test_many_suspends_at_end_of_increment() {
        let parser = many(element(b'a'));

        let outcome = parser.parse(ByteChunk::from(b"aa"));
        assert!(outcome.is_suspended());

        let outcome = outcome.feed(ByteChunk::from(b"ab"));
        assert_eq!(
            outcome,
            Outcome::Succeeded {
                leftover: ByteChunk::from(b"b"),
                value: vec![b'a'; 3],
            }
        );
    }

    #[test]
    fn test_many_stops_at_end_of_input_signal() {
        let parser = many(any_element::<ByteChunk>());

        let outcome = parser
            .parse(ByteChunk::from(b"ab"))
            .feed(ByteChunk::from(b"c"))
            .feed(ByteChunk::empty());
        assert_eq!(
            outcome,
            Outcome::Succeeded {
                leftover: ByteChunk::empty(),
                value: b"abc".to_vec(),
            }
        );
    }

    #[test]
    fn test_many_long_input_stays_on_the_stack() {
        let data = vec![b'7'; 200_000];
        let parser = many(satisfy(|b: u8| b.is_ascii_digit()));

        let (leftover, digits) = parser
            .parse_with(ByteChunk::from(data), More::Complete)
            .into_result()
            .unwrap();
        assert_eq!(digits.len(), 200_000);
        assert!(leftover.is_empty());
    }

    #[test]
    fn test_many_over_long_text() {
        let text = "日本語 ".repeat(50_000);
        let parser = many(any_element::<TextChunk>());

        let (leftover, chars) = parser
            .parse_with(TextChunk::from(text), More::Complete)
            .into_result()
            .unwrap();
        assert_eq!(chars.len(), 200_000);
        assert!(leftover.is_empty());
    }

    #[test]
    fn test_many_fed_one_element_at_a_time() {
        let parser = many(element(b'a'));

        let mut outcome = parser.parse(ByteChunk::empty());
        for _ in 0..50_000 {
            outcome = outcome.feed(ByteChunk::from(b"a"));
        }
        let outcome = outcome.feed(ByteChunk::from(b"b")).feed(ByteChunk::empty());

        let (leftover, values) = outcome.into_result().unwrap();
        assert_eq!(values.len(), 50_000);
        assert_eq!(leftover.as_bytes(), b"b");
    }

    #[test]
    fn test_many_propagates_stray_failure() {
        struct Broken;

        impl Parser for Broken {
            type Chunk = ByteChunk;
            type Output = u8;

            fn run<R: 'static>(
                &self,
                input: ByteChunk,
                _pos: Pos,
                _more: More,
                _lose: Failure<ByteChunk, R>,
                _succ: Success<ByteChunk, u8, R>,
            ) -> Outcome<ByteChunk, R> {
                Outcome::Failed {
                    leftover: input,
                    context: vec!["broken".to_owned()],
                    message: "gave up".to_owned(),
                }
            }
        }

        let outcome = many(Broken).parse_with(ByteChunk::from(b"ab"), More::Complete);
        assert_eq!(
            outcome,
            Outcome::Failed {
                leftover: ByteChunk::from(b"ab"),
                context: vec!["broken".to_owned()],
                message: "gave up".to_owned(),
            }
        );
    }
}
