use crate::more::More;
use crate::outcome::Outcome;
use crate::parser::{Failure, Parser, Success, failure};
use crate::position::Pos;
use std::sync::Arc;

/// Parser combinator that names the inner parser in the context of its failures
///
/// The name is put in front of the context the inner parser failed with, so
/// nested labels read from the outermost to the innermost.
pub struct Label<P> {
    parser: P,
    name: Arc<str>,
}

impl<P> Label<P> {
    pub fn new(parser: P, name: impl Into<Arc<str>>) -> Self {
        Label {
            parser,
            name: name.into(),
        }
    }
}

impl<P> Parser for Label<P>
where
    P: Parser,
{
    type Chunk = P::Chunk;
    type Output = P::Output;

    fn run<R: 'static>(
        &self,
        input: P::Chunk,
        pos: Pos,
        more: More,
        lose: Failure<P::Chunk, R>,
        succ: Success<P::Chunk, P::Output, R>,
    ) -> Outcome<P::Chunk, R> {
        let name = Arc::clone(&self.name);
        self.parser.run(
            input,
            pos,
            more,
            failure(move |input, pos, more, mut context: Vec<String>, message| {
                context.insert(0, name.to_string());
                lose(input, pos, more, context, message)
            }),
            succ,
        )
    }
}

/// Extension trait to add .label() method support for parsers
pub trait LabelExt: Parser + Sized {
    fn label(self, name: impl Into<Arc<str>>) -> Label<Self> {
        Label::new(self, name)
    }
}

/// Implement LabelExt for all parsers
impl<P> LabelExt for P where P: Parser {}
