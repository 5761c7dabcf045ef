use crate::cursor::TextCursor;
use crate::error::TextcombError;
use crate::parser::Parser;

/// Parser combinator that feeds a parser's output into a function producing the next parser
///
/// The monadic bind: runs the inner parser, passes its output to `make`, and
/// runs the resulting parser against the remaining input. This is the hook
/// for output-dependent grammars, e.g. "parse a tag name, then require the
/// matching closing tag".
pub struct FlatMap<P, F> {
    parser: P,
    make: F,
}

impl<P, F> FlatMap<P, F> {
    pub fn new(parser: P, make: F) -> Self {
        FlatMap { parser, make }
    }
}

impl<'text, P, F, Q> Parser<'text> for FlatMap<P, F>
where
    P: Parser<'text>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'text>,
{
    type Output = Q::Output;

    fn parse(
        &self,
        cursor: TextCursor<'text>,
    ) -> Result<(Self::Output, TextCursor<'text>), TextcombError<'text>> {
        let (value, cursor) = self.parser.parse(cursor)?;
        (self.make)(value).parse(cursor)
    }
}

/// Convenience function to create a FlatMap parser
pub fn flat_map<'text, P, F, Q>(parser: P, make: F) -> FlatMap<P, F>
where
    P: Parser<'text>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'text>,
{
    FlatMap::new(parser, make)
}

/// Extension trait to add .flat_map() method support for parsers
pub trait FlatMapExt<'text>: Parser<'text> + Sized {
    fn flat_map<F, Q>(self, make: F) -> FlatMap<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<'text>,
    {
        FlatMap::new(self, make)
    }
}

/// Implement FlatMapExt for all parsers
impl<'text, P> FlatMapExt<'text> for P where P: Parser<'text> {}
