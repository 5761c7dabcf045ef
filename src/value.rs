use crate::cursor::TextCursor;
use crate::error::TextcombError;
use crate::parser::Parser;

/// Parser combinator that replaces a parser's output with a fixed value
///
/// Runs the inner parser and, on success, discards its output in favor of a
/// clone of `output`, keeping the remaining input. Failure passes through
/// unchanged. Useful for keyword parsers whose matched text is irrelevant.
pub struct Value<P, T> {
    parser: P,
    output: T,
}

impl<P, T> Value<P, T> {
    pub fn new(parser: P, output: T) -> Self {
        Value { parser, output }
    }
}

impl<'text, P, T> Parser<'text> for Value<P, T>
where
    P: Parser<'text>,
    T: Clone,
{
    type Output = T;

    fn parse(
        &self,
        cursor: TextCursor<'text>,
    ) -> Result<(Self::Output, TextCursor<'text>), TextcombError<'text>> {
        let (_, cursor) = self.parser.parse(cursor)?;
        Ok((self.output.clone(), cursor))
    }
}

/// Convenience function to create a Value parser
pub fn value<'text, P, T>(parser: P, output: T) -> Value<P, T>
where
    P: Parser<'text>,
    T: Clone,
{
    Value::new(parser, output)
}

/// Extension trait to add .value() method support for parsers
pub trait ValueExt<'text>: Parser<'text> + Sized {
    fn value<T>(self, output: T) -> Value<Self, T>
    where
        T: Clone,
    {
        Value::new(self, output)
    }
}

/// Implement ValueExt for all parsers
impl<'text, P> ValueExt<'text> for P where P: Parser<'text> {}
