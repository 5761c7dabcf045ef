use crate::cursor::TextCursor;
use crate::error::TextcombError;
use crate::parser::Parser;

/// Parser combinator that matches content between two delimiters
///
/// Runs open, content, and close in order; the output is the content alone.
/// The delimiters' outputs are discarded.
pub struct Between<O, P, C> {
    open: O,
    parser: P,
    close: C,
}

impl<O, P, C> Between<O, P, C> {
    pub fn new(open: O, parser: P, close: C) -> Self {
        Between {
            open,
            parser,
            close,
        }
    }
}

impl<'text, O, P, C> Parser<'text> for Between<O, P, C>
where
    O: Parser<'text>,
    P: Parser<'text>,
    C: Parser<'text>,
{
    type Output = P::Output;

    fn parse(
        &self,
        cursor: TextCursor<'text>,
    ) -> Result<(Self::Output, TextCursor<'text>), TextcombError<'text>> {
        let (_, cursor) = self.open.parse(cursor)?;
        let (value, cursor) = self.parser.parse(cursor)?;
        let (_, cursor) = self.close.parse(cursor)?;
        Ok((value, cursor))
    }
}

/// Convenience function to create a Between parser
pub fn between<'text, O, P, C>(open: O, parser: P, close: C) -> Between<O, P, C>
where
    O: Parser<'text>,
    P: Parser<'text>,
    C: Parser<'text>,
{
    Between::new(open, parser, close)
}
