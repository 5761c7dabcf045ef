use crate::cursor::TextCursor;
use crate::error::TextcombError;
use crate::parser::Parser;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// This parser never fails: zero matches is a success with an empty vector
/// and an unmoved cursor. The loop is iterative, not recursive, since match
/// counts are unbounded and must not be limited by stack depth. The failing
/// attempt that ends the loop consumed nothing, so the cursor after the last
/// success is the remaining input.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'text, P> Parser<'text> for Many<P>
where
    P: Parser<'text>,
{
    type Output = Vec<P::Output>;

    fn parse(
        &self,
        mut cursor: TextCursor<'text>,
    ) -> Result<(Self::Output, TextCursor<'text>), TextcombError<'text>> {
        let mut results = Vec::new();

        loop {
            match self.parser.parse(cursor) {
                Ok((value, next_cursor)) => {
                    results.push(value);
                    cursor = next_cursor;
                }
                Err(_) => {
                    // Zero or more, so the ending failure is not propagated
                    break;
                }
            }
        }

        Ok((results, cursor))
    }
}

/// Convenience function to create a Many parser
pub fn many<'text, P>(parser: P) -> Many<P>
where
    P: Parser<'text>,
{
    Many::new(parser)
}
