use crate::cursor::TextCursor;
use crate::error::TextcombError;
use crate::parser::Parser;

/// Parser combinator that matches one or more occurrences of the given parser
///
/// One required success, then the zero-or-more loop of `Many`: collect until
/// the first failing attempt, which is discarded.
pub struct Some<P> {
    parser: P,
}

impl<P> Some<P> {
    pub fn new(parser: P) -> Self {
        Some { parser }
    }
}

impl<'text, P> Parser<'text> for Some<P>
where
    P: Parser<'text>,
{
    type Output = Vec<P::Output>;

    fn parse(
        &self,
        cursor: TextCursor<'text>,
    ) -> Result<(Self::Output, TextCursor<'text>), TextcombError<'text>> {
        let mut results = Vec::new();

        // First parse must succeed
        let (first_value, mut cursor) = self.parser.parse(cursor)?;
        results.push(first_value);

        loop {
            match self.parser.parse(cursor) {
                Ok((value, next_cursor)) => {
                    results.push(value);
                    cursor = next_cursor;
                }
                Err(_) => {
                    // Stop on first failure after at least one match
                    break;
                }
            }
        }

        Ok((results, cursor))
    }
}

/// Convenience function to create a Some parser
pub fn some<'text, P>(parser: P) -> Some<P>
where
    P: Parser<'text>,
{
    Some::new(parser)
}
