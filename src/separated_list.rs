use crate::cursor::TextCursor;
use crate::error::TextcombError;
use crate::parser::Parser;

/// Parser combinator that matches a list of items separated by a parser
///
/// Parses one required element, then zero or more (separator + element)
/// pairs, iteratively. Separator outputs are discarded. A trailing separator
/// is not consumed: when a separator matches but the following element does
/// not, the loop stops before either.
pub struct SeparatedList<P, S> {
    parser: P,
    separator: S,
}

impl<P, S> SeparatedList<P, S> {
    pub fn new(parser: P, separator: S) -> Self {
        SeparatedList { parser, separator }
    }
}

impl<'text, P, S> Parser<'text> for SeparatedList<P, S>
where
    P: Parser<'text>,
    S: Parser<'text>,
{
    type Output = Vec<P::Output>;

    fn parse(
        &self,
        cursor: TextCursor<'text>,
    ) -> Result<(Self::Output, TextCursor<'text>), TextcombError<'text>> {
        let mut results = Vec::new();

        // Parse the first element (required)
        let (first_value, mut cursor) = self.parser.parse(cursor)?;
        results.push(first_value);

        loop {
            let after_element = cursor;
            match self.separator.parse(after_element) {
                Ok((_, after_separator)) => match self.parser.parse(after_separator) {
                    Ok((value, next_cursor)) => {
                        results.push(value);
                        cursor = next_cursor;
                    }
                    Err(_) => {
                        // Separator without element: leave both unconsumed
                        cursor = after_element;
                        break;
                    }
                },
                Err(_) => break,
            }
        }

        Ok((results, cursor))
    }
}

/// Convenience function to create a SeparatedList parser
pub fn separated_list<'text, P, S>(parser: P, separator: S) -> SeparatedList<P, S>
where
    P: Parser<'text>,
    S: Parser<'text>,
{
    SeparatedList::new(parser, separator)
}
