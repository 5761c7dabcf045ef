use crate::cursor::TextCursor;
use crate::error::TextcombError;
use crate::parser::Parser;

/// Run a parser against an input string, requiring full consumption
///
/// Every parser in this crate is partial-match by default so that parsers
/// compose; this is the one place where "did the whole input match" is
/// enforced. On success the bare output is returned, unwrapped. If the
/// parser succeeds but leaves input behind, the call fails.
pub fn parse<'text, P>(parser: &P, input: &'text str) -> Result<P::Output, TextcombError<'text>>
where
    P: Parser<'text>,
{
    let (output, cursor) = parser.parse(TextCursor::new(input))?;
    if cursor.eos() {
        Ok(output)
    } else {
        Err(TextcombError::syntax(
            "excess content followed valid input",
            cursor.loc(),
        ))
    }
}
