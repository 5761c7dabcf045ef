use crate::cursor::TextCursor;
use crate::error::TextcombError;
use crate::parser::Parser;

/// Parser that always succeeds without consuming input
///
/// Its `()` output is the "no value" marker: combine with `value` to supply
/// a default arm in an alternation. This parser never returns an error.
pub struct Nothing;

impl<'text> Parser<'text> for Nothing {
    type Output = ();

    fn parse(
        &self,
        cursor: TextCursor<'text>,
    ) -> Result<(Self::Output, TextCursor<'text>), TextcombError<'text>> {
        Ok(((), cursor))
    }
}

/// Convenience function to create a Nothing parser
pub fn nothing() -> Nothing {
    Nothing
}
