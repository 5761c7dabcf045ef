use crate::cursor::TextCursor;
use crate::error::TextcombError;

/// Core parser trait for parser combinators
pub trait Parser<'text>: Sized {
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns Ok with the parsed value and the advanced cursor on success,
    /// or Err if the parse fails. A failure never consumes input: callers
    /// still hold their copy of the cursor and may try something else.
    fn parse(
        &self,
        cursor: TextCursor<'text>,
    ) -> Result<(Self::Output, TextCursor<'text>), TextcombError<'text>>;
}
