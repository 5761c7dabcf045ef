use crate::cursor::TextCursor;
use crate::error::TextcombError;
use crate::parser::Parser;

/// Parser that consumes and returns a single character
///
/// Consumes exactly one Unicode scalar value. Characters outside the basic
/// multilingual plane are a single `char` in Rust, so they are consumed as
/// one unit, never split.
pub struct AnyCharacter;

impl<'text> Parser<'text> for AnyCharacter {
    type Output = char;

    fn parse(
        &self,
        cursor: TextCursor<'text>,
    ) -> Result<(Self::Output, TextCursor<'text>), TextcombError<'text>> {
        let ch = cursor.value()?;
        Ok((ch, cursor.advance()))
    }
}

/// Convenience function to create an AnyCharacter parser
pub fn any_character() -> AnyCharacter {
    AnyCharacter
}
