use crate::cursor::TextCursor;
use crate::error::TextcombError;
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser that matches an exact string at the front of the input
///
/// The empty literal matches any input, consuming nothing.
pub struct Literal {
    expected: Cow<'static, str>,
}

impl Literal {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl<'text> Parser<'text> for Literal {
    type Output = Cow<'static, str>;

    fn parse(
        &self,
        cursor: TextCursor<'text>,
    ) -> Result<(Self::Output, TextCursor<'text>), TextcombError<'text>> {
        if cursor.rest().starts_with(self.expected.as_ref()) {
            // Clone is cheap here - just copies the reference for &'static str
            Ok((self.expected.clone(), cursor.advance_bytes(self.expected.len())))
        } else {
            Err(TextcombError::syntax(
                format!("expected '{}'", self.expected),
                cursor.loc(),
            ))
        }
    }
}

/// Convenience function to create a Literal parser
pub fn literal(expected: impl Into<Cow<'static, str>>) -> Literal {
    Literal::new(expected)
}
