use crate::cursor::TextCursor;
use crate::error::TextcombError;
use crate::parser::Parser;
use regex::Regex;

/// Parser that matches a regular expression against the front of the input
///
/// The pattern is compiled anchored to the start of the remaining input,
/// whether or not the caller anchored it: an unanchored pattern could match
/// mid-string, which would violate the consume-from-the-front invariant.
/// An empty-prefix match is a valid (zero-width) success.
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Compile an anchored matcher from `pattern`
    ///
    /// An invalid pattern is a construction-time error, not a parse failure.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!("^(?:{})", pattern))?;
        Ok(Self { regex })
    }
}

impl<'text> Parser<'text> for Pattern {
    type Output = &'text str;

    fn parse(
        &self,
        cursor: TextCursor<'text>,
    ) -> Result<(Self::Output, TextCursor<'text>), TextcombError<'text>> {
        let rest = cursor.rest();
        match self.regex.find(rest) {
            Some(found) => Ok((found.as_str(), cursor.advance_bytes(found.end()))),
            None => Err(TextcombError::syntax(
                "input did not match regular expression",
                cursor.loc(),
            )),
        }
    }
}

/// Convenience function to create a Pattern parser
pub fn pattern(pattern: &str) -> Result<Pattern, regex::Error> {
    Pattern::new(pattern)
}
