use crate::cursor::TextCursor;
use crate::error::TextcombError;
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser combinator that transforms the output of a parser with a fallible function
///
/// Like `map`, but the transform may reject the value: a rejection becomes a
/// parse failure positioned where the inner parser began. The remaining input
/// of a successful transform is the inner parser's remaining input, untouched.
pub struct TryMap<P, F> {
    parser: P,
    transform: F,
}

impl<P, F> TryMap<P, F> {
    pub fn new(parser: P, transform: F) -> Self {
        TryMap { parser, transform }
    }
}

impl<'text, P, F, T, U> Parser<'text> for TryMap<P, F>
where
    P: Parser<'text, Output = T>,
    F: Fn(T) -> Result<U, Cow<'static, str>>,
{
    type Output = U;

    fn parse(
        &self,
        cursor: TextCursor<'text>,
    ) -> Result<(Self::Output, TextCursor<'text>), TextcombError<'text>> {
        let start = cursor;
        let (value, cursor) = self.parser.parse(start)?;
        match (self.transform)(value) {
            Ok(transformed) => Ok((transformed, cursor)),
            Err(message) => Err(TextcombError::syntax(message, start.loc())),
        }
    }
}

/// Convenience function to create a TryMap parser
pub fn try_map<'text, P, F, T, U>(parser: P, transform: F) -> TryMap<P, F>
where
    P: Parser<'text, Output = T>,
    F: Fn(T) -> Result<U, Cow<'static, str>>,
{
    TryMap::new(parser, transform)
}

/// Extension trait to add .try_map() method support for parsers
pub trait TryMapExt<'text>: Parser<'text> + Sized {
    fn try_map<F, U>(self, transform: F) -> TryMap<Self, F>
    where
        F: Fn(Self::Output) -> Result<U, Cow<'static, str>>,
    {
        TryMap::new(self, transform)
    }
}

/// Implement TryMapExt for all parsers
impl<'text, P> TryMapExt<'text> for P where P: Parser<'text> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::pattern;

    fn number<'text>() -> impl Parser<'text, Output = i64> {
        try_map(pattern("[0-9]+").unwrap(), |digits: &str| {
            digits
                .parse::<i64>()
                .map_err(|_| Cow::from(format!("number out of range: {}", digits)))
        })
    }

    #[test]
    fn test_try_map_success() {
        let cursor = TextCursor::new("123abc");
        let parser = number();

        let (value, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(value, 123);
        assert_eq!(cursor.rest(), "abc");
    }

    #[test]
    fn test_try_map_rejection_becomes_failure() {
        // 30 digits overflow i64
        let cursor = TextCursor::new("123456789012345678901234567890");
        let parser = number();

        let result = parser.parse(cursor);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("out of range"));
    }

    #[test]
    fn test_try_map_rejection_reports_start_position() {
        let text = "xx99999999999999999999";
        let cursor = TextCursor::new(text).advance_bytes(2);
        let parser = number();

        let error = parser.parse(cursor).unwrap_err();
        assert_eq!(error.position(), 2);
        assert_eq!(error.remaining(), "99999999999999999999");
    }

    #[test]
    fn test_try_map_inner_failure_propagates() {
        let cursor = TextCursor::new("abc");
        let parser = number();

        let result = parser.parse(cursor);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("did not match regular expression")
        );
    }

    #[test]
    fn test_try_map_method_syntax() {
        let parser = pattern("[a-z]+")
            .unwrap()
            .try_map(|word: &str| match word {
                "true" => Ok(true),
                "false" => Ok(false),
                _ => Err(Cow::from("expected 'true' or 'false'")),
            });

        let (output, _) = parser.parse(TextCursor::new("true")).unwrap();
        assert!(output);

        let result = parser.parse(TextCursor::new("maybe"));
        assert!(result.is_err());
    }
}
