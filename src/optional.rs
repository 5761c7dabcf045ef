use crate::cursor::TextCursor;
use crate::error::TextcombError;
use crate::parser::Parser;

/// Parser combinator that makes another parser optional
///
/// A success is wrapped in `Some`; a failure becomes `Ok(None)` with the
/// cursor unmoved. This parser never returns an error.
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<'text, P> Parser<'text> for Optional<P>
where
    P: Parser<'text>,
{
    type Output = Option<P::Output>;

    fn parse(
        &self,
        cursor: TextCursor<'text>,
    ) -> Result<(Self::Output, TextCursor<'text>), TextcombError<'text>> {
        match self.parser.parse(cursor) {
            Ok((value, cursor)) => Ok((Some(value), cursor)),
            Err(_) => Ok((None, cursor)),
        }
    }
}

/// Convenience function to create an Optional parser
pub fn optional<'text, P>(parser: P) -> Optional<P>
where
    P: Parser<'text>,
{
    Optional::new(parser)
}

/// Extension trait to add .optional() method support for parsers
pub trait OptionalExt<'text>: Parser<'text> + Sized {
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }
}

/// Implement OptionalExt for all parsers
impl<'text, P> OptionalExt<'text> for P where P: Parser<'text> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::literal;
    use crate::sequence::AndExt;

    #[test]
    fn test_present() {
        let cursor = TextCursor::new("-42");
        let parser = optional(literal("-"));

        let (sign, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(sign.as_deref(), Some("-"));
        assert_eq!(cursor.rest(), "42");
    }

    #[test]
    fn test_absent() {
        let cursor = TextCursor::new("42");
        let parser = optional(literal("-"));

        let (sign, cursor) = parser.parse(cursor).unwrap();
        assert!(sign.is_none());
        // Nothing consumed on the None path
        assert_eq!(cursor.rest(), "42");
    }

    #[test]
    fn test_never_fails_on_empty_input() {
        let cursor = TextCursor::new("");
        let parser = optional(literal("-"));

        let (sign, _) = parser.parse(cursor).unwrap();
        assert!(sign.is_none());
    }

    #[test]
    fn test_in_sequence() {
        let parser = literal("f").and(literal("n").optional());

        let ((f, n), _) = parser.parse(TextCursor::new("fn")).unwrap();
        assert_eq!(f, "f");
        assert_eq!(n.as_deref(), Some("n"));

        let ((f, n), cursor) = parser.parse(TextCursor::new("fx")).unwrap();
        assert_eq!(f, "f");
        assert!(n.is_none());
        assert_eq!(cursor.rest(), "x");
    }
}
