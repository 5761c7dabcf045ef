use crate::cursor::TextCursor;
use crate::error::TextcombError;
use crate::parser::Parser;

/// Parser combinator that tries an ordered set of alternatives
///
/// Applies each parser of the tuple, in order, to the same input and returns
/// the first success. If every alternative fails, the failure of the last
/// parser tried is returned and earlier failures are discarded: this is
/// ordered first-match, not longest-match or best-error reporting.
///
/// Implemented for tuples of two through twelve parsers sharing an output
/// type, so "at least two alternatives" holds by construction.
pub struct OneOf<T> {
    parsers: T,
}

impl<T> OneOf<T> {
    pub fn new(parsers: T) -> Self {
        OneOf { parsers }
    }
}

macro_rules! one_of_impl {
    ($($front:ident: $front_index:tt),+ => $last:ident: $last_index:tt) => {
        impl<'text, Out, $($front,)+ $last> Parser<'text> for OneOf<($($front,)+ $last)>
        where
            $($front: Parser<'text, Output = Out>,)+
            $last: Parser<'text, Output = Out>,
        {
            type Output = Out;

            fn parse(
                &self,
                cursor: TextCursor<'text>,
            ) -> Result<(Self::Output, TextCursor<'text>), TextcombError<'text>> {
                $(
                    if let Ok(result) = self.parsers.$front_index.parse(cursor) {
                        return Ok(result);
                    }
                )+
                self.parsers.$last_index.parse(cursor)
            }
        }
    };
}

one_of_impl!(P0: 0 => P1: 1);
one_of_impl!(P0: 0, P1: 1 => P2: 2);
one_of_impl!(P0: 0, P1: 1, P2: 2 => P3: 3);
one_of_impl!(P0: 0, P1: 1, P2: 2, P3: 3 => P4: 4);
one_of_impl!(P0: 0, P1: 1, P2: 2, P3: 3, P4: 4 => P5: 5);
one_of_impl!(P0: 0, P1: 1, P2: 2, P3: 3, P4: 4, P5: 5 => P6: 6);
one_of_impl!(P0: 0, P1: 1, P2: 2, P3: 3, P4: 4, P5: 5, P6: 6 => P7: 7);
one_of_impl!(P0: 0, P1: 1, P2: 2, P3: 3, P4: 4, P5: 5, P6: 6, P7: 7 => P8: 8);
one_of_impl!(P0: 0, P1: 1, P2: 2, P3: 3, P4: 4, P5: 5, P6: 6, P7: 7, P8: 8 => P9: 9);
one_of_impl!(P0: 0, P1: 1, P2: 2, P3: 3, P4: 4, P5: 5, P6: 6, P7: 7, P8: 8, P9: 9 => P10: 10);
one_of_impl!(P0: 0, P1: 1, P2: 2, P3: 3, P4: 4, P5: 5, P6: 6, P7: 7, P8: 8, P9: 9, P10: 10 => P11: 11);

/// Convenience function to create a OneOf parser from a tuple of alternatives
pub fn one_of<T>(parsers: T) -> OneOf<T> {
    OneOf::new(parsers)
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'text>: Parser<'text> + Sized {
    fn or<P>(self, other: P) -> OneOf<(Self, P)>
    where
        P: Parser<'text, Output = Self::Output>,
    {
        OneOf::new((self, other))
    }
}

/// Implement OrExt for all parsers
impl<'text, P> OrExt<'text> for P where P: Parser<'text> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::literal;

    #[test]
    fn test_first_alternative_succeeds() {
        let cursor = TextCursor::new("abc");
        let parser = one_of((literal("a"), literal("b")));

        let (output, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(output, "a");
        assert_eq!(cursor.rest(), "bc");
    }

    #[test]
    fn test_second_alternative_succeeds() {
        let cursor = TextCursor::new("ba");
        let parser = one_of((literal("a"), literal("b")));

        let (output, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(output, "b");
        assert_eq!(cursor.rest(), "a");
    }

    #[test]
    fn test_all_alternatives_fail() {
        let cursor = TextCursor::new("c");
        let parser = one_of((literal("a"), literal("b")));

        let result = parser.parse(cursor);
        assert!(result.is_err());
    }

    #[test]
    fn test_failure_comes_from_last_alternative() {
        let cursor = TextCursor::new("zzz");
        let parser = one_of((literal("alpha"), literal("beta"), literal("gamma")));

        let error = parser.parse(cursor).unwrap_err();
        assert!(error.to_string().contains("expected 'gamma'"));
    }

    #[test]
    fn test_first_match_wins_over_longer_match() {
        // Ordered first-match: "a" is tried first and wins even though
        // "ab" would consume more
        let cursor = TextCursor::new("ab");
        let parser = one_of((literal("a"), literal("ab")));

        let (output, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(output, "a");
        assert_eq!(cursor.rest(), "b");
    }

    #[test]
    fn test_alternatives_all_try_same_input() {
        // A failing alternative must not consume anything before the next try
        let cursor = TextCursor::new("abx");
        let parser = one_of((literal("aby"), literal("abx")));

        let (output, _) = parser.parse(cursor).unwrap();
        assert_eq!(output, "abx");
    }

    #[test]
    fn test_wide_tuple() {
        let parser = one_of((
            literal("one"),
            literal("two"),
            literal("three"),
            literal("four"),
            literal("five"),
        ));

        let (output, _) = parser.parse(TextCursor::new("four")).unwrap();
        assert_eq!(output, "four");
    }

    #[test]
    fn test_or_method_syntax() {
        let cursor = TextCursor::new("b");
        let parser = literal("a").or(literal("b"));

        let (output, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(output, "b");
        assert!(cursor.eos());
    }

    #[test]
    fn test_or_method_chain() {
        let cursor = TextCursor::new("c");
        let parser = literal("a").or(literal("b")).or(literal("c"));

        let (output, _) = parser.parse(cursor).unwrap();
        assert_eq!(output, "c");
    }
}
