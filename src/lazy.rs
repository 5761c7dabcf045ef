use crate::cursor::TextCursor;
use crate::error::TextcombError;
use crate::parser::Parser;

/// A lazy parser that defers the construction of the actual parser until parse time
///
/// Required for self-referential grammars: a parser whose definition refers
/// to itself (or to a later binding) cannot be built eagerly, because the
/// construction would recurse forever. The factory is invoked on every parse
/// call, never at construction.
pub struct Lazy<F> {
    factory: F,
}

impl<F> Lazy<F> {
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<'text, F, P> Parser<'text> for Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'text>,
{
    type Output = P::Output;

    fn parse(
        &self,
        cursor: TextCursor<'text>,
    ) -> Result<(Self::Output, TextCursor<'text>), TextcombError<'text>> {
        (self.factory)().parse(cursor)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<'text, F, P>(factory: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'text>,
{
    Lazy::new(factory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::literal;
    use crate::many::many;

    #[test]
    fn test_lazy_basic() {
        let cursor = TextCursor::new("aaaa");
        let parser = lazy(|| literal("a"));

        let (output, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(output, "a");
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_lazy_with_many() {
        let cursor = TextCursor::new("aaaa");
        let parser = lazy(|| many(literal("a")));

        let (output, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(output.len(), 4);
        assert_eq!(cursor.position(), 4);
    }

    #[test]
    fn test_lazy_failure_passes_through() {
        let cursor = TextCursor::new("b");
        let parser = lazy(|| literal("a"));

        assert!(parser.parse(cursor).is_err());
    }

    #[test]
    fn test_lazy_self_reference() {
        // A unit struct breaks the type cycle; lazy breaks the value cycle.
        // nested := '(' nested ')' | 'x'
        struct NestedParser;

        impl<'text> Parser<'text> for NestedParser {
            type Output = usize;

            fn parse(
                &self,
                cursor: TextCursor<'text>,
            ) -> Result<(Self::Output, TextCursor<'text>), TextcombError<'text>> {
                use crate::map::MapExt;
                use crate::one_of::OrExt;
                use crate::sequence::sequence;

                sequence((literal("("), lazy(|| NestedParser), literal(")")))
                    .map(|(_, depth, _)| depth + 1)
                    .or(literal("x").map(|_| 0))
                    .parse(cursor)
            }
        }

        let (depth, _) = NestedParser.parse(TextCursor::new("((x))")).unwrap();
        assert_eq!(depth, 2);

        let (depth, _) = NestedParser.parse(TextCursor::new("x")).unwrap();
        assert_eq!(depth, 0);

        assert!(NestedParser.parse(TextCursor::new("((x)")).is_err());
    }
}
