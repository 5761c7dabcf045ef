use crate::cursor::TextCursor;
use crate::error::TextcombError;
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser that applies a predicate function to filter the output of another parser
///
/// A rejected value becomes a failure positioned where the inner parser
/// began, carrying the given message.
pub struct Filter<P, F> {
    parser: P,
    predicate: F,
    message: Cow<'static, str>,
}

impl<P, F> Filter<P, F> {
    pub fn new(parser: P, predicate: F, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            parser,
            predicate,
            message: message.into(),
        }
    }
}

impl<'text, P, F, T> Parser<'text> for Filter<P, F>
where
    P: Parser<'text, Output = T>,
    F: Fn(&T) -> bool,
{
    type Output = T;

    fn parse(
        &self,
        cursor: TextCursor<'text>,
    ) -> Result<(Self::Output, TextCursor<'text>), TextcombError<'text>> {
        let start = cursor;
        let (value, cursor) = self.parser.parse(start)?;
        if (self.predicate)(&value) {
            Ok((value, cursor))
        } else {
            Err(TextcombError::syntax(self.message.clone(), start.loc()))
        }
    }
}

/// Convenience function to create a Filter parser
pub fn filter<'text, P, F>(
    parser: P,
    predicate: F,
    message: impl Into<Cow<'static, str>>,
) -> Filter<P, F>
where
    P: Parser<'text>,
    F: Fn(&P::Output) -> bool,
{
    Filter::new(parser, predicate, message)
}

/// Extension trait to add .filter() method support for parsers
pub trait FilterExt<'text>: Parser<'text> + Sized {
    fn filter<F>(self, predicate: F, message: impl Into<Cow<'static, str>>) -> Filter<Self, F>
    where
        F: Fn(&Self::Output) -> bool,
    {
        Filter::new(self, predicate, message)
    }
}

/// Implement FilterExt for all parsers
impl<'text, P> FilterExt<'text> for P where P: Parser<'text> {}
