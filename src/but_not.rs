use crate::cursor::TextCursor;
use crate::error::TextcombError;
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser combinator that excludes inputs matched by a second parser
///
/// Runs the carrier parser; on its success, runs `not` against the *original*
/// input. If `not` also matches there, the whole combinator fails and the
/// carrier's success is discarded. Used for exclusion rules such as "any
/// identifier except a reserved word".
pub struct ButNot<P, N> {
    parser: P,
    not: N,
    not_name: Cow<'static, str>,
}

impl<P, N> ButNot<P, N> {
    pub fn new(parser: P, not: N, not_name: impl Into<Cow<'static, str>>) -> Self {
        ButNot {
            parser,
            not,
            not_name: not_name.into(),
        }
    }
}

impl<'text, P, N> Parser<'text> for ButNot<P, N>
where
    P: Parser<'text>,
    N: Parser<'text>,
{
    type Output = P::Output;

    fn parse(
        &self,
        cursor: TextCursor<'text>,
    ) -> Result<(Self::Output, TextCursor<'text>), TextcombError<'text>> {
        let start = cursor;
        let (value, cursor) = self.parser.parse(start)?;
        match self.not.parse(start) {
            Ok(_) => Err(TextcombError::syntax(
                format!("input was unexpectedly {}", self.not_name),
                start.loc(),
            )),
            Err(_) => Ok((value, cursor)),
        }
    }
}

/// Convenience function to create a ButNot parser
pub fn but_not<'text, P, N>(
    parser: P,
    not: N,
    not_name: impl Into<Cow<'static, str>>,
) -> ButNot<P, N>
where
    P: Parser<'text>,
    N: Parser<'text>,
{
    ButNot::new(parser, not, not_name)
}

/// Extension trait to add .but_not() method support for parsers
pub trait ButNotExt<'text>: Parser<'text> + Sized {
    fn but_not<N>(self, not: N, not_name: impl Into<Cow<'static, str>>) -> ButNot<Self, N>
    where
        N: Parser<'text>,
    {
        ButNot::new(self, not, not_name)
    }
}

/// Implement ButNotExt for all parsers
impl<'text, P> ButNotExt<'text> for P where P: Parser<'text> {}
