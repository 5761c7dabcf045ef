use crate::cursor::TextCursor;
use crate::error::TextcombError;
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser combinator for negative lookahead
///
/// Runs the carrier parser; on its success, runs `not` against the
/// *remaining* input. If `not` matches there, the whole combinator fails and
/// the carrier's success is discarded; otherwise the success passes through
/// with the lookahead unconsumed. Used for rules like "a keyword not
/// immediately followed by an identifier character".
pub struct NotFollowedBy<P, N> {
    parser: P,
    not: N,
    followed_by_name: Cow<'static, str>,
}

impl<P, N> NotFollowedBy<P, N> {
    pub fn new(parser: P, not: N, followed_by_name: impl Into<Cow<'static, str>>) -> Self {
        NotFollowedBy {
            parser,
            not,
            followed_by_name: followed_by_name.into(),
        }
    }
}

impl<'text, P, N> Parser<'text> for NotFollowedBy<P, N>
where
    P: Parser<'text>,
    N: Parser<'text>,
{
    type Output = P::Output;

    fn parse(
        &self,
        cursor: TextCursor<'text>,
    ) -> Result<(Self::Output, TextCursor<'text>), TextcombError<'text>> {
        let (value, cursor) = self.parser.parse(cursor)?;
        match self.not.parse(cursor) {
            Ok(_) => Err(TextcombError::syntax(
                format!(
                    "input was unexpectedly followed by {}",
                    self.followed_by_name
                ),
                cursor.loc(),
            )),
            Err(_) => Ok((value, cursor)),
        }
    }
}

/// Convenience function to create a NotFollowedBy parser
pub fn not_followed_by<'text, P, N>(
    parser: P,
    not: N,
    followed_by_name: impl Into<Cow<'static, str>>,
) -> NotFollowedBy<P, N>
where
    P: Parser<'text>,
    N: Parser<'text>,
{
    NotFollowedBy::new(parser, not, followed_by_name)
}

/// Extension trait to add .not_followed_by() method support for parsers
pub trait NotFollowedByExt<'text>: Parser<'text> + Sized {
    fn not_followed_by<N>(
        self,
        not: N,
        followed_by_name: impl Into<Cow<'static, str>>,
    ) -> NotFollowedBy<Self, N>
    where
        N: Parser<'text>,
    {
        NotFollowedBy::new(self, not, followed_by_name)
    }
}

/// Implement NotFollowedByExt for all parsers
impl<'text, P> NotFollowedByExt<'text> for P where P: Parser<'text> {}
