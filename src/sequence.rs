use crate::cursor::TextCursor;
use crate::error::TextcombError;
use crate::parser::Parser;

/// Parser combinator that applies an ordered set of parsers in turn
///
/// Threads the remaining input from each parser into the next; the output is
/// the tuple of each step's output, in order, so the steps keep their own
/// types. The first failing step fails the whole sequence, with no partial
/// output retained.
///
/// Implemented for tuples of two through twelve parsers, so "at least two
/// steps" holds by construction. Chaining `.and()` instead produces nested
/// pairs like `((a, b), c)`; the tuple form keeps the output flat.
pub struct Sequence<T> {
    parsers: T,
}

impl<T> Sequence<T> {
    pub fn new(parsers: T) -> Self {
        Sequence { parsers }
    }
}

macro_rules! sequence_impl {
    ($($parser:ident $output:ident: $index:tt),+) => {
        impl<'text, $($parser),+> Parser<'text> for Sequence<($($parser,)+)>
        where
            $($parser: Parser<'text>,)+
        {
            type Output = ($($parser::Output,)+);

            fn parse(
                &self,
                cursor: TextCursor<'text>,
            ) -> Result<(Self::Output, TextCursor<'text>), TextcombError<'text>> {
                $(let ($output, cursor) = self.parsers.$index.parse(cursor)?;)+
                Ok((($($output,)+), cursor))
            }
        }
    };
}

sequence_impl!(P0 out0: 0, P1 out1: 1);
sequence_impl!(P0 out0: 0, P1 out1: 1, P2 out2: 2);
sequence_impl!(P0 out0: 0, P1 out1: 1, P2 out2: 2, P3 out3: 3);
sequence_impl!(P0 out0: 0, P1 out1: 1, P2 out2: 2, P3 out3: 3, P4 out4: 4);
sequence_impl!(P0 out0: 0, P1 out1: 1, P2 out2: 2, P3 out3: 3, P4 out4: 4, P5 out5: 5);
sequence_impl!(P0 out0: 0, P1 out1: 1, P2 out2: 2, P3 out3: 3, P4 out4: 4, P5 out5: 5, P6 out6: 6);
sequence_impl!(P0 out0: 0, P1 out1: 1, P2 out2: 2, P3 out3: 3, P4 out4: 4, P5 out5: 5, P6 out6: 6, P7 out7: 7);
sequence_impl!(P0 out0: 0, P1 out1: 1, P2 out2: 2, P3 out3: 3, P4 out4: 4, P5 out5: 5, P6 out6: 6, P7 out7: 7, P8 out8: 8);
sequence_impl!(P0 out0: 0, P1 out1: 1, P2 out2: 2, P3 out3: 3, P4 out4: 4, P5 out5: 5, P6 out6: 6, P7 out7: 7, P8 out8: 8, P9 out9: 9);
sequence_impl!(P0 out0: 0, P1 out1: 1, P2 out2: 2, P3 out3: 3, P4 out4: 4, P5 out5: 5, P6 out6: 6, P7 out7: 7, P8 out8: 8, P9 out9: 9, P10 out10: 10);
sequence_impl!(P0 out0: 0, P1 out1: 1, P2 out2: 2, P3 out3: 3, P4 out4: 4, P5 out5: 5, P6 out6: 6, P7 out7: 7, P8 out8: 8, P9 out9: 9, P10 out10: 10, P11 out11: 11);

/// Convenience function to create a Sequence parser from a tuple of steps
pub fn sequence<T>(parsers: T) -> Sequence<T> {
    Sequence::new(parsers)
}

/// Extension trait to add .and() method support for parsers
pub trait AndExt<'text>: Parser<'text> + Sized {
    fn and<P>(self, other: P) -> Sequence<(Self, P)>
    where
        P: Parser<'text>,
    {
        Sequence::new((self, other))
    }
}

/// Implement AndExt for all parsers
impl<'text, P> AndExt<'text> for P where P: Parser<'text> {}
