use crate::parser::Parser;

/// Parser combinator that tries the first parser, and if it fails, tries
/// the second parser on the same input.
///
/// First match wins: once the first parser succeeds the second is never
/// attempted, and there is no longest-match comparison or re-attempt after
/// a branch consumed input. Grammars built on this combinator must keep
/// their alternatives non-overlapping in what they can start consuming.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for Or<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor, Output = P1::Output, Error = P1::Error>,
{
    type Cursor = P1::Cursor;
    type Output = P1::Output;
    type Error = P1::Error;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        match self.parser1.parse(cursor) {
            Ok(result) => Ok(result),
            // The cursor is Copy; the second parser sees the original position.
            Err(_) => self.parser2.parse(cursor),
        }
    }
}

/// Convenience function to create an Or parser.
pub fn or<'code, P1, P2>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor, Output = P1::Output, Error = P1::Error>,
{
    Or::new(parser1, parser2)
}

/// Extension trait to add .or() method support for parsers.
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, Cursor = Self::Cursor, Output = Self::Output, Error = Self::Error>,
    {
        Or::new(self, other)
    }
}

impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}
