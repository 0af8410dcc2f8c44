use crate::parser::Parser;

/// Parser combinator that sequences two parsers and returns both results as
/// a tuple.
///
/// The tuple is an intermediate carrier: grammar rules destructure it with
/// `map` right away. Chained `.and()` calls nest, so `a.and(b).and(c)`
/// yields `((A, B), C)`; the destructuring pattern stays explicit about the
/// parsing order.
///
/// If either parser fails the whole sequence fails. The caller's cursor is
/// unaffected, so the sequence backtracks to its starting position.
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor, Error = P1::Error>,
{
    type Cursor = P1::Cursor;
    type Output = (P1::Output, P2::Output);
    type Error = P1::Error;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        let (first, cursor) = self.parser1.parse(cursor)?;
        let (second, cursor) = self.parser2.parse(cursor)?;
        Ok(((first, second), cursor))
    }
}

/// Convenience function to create an And parser.
pub fn and<'code, P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor, Error = P1::Error>,
{
    And::new(parser1, parser2)
}

/// Extension trait to add .and() method support for parsers.
pub trait AndExt<'code>: Parser<'code> + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<'code, Cursor = Self::Cursor, Error = Self::Error>,
    {
        And::new(self, other)
    }
}

impl<'code, P> AndExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::byte::is_byte;
    use crate::cursor::Cursor;
    use crate::cursors::ByteCursor;

    #[test]
    fn both_succeed() {
        let cursor = ByteCursor::new(b"!(x");
        let parser = is_byte(b'!').and(is_byte(b'('));

        let ((bang, open), cursor) = parser.parse(cursor).unwrap();
        assert_eq!(bang, b'!');
        assert_eq!(open, b'(');
        assert_eq!(cursor.value().unwrap(), b'x');
    }

    #[test]
    fn first_failure_fails_the_sequence() {
        let cursor = ByteCursor::new(b"(x");
        let parser = is_byte(b'!').and(is_byte(b'('));
        assert!(parser.parse(cursor).is_err());
    }

    #[test]
    fn second_failure_fails_the_sequence() {
        let cursor = ByteCursor::new(b"!x");
        let parser = is_byte(b'!').and(is_byte(b'('));
        assert!(parser.parse(cursor).is_err());
        // Backtracking: nothing was consumed from the caller's cursor.
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn chains_nest_to_the_left() {
        let cursor = ByteCursor::new(b"a&b");
        let parser = is_byte(b'a').and(is_byte(b'&')).and(is_byte(b'b'));

        let (((a, amp), b), cursor) = parser.parse(cursor).unwrap();
        assert_eq!((a, amp, b), (b'a', b'&', b'b'));
        assert!(cursor.eos());
    }

    #[test]
    fn function_syntax() {
        let cursor = ByteCursor::new(b"ab");
        let ((a, b), _) = and(is_byte(b'a'), is_byte(b'b')).parse(cursor).unwrap();
        assert_eq!((a, b), (b'a', b'b'));
    }
}
