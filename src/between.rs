use crate::parser::Parser;

/// Parser combinator that matches content between opening and closing
/// delimiters, keeping only the content.
///
/// Parses `open`, then `content`, then `close` in sequence; the delimiter
/// outputs are discarded. Any failure fails the whole combinator and
/// consumes nothing from the caller's point of view.
pub struct Between<P1, P2, P3> {
    open: P1,
    content: P2,
    close: P3,
}

impl<P1, P2, P3> Between<P1, P2, P3> {
    pub fn new(open: P1, content: P2, close: P3) -> Self {
        Between {
            open,
            content,
            close,
        }
    }
}

impl<'code, P1, P2, P3> Parser<'code> for Between<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor, Error = P1::Error>,
    P3: Parser<'code, Cursor = P1::Cursor, Error = P1::Error>,
{
    type Cursor = P1::Cursor;
    type Output = P2::Output;
    type Error = P1::Error;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        let (_, cursor) = self.open.parse(cursor)?;
        let (content, cursor) = self.content.parse(cursor)?;
        let (_, cursor) = self.close.parse(cursor)?;
        Ok((content, cursor))
    }
}

/// Convenience function to create a Between parser.
pub fn between<'code, P1, P2, P3>(open: P1, content: P2, close: P3) -> Between<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor, Error = P1::Error>,
    P3: Parser<'code, Cursor = P1::Cursor, Error = P1::Error>,
{
    Between::new(open, content, close)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::byte::{byte, is_byte};
    use crate::cursor::Cursor;
    use crate::cursors::ByteCursor;

    #[test]
    fn keeps_only_the_content() {
        let cursor = ByteCursor::new(b"(a)");
        let parser = between(is_byte(b'('), byte(), is_byte(b')'));

        let (content, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(content, b'a');
        assert!(cursor.eos());
    }

    #[test]
    fn missing_open_delimiter_fails() {
        let cursor = ByteCursor::new(b"a)");
        let parser = between(is_byte(b'('), byte(), is_byte(b')'));
        assert!(parser.parse(cursor).is_err());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn missing_close_delimiter_fails() {
        let cursor = ByteCursor::new(b"(a");
        let parser = between(is_byte(b'('), byte(), is_byte(b')'));
        assert!(parser.parse(cursor).is_err());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn failing_content_fails() {
        let cursor = ByteCursor::new(b"()");
        let parser = between(is_byte(b'('), is_byte(b'a'), is_byte(b')'));
        assert!(parser.parse(cursor).is_err());
    }
}
