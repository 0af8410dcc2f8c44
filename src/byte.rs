use crate::cursor::Cursor;
use crate::cursors::ByteCursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser that consumes and returns a single byte, whatever it is.
pub struct ByteParser;

impl<'code> Parser<'code> for ByteParser {
    type Cursor = ByteCursor<'code>;
    type Output = u8;
    type Error = ParseError<'code>;

    fn parse(
        &self,
        cursor: ByteCursor<'code>,
    ) -> Result<(u8, ByteCursor<'code>), ParseError<'code>> {
        let byte = cursor.value()?;
        Ok((byte, cursor.next()))
    }
}

/// Convenience function to create a ByteParser.
pub fn byte() -> ByteParser {
    ByteParser
}

/// Parser that matches one specific byte.
pub struct IsByteParser {
    expected: u8,
}

impl<'code> Parser<'code> for IsByteParser {
    type Cursor = ByteCursor<'code>;
    type Output = u8;
    type Error = ParseError<'code>;

    fn parse(
        &self,
        cursor: ByteCursor<'code>,
    ) -> Result<(u8, ByteCursor<'code>), ParseError<'code>> {
        match cursor.value() {
            Ok(byte) if byte == self.expected => Ok((byte, cursor.next())),
            Ok(byte) => {
                let (data, position) = cursor.inner();
                Err(ParseError::syntax(
                    format!(
                        "expected '{}', found '{}'",
                        self.expected.escape_ascii(),
                        byte.escape_ascii()
                    ),
                    data,
                    position,
                ))
            }
            Err(e) => Err(e),
        }
    }
}

/// Convenience function to create an IsByteParser.
pub fn is_byte(expected: u8) -> IsByteParser {
    IsByteParser { expected }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_consumes_one_byte() {
        let cursor = ByteCursor::new(b"ab");
        let (first, cursor) = byte().parse(cursor).unwrap();
        assert_eq!(first, b'a');
        assert_eq!(cursor.value().unwrap(), b'b');
    }

    #[test]
    fn byte_fails_at_end_of_input() {
        let cursor = ByteCursor::new(b"");
        assert!(byte().parse(cursor).is_err());
    }

    #[test]
    fn is_byte_matches_the_expected_byte() {
        let cursor = ByteCursor::new(b"&b");
        let (matched, cursor) = is_byte(b'&').parse(cursor).unwrap();
        assert_eq!(matched, b'&');
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn is_byte_rejects_anything_else() {
        let cursor = ByteCursor::new(b"|b");
        let err = is_byte(b'&').parse(cursor).unwrap_err();
        assert!(err.to_string().contains("expected '&'"));
        // The caller's cursor is untouched and can be reused.
        assert_eq!(cursor.value().unwrap(), b'|');
    }

    #[test]
    fn is_byte_fails_at_end_of_input() {
        let cursor = ByteCursor::new(b"");
        assert!(is_byte(b'!').parse(cursor).is_err());
    }
}
