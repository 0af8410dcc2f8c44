use crate::cursor::Cursor;
use crate::cursors::ByteCursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser that matches a fixed string byte-by-byte.
///
/// On any mismatch the whole literal fails. No partial consumption leaks
/// out: the caller still holds the cursor it passed in and resumes from
/// there.
pub struct LiteralParser {
    expected: &'static str,
}

impl<'code> Parser<'code> for LiteralParser {
    type Cursor = ByteCursor<'code>;
    type Output = &'static str;
    type Error = ParseError<'code>;

    fn parse(
        &self,
        cursor: ByteCursor<'code>,
    ) -> Result<(&'static str, ByteCursor<'code>), ParseError<'code>> {
        let mut current = cursor;
        for expected in self.expected.bytes() {
            match current.value() {
                Ok(byte) if byte == expected => current = current.next(),
                Ok(byte) => {
                    let (data, position) = current.inner();
                    return Err(ParseError::syntax(
                        format!(
                            "expected \"{}\", found '{}'",
                            self.expected,
                            byte.escape_ascii()
                        ),
                        data,
                        position,
                    ));
                }
                Err(e) => return Err(e),
            }
        }
        Ok((self.expected, current))
    }
}

/// Convenience function to create a LiteralParser.
pub fn literal(expected: &'static str) -> LiteralParser {
    LiteralParser { expected }
}
