use crate::and::AndExt;
use crate::ascii::{is_identifier_continue, is_identifier_start};
use crate::byte::byte;
use crate::cursors::ByteCursor;
use crate::error::ParseError;
use crate::filter::FilterExt;
use crate::many::many;
use crate::map::MapExt;
use crate::parser::Parser;

/// Parser that matches an identifier: one identifier-start byte followed by
/// zero or more identifier-continue bytes, collected into a `String`.
///
/// Stops at the first byte that cannot continue the identifier; it only
/// fails when the very first byte cannot start one.
pub fn identifier<'code>()
-> impl Parser<'code, Cursor = ByteCursor<'code>, Output = String, Error = ParseError<'code>> {
    byte()
        .filter(|b| is_identifier_start(*b), "expected identifier")
        .and(many(byte().filter(
            |b| is_identifier_continue(*b),
            "expected identifier byte",
        )))
        .map(|(first, rest)| {
            let mut name = String::with_capacity(1 + rest.len());
            name.push(char::from(first));
            name.extend(rest.into_iter().map(char::from));
            name
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;

    #[test]
    fn single_letter() {
        let cursor = ByteCursor::new(b"a");
        let (name, cursor) = identifier().parse(cursor).unwrap();
        assert_eq!(name, "a");
        assert!(cursor.eos());
    }

    #[test]
    fn letters_digits_and_underscores() {
        let cursor = ByteCursor::new(b"flag_2b rest");
        let (name, cursor) = identifier().parse(cursor).unwrap();
        assert_eq!(name, "flag_2b");
        assert_eq!(cursor.value().unwrap(), b' ');
    }

    #[test]
    fn may_start_with_underscore_but_not_digit() {
        let cursor = ByteCursor::new(b"_x");
        let (name, _) = identifier().parse(cursor).unwrap();
        assert_eq!(name, "_x");

        let cursor = ByteCursor::new(b"2x");
        assert!(identifier().parse(cursor).is_err());
    }

    #[test]
    fn stops_at_the_first_non_identifier_byte() {
        let cursor = ByteCursor::new(b"a&b");
        let (name, cursor) = identifier().parse(cursor).unwrap();
        assert_eq!(name, "a");
        assert_eq!(cursor.value().unwrap(), b'&');
    }

    #[test]
    fn parsed_name_round_trips_to_the_source_text() {
        // Lexer fidelity: the produced name is exactly the consumed slice.
        let input = b"abc_123|";
        let cursor = ByteCursor::new(input);
        let (name, cursor) = identifier().parse(cursor).unwrap();
        assert_eq!(name.as_bytes(), &input[..cursor.position()]);
    }

    #[test]
    fn empty_input_fails() {
        let cursor = ByteCursor::new(b"");
        assert!(identifier().parse(cursor).is_err());
    }
}
