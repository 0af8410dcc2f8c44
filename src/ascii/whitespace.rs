use crate::and::AndExt;
use crate::ascii::is_whitespace;
use crate::byte::byte;
use crate::cursors::ByteCursor;
use crate::error::ParseError;
use crate::filter::FilterExt;
use crate::many::many;
use crate::map::MapExt;
use crate::parser::Parser;

/// Parser that matches a single ASCII whitespace byte (space, tab, newline,
/// carriage return).
pub fn whitespace<'code>()
-> impl Parser<'code, Cursor = ByteCursor<'code>, Output = u8, Error = ParseError<'code>> {
    byte().filter(|b| is_whitespace(*b), "expected whitespace")
}

/// Wraps a parser so any leading whitespace is consumed and discarded
/// before the parser runs.
///
/// This is the single place the grammar threads whitespace handling
/// through; rules never skip whitespace themselves.
pub fn skip_whitespace<'code, P>(
    parser: P,
) -> impl Parser<'code, Cursor = ByteCursor<'code>, Output = P::Output, Error = ParseError<'code>>
where
    P: Parser<'code, Cursor = ByteCursor<'code>, Error = ParseError<'code>>,
{
    many(whitespace()).and(parser).map(|(_, value)| value)
}
