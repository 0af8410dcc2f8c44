use crate::cursor::Cursor;

/// Core trait of the combinator engine.
///
/// A parser is a pure function from a cursor to either a value plus the
/// advanced cursor, or an error. Failures must not consume input: cursors
/// are `Copy`, so a caller that holds on to the cursor it passed in can try
/// another alternative at the very same position.
pub trait Parser<'code> {
    type Cursor: Cursor<'code>;
    type Output;
    type Error;

    fn parse(
        &self,
        cursor: Self::Cursor,
    ) -> Result<(Self::Output, Self::Cursor), Self::Error>;
}
