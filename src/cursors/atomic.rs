use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::error::{CodeLoc, ParseError};

/// Cursor over a slice of atomic elements.
///
/// `EndOfInput` is the explicit "no more input" marker: advancing past the
/// last element lands there and stays there, and a cursor over an empty
/// slice starts there. All state is a shared slice plus an index, so
/// copying a cursor to save a backtrack point costs nothing.
#[derive(Debug, Copy, Clone)]
pub enum AtomicCursor<'code, T: Atomic> {
    Valid { data: &'code [T], position: usize },
    EndOfInput { data: &'code [T] },
}

impl<'code, T: Atomic> AtomicCursor<'code, T> {
    pub fn new(data: &'code [T]) -> Self {
        if data.is_empty() {
            AtomicCursor::EndOfInput { data }
        } else {
            AtomicCursor::Valid { data, position: 0 }
        }
    }
}

impl<'code, T: Atomic + 'code> Cursor<'code> for AtomicCursor<'code, T> {
    type Element = T;
    type Error = ParseError<'code, T>;

    fn value(&self) -> Result<T, Self::Error> {
        match self {
            AtomicCursor::Valid { data, position } => Ok(data[*position]),
            AtomicCursor::EndOfInput { data } => {
                Err(ParseError::EndOfInput(CodeLoc::new(data, data.len())))
            }
        }
    }

    fn next(self) -> Self {
        match self {
            AtomicCursor::Valid { data, position } if position + 1 < data.len() => {
                AtomicCursor::Valid {
                    data,
                    position: position + 1,
                }
            }
            AtomicCursor::Valid { data, .. } => AtomicCursor::EndOfInput { data },
            end @ AtomicCursor::EndOfInput { .. } => end,
        }
    }

    fn position(&self) -> usize {
        match self {
            AtomicCursor::Valid { position, .. } => *position,
            AtomicCursor::EndOfInput { data } => data.len(),
        }
    }

    fn source(&self) -> &'code [T] {
        match self {
            AtomicCursor::Valid { data, .. } => data,
            AtomicCursor::EndOfInput { data } => data,
        }
    }

    fn inner(self) -> (&'code [T], usize) {
        match self {
            AtomicCursor::Valid { data, position } => (data, position),
            AtomicCursor::EndOfInput { data } => (data, data.len()),
        }
    }
}
