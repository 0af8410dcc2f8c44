use crate::atomic::Atomic;
use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

/// Location of a parse failure: the input plus the offset where the failing
/// parser stood.
#[derive(Debug, Copy, Clone)]
pub struct CodeLoc<'code, T: Atomic = u8> {
    code: &'code [T],
    loc: usize,
}

impl<'code, T: Atomic> CodeLoc<'code, T> {
    pub fn new(code: &'code [T], loc: usize) -> Self {
        Self { code, loc }
    }

    /// Absolute position in the input.
    pub fn position(&self) -> usize {
        self.loc
    }

    /// Line number (1-based) and element offset within that line.
    ///
    /// The offset is an element count, not a rendered column; tabs and
    /// multi-byte characters make column numbers ambiguous.
    pub fn line_and_offset(&self) -> (usize, usize) {
        let mut line = 1;
        let mut line_start = 0;
        for (i, &element) in self.code.iter().enumerate().take(self.loc) {
            if element == T::NEWLINE {
                line += 1;
                line_start = i + 1;
            }
        }
        (line, self.loc - line_start)
    }
}

impl<'code, T: Atomic> fmt::Display for CodeLoc<'code, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (line, offset) = self.line_and_offset();
        write!(f, "line {line}, offset {offset}")
    }
}

/// Parse failure.
///
/// A failed parse is an ordinary `Err` value, never a panic. Combinators
/// like `or`, `optional` and `many` treat it as "no match here" and recover
/// with the cursor they were given; only the caller of a top-level parse
/// ever sees one of these.
#[derive(Debug, Error)]
pub enum ParseError<'code, T: Atomic = u8> {
    /// A read was attempted on the end-of-input cursor.
    #[error("no value to read at end of input ({0})")]
    EndOfInput(CodeLoc<'code, T>),

    /// A parser rejected the input.
    #[error("{message} ({loc})")]
    Syntax {
        message: Cow<'static, str>,
        loc: CodeLoc<'code, T>,
    },
}

impl<'code, T: Atomic> ParseError<'code, T> {
    /// Builds a syntax error at `loc` within `code`.
    pub fn syntax(message: impl Into<Cow<'static, str>>, code: &'code [T], loc: usize) -> Self {
        ParseError::Syntax {
            message: message.into(),
            loc: CodeLoc::new(code, loc),
        }
    }

    /// Position where the failure occurred.
    pub fn position(&self) -> usize {
        match self {
            ParseError::EndOfInput(loc) => loc.position(),
            ParseError::Syntax { loc, .. } => loc.position(),
        }
    }
}
