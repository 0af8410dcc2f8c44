use crate::atomic::Atomic;
use std::error::Error;

/// Immutable position into a sequence of elements.
///
/// A cursor is a cheap `Copy` value: advancing produces a new cursor and
/// leaves the old one usable, which is what makes backtracking between
/// alternatives free. `value()` returning `Err` is the end-of-input
/// sentinel; there is no way to read past the end.
pub trait Cursor<'code>: Copy + Sized {
    /// The type of elements this cursor iterates over.
    type Element: Atomic + 'code;

    /// Error returned when reading at end of input.
    type Error: Error;

    /// Element at the current position, or an error at end of input.
    fn value(&self) -> Result<Self::Element, Self::Error>;

    /// Cursor one element further. Stays at end of input once there.
    fn next(self) -> Self;

    /// Current position; the input length when at end of input.
    fn position(&self) -> usize;

    /// The whole underlying input.
    fn source(&self) -> &'code [Self::Element];

    /// The underlying input together with the current position.
    fn inner(self) -> (&'code [Self::Element], usize);

    /// True when no element remains.
    fn eos(&self) -> bool {
        self.value().is_err()
    }
}
