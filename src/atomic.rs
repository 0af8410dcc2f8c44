use std::fmt;

/// Element types a cursor can walk over.
///
/// Parsing is defined over slices of atomic elements. The only element type
/// this crate ships is `u8`, but cursors and errors stay generic over the
/// element so the engine is not welded to byte input.
pub trait Atomic: Copy + PartialEq + fmt::Debug {
    /// The newline element, used to compute line numbers in error locations.
    const NEWLINE: Self;
}

impl Atomic for u8 {
    const NEWLINE: Self = b'\n';
}
