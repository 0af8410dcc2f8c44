use crate::cursors::AtomicCursor;

/// Cursor over text taken as raw bytes.
///
/// The boolean grammar only ever consumes ASCII bytes, so byte positions
/// from this cursor always fall on `char` boundaries of the original `&str`.
pub type ByteCursor<'code> = AtomicCursor<'code, u8>;
