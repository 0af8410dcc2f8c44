pub mod ident;
pub mod whitespace;

pub use ident::identifier;
pub use whitespace::{skip_whitespace, whitespace};

/// True for bytes that may start an identifier: ASCII letters and `_`.
pub fn is_identifier_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

/// True for ASCII decimal digits.
pub fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// True for bytes that may continue an identifier: start bytes and digits.
pub fn is_identifier_continue(byte: u8) -> bool {
    is_identifier_start(byte) || is_digit(byte)
}

/// True for space, tab, newline and carriage return.
pub fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_start_accepts_letters_and_underscore() {
        assert!(is_identifier_start(b'a'));
        assert!(is_identifier_start(b'Z'));
        assert!(is_identifier_start(b'_'));
        assert!(!is_identifier_start(b'0'));
        assert!(!is_identifier_start(b'&'));
        assert!(!is_identifier_start(b' '));
    }

    #[test]
    fn identifier_continue_also_accepts_digits() {
        assert!(is_identifier_continue(b'a'));
        assert!(is_identifier_continue(b'_'));
        assert!(is_identifier_continue(b'0'));
        assert!(is_identifier_continue(b'9'));
        assert!(!is_identifier_continue(b'|'));
    }

    #[test]
    fn digit_is_ascii_only() {
        for digit in b'0'..=b'9' {
            assert!(is_digit(digit));
        }
        assert!(!is_digit(b'a'));
    }

    #[test]
    fn whitespace_is_the_four_ascii_kinds() {
        assert!(is_whitespace(b' '));
        assert!(is_whitespace(b'\t'));
        assert!(is_whitespace(b'\n'));
        assert!(is_whitespace(b'\r'));
        assert!(!is_whitespace(b'a'));
        assert!(!is_whitespace(b'\0'));
    }
}
