//! Generic input event types for the terminal frontend.

/// Generic key representation decoupled from the input source.
///
/// The terminal frontend maps raw characters to these values; a different
/// frontend (raw-mode terminal, GUI toolkit) would map its native key
/// codes the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Regular character key (digits, operators, letters)
    Char(char),
    /// Return/Enter key
    Return,
    /// Escape key
    Escape,
    /// Backspace key
    Backspace,
    /// Unmapped or unrecognized key
    Unknown,
}

impl Key {
    /// Maps a raw character from the input stream to a key event.
    ///
    /// The control characters for enter, escape, and backspace/delete are
    /// recognized so piped input can express every command; any other
    /// control character is `Unknown`.
    pub fn from_char(c: char) -> Self {
        match c {
            '\r' | '\n' => Key::Return,
            '\u{1b}' => Key::Escape,
            '\u{8}' | '\u{7f}' => Key::Backspace,
            c if c.is_control() => Key::Unknown,
            c => Key::Char(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_characters_map_to_named_keys() {
        assert_eq!(Key::from_char('\n'), Key::Return);
        assert_eq!(Key::from_char('\r'), Key::Return);
        assert_eq!(Key::from_char('\u{1b}'), Key::Escape);
        assert_eq!(Key::from_char('\u{8}'), Key::Backspace);
        assert_eq!(Key::from_char('\u{7f}'), Key::Backspace);
    }

    #[test]
    fn printable_characters_pass_through() {
        assert_eq!(Key::from_char('7'), Key::Char('7'));
        assert_eq!(Key::from_char('+'), Key::Char('+'));
    }

    #[test]
    fn other_control_characters_are_unknown() {
        assert_eq!(Key::from_char('\u{1}'), Key::Unknown);
    }
}
