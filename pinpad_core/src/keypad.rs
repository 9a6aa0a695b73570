//! # Keypad Layout
//!
//! The pad is described as rows of keys rather than hand-built buttons, so
//! every front end generates its keypad from the same table.
//!
//! ```text
//!  1  2  3
//!  4  5  6
//!  7  8  9
//!  C  0  .
//! ```

/// One cell of the keypad grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A decimal digit, 0 through 9
    Digit(u8),
    /// Backspace control
    Clear,
    /// Empty cell that keeps the grid square
    Blank,
}

/// Keypad rows, top to bottom
pub const KEYPAD_ROWS: [[Key; 3]; 4] = [
    [Key::Digit(1), Key::Digit(2), Key::Digit(3)],
    [Key::Digit(4), Key::Digit(5), Key::Digit(6)],
    [Key::Digit(7), Key::Digit(8), Key::Digit(9)],
    [Key::Clear, Key::Digit(0), Key::Blank],
];

impl Key {
    /// Map a typed character to a key ('0'-'9' only)
    pub fn from_char(c: char) -> Option<Key> {
        c.to_digit(10).map(|d| Key::Digit(d as u8))
    }

    /// Label for digit keys; `Clear` and `Blank` are labelled by the caller
    pub fn digit_label(&self) -> Option<String> {
        match self {
            Key::Digit(d) => Some(d.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_digit_once() {
        let mut digits: Vec<u8> = KEYPAD_ROWS
            .iter()
            .flatten()
            .filter_map(|k| match k {
                Key::Digit(d) => Some(*d),
                _ => None,
            })
            .collect();
        digits.sort_unstable();
        assert_eq!(digits, (0..=9).collect::<Vec<u8>>());
    }

    #[test]
    fn test_bottom_row() {
        assert_eq!(KEYPAD_ROWS[3], [Key::Clear, Key::Digit(0), Key::Blank]);
    }

    #[test]
    fn test_from_char() {
        assert_eq!(Key::from_char('7'), Some(Key::Digit(7)));
        assert_eq!(Key::from_char('a'), None);
        assert_eq!(Key::Digit(3).digit_label().as_deref(), Some("3"));
        assert_eq!(Key::Clear.digit_label(), None);
    }
}
