//! Key events produced by the keypad

/// Arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `x`
    Multiply,
    /// `/`
    Divide,
}

impl Operator {
    /// Parse an operator from its keypad symbol
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            'x' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            _ => None,
        }
    }

    /// Keypad symbol for this operator
    pub fn as_char(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => 'x',
            Operator::Divide => '/',
        }
    }
}

/// A single key press
///
/// "No key this poll" is not a variant; key sources return `Option<char>`
/// and the poll loop skips `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    /// Digit key, value 0-9
    Digit(u8),
    /// Operator key
    Operator(Operator),
    /// `=`
    Equals,
    /// `C`
    Clear,
}

impl Key {
    /// Map a keypad character code to a key
    ///
    /// Returns `None` for characters outside the keypad vocabulary.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Key::Digit(c as u8 - b'0')),
            '=' => Some(Key::Equals),
            'C' => Some(Key::Clear),
            _ => Operator::from_char(c).map(Key::Operator),
        }
    }

    /// Character code of this key
    pub fn as_char(self) -> char {
        match self {
            Key::Digit(d) => (b'0' + d.min(9)) as char,
            Key::Operator(op) => op.as_char(),
            Key::Equals => '=',
            Key::Clear => 'C',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_keys() {
        for (i, c) in ('0'..='9').enumerate() {
            assert_eq!(Key::from_char(c), Some(Key::Digit(i as u8)));
        }
    }

    #[test]
    fn test_operator_keys() {
        assert_eq!(Key::from_char('+'), Some(Key::Operator(Operator::Add)));
        assert_eq!(Key::from_char('-'), Some(Key::Operator(Operator::Subtract)));
        assert_eq!(Key::from_char('x'), Some(Key::Operator(Operator::Multiply)));
        assert_eq!(Key::from_char('/'), Some(Key::Operator(Operator::Divide)));
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(Key::from_char('='), Some(Key::Equals));
        assert_eq!(Key::from_char('C'), Some(Key::Clear));
    }

    #[test]
    fn test_unknown_keys() {
        for c in ['*', 'c', 'X', '.', ' ', '\0', 'A', '#'] {
            assert_eq!(Key::from_char(c), None, "{:?} should not map to a key", c);
        }
    }

    #[test]
    fn test_as_char_matches_keypad_symbol() {
        for c in "0123456789+-x/=C".chars() {
            let key = Key::from_char(c).unwrap();
            assert_eq!(key.as_char(), c);
        }
    }
}
