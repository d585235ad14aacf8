use std::fmt;

use crate::errors::InterpError;

/// The fixed alphabet every [`Context`](crate::context::Context) is seeded from.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A variable name: exactly one upper-case ASCII letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Returns `None` for anything outside `A..=Z`.
    pub fn new(c: char) -> Option<Self> {
        if c.is_ascii_uppercase() {
            Some(Self(c as u8))
        } else {
            None
        }
    }

    pub fn as_char(self) -> char {
        self.0 as char
    }

    pub fn all() -> impl Iterator<Item = Letter> {
        (b'A'..=b'Z').map(Letter)
    }
}

impl TryFrom<char> for Letter {
    type Error = InterpError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Letter::new(c).ok_or_else(|| InterpError::InvalidToken(c.to_string()))
    }
}

impl TryFrom<&str> for Letter {
    type Error = InterpError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Letter::try_from(c),
            _ => Err(InterpError::InvalidToken(s.to_string())),
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn accepts_only_uppercase_ascii() {
        assert_eq!(Letter::new('Q').map(Letter::as_char), Some('Q'));
        assert_eq!(Letter::new('q'), None);
        assert_eq!(Letter::new('1'), None);
        assert_eq!(Letter::new('Ä'), None);
    }

    #[test]
    fn all_walks_the_alphabet_in_order() {
        let collected: String = Letter::all().map(Letter::as_char).collect();
        assert_eq!(collected, ALPHABET);
        assert_eq!(Letter::all().count(), 26);
    }

    #[test]
    fn multi_char_words_are_not_letters() {
        assert_eq!(
            Letter::try_from("AB"),
            Err(InterpError::InvalidToken("AB".into()))
        );
        assert_eq!(Letter::try_from(""), Err(InterpError::InvalidToken("".into())));
        assert_eq!(Letter::try_from("Z").map(Letter::as_char), Ok('Z'));
    }
}
