//! Fixed-alphabet letter sets
//!
//! Every letter the assistant reasons about is a lowercase ASCII letter, so a set of
//! letters fits in a 26-bit mask. Iteration is always in ascending alphabetical order.

use std::fmt;

/// Number of letters in the alphabet
pub const ALPHABET_SIZE: usize = 26;

/// Index of a lowercase ASCII letter in the alphabet (`a` = 0)
///
/// # Panics
/// Panics in debug mode if `letter` is not a lowercase ASCII letter
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> usize {
    debug_assert!(letter.is_ascii_lowercase(), "letter must be a-z");
    (letter - b'a') as usize
}

/// A set of lowercase ASCII letters stored as a bitmask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// All 26 letters
    pub const ALPHABET: Self = Self((1 << ALPHABET_SIZE) - 1);

    /// Create an empty set
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Build a set from the letters of a byte string, ignoring anything that is not `a-z`
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::LetterSet;
    ///
    /// let set = LetterSet::from_letters(b"llama");
    /// assert_eq!(set.len(), 3);
    /// assert_eq!(set.to_string(), "alm");
    /// ```
    #[must_use]
    pub fn from_letters(letters: &[u8]) -> Self {
        letters
            .iter()
            .filter(|b| b.is_ascii_lowercase())
            .fold(Self::EMPTY, |set, &b| set.with(b))
    }

    #[inline]
    #[must_use]
    const fn bit(letter: u8) -> u32 {
        1 << letter_index(letter)
    }

    /// Return a copy of the set with `letter` added
    #[inline]
    #[must_use]
    pub const fn with(self, letter: u8) -> Self {
        Self(self.0 | Self::bit(letter))
    }

    /// Add a letter
    #[inline]
    pub const fn insert(&mut self, letter: u8) {
        self.0 |= Self::bit(letter);
    }

    /// Remove a letter
    #[inline]
    pub const fn remove(&mut self, letter: u8) {
        self.0 &= !Self::bit(letter);
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.0 & Self::bit(letter) != 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// True if the two sets share at least one letter
    #[inline]
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Letters in ascending order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..ALPHABET_SIZE as u8)
            .filter(move |i| self.0 & (1 << i) != 0)
            .map(|i| b'a' + i)
    }

    /// Letters in ascending order as `char`s
    #[must_use]
    pub fn to_chars(self) -> Vec<char> {
        self.iter().map(char::from).collect()
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            if letter.is_ascii_lowercase() {
                set.insert(letter);
            }
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", char::from(letter))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_has_every_letter() {
        assert_eq!(LetterSet::ALPHABET.len(), 26);
        assert!(LetterSet::ALPHABET.contains(b'a'));
        assert!(LetterSet::ALPHABET.contains(b'z'));
        assert_eq!(
            LetterSet::ALPHABET.to_string(),
            "abcdefghijklmnopqrstuvwxyz"
        );
    }

    #[test]
    fn insert_and_remove() {
        let mut set = LetterSet::new();
        assert!(set.is_empty());

        set.insert(b'q');
        set.insert(b'q');
        set.insert(b'b');
        assert_eq!(set.len(), 2);
        assert!(set.contains(b'q'));

        set.remove(b'q');
        assert!(!set.contains(b'q'));
        assert_eq!(set.to_chars(), vec!['b']);
    }

    #[test]
    fn non_letters_are_never_members() {
        let set = LetterSet::ALPHABET;
        assert!(!set.contains(b'A'));
        assert!(!set.contains(b'1'));
        assert_eq!(LetterSet::from_letters(b"A1 z"), LetterSet::new().with(b'z'));
    }

    #[test]
    fn iteration_is_ascending() {
        let set: LetterSet = b"zebra".iter().copied().collect();
        let letters: Vec<u8> = set.iter().collect();
        assert_eq!(letters, b"aberz".to_vec());
    }

    #[test]
    fn set_algebra() {
        let crane = LetterSet::from_letters(b"crane");
        let lunch = LetterSet::from_letters(b"lunch");

        assert_eq!(crane.intersection(lunch).to_string(), "cn");
        assert_eq!(crane.difference(lunch).to_string(), "aer");
        assert_eq!(crane.union(lunch).to_string(), "acehlnru");
        assert!(crane.intersects(lunch));
        assert!(!crane.intersects(LetterSet::from_letters(b"moist")));
    }
}
