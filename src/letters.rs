use std::fmt;

/// One bit per letter as bitset, `a` in bit 0.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Mask of a word, or `None` if any byte is not a lowercase `a..=z` letter.
    pub fn from_word(word: &str) -> Option<Self> {
        let mut mask = 0u32;
        for c in word.bytes() {
            if !c.is_ascii_lowercase() {
                return None;
            }
            mask |= 1 << (c - b'a');
        }
        Some(Self(mask))
    }

    pub fn contains(self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.0 & (1 << (letter - b'a')) != 0
    }

    pub fn is_subset_of(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Number of distinct letters.
    pub fn count(self) -> usize {
        self.0.count_ones() as usize
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let letters: String = (b'a'..=b'z')
            .filter(|&c| self.contains(c))
            .map(char::from)
            .collect();
        write!(f, "LetterSet({letters})")
    }
}
