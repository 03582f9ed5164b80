//! The triconsonantal root.

use crate::error::TasrifError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Three root consonants plus the verb's two theme vowels.
///
/// Built from a five character string: first, middle and last consonant,
/// then the two vowels. `"qtlua"` is the root q-t-l with theme vowels `u`
/// (non-past) and `a` (past). The letters are not checked for phonetic
/// plausibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Root {
    first: char,
    middle: char,
    last: char,
    vowel1: char,
    vowel2: char,
}

impl Root {
    pub fn new(fundamentals: &str) -> Result<Self, TasrifError> {
        match fundamentals.chars().collect::<Vec<_>>()[..] {
            [first, middle, last, vowel1, vowel2] => Ok(Root {
                first,
                middle,
                last,
                vowel1,
                vowel2,
            }),
            ref letters => Err(TasrifError::InvalidRoot {
                root: fundamentals.to_string(),
                length: letters.len(),
            }),
        }
    }

    pub fn first(&self) -> char {
        self.first
    }

    pub fn middle(&self) -> char {
        self.middle
    }

    pub fn last(&self) -> char {
        self.last
    }

    pub fn vowel1(&self) -> char {
        self.vowel1
    }

    pub fn vowel2(&self) -> char {
        self.vowel2
    }

    /// All five letters in construction order.
    pub fn letters(&self) -> [char; 5] {
        [self.first, self.middle, self.last, self.vowel1, self.vowel2]
    }
}

impl FromStr for Root {
    type Err = TasrifError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Root::new(s)
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.letters().iter().try_for_each(|c| write!(f, "{c}"))
    }
}
