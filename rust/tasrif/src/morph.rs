//! Morphs: the strings the tables are made of.
//!
//! Affixes, templates and endings are sequences of [`Segment`]s rather than
//! plain strings. A segment is either a letter or the null morph, which marks
//! a position that carries no audible element. The null morph takes part in
//! context matching (a suffix like `ī∅` selects a different desinence than a
//! bare consonant) and disappears when the form is rendered.
//!
//! ```
//! use tasrif::morph::{Morph, Segment};
//!
//! let suffix = Morph::spelled("ī0", '0');
//! assert_eq!(suffix.segments(), &[Segment::Letter('ī'), Segment::Null]);
//! assert_eq!(suffix.to_string(), "ī");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// One position of a morph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Segment {
    /// A character that is rendered as-is.
    Letter(char),
    /// The null morph. Never equal to any letter.
    Null,
}

/// A sequence of segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Morph(Vec<Segment>);

impl Morph {
    /// The morph with no segments at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Every character of `text` becomes a letter.
    pub fn literal(text: &str) -> Self {
        Morph(text.chars().map(Segment::Letter).collect())
    }

    /// Like [`Morph::literal`], except that `null_marker` is read as the
    /// null morph.
    pub fn spelled(text: &str, null_marker: char) -> Self {
        Morph(
            text.chars()
                .map(|c| {
                    if c == null_marker {
                        Segment::Null
                    } else {
                        Segment::Letter(c)
                    }
                })
                .collect(),
        )
    }

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The last `n` segments, or the whole morph if it is shorter.
    pub fn tail(&self, n: usize) -> Morph {
        let start = self.0.len().saturating_sub(n);
        Morph(self.0[start..].to_vec())
    }

    /// Replace every `from` letter with `to`, leaving null segments alone.
    pub fn replace_letter(&self, from: char, to: char) -> Morph {
        Morph(
            self.0
                .iter()
                .map(|segment| match segment {
                    Segment::Letter(c) if *c == from => Segment::Letter(to),
                    other => *other,
                })
                .collect(),
        )
    }

    /// Does any letter of this morph equal `letter`?
    pub fn contains_letter(&self, letter: char) -> bool {
        self.0.contains(&Segment::Letter(letter))
    }

    /// Append the segments of `other`.
    pub fn push(&mut self, other: &Morph) {
        self.0.extend_from_slice(&other.0);
    }

    /// Concatenate morphs in order.
    pub fn concat<'a>(parts: impl IntoIterator<Item = &'a Morph>) -> Morph {
        let mut joined = Morph::empty();
        for part in parts {
            joined.push(part);
        }
        joined
    }

    /// The audible letters, in order.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().filter_map(|segment| match segment {
            Segment::Letter(c) => Some(*c),
            Segment::Null => None,
        })
    }

    /// Write the morph back out with `null_marker` standing for null
    /// segments. This is the inverse of [`Morph::spelled`].
    pub fn spell(&self, null_marker: char) -> String {
        self.0
            .iter()
            .map(|segment| match segment {
                Segment::Letter(c) => *c,
                Segment::Null => null_marker,
            })
            .collect()
    }
}

impl From<&str> for Morph {
    fn from(text: &str) -> Self {
        Morph::literal(text)
    }
}

/// Renders the audible letters only.
impl fmt::Display for Morph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.letters() {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn null_segments_are_not_rendered() {
        let morph = Morph::spelled("taqtulī0na", '0');
        assert_eq!(morph.len(), 10);
        assert_eq!(morph.to_string(), "taqtulīna");
    }

    #[test]
    fn literal_zero_is_a_letter() {
        let morph = Morph::literal("a0");
        assert_eq!(morph.segments(), &[Segment::Letter('a'), Segment::Letter('0')]);
        assert_eq!(morph.to_string(), "a0");
    }

    #[test]
    fn tail_of_short_morph_is_whole_morph() {
        let morph = Morph::literal("u");
        assert_eq!(morph.tail(2), Morph::literal("u"));
        assert_eq!(Morph::literal("yaqtul").tail(2), Morph::literal("ul"));
    }

    #[test]
    fn replace_letter_skips_null() {
        let morph = Morph::spelled("F0aF", '0');
        assert_eq!(morph.replace_letter('F', 'q').spell('0'), "q0aq");
    }

    #[test]
    fn spell_and_spelled_are_inverse() {
        let text = "ū0";
        assert_eq!(Morph::spelled(text, '0').spell('0'), text);
    }
}
