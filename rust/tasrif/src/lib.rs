//! # tasrif: rule-based Arabic verb conjugation
//!
//! Generates the inflected forms of a triconsonantal verb from tables of
//! templates, affixes and final endings.
//!
//! ## Core Ideas
//!
//! - **A root is five letters**: three consonants and two theme vowels, e.g.
//!   `qtlua` for q-t-l with non-past vowel `u` and past vowel `a`.
//! - **Derived forms are templates**: `FaMEL` is filled with the root to give
//!   the stem `qatal`. A template may be empty, meaning the form has no such
//!   voice or tense.
//! - **Affixes are looked up by person**: prefixes for the non-past, suffixes
//!   for both tenses. Unknown labels fall back to the table default.
//! - **The only phonological rule** picks a non-past desinence from the last
//!   two segments of the affixed stem.
//!
//! ## Pipeline
//!
//! ```text
//! Root + (voice, form, mood) → template → stem
//!   → prefix + stem + suffix → + desinence → surface form
//! ```
//!
//! The tables themselves come from elsewhere (see the `tasrif-tables`
//! crate); this crate only consumes them.

pub mod engine;
pub mod error;
pub mod feature;
pub mod morph;
pub mod paradigm;
pub mod root;
pub mod table;

pub use engine::{ConjugationEngine, Inflection, RootConjugator};
pub use error::TasrifError;
pub use feature::{DerivedForm, Mood, PERSON_LABELS, Voice};
pub use morph::{Morph, Segment};
pub use paradigm::{Cell, Selection};
pub use root::Root;
pub use table::{
    AffixTable, Desinence, FinalDesinenceTable, MorphemeTables, PatternTable, Template,
};
