//! The classical table set, compiled into the crate.
//!
//! Transliteration follows the usual scholarly conventions (`ā ī ū` for long
//! vowels, `ʾ` for hamza). The theme vowels of the root fill the `A`
//! (non-past) and `E` (past) slots of Form I; the other forms have fixed
//! vocalisation.

use crate::error::LoadError;
use crate::loader::{Sources, TableLoader};
use tasrif::ConjugationEngine;

pub const SOURCES: Sources<'static> = Sources {
    prefixes: include_str!("../data/prefixes"),
    nonpast_suffixes: include_str!("../data/suffixes"),
    past_suffixes: include_str!("../data/suffixes_prime"),
    nonpast_patterns: include_str!("../data/forms"),
    past_patterns: include_str!("../data/forms_prime"),
    finals: include_str!("../data/finals"),
};

/// An engine over the bundled tables.
pub fn engine() -> Result<ConjugationEngine, LoadError> {
    Ok(ConjugationEngine::new(TableLoader::bundled()?))
}
