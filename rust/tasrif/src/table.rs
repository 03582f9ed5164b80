//! Morpheme tables.
//!
//! Every table is built once and read-only afterwards. Builders collect the
//! entries (a later insert for the same key replaces the earlier one, as
//! when a source file repeats a key) and `build` checks that the keys the
//! engine relies on are all present, so a malformed table is rejected
//! before any conjugation is attempted.
//!
//! Affix tables are the exception: they have no required keys and answer
//! any label, falling back to their default.

use crate::error::TasrifError;
use crate::feature::{DerivedForm, Mood, Voice};
use crate::morph::Morph;
use std::collections::HashMap;
use tracing::debug;

/// An abstract stem.
///
/// A pattern's letters `F`, `M` and `L` stand for the root consonants and
/// `A`, `E` for the two theme vowels; every other segment is copied through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Template {
    /// The combination is not attested, so no surface form exists.
    Empty,
    Pattern(Morph),
}

impl Template {
    pub fn pattern(text: &str) -> Self {
        Template::Pattern(Morph::literal(text))
    }
}

/// Person label → affix, with a default for labels the table does not list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AffixTable {
    entries: HashMap<String, Morph>,
    default: Morph,
}

impl AffixTable {
    /// An empty table answering `default` for every label.
    pub fn with_default(default: Morph) -> Self {
        AffixTable {
            entries: HashMap::new(),
            default,
        }
    }

    pub fn insert(&mut self, label: impl Into<String>, affix: Morph) {
        self.entries.insert(label.into(), affix);
    }

    /// Builder-style [`AffixTable::insert`].
    pub fn with(mut self, label: impl Into<String>, affix: Morph) -> Self {
        self.insert(label, affix);
        self
    }

    /// The affix for `label`, or the table default.
    pub fn get(&self, label: &str) -> &Morph {
        self.entries.get(label).unwrap_or(&self.default)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// (voice, derived form) → template, complete over all 20 keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternTable {
    templates: Vec<Template>,
}

impl PatternTable {
    /// `name` identifies the table in errors and logs.
    pub fn builder(name: impl Into<String>) -> PatternTableBuilder {
        PatternTableBuilder {
            name: name.into(),
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, voice: Voice, form: DerivedForm) -> &Template {
        &self.templates[Self::index(voice, form)]
    }

    fn index(voice: Voice, form: DerivedForm) -> usize {
        usize::from(voice.code()) * DerivedForm::ALL.len() + usize::from(form.code())
    }
}

pub struct PatternTableBuilder {
    name: String,
    entries: HashMap<(Voice, DerivedForm), Template>,
}

impl PatternTableBuilder {
    pub fn insert(&mut self, voice: Voice, form: DerivedForm, template: Template) {
        self.entries.insert((voice, form), template);
    }

    pub fn with(mut self, voice: Voice, form: DerivedForm, template: Template) -> Self {
        self.insert(voice, form, template);
        self
    }

    /// Fails with [`TasrifError::MissingTableEntry`] unless every voice and
    /// derived form has a template.
    pub fn build(mut self) -> Result<PatternTable, TasrifError> {
        let mut templates = Vec::with_capacity(Voice::ALL.len() * DerivedForm::ALL.len());
        for voice in Voice::ALL {
            for form in DerivedForm::ALL {
                let template = self.entries.remove(&(voice, form)).ok_or_else(|| {
                    TasrifError::MissingTableEntry {
                        table: self.name.clone(),
                        key: format!("{},{}", voice.code(), form.code()),
                    }
                })?;
                templates.push(template);
            }
        }
        debug!(table = %self.name, "built pattern table");
        Ok(PatternTable { templates })
    }
}

/// The final ending for one mood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Desinence {
    /// The same ending whatever the stem ends in.
    Uniform(Morph),
    /// Endings chosen by the last two segments of the affixed stem, with
    /// `elsewhere` used for any other (consonant-final) stem.
    Contextual {
        rules: HashMap<Morph, Morph>,
        elsewhere: Morph,
    },
}

impl Desinence {
    pub fn uniform(ending: Morph) -> Self {
        Desinence::Uniform(ending)
    }

    pub fn contextual(
        rules: impl IntoIterator<Item = (Morph, Morph)>,
        elsewhere: Morph,
    ) -> Self {
        Desinence::Contextual {
            rules: rules.into_iter().collect(),
            elsewhere,
        }
    }

    /// The ending selected by `context`.
    pub fn resolve(&self, context: &Morph) -> &Morph {
        match self {
            Desinence::Uniform(ending) => ending,
            Desinence::Contextual { rules, elsewhere } => rules.get(context).unwrap_or(elsewhere),
        }
    }
}

/// Mood → desinence. Indicative and subjunctive are required; the jussive
/// is optional since it never takes an ending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalDesinenceTable {
    entries: HashMap<Mood, Desinence>,
}

impl FinalDesinenceTable {
    pub const REQUIRED: [Mood; 2] = [Mood::Indicative, Mood::Subjunctive];

    pub fn builder(name: impl Into<String>) -> FinalDesinenceTableBuilder {
        FinalDesinenceTableBuilder {
            name: name.into(),
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, mood: Mood) -> Option<&Desinence> {
        self.entries.get(&mood)
    }
}

pub struct FinalDesinenceTableBuilder {
    name: String,
    entries: HashMap<Mood, Desinence>,
}

impl FinalDesinenceTableBuilder {
    /// Fails with [`TasrifError::PastDesinence`] for [`Mood::Past`].
    pub fn insert(&mut self, mood: Mood, desinence: Desinence) -> Result<(), TasrifError> {
        if mood.is_past() {
            return Err(TasrifError::PastDesinence);
        }
        self.entries.insert(mood, desinence);
        Ok(())
    }

    pub fn with(mut self, mood: Mood, desinence: Desinence) -> Result<Self, TasrifError> {
        self.insert(mood, desinence)?;
        Ok(self)
    }

    pub fn build(self) -> Result<FinalDesinenceTable, TasrifError> {
        if let Some(mood) = FinalDesinenceTable::REQUIRED
            .into_iter()
            .find(|mood| !self.entries.contains_key(mood))
        {
            return Err(TasrifError::MissingTableEntry {
                table: self.name,
                key: mood.code().to_string(),
            });
        }
        debug!(table = %self.name, moods = self.entries.len(), "built final desinence table");
        Ok(FinalDesinenceTable {
            entries: self.entries,
        })
    }
}

/// The six tables a [`crate::ConjugationEngine`] consults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MorphemeTables {
    pub prefixes: AffixTable,
    pub nonpast_suffixes: AffixTable,
    pub past_suffixes: AffixTable,
    pub nonpast_patterns: PatternTable,
    pub past_patterns: PatternTable,
    pub finals: FinalDesinenceTable,
}
