//! Whole paradigms: every combination of features for one root.
//!
//! Cells are produced form by form, then by mood, voice and person, which
//! is the order conjugation tables are usually printed in.

use crate::engine::{Inflection, RootConjugator};
use crate::feature::{DerivedForm, Mood, PERSON_LABELS, Voice};
use serde::Serialize;

/// Which features a paradigm covers. The default selects everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub forms: Vec<DerivedForm>,
    pub moods: Vec<Mood>,
    pub voices: Vec<Voice>,
    pub persons: Vec<String>,
}

impl Default for Selection {
    fn default() -> Self {
        Selection {
            forms: DerivedForm::ALL.to_vec(),
            moods: Mood::ALL.to_vec(),
            voices: Voice::ALL.to_vec(),
            persons: PERSON_LABELS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl Selection {
    pub fn len(&self) -> usize {
        self.forms.len() * self.moods.len() * self.voices.len() * self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every selected combination, in paradigm order.
    pub fn combinations(&self) -> impl Iterator<Item = (DerivedForm, Mood, Voice, &str)> + '_ {
        self.forms.iter().flat_map(move |&form| {
            self.moods.iter().flat_map(move |&mood| {
                self.voices.iter().flat_map(move |&voice| {
                    self.persons
                        .iter()
                        .map(move |person| (form, mood, voice, person.as_str()))
                })
            })
        })
    }
}

/// One conjugated combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub form: DerivedForm,
    pub mood: Mood,
    pub voice: Voice,
    pub person: String,
    pub inflection: Inflection,
}

impl<'a> RootConjugator<'a> {
    /// Conjugate every combination in `selection`.
    pub fn paradigm(&self, selection: &Selection) -> Vec<Cell> {
        selection
            .combinations()
            .map(|(form, mood, voice, person)| Cell {
                form,
                mood,
                voice,
                person: person.to_string(),
                inflection: self.conjugate(person, mood, form, voice),
            })
            .collect()
    }
}
