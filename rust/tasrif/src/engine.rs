//! The conjugation engine.
//!
//! A surface form is produced in three steps:
//!
//! ```text
//! template lookup → radical substitution → affixation → desinence
//! ```
//!
//! The past tense uses the past patterns and suffixes and stops after
//! affixation. Non-past moods wrap the stem in a prefix and suffix and then
//! choose the final ending from the last two segments of the result.

use crate::feature::{DerivedForm, Mood, Voice};
use crate::morph::Morph;
use crate::root::Root;
use crate::table::{AffixTable, FinalDesinenceTable, MorphemeTables, PatternTable, Template};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// Placeholder letters, in substitution order. They pair up with
/// [`Root::letters`].
pub const PLACEHOLDERS: [char; 5] = ['F', 'M', 'L', 'A', 'E'];

/// How many trailing segments select a desinence.
pub const CONTEXT_LENGTH: usize = 2;

/// The outcome of a conjugation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Inflection {
    Attested(String),
    /// The derived form has no pattern for this voice and tense. This is an
    /// expected outcome, not an error.
    Unattested,
}

impl Inflection {
    pub fn is_attested(&self) -> bool {
        matches!(self, Inflection::Attested(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Inflection::Attested(form) => Some(form),
            Inflection::Unattested => None,
        }
    }
}

/// `Unattested` prints as `EMPTY`.
impl fmt::Display for Inflection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inflection::Attested(form) => f.write_str(form),
            Inflection::Unattested => f.write_str("EMPTY"),
        }
    }
}

/// Conjugates roots against a fixed set of morpheme tables.
///
/// The engine never mutates its tables, so one engine can be shared between
/// threads and every call is a pure function of its arguments.
#[derive(Debug, Clone)]
pub struct ConjugationEngine {
    tables: MorphemeTables,
}

impl ConjugationEngine {
    pub fn new(tables: MorphemeTables) -> Self {
        debug!(
            prefixes = tables.prefixes.len(),
            nonpast_suffixes = tables.nonpast_suffixes.len(),
            past_suffixes = tables.past_suffixes.len(),
            "conjugation engine ready"
        );
        ConjugationEngine { tables }
    }

    pub fn build(
        prefixes: AffixTable,
        nonpast_suffixes: AffixTable,
        past_suffixes: AffixTable,
        nonpast_patterns: PatternTable,
        past_patterns: PatternTable,
        finals: FinalDesinenceTable,
    ) -> Self {
        Self::new(MorphemeTables {
            prefixes,
            nonpast_suffixes,
            past_suffixes,
            nonpast_patterns,
            past_patterns,
            finals,
        })
    }

    pub fn tables(&self) -> &MorphemeTables {
        &self.tables
    }

    /// Fill the template for `voice` and `form` with the letters of `root`.
    ///
    /// Returns `None` when the template is [`Template::Empty`]. Placeholders
    /// are replaced one at a time in [`PLACEHOLDERS`] order, each pass
    /// replacing every occurrence. A root letter that is itself a later
    /// placeholder is therefore replaced again by that later pass.
    pub fn insert_pattern(
        &self,
        voice: Voice,
        form: DerivedForm,
        mood: Mood,
        root: &Root,
    ) -> Option<Morph> {
        let patterns = if mood.is_past() {
            &self.tables.past_patterns
        } else {
            &self.tables.nonpast_patterns
        };
        let Template::Pattern(pattern) = patterns.get(voice, form) else {
            return None;
        };

        let stem = PLACEHOLDERS
            .into_iter()
            .zip(root.letters())
            .fold(pattern.clone(), |stem, (placeholder, letter)| {
                stem.replace_letter(placeholder, letter)
            });
        Some(stem)
    }

    /// The final ending of a non-past `affixed_form` in `mood`.
    ///
    /// The jussive takes no ending. Otherwise the last two segments of the
    /// form select the ending from the desinence table.
    pub fn determine_final(&self, affixed_form: &Morph, mood: Mood) -> Morph {
        if matches!(mood, Mood::Past | Mood::Jussive) {
            return Morph::empty();
        }
        let Some(desinence) = self.tables.finals.get(mood) else {
            return Morph::empty();
        };
        desinence.resolve(&affixed_form.tail(CONTEXT_LENGTH)).clone()
    }

    /// Produce the surface form of `root` for one combination of features.
    ///
    /// Labels missing from the affix tables use the table defaults.
    pub fn conjugate(
        &self,
        person: &str,
        mood: Mood,
        form: DerivedForm,
        voice: Voice,
        root: &Root,
    ) -> Inflection {
        let Some(pattern) = self.insert_pattern(voice, form, mood, root) else {
            trace!(%root, person, %mood, ?form, %voice, "no pattern");
            return Inflection::Unattested;
        };

        let verb = if mood.is_past() {
            Morph::concat([&pattern, self.tables.past_suffixes.get(person)])
        } else {
            let mut affixed = Morph::concat([
                self.tables.prefixes.get(person),
                &pattern,
                self.tables.nonpast_suffixes.get(person),
            ]);
            let ending = self.determine_final(&affixed, mood);
            affixed.push(&ending);
            affixed
        };

        let surface = verb.to_string();
        trace!(%root, person, %mood, ?form, %voice, surface = %surface, "conjugated");
        Inflection::Attested(surface)
    }

    /// Fix `root` for a run of conjugations.
    pub fn bind<'a>(&'a self, root: &'a Root) -> RootConjugator<'a> {
        RootConjugator { engine: self, root }
    }
}

/// An engine paired with one root.
#[derive(Debug, Clone, Copy)]
pub struct RootConjugator<'a> {
    engine: &'a ConjugationEngine,
    root: &'a Root,
}

impl<'a> RootConjugator<'a> {
    pub fn conjugate(&self, person: &str, mood: Mood, form: DerivedForm, voice: Voice) -> Inflection {
        self.engine.conjugate(person, mood, form, voice, self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::PERSON_LABELS;
    use crate::table::Desinence;
    use pretty_assertions::assert_eq;
    use test_log::test;

    fn spelled(text: &str) -> Morph {
        Morph::spelled(text, '0')
    }

    fn patterns(
        name: &str,
        active_i: &str,
        passive_i: &str,
    ) -> crate::table::PatternTableBuilder {
        let mut builder = PatternTable::builder(name);
        for voice in Voice::ALL {
            for form in DerivedForm::ALL {
                builder.insert(voice, form, Template::Empty);
            }
        }
        builder
            .with(Voice::Active, DerivedForm::I, Template::pattern(active_i))
            .with(Voice::Passive, DerivedForm::I, Template::pattern(passive_i))
    }

    fn finals() -> FinalDesinenceTable {
        let endings = |after_long: &str, elsewhere: &str| {
            Desinence::contextual(
                [
                    (spelled("ī0"), spelled(after_long)),
                    (spelled("ū0"), spelled(after_long)),
                    (spelled("ā0"), spelled(if after_long == "na" { "ni" } else { after_long })),
                    (spelled("na"), spelled("0")),
                ],
                spelled(elsewhere),
            )
        };
        FinalDesinenceTable::builder("finals")
            .with(Mood::Indicative, endings("na", "u"))
            .and_then(|b| b.with(Mood::Subjunctive, endings("0", "a")))
            .and_then(|b| b.with(Mood::Jussive, Desinence::uniform(spelled("0"))))
            .and_then(|b| b.build())
            .unwrap()
    }

    pub(super) fn engine() -> ConjugationEngine {
        let prefixes = AffixTable::with_default("t".into())
            .with("1", "ʾ".into())
            .with("3m", "y".into())
            .with("4", "n".into())
            .with("6m", "y".into())
            .with("6f", "y".into())
            .with("6dm", "y".into());
        let nonpast_suffixes = AffixTable::default()
            .with("2f", spelled("ī0"))
            .with("5m", spelled("ū0"))
            .with("5f", spelled("na"))
            .with("5d", spelled("ā0"))
            .with("6m", spelled("ū0"))
            .with("6f", spelled("na"))
            .with("6dm", spelled("ā0"))
            .with("6df", spelled("ā0"));
        let past_suffixes = AffixTable::default()
            .with("1", "tu".into())
            .with("3m", "a".into())
            .with("3f", "at".into());

        ConjugationEngine::build(
            prefixes,
            nonpast_suffixes,
            past_suffixes,
            patterns("forms", "aFMAL", "uFMaL").build().unwrap(),
            patterns("forms_prime", "FaMEL", "FuMiL").build().unwrap(),
            finals(),
        )
    }

    /// Like [`engine`], with Form II templates that use every placeholder.
    pub(super) fn every_placeholder_engine() -> ConjugationEngine {
        let mut tables = engine().tables().clone();
        tables.nonpast_patterns = patterns("forms", "aFMAL", "uFMaL")
            .with(Voice::Active, DerivedForm::II, Template::pattern("FAMEL"))
            .with(Voice::Passive, DerivedForm::II, Template::pattern("uFEMAL"))
            .build()
            .unwrap();
        tables.past_patterns = patterns("forms_prime", "FaMEL", "FuMiL")
            .with(Voice::Active, DerivedForm::II, Template::pattern("FAMEL"))
            .with(Voice::Passive, DerivedForm::II, Template::pattern("FEMAL"))
            .build()
            .unwrap();
        ConjugationEngine::new(tables)
    }

    fn qtlua() -> Root {
        Root::new("qtlua").unwrap()
    }

    #[test]
    fn form_one_active_past() {
        let engine = engine();
        let root = qtlua();
        let past = |person| engine.conjugate(person, Mood::Past, DerivedForm::I, Voice::Active, &root);
        assert_eq!(past("3m"), Inflection::Attested("qatala".into()));
        assert_eq!(past("3f"), Inflection::Attested("qatalat".into()));
        assert_eq!(past("1"), Inflection::Attested("qataltu".into()));
    }

    #[test]
    fn non_past_moods_choose_their_endings() {
        let engine = engine();
        let root = qtlua();
        let conjugator = engine.bind(&root);
        let form = |person, mood| {
            conjugator
                .conjugate(person, mood, DerivedForm::I, Voice::Active)
                .to_string()
        };
        assert_eq!(form("3m", Mood::Indicative), "yaqtulu");
        assert_eq!(form("3m", Mood::Subjunctive), "yaqtula");
        assert_eq!(form("3m", Mood::Jussive), "yaqtul");
        assert_eq!(form("2f", Mood::Indicative), "taqtulīna");
        assert_eq!(form("2f", Mood::Subjunctive), "taqtulī");
        assert_eq!(form("6dm", Mood::Indicative), "yaqtulāni");
        assert_eq!(form("6f", Mood::Indicative), "yaqtulna");
        assert_eq!(form("6f", Mood::Jussive), "yaqtulna");
    }

    #[test]
    fn passive_non_past() {
        let engine = engine();
        let root = qtlua();
        assert_eq!(
            engine
                .conjugate("3m", Mood::Indicative, DerivedForm::I, Voice::Passive, &root)
                .to_string(),
            "yuqtalu"
        );
    }

    #[test]
    fn empty_pattern_is_unattested_for_every_person_and_mood() {
        let engine = engine();
        let root = qtlua();
        for mood in Mood::ALL {
            for person in PERSON_LABELS {
                let inflection = engine.conjugate(person, mood, DerivedForm::VII, Voice::Passive, &root);
                assert_eq!(inflection, Inflection::Unattested);
                assert_eq!(inflection.to_string(), "EMPTY");
            }
        }
    }

    #[test]
    fn jussive_has_no_desinence() {
        let engine = engine();
        let root = qtlua();
        for person in PERSON_LABELS {
            let stem = engine
                .insert_pattern(Voice::Active, DerivedForm::I, Mood::Jussive, &root)
                .unwrap();
            let affixed = Morph::concat([
                engine.tables().prefixes.get(person),
                &stem,
                engine.tables().nonpast_suffixes.get(person),
            ]);
            assert_eq!(engine.determine_final(&affixed, Mood::Jussive), Morph::empty());
        }
    }

    #[test]
    fn unknown_person_uses_table_defaults() {
        let engine = engine();
        let root = qtlua();
        assert_eq!(
            engine.conjugate("9z", Mood::Past, DerivedForm::I, Voice::Active, &root),
            Inflection::Attested("qatal".into())
        );
        assert_eq!(
            engine.conjugate("9z", Mood::Indicative, DerivedForm::I, Voice::Active, &root),
            Inflection::Attested("taqtulu".into())
        );
    }

    #[test]
    fn uniform_desinence_ignores_context() {
        let mut tables = engine().tables().clone();
        tables.finals = FinalDesinenceTable::builder("finals")
            .with(Mood::Indicative, Desinence::uniform("u".into()))
            .and_then(|b| b.with(Mood::Subjunctive, Desinence::uniform("a".into())))
            .and_then(|b| b.build())
            .unwrap();
        let engine = ConjugationEngine::new(tables);
        let root = qtlua();
        assert_eq!(
            engine
                .conjugate("2f", Mood::Indicative, DerivedForm::I, Voice::Active, &root)
                .to_string(),
            "taqtulīu"
        );
    }

    #[test]
    fn placeholder_letter_in_root_is_substituted_again() {
        let engine = engine();
        let root = Root::new("Mtlua").unwrap();
        let stem = engine
            .insert_pattern(Voice::Active, DerivedForm::I, Mood::Past, &root)
            .unwrap();
        assert_eq!(stem.to_string(), "tatal");
    }

    #[test]
    fn every_placeholder_is_replaced() {
        let engine = every_placeholder_engine();
        let root = qtlua();
        let stem = |voice, mood| {
            engine
                .insert_pattern(voice, DerivedForm::II, mood, &root)
                .unwrap()
        };
        assert_eq!(stem(Voice::Active, Mood::Past), Morph::literal("qutal"));
        assert_eq!(stem(Voice::Active, Mood::Indicative), Morph::literal("qutal"));
        assert_eq!(stem(Voice::Passive, Mood::Past), Morph::literal("qatul"));
        assert_eq!(stem(Voice::Passive, Mood::Jussive), Morph::literal("uqatul"));
    }

    #[test]
    fn engine_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ConjugationEngine>();
        assert_send_sync::<Root>();
    }
}
