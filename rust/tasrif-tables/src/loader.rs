//! Turning table sources into [`MorphemeTables`].

use crate::config::LoaderConfig;
use crate::error::LoadError;
use crate::source::{self, FinalRule};
use std::collections::BTreeMap;
use std::path::Path;
use tasrif::engine::CONTEXT_LENGTH;
use tasrif::{
    AffixTable, DerivedForm, Desinence, FinalDesinenceTable, Mood, Morph, MorphemeTables,
    PatternTable, TasrifError, Template, Voice,
};
use tracing::debug;

/// The text of all six sources.
#[derive(Debug, Clone, Copy)]
pub struct Sources<'a> {
    pub prefixes: &'a str,
    pub nonpast_suffixes: &'a str,
    pub past_suffixes: &'a str,
    pub nonpast_patterns: &'a str,
    pub past_patterns: &'a str,
    pub finals: &'a str,
}

/// How one desinence rule applies.
enum RuleContext {
    After(Morph),
    Elsewhere,
    Always,
}

/// One desinence rule and the line it came from.
struct Rule {
    line: usize,
    context: RuleContext,
    ending: Morph,
}

#[derive(Debug, Clone, Default)]
pub struct TableLoader {
    config: LoaderConfig,
}

impl TableLoader {
    pub fn new(config: LoaderConfig) -> Self {
        TableLoader { config }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    fn morph(&self, text: &str) -> Morph {
        Morph::spelled(text, self.config.null_marker)
    }

    /// Parse an affix source. Labels it does not list map to `default`.
    pub fn affixes(&self, table: &str, text: &str, default: Morph) -> Result<AffixTable, LoadError> {
        let mut affixes = AffixTable::with_default(default);
        for (_, line) in source::parse_lines(table, text, source::affix_line)? {
            affixes.insert(line.label, self.morph(line.affix));
        }
        debug!(table, entries = affixes.len(), "loaded affix table");
        Ok(affixes)
    }

    /// Parse a pattern source; every voice and derived form must be covered.
    pub fn patterns(&self, table: &str, text: &str) -> Result<PatternTable, LoadError> {
        let mut patterns = PatternTable::builder(table);
        for (line, entry) in source::parse_lines(table, text, source::pattern_line)? {
            let entry_error = |error| LoadError::Entry {
                table: table.to_string(),
                line,
                error,
            };
            let voice = Voice::try_from(entry.voice).map_err(entry_error)?;
            let form = DerivedForm::try_from(entry.form).map_err(entry_error)?;
            let template = if entry.template == self.config.empty_sentinel {
                Template::Empty
            } else {
                Template::Pattern(self.morph(entry.template))
            };
            patterns.insert(voice, form, template);
        }
        let patterns = patterns.build()?;
        debug!(table, "loaded pattern table");
        Ok(patterns)
    }

    /// Parse a final-desinence source.
    ///
    /// Rules for the same mood accumulate across lines. A mood whose only
    /// rule has no `after` clause gets a uniform ending; otherwise it needs
    /// an elsewhere rule. Every other context must be exactly
    /// [`CONTEXT_LENGTH`] segments long.
    pub fn finals(&self, table: &str, text: &str) -> Result<FinalDesinenceTable, LoadError> {
        let mut moods: BTreeMap<Mood, (usize, Vec<Rule>)> = BTreeMap::new();
        for (line, entry) in source::parse_lines(table, text, source::final_line)? {
            let entry_error = |error| LoadError::Entry {
                table: table.to_string(),
                line,
                error,
            };
            let mood = Mood::try_from(entry.mood).map_err(entry_error)?;
            let rules = &mut moods.entry(mood).or_insert_with(|| (line, Vec::new())).1;
            for FinalRule { ending, context } in entry.rules {
                let context = match context {
                    None => RuleContext::Always,
                    Some(context) if context == self.config.elsewhere_context => {
                        RuleContext::Elsewhere
                    }
                    Some(context) => {
                        let morph = self.morph(context);
                        if morph.len() != CONTEXT_LENGTH {
                            return Err(entry_error(TasrifError::ContextLength {
                                context: context.to_string(),
                                expected: CONTEXT_LENGTH,
                                length: morph.len(),
                            }));
                        }
                        RuleContext::After(morph)
                    }
                };
                rules.push(Rule {
                    line,
                    context,
                    ending: self.morph(ending),
                });
            }
        }

        let mut finals = FinalDesinenceTable::builder(table);
        for (mood, (line, rules)) in moods {
            let desinence = self.desinence(table, line, mood, rules)?;
            finals.insert(mood, desinence).map_err(|error| LoadError::Entry {
                table: table.to_string(),
                line,
                error,
            })?;
        }
        let finals = finals.build()?;
        debug!(table, "loaded final desinence table");
        Ok(finals)
    }

    fn desinence(
        &self,
        table: &str,
        line: usize,
        mood: Mood,
        rules: Vec<Rule>,
    ) -> Result<Desinence, LoadError> {
        if let [Rule { context: RuleContext::Always, ending, .. }] = &rules[..] {
            return Ok(Desinence::uniform(ending.clone()));
        }

        let mut contextual = Vec::new();
        let mut elsewhere = None;
        for rule in rules {
            match rule.context {
                RuleContext::After(context) => contextual.push((context, rule.ending)),
                RuleContext::Elsewhere => elsewhere = Some(rule.ending),
                RuleContext::Always => {
                    return Err(LoadError::UnconditionedEnding {
                        table: table.to_string(),
                        line: rule.line,
                        mood: mood.code(),
                        ending: rule.ending.spell(self.config.null_marker),
                    });
                }
            }
        }
        let elsewhere = elsewhere.ok_or_else(|| LoadError::Entry {
            table: table.to_string(),
            line,
            error: TasrifError::MissingTableEntry {
                table: table.to_string(),
                key: format!("{} after {}", mood.code(), self.config.elsewhere_context),
            },
        })?;
        Ok(Desinence::contextual(contextual, elsewhere))
    }

    /// Build all six tables from their source text.
    pub fn tables(&self, sources: Sources<'_>) -> Result<MorphemeTables, LoadError> {
        let files = &self.config.files;
        Ok(MorphemeTables {
            prefixes: self.affixes(
                &files.prefixes,
                sources.prefixes,
                self.morph(&self.config.default_prefix),
            )?,
            nonpast_suffixes: self.affixes(
                &files.nonpast_suffixes,
                sources.nonpast_suffixes,
                Morph::empty(),
            )?,
            past_suffixes: self.affixes(&files.past_suffixes, sources.past_suffixes, Morph::empty())?,
            nonpast_patterns: self.patterns(&files.nonpast_patterns, sources.nonpast_patterns)?,
            past_patterns: self.patterns(&files.past_patterns, sources.past_patterns)?,
            finals: self.finals(&files.finals, sources.finals)?,
        })
    }

    /// Read the six sources from `dir`, using the configured file names.
    pub fn load_dir(&self, dir: &Path) -> Result<MorphemeTables, LoadError> {
        debug!(dir = %dir.display(), "loading tables");
        let read = |name: &str| {
            let path = dir.join(name);
            std::fs::read_to_string(&path).map_err(|source| LoadError::Io { path, source })
        };
        let files = &self.config.files;
        let prefixes = read(&files.prefixes)?;
        let nonpast_suffixes = read(&files.nonpast_suffixes)?;
        let past_suffixes = read(&files.past_suffixes)?;
        let nonpast_patterns = read(&files.nonpast_patterns)?;
        let past_patterns = read(&files.past_patterns)?;
        let finals = read(&files.finals)?;
        self.tables(Sources {
            prefixes: &prefixes,
            nonpast_suffixes: &nonpast_suffixes,
            past_suffixes: &past_suffixes,
            nonpast_patterns: &nonpast_patterns,
            past_patterns: &past_patterns,
            finals: &finals,
        })
    }

    /// The classical table set shipped with this crate.
    ///
    /// The bundled sources are written in the default spelling, so they are
    /// always read with [`LoaderConfig::default`].
    pub fn bundled() -> Result<MorphemeTables, LoadError> {
        TableLoader::default().tables(crate::bundled::SOURCES)
    }
}
