//! Command-line driver: prints every requested combination of a root's
//! paradigm with readable labels.

pub mod cli;

use anyhow::{Context, Result};
use cli::{Format, TasrifCli};
use std::io::Write;
use tasrif::{Cell, ConjugationEngine, DerivedForm, Mood, Root, Selection, Voice};
use tasrif_tables::{LoaderConfig, TableLoader};
use tracing::{info, warn};

/// The selection named by the filter flags. An absent filter selects all.
pub fn selection(cli: &TasrifCli) -> Result<Selection> {
    let mut selection = Selection::default();
    if !cli.form.is_empty() {
        selection.forms = codes(&cli.form, |code| DerivedForm::try_from(code))?;
    }
    if !cli.mood.is_empty() {
        selection.moods = codes(&cli.mood, |code| Mood::try_from(code))?;
    }
    if !cli.voice.is_empty() {
        selection.voices = codes(&cli.voice, |code| Voice::try_from(code))?;
    }
    if !cli.person.is_empty() {
        selection.persons = cli.person.clone();
    }
    Ok(selection)
}

fn codes<T>(
    values: &[u8],
    convert: impl Fn(u8) -> Result<T, tasrif::TasrifError>,
) -> Result<Vec<T>> {
    values
        .iter()
        .map(|&code| convert(code).map_err(anyhow::Error::from))
        .collect()
}

/// The loader configuration only applies to a `--tables` directory; the
/// bundled tables always use their own spelling.
pub fn engine(cli: &TasrifCli) -> Result<ConjugationEngine> {
    let config = match &cli.config {
        Some(path) => LoaderConfig::from_path(path)?,
        None => LoaderConfig::default(),
    };
    let tables = match &cli.tables {
        Some(dir) => TableLoader::new(config)
            .load_dir(dir)
            .with_context(|| format!("loading tables from {}", dir.display()))?,
        None => {
            if config != LoaderConfig::default() {
                warn!("loader configuration ignored without --tables");
            }
            TableLoader::bundled()?
        }
    };
    Ok(ConjugationEngine::new(tables))
}

/// One line per cell: pattern name, voice, mood, person, surface form.
pub fn write_text(cells: &[Cell], out: &mut impl Write) -> Result<()> {
    for cell in cells {
        writeln!(
            out,
            "{} {} {} {} {}",
            cell.form, cell.voice, cell.mood, cell.person, cell.inflection
        )?;
    }
    Ok(())
}

pub fn run(cli: &TasrifCli, out: &mut impl Write) -> Result<()> {
    let root = Root::new(&cli.root)?;
    let engine = engine(cli)?;
    let selection = selection(cli)?;
    info!(%root, combinations = selection.len(), "conjugating");

    let cells = engine.bind(&root).paradigm(&selection);
    match cli.format {
        Format::Text => write_text(&cells, out)?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, &cells)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
