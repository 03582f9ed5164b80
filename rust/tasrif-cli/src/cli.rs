use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "tasrif")]
#[command(bin_name = "tasrif")]
#[command(about = "Print conjugation tables for Arabic verb roots", long_about = None)]
pub struct TasrifCli {
    /// Three consonants followed by the non-past and past theme vowels.
    #[arg(default_value = "qtlua")]
    pub root: String,

    /// Directory holding the six table sources. Defaults to the bundled set.
    #[arg(short, long)]
    pub tables: Option<PathBuf>,

    /// JSON loader configuration for the `--tables` directory.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Derived form codes to print (0 = Form I ... 9 = Form X).
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..10))]
    pub form: Vec<u8>,

    /// Mood codes to print (0 = past, 1 = indicative, 2 = subjunctive, 3 = jussive).
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..4))]
    pub mood: Vec<u8>,

    /// Voice codes to print (0 = active, 1 = passive).
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..2))]
    pub voice: Vec<u8>,

    /// Person labels to print.
    #[arg(long)]
    pub person: Vec<String>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}
