//! Error types for table loading.

use std::path::PathBuf;
use tasrif::TasrifError;
use thiserror::Error;

/// Errors raised while reading table sources.
///
/// Every one of these is raised before an engine exists: a table set either
/// loads completely or not at all.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line does not follow the grammar of its table.
    #[error("{table}:{line}: cannot parse '{text}'")]
    Syntax {
        table: String,
        line: usize,
        text: String,
    },

    /// A line parsed, but its content is not a valid table entry.
    #[error("{table}:{line}: {error}")]
    Entry {
        table: String,
        line: usize,
        #[source]
        error: TasrifError,
    },

    /// An ending without a context, for a mood whose other endings are
    /// chosen by context.
    #[error("{table}:{line}: ending '{ending}' has no context but mood {mood} has contextual endings")]
    UnconditionedEnding {
        table: String,
        line: usize,
        mood: u8,
        ending: String,
    },

    #[error("invalid loader configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Table(#[from] TasrifError),
}
