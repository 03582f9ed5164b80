//! # tasrif-tables
//!
//! Reads the flat text sources the conjugation tables are kept in, and ships
//! a classical table set.
//!
//! A table directory holds six files, one entry per line:
//!
//! ```text
//! prefixes        3m -> y
//! suffixes        2f -> ī0
//! suffixes_prime  3f -> at
//! forms           0,0 -> aFMAL
//! forms_prime     1,6 -> EMPTY
//! finals          1 -> u after C, na after ī0
//! ```
//!
//! ## Example
//!
//! ```
//! use tasrif::{DerivedForm, Mood, Root, Voice};
//!
//! let engine = tasrif_tables::bundled::engine().unwrap();
//! let root = Root::new("qtlua").unwrap();
//! let form = engine.conjugate("3m", Mood::Past, DerivedForm::I, Voice::Active, &root);
//! assert_eq!(form.to_string(), "qatala");
//! ```

pub mod bundled;
pub mod config;
pub mod error;
pub mod loader;
pub mod source;

pub use config::{LoaderConfig, TableFiles};
pub use error::LoadError;
pub use loader::{Sources, TableLoader};
