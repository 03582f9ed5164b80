//! Grammatical features a conjugation is indexed by.
//!
//! Moods, voices and derived forms are closed sets with fixed integer codes
//! (the codes the flat table sources use). Person/number is kept as a plain
//! label: the tables decide which labels they know, and a lookup with any
//! other label falls back to the table default.

use crate::error::TasrifError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The 13 person/number labels, in paradigm order.
///
/// `1`–`3` are the singulars (first, second, third person), `4` is the first
/// person plural, `5*` the second person plural and dual and `6*` the third
/// person plural and dual. A trailing `m`/`f` marks gender, `d` the dual.
pub const PERSON_LABELS: [&str; 13] = [
    "1", "2m", "2f", "3m", "3f", "4", "5m", "5f", "5d", "6m", "6f", "6dm", "6df",
];

/// Grammatical mood. The past tense is treated as a fourth mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Past,
    Indicative,
    Subjunctive,
    Jussive,
}

impl Mood {
    pub const ALL: [Mood; 4] = [Mood::Past, Mood::Indicative, Mood::Subjunctive, Mood::Jussive];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Mood::Past => "past",
            Mood::Indicative => "indicative",
            Mood::Subjunctive => "subjunctive",
            Mood::Jussive => "jussive",
        }
    }

    /// Past-tense forms use the past pattern and suffix tables and take no
    /// prefix or desinence.
    pub fn is_past(self) -> bool {
        self == Mood::Past
    }
}

impl TryFrom<u8> for Mood {
    type Error = TasrifError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Mood::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(TasrifError::UnknownCode { feature: "mood", code })
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Voice {
    Active,
    Passive,
}

impl Voice {
    pub const ALL: [Voice; 2] = [Voice::Active, Voice::Passive];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Voice::Active => "active",
            Voice::Passive => "passive",
        }
    }
}

impl TryFrom<u8> for Voice {
    type Error = TasrifError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Voice::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(TasrifError::UnknownCode { feature: "voice", code })
    }
}

impl fmt::Display for Voice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the ten templatic derivational classes, Forms I–X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DerivedForm {
    I,
    II,
    III,
    IV,
    V,
    VI,
    VII,
    VIII,
    IX,
    X,
}

impl DerivedForm {
    pub const ALL: [DerivedForm; 10] = [
        DerivedForm::I,
        DerivedForm::II,
        DerivedForm::III,
        DerivedForm::IV,
        DerivedForm::V,
        DerivedForm::VI,
        DerivedForm::VII,
        DerivedForm::VIII,
        DerivedForm::IX,
        DerivedForm::X,
    ];

    /// Zero-based code: Form I is `0`, Form X is `9`.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// The traditional name of the pattern, spelled on the model root f-`-l.
    pub fn name(self) -> &'static str {
        match self {
            DerivedForm::I => "fa`ala",
            DerivedForm::II => "fa``ala",
            DerivedForm::III => "fā`ala",
            DerivedForm::IV => "ʾaf`ala",
            DerivedForm::V => "tafa``ala",
            DerivedForm::VI => "tafā`ala",
            DerivedForm::VII => "infa`ala",
            DerivedForm::VIII => "ifta`ala",
            DerivedForm::IX => "if`alla",
            DerivedForm::X => "istafʿala",
        }
    }

    /// The Roman numeral used in Western grammars.
    pub fn numeral(self) -> &'static str {
        match self {
            DerivedForm::I => "I",
            DerivedForm::II => "II",
            DerivedForm::III => "III",
            DerivedForm::IV => "IV",
            DerivedForm::V => "V",
            DerivedForm::VI => "VI",
            DerivedForm::VII => "VII",
            DerivedForm::VIII => "VIII",
            DerivedForm::IX => "IX",
            DerivedForm::X => "X",
        }
    }
}

impl TryFrom<u8> for DerivedForm {
    type Error = TasrifError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        DerivedForm::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(TasrifError::UnknownCode { feature: "derived form", code })
    }
}

impl fmt::Display for DerivedForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
