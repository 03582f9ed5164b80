//! Line grammar of the flat table sources.
//!
//! ```text
//! affix line    = label '->' affix
//! pattern line  = voice ',' form '->' template
//! final line    = mood '->' rule (',' rule)*
//! rule          = ending 'after' context
//!               | ending
//! ```
//!
//! Whitespace around every token is insignificant. Blank lines and lines
//! starting with `#` are skipped. The parsers here only split lines into
//! their raw parts; [`crate::loader`] turns those into table entries.

use crate::error::LoadError;
use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_till, take_until},
    character::complete::{char, digit1, space0},
    combinator::{all_consuming, map, map_res, rest, verify},
    multi::separated_list1,
    sequence::{delimited, separated_pair},
};

pub const ARROW: &str = "->";
pub const AFTER: &str = "after";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffixLine<'a> {
    pub label: &'a str,
    pub affix: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternLine<'a> {
    pub voice: u8,
    pub form: u8,
    pub template: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalLine<'a> {
    pub mood: u8,
    pub rules: Vec<FinalRule<'a>>,
}

/// `ending after context`, or a bare `ending` when `context` is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalRule<'a> {
    pub ending: &'a str,
    pub context: Option<&'a str>,
}

fn trimmed_rest(input: &str) -> IResult<&str, &str> {
    map(rest, |s: &str| s.trim())(input)
}

fn code(input: &str) -> IResult<&str, u8> {
    delimited(
        space0,
        map_res(digit1, |digits: &str| digits.parse::<u8>()),
        space0,
    )(input)
}

pub fn affix_line(input: &str) -> IResult<&str, AffixLine<'_>> {
    map(
        separated_pair(
            verify(map(take_until(ARROW), |s: &str| s.trim()), |label: &str| {
                !label.is_empty()
            }),
            tag(ARROW),
            trimmed_rest,
        ),
        |(label, affix)| AffixLine { label, affix },
    )(input)
}

pub fn pattern_line(input: &str) -> IResult<&str, PatternLine<'_>> {
    map(
        separated_pair(
            separated_pair(code, char(','), code),
            tag(ARROW),
            verify(trimmed_rest, |template: &str| !template.is_empty()),
        ),
        |((voice, form), template)| PatternLine {
            voice,
            form,
            template,
        },
    )(input)
}

fn rule(input: &str) -> IResult<&str, FinalRule<'_>> {
    let (input, text) = take_till(|c: char| c == ',')(input)?;
    let (_, rule) = all_consuming(alt((
        map(
            separated_pair(take_until(AFTER), tag(AFTER), rest),
            |(ending, context): (&str, &str)| FinalRule {
                ending: ending.trim(),
                context: Some(context.trim()),
            },
        ),
        map(rest, |ending: &str| FinalRule {
            ending: ending.trim(),
            context: None,
        }),
    )))(text)?;
    Ok((input, rule))
}

pub fn final_line(input: &str) -> IResult<&str, FinalLine<'_>> {
    map(
        separated_pair(code, tag(ARROW), separated_list1(char(','), rule)),
        |(mood, rules)| FinalLine { mood, rules },
    )(input)
}

/// Parse every content line of `text` with `parser`.
///
/// Returns each entry with its one-based line number. Fails on the first
/// line the parser rejects or does not consume completely.
pub fn parse_lines<'a, T>(
    table: &str,
    text: &'a str,
    mut parser: impl FnMut(&'a str) -> IResult<&'a str, T>,
) -> Result<Vec<(usize, T)>, LoadError> {
    let mut entries = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let content = line.trim();
        if content.is_empty() || content.starts_with('#') {
            continue;
        }
        match parser(content) {
            Ok((remaining, entry)) if remaining.trim().is_empty() => {
                entries.push((index + 1, entry));
            }
            _ => {
                return Err(LoadError::Syntax {
                    table: table.to_string(),
                    line: index + 1,
                    text: content.to_string(),
                });
            }
        }
    }
    Ok(entries)
}
