//! Matching engine.
//!
//! Evaluates an ordered list of candidate patterns against a string in one of
//! three modes and resolves a single winner:
//!
//! - *match*: earliest match position wins — the outermost boundary is the
//!   most reliable one when several locale patterns overlap.
//! - *split*: the string is cut at the pattern while keeping the captured
//!   delimiter segments; the shortest captured delimiter wins, since tighter
//!   matches come from the more specific patterns.
//! - *replace*: candidates strip all their occurrences in order; the first
//!   whose output did not grow is accepted.
//!
//! Comparisons are strictly-better, so exact ties keep the first-seen
//! candidate and catalog order stays the reproducible tie-break of last
//! resort. No match is an ordinary outcome here, never an error.

use regex::Regex;
use std::collections::HashMap;

/// One winning match, with captures addressable by index or by name
#[derive(Debug, Clone)]
pub(crate) struct PatternMatch {
    /// Byte offset of the match in the haystack
    pub start: usize,
    /// Capture texts by index; index 0 is the full match
    groups: Vec<Option<String>>,
    /// Capture texts by group name
    named: HashMap<String, String>,
}

impl PatternMatch {
    pub fn group(&self, index: usize) -> Option<&str> {
        self.groups.get(index).and_then(Option::as_deref)
    }

    /// The full matched text
    pub fn full(&self) -> &str {
        self.group(0).unwrap_or_default()
    }

    /// The last capture group that participated in the match
    pub fn last_group(&self) -> Option<&str> {
        self.groups.iter().skip(1).rev().find_map(Option::as_deref)
    }

    /// Number of capture slots, full match included
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn named(&self, name: &str) -> Option<&str> {
        self.named.get(name).map(String::as_str)
    }
}

/// Segments produced by a delimiter-keeping split
#[derive(Debug, Clone)]
pub(crate) struct SplitOutcome {
    /// Text between matches interleaved with each match's capture texts
    pub parts: Vec<String>,
    /// Length of the first captured delimiter segment, for tie-breaking
    delimiter_len: usize,
}

/// Outcome of evaluating one candidate pattern
#[derive(Debug, Clone)]
pub(crate) enum MatchOutcome {
    NoMatch,
    Matched(PatternMatch),
    Split(SplitOutcome),
}

/// Evaluation mode for [`evaluate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    Match,
    Split,
}

/// Evaluate a single candidate against the text
pub(crate) fn evaluate(pattern: &Regex, text: &str, mode: Mode) -> MatchOutcome {
    match mode {
        Mode::Match => capture_match(pattern, text).map_or(MatchOutcome::NoMatch, MatchOutcome::Matched),
        Mode::Split => {
            let parts = split_keep_delimiters(pattern, text);
            // A single segment means the delimiter never matched.
            if parts.len() > 1 {
                let delimiter_len = parts[1].len();
                MatchOutcome::Split(SplitOutcome {
                    parts,
                    delimiter_len,
                })
            } else {
                MatchOutcome::NoMatch
            }
        }
    }
}

/// Run all candidates in *match* mode; earliest match position wins
pub(crate) fn run_match<'a, I>(patterns: I, text: &str) -> Option<PatternMatch>
where
    I: IntoIterator<Item = &'a Regex>,
{
    let mut winner: Option<PatternMatch> = None;
    for pattern in patterns {
        if let MatchOutcome::Matched(candidate) = evaluate(pattern, text, Mode::Match) {
            let better = winner.as_ref().is_none_or(|w| candidate.start < w.start);
            if better {
                winner = Some(candidate);
            }
        }
    }
    winner
}

/// Run all candidates in *split* mode; shortest captured delimiter wins
pub(crate) fn run_split<'a, I>(patterns: I, text: &str) -> Option<SplitOutcome>
where
    I: IntoIterator<Item = &'a Regex>,
{
    let mut winner: Option<SplitOutcome> = None;
    for pattern in patterns {
        if let MatchOutcome::Split(candidate) = evaluate(pattern, text, Mode::Split) {
            let better = winner
                .as_ref()
                .is_none_or(|w| candidate.delimiter_len < w.delimiter_len);
            if better {
                winner = Some(candidate);
            }
        }
    }
    winner
}

/// Run candidates in *replace* mode: strip all occurrences of the first
/// candidate whose result does not exceed the input length. Returns the
/// input unchanged when no candidate qualifies.
pub(crate) fn run_replace<'a, I>(patterns: I, text: &str) -> String
where
    I: IntoIterator<Item = &'a Regex>,
{
    for pattern in patterns {
        let replaced = pattern.replace_all(text, "");
        if replaced.len() <= text.len() {
            return replaced.into_owned();
        }
    }
    text.to_string()
}

/// Merge split segments back into the embedded-email text.
///
/// The `seed` indices are always included first; when the segment count
/// exceeds `min_parts`, every remaining segment follows in order unless the
/// exclusion predicate marks its index. For nested forwards the predicate
/// drops only the intermediate re-captured delimiter fragments, keeping all
/// body content in original order.
pub(crate) fn reconcile(
    parts: &[String],
    min_parts: usize,
    seed: &[usize],
    exclude: Option<&dyn Fn(usize) -> bool>,
) -> String {
    let mut text = String::new();
    for &index in seed {
        if let Some(part) = parts.get(index) {
            text.push_str(part);
        }
    }

    if parts.len() > min_parts {
        for (index, part) in parts.iter().enumerate().skip(min_parts) {
            if exclude.is_some_and(|is_excluded| is_excluded(index)) {
                continue;
            }
            text.push_str(part);
        }
    }

    text
}

fn capture_match(pattern: &Regex, text: &str) -> Option<PatternMatch> {
    let caps = pattern.captures(text)?;
    let full = caps.get(0)?;

    let groups = (0..caps.len())
        .map(|i| caps.get(i).map(|m| m.as_str().to_string()))
        .collect();

    let named = pattern
        .capture_names()
        .flatten()
        .filter_map(|name| {
            caps.name(name)
                .map(|m| (name.to_string(), m.as_str().to_string()))
        })
        .collect();

    Some(PatternMatch {
        start: full.start(),
        groups,
        named,
    })
}

/// Split `text` at every match, keeping each match's capture groups as their
/// own segments so no information is lost.
fn split_keep_delimiters(pattern: &Regex, text: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut cursor = 0;

    for caps in pattern.captures_iter(text) {
        let Some(full) = caps.get(0) else { continue };
        parts.push(text[cursor..full.start()].to_string());
        for i in 1..caps.len() {
            if let Some(group) = caps.get(i) {
                parts.push(group.as_str().to_string());
            }
        }
        cursor = full.end();
    }

    parts.push(text[cursor..].to_string());
    parts
}
