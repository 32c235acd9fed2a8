//! Compiled pattern catalog.
//!
//! The catalog is the only process-wide state of the extractor: built once
//! from a [`CatalogSource`], immutable afterwards, and safe to share across
//! threads. Categories used in split mode get a derived "line" form where the
//! whole pattern is wrapped in a capture group, so a split keeps the matched
//! separator line as its own segment.

use crate::error::{CatalogError, Result};
use crate::patterns;
use regex::Regex;

/// Borrowed pattern sources for every catalog category.
///
/// [`CatalogSource::DEFAULT`] wires up the built-in tables from `patterns`;
/// a caller can substitute or extend any category before compiling.
#[derive(Debug, Clone)]
pub struct CatalogSource<'a> {
    pub quote_line_break: &'a str,
    pub quote: &'a str,
    pub four_spaces: &'a str,
    pub carriage_return: &'a str,
    pub byte_order_mark: &'a str,
    pub trailing_non_breaking_space: &'a str,
    pub non_breaking_space: &'a str,
    pub subject: &'a [&'a str],
    pub separator: &'a [&'a str],
    pub separator_with_information: &'a [&'a str],
    pub original_subject: &'a [&'a str],
    pub original_subject_lax: &'a [&'a str],
    pub original_from: &'a [&'a str],
    pub original_from_lax: &'a [&'a str],
    pub original_to: &'a [&'a str],
    pub original_to_lax: &'a [&'a str],
    pub original_reply_to: &'a [&'a str],
    pub original_cc: &'a [&'a str],
    pub original_cc_lax: &'a [&'a str],
    pub original_date: &'a [&'a str],
    pub original_date_lax: &'a [&'a str],
    pub mailbox: &'a [&'a str],
    pub mailbox_address: &'a [&'a str],
    pub mailbox_separators: &'a [char],
}

impl CatalogSource<'static> {
    /// The built-in catalog data
    pub const DEFAULT: Self = Self {
        quote_line_break: patterns::QUOTE_LINE_BREAK,
        quote: patterns::QUOTE,
        four_spaces: patterns::FOUR_SPACES,
        carriage_return: patterns::CARRIAGE_RETURN,
        byte_order_mark: patterns::BYTE_ORDER_MARK,
        trailing_non_breaking_space: patterns::TRAILING_NON_BREAKING_SPACE,
        non_breaking_space: patterns::NON_BREAKING_SPACE,
        subject: patterns::SUBJECT,
        separator: patterns::SEPARATOR,
        separator_with_information: patterns::SEPARATOR_WITH_INFORMATION,
        original_subject: patterns::ORIGINAL_SUBJECT,
        original_subject_lax: patterns::ORIGINAL_SUBJECT_LAX,
        original_from: patterns::ORIGINAL_FROM,
        original_from_lax: patterns::ORIGINAL_FROM_LAX,
        original_to: patterns::ORIGINAL_TO,
        original_to_lax: patterns::ORIGINAL_TO_LAX,
        original_reply_to: patterns::ORIGINAL_REPLY_TO,
        original_cc: patterns::ORIGINAL_CC,
        original_cc_lax: patterns::ORIGINAL_CC_LAX,
        original_date: patterns::ORIGINAL_DATE,
        original_date_lax: patterns::ORIGINAL_DATE_LAX,
        mailbox: patterns::MAILBOX,
        mailbox_address: patterns::MAILBOX_ADDRESS,
        mailbox_separators: patterns::MAILBOX_SEPARATORS,
    };
}

impl Default for CatalogSource<'static> {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A category compiled in both its plain form and its line-capturing form
#[derive(Debug, Clone)]
pub struct LinePatterns {
    /// Patterns as written in the source
    pub plain: Vec<Regex>,
    /// Same patterns wrapped in a capture group spanning the whole match
    pub line: Vec<Regex>,
}

/// The compiled, immutable pattern catalog
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    pub(crate) quote_line_break: Regex,
    pub(crate) quote: Regex,
    pub(crate) four_spaces: Regex,
    pub(crate) carriage_return: Regex,
    pub(crate) byte_order_mark: Regex,
    pub(crate) trailing_non_breaking_space: Regex,
    pub(crate) non_breaking_space: Regex,
    pub(crate) subject: Vec<Regex>,
    pub(crate) separator: LinePatterns,
    pub(crate) separator_with_information: Vec<Regex>,
    pub(crate) original_subject: LinePatterns,
    pub(crate) original_subject_lax: LinePatterns,
    pub(crate) original_from: Vec<Regex>,
    pub(crate) original_from_lax: Vec<Regex>,
    pub(crate) original_to: LinePatterns,
    pub(crate) original_to_lax: Vec<Regex>,
    pub(crate) original_reply_to: LinePatterns,
    pub(crate) original_cc: LinePatterns,
    pub(crate) original_cc_lax: Vec<Regex>,
    pub(crate) original_date: LinePatterns,
    pub(crate) original_date_lax: Vec<Regex>,
    pub(crate) mailbox: Vec<Regex>,
    pub(crate) mailbox_address: Vec<Regex>,
    pub(crate) mailbox_separators: Vec<char>,
}

impl PatternCatalog {
    /// Compile a catalog from pattern sources.
    ///
    /// Fails fast on the first malformed pattern; per-call extraction never
    /// sees an invalid catalog.
    pub fn compile(source: &CatalogSource<'_>) -> Result<Self> {
        Ok(Self {
            quote_line_break: compile_one("quote_line_break", source.quote_line_break)?,
            quote: compile_one("quote", source.quote)?,
            four_spaces: compile_one("four_spaces", source.four_spaces)?,
            carriage_return: compile_one("carriage_return", source.carriage_return)?,
            byte_order_mark: compile_one("byte_order_mark", source.byte_order_mark)?,
            trailing_non_breaking_space: compile_one(
                "trailing_non_breaking_space",
                source.trailing_non_breaking_space,
            )?,
            non_breaking_space: compile_one("non_breaking_space", source.non_breaking_space)?,
            subject: compile_set("subject", source.subject)?,
            separator: compile_line_set("separator", source.separator)?,
            separator_with_information: compile_set(
                "separator_with_information",
                source.separator_with_information,
            )?,
            original_subject: compile_line_set("original_subject", source.original_subject)?,
            original_subject_lax: compile_line_set(
                "original_subject_lax",
                source.original_subject_lax,
            )?,
            original_from: compile_set("original_from", source.original_from)?,
            original_from_lax: compile_set("original_from_lax", source.original_from_lax)?,
            original_to: compile_line_set("original_to", source.original_to)?,
            original_to_lax: compile_set("original_to_lax", source.original_to_lax)?,
            original_reply_to: compile_line_set("original_reply_to", source.original_reply_to)?,
            original_cc: compile_line_set("original_cc", source.original_cc)?,
            original_cc_lax: compile_set("original_cc_lax", source.original_cc_lax)?,
            original_date: compile_line_set("original_date", source.original_date)?,
            original_date_lax: compile_set("original_date_lax", source.original_date_lax)?,
            mailbox: compile_set("mailbox", source.mailbox)?,
            mailbox_address: compile_set("mailbox_address", source.mailbox_address)?,
            mailbox_separators: source.mailbox_separators.to_vec(),
        })
    }

    /// Compile the built-in catalog
    pub fn with_defaults() -> Result<Self> {
        Self::compile(&CatalogSource::DEFAULT)
    }
}

fn compile_one(category: &'static str, src: &str) -> Result<Regex> {
    Regex::new(src).map_err(|e| CatalogError::Pattern {
        category,
        source: Box::new(e),
    })
}

fn compile_set(category: &'static str, sources: &[&str]) -> Result<Vec<Regex>> {
    sources
        .iter()
        .map(|src| compile_one(category, src))
        .collect()
}

fn compile_line_set(category: &'static str, sources: &[&str]) -> Result<LinePatterns> {
    let plain = compile_set(category, sources)?;
    let line = sources
        .iter()
        .map(|src| {
            // Inline flags stay scoped to the new group, so the wrapped form
            // matches exactly what the plain form matches.
            Regex::new(&format!("({src})")).map_err(|e| CatalogError::LineVariant {
                category,
                source: Box::new(e),
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(LinePatterns { plain, line })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_compile() {
        let catalog = PatternCatalog::with_defaults().unwrap();
        assert_eq!(catalog.separator.plain.len(), catalog.separator.line.len());
        assert!(!catalog.mailbox.is_empty());
    }

    #[test]
    fn line_variant_captures_whole_match() {
        let catalog = PatternCatalog::with_defaults().unwrap();
        let text = "before\nBegin forwarded message:\nafter";
        let caps = catalog.separator.line[0].captures(text).unwrap();
        assert_eq!(caps.get(1).unwrap().as_str(), "Begin forwarded message:");
    }

    #[test]
    fn malformed_pattern_fails_fast() {
        let source = CatalogSource {
            subject: &["(unclosed"],
            ..CatalogSource::DEFAULT
        };
        assert!(PatternCatalog::compile(&source).is_err());
    }
}
