//! Forward detection and original-message extraction pipeline.
//!
//! Every stage is heuristic and total: a strategy that finds nothing hands
//! back an empty value and the cascade moves on. Only catalog construction
//! can fail.

use crate::catalog::PatternCatalog;
use crate::engine;
use crate::error::Result;
use crate::types::{Mailbox, OriginalEmail, ParseResult};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Detect forwarding in a plain-text body (and optional subject line) and
/// extract the embedded original email, using the built-in pattern catalog.
///
/// # Example
///
/// ```rust
/// use forward_extract::read;
///
/// let body = "Hi!\n\n---------- Forwarded message ---------\n\
///             From: John Doe <john.doe@acme.com>\n\
///             Subject: Quarterly numbers\n\n\
///             See attached.";
/// let result = read(body, None);
///
/// assert!(result.forwarded);
/// assert_eq!(result.email.from.address.as_deref(), Some("john.doe@acme.com"));
/// ```
#[must_use]
pub fn read(body: &str, subject: Option<&str>) -> ParseResult {
    static PARSER: LazyLock<ForwardParser> =
        LazyLock::new(|| ForwardParser::new().expect("built-in pattern catalog must compile"));

    PARSER.read(body, subject)
}

/// The extraction pipeline, bound to one immutable [`PatternCatalog`].
///
/// Stateless between calls; a single instance can serve concurrent callers
/// without locking.
#[derive(Debug, Clone)]
pub struct ForwardParser {
    catalog: PatternCatalog,
}

/// Outcome of locating the forward boundary in a body
struct BodySplit {
    /// The normalized full body, kept for strategies that need the
    /// separator line itself
    body: String,
    /// Text the forwarder typed above the boundary
    message: Option<String>,
    /// Raw embedded-email text, quote markers still in place
    email: String,
}

impl ForwardParser {
    /// Build a parser over the built-in catalog
    pub fn new() -> Result<Self> {
        Ok(Self {
            catalog: PatternCatalog::with_defaults()?,
        })
    }

    /// Build a parser over a caller-supplied catalog
    #[must_use]
    pub const fn with_catalog(catalog: PatternCatalog) -> Self {
        Self { catalog }
    }

    /// Run the full pipeline over one email
    #[must_use]
    pub fn read(&self, body: &str, subject: Option<&str>) -> ParseResult {
        let subject = subject.filter(|s| !s.is_empty());
        let subject_parsed = subject.and_then(|s| self.classify_subject(s));
        let mut forwarded = subject.is_some() && subject_parsed.is_some();

        let mut message = None;
        let mut email = OriginalEmail::default();

        // A subject line that carries no forward prefix settles the question;
        // otherwise (or on confirmation) the body decides.
        if subject.is_none() || forwarded {
            if let Some(split) = self.split_body(body, forwarded) {
                forwarded = true;
                email = self.extract_original_email(&split.email, &split.body);
                message = split.message;
            }
        }

        // The subject remainder wins over a Subject header found in the body,
        // even when it is empty.
        if subject_parsed.is_some() {
            email.subject = subject_parsed;
        }

        debug!(forwarded, has_message = message.is_some(), "read complete");

        ParseResult {
            forwarded,
            message,
            email,
        }
    }

    /// Strip a known forward prefix from the subject line.
    ///
    /// `Some("")` is a valid outcome — forwarded, but the title lost its
    /// content — and is distinct from `None` (no prefix recognized).
    fn classify_subject(&self, subject: &str) -> Option<String> {
        let matched = engine::run_match(&self.catalog.subject, subject)?;
        matched.group(1).map(|rest| rest.trim().to_string())
    }

    /// Locate the forward boundary in the body.
    fn split_body(&self, body: &str, subject_confirmed: bool) -> Option<BodySplit> {
        let body = self.normalize(body);

        // First method: an explicit separator line (Apple Mail, Gmail,
        // Outlook Live / 365, Yahoo Mail, Thunderbird, ...), tried
        // unconditionally. The line-capturing variant keeps the separator
        // itself so nested messages can be rebuilt.
        if let Some(split) = engine::run_split(&self.catalog.separator.line, &body) {
            if split.parts.len() > 2 {
                debug!("body split on separator line");
                let message = trimmed(&split.parts[0]);
                let email = engine::reconcile(&split.parts, 3, &[2], None)
                    .trim()
                    .to_string();
                return Some(BodySplit {
                    body,
                    message,
                    email,
                });
            }
        }

        // Second method: a bare From: header line as the boundary (New
        // Outlook 2019, Outlook Live / 365). Ordinary emails quote From:
        // lines too, so this runs only once the subject confirmed the
        // forward. Every third segment starting at index 2 is the inner
        // label capture re-emitted by the split and gets dropped.
        if subject_confirmed {
            if let Some(split) = engine::run_split(&self.catalog.original_from, &body) {
                if split.parts.len() > 3 {
                    debug!("body split on From header line");
                    let message = trimmed(&split.parts[0]);
                    let email = engine::reconcile(&split.parts, 4, &[1, 3], Some(&|i| i % 3 == 2))
                        .trim()
                        .to_string();
                    return Some(BodySplit {
                        body,
                        message,
                        email,
                    });
                }
            }
        }

        None
    }

    /// Extract every envelope field from the embedded-email text.
    ///
    /// `body` is the normalized full input, needed by the strategies that
    /// read metadata out of the separator line itself.
    fn extract_original_email(&self, text: &str, body: &str) -> OriginalEmail {
        let text = self.strip_quotation(text);

        OriginalEmail {
            body: self.extract_body(&text),
            from: self.extract_from(&text, body),
            to: self.extract_to(&text),
            cc: self.extract_cc(&text),
            subject: self.extract_subject(&text),
            date: self.extract_date(&text, body),
        }
    }

    /// Recover the original message's body by cutting the embedded text at
    /// its header block.
    fn extract_body(&self, text: &str) -> Option<String> {
        let bounded = [
            &self.catalog.original_subject.line,
            &self.catalog.original_cc.line,
            &self.catalog.original_to.line,
            &self.catalog.original_reply_to.line,
            &self.catalog.original_date.line,
        ];

        for patterns in bounded {
            if let Some(split) = engine::run_split(patterns.iter(), text) {
                // Only trust a header line directly followed by a blank line;
                // anything else is likely body text that looks like a label.
                if split.parts.len() > 3 && split.parts[3].starts_with("\n\n") {
                    let body = engine::reconcile(&split.parts, 4, &[3], Some(&|i| i % 3 == 2));
                    return trimmed(&body);
                }
            }
        }

        // Fallback: cut at any Subject label, strict or lax.
        let subject_lines = self
            .catalog
            .original_subject
            .line
            .iter()
            .chain(self.catalog.original_subject_lax.line.iter());
        if let Some(split) = engine::run_split(subject_lines, text) {
            if split.parts.len() > 3 {
                let body = engine::reconcile(&split.parts, 4, &[3], Some(&|i| i % 3 == 2));
                return trimmed(&body);
            }
        }

        trimmed(text)
    }

    /// Cascade for the original author.
    fn extract_from(&self, text: &str, body: &str) -> Mailbox {
        // First method: the From header line (Apple Mail, Gmail, Outlook
        // Live / 365, New Outlook 2019, Thunderbird)
        let mailboxes = self.parse_mailboxes(&self.catalog.original_from, text);
        match mailboxes.as_slice() {
            [only] if !only.is_empty() => return only.clone(),
            [first, ..] if first.address.is_some() => return first.clone(),
            _ => {}
        }

        // Second method: a separator line that embeds the author inline
        // (Outlook 2019), matched against the unstripped body. Group order
        // varies per locale, so captures are read by name.
        if let Some(matched) = engine::run_match(&self.catalog.separator_with_information, body) {
            if let Some(address) = matched.named("from_address") {
                return self.prepare_mailbox(Some(address), matched.named("from_name"));
            }
        }

        // Third method: lax From with a bracketed address (Yahoo Mail)
        if let Some(matched) = engine::run_match(&self.catalog.original_from_lax, text) {
            if matched.group_count() > 1 {
                return self.prepare_mailbox(matched.group(3), matched.group(2));
            }
        }

        Mailbox::default()
    }

    /// Cascade for the primary recipients.
    fn extract_to(&self, text: &str) -> Vec<Mailbox> {
        let recipients = self.parse_mailboxes(&self.catalog.original_to.plain, text);
        if !recipients.is_empty() {
            return recipients;
        }

        // Some clients glue the Subject, Date and Cc parts onto the To line
        // (Yahoo Mail); strip them before retrying with the lax labels.
        let clean = engine::run_replace(&self.catalog.original_subject_lax.plain, text);
        let clean = engine::run_replace(&self.catalog.original_date_lax, &clean);
        let clean = engine::run_replace(&self.catalog.original_cc_lax, &clean);
        self.parse_mailboxes(&self.catalog.original_to_lax, &clean)
    }

    /// Cascade for the carbon-copy recipients.
    fn extract_cc(&self, text: &str) -> Vec<Mailbox> {
        let recipients = self.parse_mailboxes(&self.catalog.original_cc.plain, text);
        if !recipients.is_empty() {
            return recipients;
        }

        let clean = engine::run_replace(&self.catalog.original_subject_lax.plain, text);
        let clean = engine::run_replace(&self.catalog.original_date_lax, &clean);
        self.parse_mailboxes(&self.catalog.original_cc_lax, &clean)
    }

    /// Cascade for the original subject.
    fn extract_subject(&self, text: &str) -> Option<String> {
        for patterns in [
            &self.catalog.original_subject.plain,
            &self.catalog.original_subject_lax.plain,
        ] {
            if let Some(matched) = engine::run_match(patterns, text) {
                return matched.group(1).map(|s| s.trim().to_string());
            }
        }
        None
    }

    /// Cascade for the original date, returned verbatim as matched.
    fn extract_date(&self, text: &str, body: &str) -> Option<String> {
        // First method: the Date / Sent header line
        if let Some(matched) = engine::run_match(&self.catalog.original_date.plain, text) {
            return matched.group(1).map(|s| s.trim().to_string());
        }

        // Second method: the date embedded in the separator line itself
        if let Some(matched) = engine::run_match(&self.catalog.separator_with_information, body) {
            if let Some(date) = matched.named("date") {
                return Some(date.trim().to_string());
            }
        }

        // Third method: the Subject part can sit on the same line; remove it
        // before the lax attempt (Yahoo Mail)
        let clean = engine::run_replace(&self.catalog.original_subject_lax.plain, text);
        engine::run_match(&self.catalog.original_date_lax, &clean)
            .and_then(|m| m.group(1).map(|s| s.trim().to_string()))
    }

    /// Decompose one header's raw value into an ordered mailbox list.
    ///
    /// Always a plain list: empty, singleton or multi-element. Callers that
    /// want a scalar take the first element.
    fn parse_mailboxes(&self, patterns: &[Regex], text: &str) -> Vec<Mailbox> {
        let Some(matched) = engine::run_match(patterns, text) else {
            return Vec::new();
        };
        let Some(line) = matched
            .last_group()
            .map(str::trim)
            .filter(|l| !l.is_empty())
        else {
            return Vec::new();
        };

        let mut mailboxes = Vec::new();
        let mut remaining = line.to_string();

        while !remaining.is_empty() {
            if let Some(found) = engine::run_match(&self.catalog.mailbox, &remaining) {
                let (name, address) = match (found.group(1), found.group(2)) {
                    (Some(name), Some(address)) => (Some(name), Some(address)),
                    (Some(address), None) => (None, Some(address)),
                    _ => (None, None),
                };
                mailboxes.push(self.prepare_mailbox(address, name));

                let consumed = found.start + found.full().len();
                let mut rest = remaining[consumed..].trim().to_string();
                if let Some(stripped) =
                    rest.strip_prefix(self.catalog.mailbox_separators.as_slice())
                {
                    rest = stripped.trim().to_string();
                }
                remaining = rest;
            } else {
                // Nothing recognizable left: the remainder is one final
                // mailbox, address if it validates, name otherwise.
                let last = self.prepare_mailbox(Some(&remaining), None);
                mailboxes.push(last);
                remaining.clear();
            }
        }

        debug!(count = mailboxes.len(), "mailbox list decomposed");
        mailboxes
    }

    /// Apply the mailbox invariants to a raw `{address, name}` candidate.
    fn prepare_mailbox(&self, address: Option<&str>, name: Option<&str>) -> Mailbox {
        let address = address
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string);
        let name = name
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string);

        let valid = address.as_deref().is_some_and(|candidate| {
            engine::run_match(&self.catalog.mailbox_address, candidate).is_some()
        });

        // An invalid address candidate is reinterpreted as the name: some
        // clients only include a display name where the address belongs.
        let (address, mut name) = if valid { (address, name) } else { (None, address) };

        // Some clients fill the name with the address itself
        // ("bessie.berry@acme.com <bessie.berry@acme.com>").
        if name == address {
            name = None;
        }

        Mailbox::new(address, name)
    }

    /// Canonicalize line endings and whitespace artifacts. Idempotent.
    fn normalize(&self, body: &str) -> String {
        let text = self.catalog.carriage_return.replace_all(body, "\n");
        let text = self.catalog.byte_order_mark.replace_all(&text, "");
        let text = self.catalog.trailing_non_breaking_space.replace_all(&text, "");
        self.catalog
            .non_breaking_space
            .replace_all(&text, " ")
            .into_owned()
    }

    /// Strip per-line quote markers from the embedded text while preserving
    /// paragraph structure. Blank-line markers go first so they are not
    /// mistaken for content by the later passes.
    fn strip_quotation(&self, text: &str) -> String {
        let text = self.catalog.byte_order_mark.replace_all(text, "");
        let text = self.catalog.quote_line_break.replace_all(&text, "");
        let text = self.catalog.quote.replace_all(&text, "");
        self.catalog.four_spaces.replace_all(&text, "").into_owned()
    }
}

fn trimmed(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> ForwardParser {
        ForwardParser::new().unwrap()
    }

    #[test]
    fn normalizer_is_idempotent() {
        let parser = parser();
        let input = "line one\r\nline two\u{FEFF}\nends with nbsp\u{A0}\nmid\u{A0}space\r";
        let once = parser.normalize(input);
        let twice = parser.normalize(&once);
        assert_eq!(once, twice);
        assert!(!once.contains('\r'));
        assert!(!once.contains('\u{FEFF}'));
        assert!(!once.contains('\u{A0}'));
    }

    #[test]
    fn subject_prefix_is_stripped() {
        let parser = parser();
        assert_eq!(
            parser.classify_subject("Fwd: Quarterly numbers").as_deref(),
            Some("Quarterly numbers")
        );
        assert_eq!(
            parser.classify_subject("TR: Chiffres trimestriels").as_deref(),
            Some("Chiffres trimestriels")
        );
    }

    #[test]
    fn subject_without_prefix_yields_nothing() {
        assert_eq!(parser().classify_subject("Quarterly numbers"), None);
    }

    #[test]
    fn empty_remainder_is_still_a_forward() {
        // "Fwd:" with nothing behind it: forwarded, but the title is gone.
        assert_eq!(parser().classify_subject("Fwd:").as_deref(), Some(""));
    }

    #[test]
    fn quotation_stripping_preserves_paragraphs() {
        let parser = parser();
        let stripped = parser.strip_quotation("> line one\n> \n> line two\n    indented");
        assert_eq!(stripped, "line one\n\nline two\nindented");
    }

    #[test]
    fn from_header_split_requires_subject_confirmation() {
        let parser = parser();
        let body = "Hello.\n\nFrom: John Doe <john.doe@acme.com>\n\nSee attached.";
        assert!(parser.split_body(body, false).is_none());
        assert!(parser.split_body(body, true).is_some());
    }
}
