//! Core types for extraction results

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of a single forward-detection pass
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParseResult {
    /// Was the input recognized as a forwarded email?
    pub forwarded: bool,

    /// New text the forwarder typed above the quoted original.
    ///
    /// Only populated when `forwarded` is true and the body was actually
    /// split; a forward confirmed by the subject alone leaves this empty.
    pub message: Option<String>,

    /// The embedded original email, field by field
    pub email: OriginalEmail,
}

/// Envelope and body of the embedded original email.
///
/// Every field is best-effort: a client convention missing from the pattern
/// catalog leaves the field empty rather than failing the call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OriginalEmail {
    /// Body of the original message, with header lines and quote markers
    /// stripped
    pub body: Option<String>,

    /// Original sender
    pub from: Mailbox,

    /// Primary recipients, in the order they were listed
    pub to: Vec<Mailbox>,

    /// Carbon-copy recipients, in the order they were listed
    pub cc: Vec<Mailbox>,

    /// Original subject line
    pub subject: Option<String>,

    /// Original date, verbatim as matched (locale-specific, unparsed)
    pub date: Option<String>,
}

impl OriginalEmail {
    /// True when no field was extracted at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_none()
            && self.from.is_empty()
            && self.to.is_empty()
            && self.cc.is_empty()
            && self.subject.is_none()
            && self.date.is_none()
    }
}

/// An `{address, name}` pair identifying a sender or recipient
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Mailbox {
    /// Email address, present only when it passed address-syntax validation
    pub address: Option<String>,

    /// Display name. Cleared when it merely duplicates the address,
    /// a common client artifact.
    pub name: Option<String>,
}

impl Mailbox {
    /// Build a mailbox from already-validated parts
    #[must_use]
    pub fn new(address: Option<String>, name: Option<String>) -> Self {
        Self { address, name }
    }

    /// True when neither address nor name is present
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.address.is_none() && self.name.is_none()
    }
}

impl fmt::Display for Mailbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.name, &self.address) {
            (Some(name), Some(address)) => write!(f, "{name} <{address}>"),
            (Some(name), None) => write!(f, "{name}"),
            (None, Some(address)) => write!(f, "{address}"),
            (None, None) => Ok(()),
        }
    }
}
