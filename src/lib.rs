// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Forwarded-Email Extractor
//!
//! Detects whether a plain-text email body (and optionally its subject line)
//! wraps a previously sent email, and reconstructs the embedded original:
//! sender, recipients, subject, date and body, separated from whatever new
//! text the forwarder typed.
//!
//! Detection is heuristic, driven by a catalog of per-client, per-locale
//! patterns. Every input produces a [`ParseResult`]; a convention the catalog
//! does not know simply leaves fields empty.
//!
//! # Features
//!
//! - Separator-line detection across dozens of mail clients and locales
//! - Nested forward chains reconciled into one coherent original
//! - Quote-marker stripping (`>` runs, four-space indents)
//! - Mailbox-list decomposition with address validation
//! - Immutable, injectable pattern catalog, safe for concurrent use
//!
//! # Example
//!
//! ```rust
//! use forward_extract::read;
//!
//! let body = "FYI\n\n---------- Forwarded message ---------\n\
//!             From: Bessie Berry <bessie.berry@acme.com>\n\
//!             Subject: Lunch\n\nNoon works for me.";
//! let result = read(body, Some("Fwd: Lunch"));
//!
//! assert!(result.forwarded);
//! assert_eq!(result.message.as_deref(), Some("FYI"));
//! assert_eq!(result.email.subject.as_deref(), Some("Lunch"));
//! ```

mod catalog;
mod engine;
mod error;
mod parser;
pub mod patterns;
mod types;

pub use catalog::{CatalogSource, LinePatterns, PatternCatalog};
pub use error::{CatalogError, Result};
pub use parser::{ForwardParser, read};
pub use types::{Mailbox, OriginalEmail, ParseResult};
