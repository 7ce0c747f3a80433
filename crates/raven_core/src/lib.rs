#![forbid(unsafe_code)]
//! Provide the shared diagnostics core and canonical language vocabulary for the Raven compiler.
//!
//! This crate is intentionally small and dependency-light. It contains the two things every other
//! layer of the compiler needs to agree on:
//!
//! - the **diagnostic subsystem** ([`diag`]): a location table with stable IDs, a metadata registry
//!   for diagnostic types, and a reporter that accumulates occurrences and renders them with
//!   source-line context, and
//! - the **language vocabulary** ([`lang`]): registry-backed keywords, operators (with precedence
//!   and associativity metadata), and punctuation.
//!
//! ## Notes
//!
//! - No IO and no global state: rendering produces a `String`, printing is the caller's business.
//! - The diagnostic machinery is deliberately fail-soft. Invalid IDs and exhausted capacity
//!   degrade (sentinel values, silent no-ops) instead of crashing the compiler.

pub mod diag;
pub mod lang;

pub use diag::location::{DiagLocation, LocationId, LocationTable, MAX_LOCATIONS};
pub use diag::metadata::{DiagId, DiagLevel, DiagMetadata};
pub use diag::reporter::{DiagReporter, Diagnostic, MAX_DETAIL, MAX_METADATA};
