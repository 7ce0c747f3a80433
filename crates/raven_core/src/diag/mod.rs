//! Diagnostic subsystem: source locations, diagnostic metadata, and the reporter.
//!
//! The design is metadata-driven. A diagnostic *type* (code, name, severity, message template,
//! help text) is registered once and identified by a [`DiagId`]; each *occurrence* references a
//! registered type plus a [`LocationId`] from the reporter's location table and carries its own
//! formatted detail string.
//!
//! ## Notes
//! - Everything here is fail-soft by contract: the diagnostic machinery must never itself crash
//!   the compiler. Invalid IDs no-op, exhausted capacity returns the `INVALID` sentinel.
//! - Rendering ([`DiagReporter::render_all`]) is a pure read and safe to call repeatedly.
//!
//! ## Module Structure
//!
//! - `location` - Location table with stable IDs and path interning
//! - `metadata` - Severity levels and diagnostic type metadata
//! - `reporter` - Occurrence log, severity counters, query surface
//! - `render` - Text rendering with source-line context and caret underlines

pub mod location;
pub mod metadata;
pub mod render;
pub mod reporter;

pub use location::{DiagLocation, LocationId, LocationTable, MAX_LOCATIONS};
pub use metadata::{DiagId, DiagLevel, DiagMetadata};
pub use reporter::{DiagReporter, Diagnostic, MAX_DETAIL, MAX_METADATA};
