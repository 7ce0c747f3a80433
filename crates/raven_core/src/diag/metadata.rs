//! Diagnostic severity levels and type metadata.
//!
//! A [`DiagMetadata`] describes a diagnostic *type* once: code, name, severity, message template,
//! and optional help text. Occurrences reference the registered metadata by [`DiagId`] and only
//! carry per-instance detail.

/// Opaque handle identifying registered diagnostic metadata.
///
/// `0` is the reserved invalid sentinel; valid IDs are 1-based, assigned in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DiagId(u32);

impl DiagId {
    /// The reserved "not registered" sentinel.
    pub const INVALID: DiagId = DiagId(0);

    /// Reconstruct a handle from its raw value.
    pub fn from_raw(raw: u32) -> Self {
        DiagId(raw)
    }

    /// Return the raw 1-based value (0 for the invalid sentinel).
    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// Return `true` unless this is the invalid sentinel.
    pub fn is_valid(self) -> bool {
        self.0 != 0
    }
}

/// Diagnostic severity.
///
/// `Fatal` renders with its own label but is folded into the error counter for aggregate
/// purposes; see [`crate::diag::reporter::DiagReporter::count_by_level`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagLevel {
    Note,
    Warning,
    Error,
    Fatal,
}

/// Fixed descriptive data for one diagnostic type.
///
/// Immutable after registration. Construct with the level shorthands and builder methods:
///
/// ```rust
/// use raven_core::diag::metadata::DiagMetadata;
///
/// let meta = DiagMetadata::error("unexpected_token", "unexpected token")
///     .with_code("E0002")
///     .with_help("a declaration starts with 'let', 'const', 'function', 'struct', or 'enum'");
/// assert_eq!(meta.code.as_deref(), Some("E0002"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagMetadata {
    /// Assigned by the registry; [`DiagId::INVALID`] until registered.
    pub id: DiagId,
    /// Error code shown in brackets (e.g. "E0001").
    pub code: Option<String>,
    /// Machine-friendly name (e.g. "expected_token").
    pub name: String,
    pub level: DiagLevel,
    /// Message template shown on the headline.
    pub message: String,
    /// Help text appended after the source context.
    pub help: Option<String>,
}

impl DiagMetadata {
    /// Construct metadata with the given severity.
    pub fn new(name: impl Into<String>, level: DiagLevel, message: impl Into<String>) -> Self {
        Self {
            id: DiagId::INVALID,
            code: None,
            name: name.into(),
            level,
            message: message.into(),
            help: None,
        }
    }

    /// Shorthand for [`DiagLevel::Note`] metadata.
    pub fn note(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(name, DiagLevel::Note, message)
    }

    /// Shorthand for [`DiagLevel::Warning`] metadata.
    pub fn warning(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(name, DiagLevel::Warning, message)
    }

    /// Shorthand for [`DiagLevel::Error`] metadata.
    pub fn error(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(name, DiagLevel::Error, message)
    }

    /// Shorthand for [`DiagLevel::Fatal`] metadata.
    pub fn fatal(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(name, DiagLevel::Fatal, message)
    }

    /// Attach a bracketed error code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Attach a trailing help line.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let meta = DiagMetadata::warning("shadowed_name", "name shadows an earlier binding");
        assert_eq!(meta.id, DiagId::INVALID);
        assert_eq!(meta.level, DiagLevel::Warning);
        assert!(meta.code.is_none());
        assert!(meta.help.is_none());
    }
}
