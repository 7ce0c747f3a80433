//! The diagnostic reporter: metadata registry, occurrence log, and severity counters.
//!
//! A [`DiagReporter`] owns one [`LocationTable`] and one metadata registry per compilation unit.
//! Occurrences accumulate in emission order and are rendered together after the parse attempt.
//!
//! ## Notes
//! - `report` is best-effort: an unregistered or invalid [`DiagId`] is a silent no-op. The
//!   diagnostic machinery must never itself take the front end down.
//! - `Fatal` occurrences count into the error counter; `count_by_level(Fatal)` is 0 by contract.

use super::location::{LocationId, LocationTable};
use super::metadata::{DiagId, DiagLevel, DiagMetadata};

/// Maximum number of diagnostic types one reporter will register.
pub const MAX_METADATA: usize = 512;

/// Maximum byte length of a formatted detail string; longer details are truncated on a char
/// boundary rather than rejected.
pub const MAX_DETAIL: usize = 4096;

/// One recorded occurrence of a registered diagnostic type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub location: LocationId,
    pub diag: DiagId,
    /// Per-instance detail, already formatted (may be empty).
    pub detail: String,
}

/// Accumulates diagnostics for one compilation unit.
#[derive(Debug, Default)]
pub struct DiagReporter {
    locations: LocationTable,
    metadata: Vec<DiagMetadata>,
    entries: Vec<Diagnostic>,
    error_count: usize,
    warning_count: usize,
    note_count: usize,
}

impl DiagReporter {
    /// Create an empty reporter with its own location table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register diagnostic metadata and return its fresh sequential ID.
    ///
    /// Must be called before any occurrence referencing the ID is reported. Returns
    /// [`DiagId::INVALID`] once [`MAX_METADATA`] types are registered; the caller must not report
    /// with that ID (doing so is a harmless no-op).
    pub fn register(&mut self, mut metadata: DiagMetadata) -> DiagId {
        if self.metadata.len() >= MAX_METADATA {
            return DiagId::INVALID;
        }
        let id = DiagId::from_raw(self.metadata.len() as u32 + 1);
        metadata.id = id;
        self.metadata.push(metadata);
        id
    }

    /// Look up registered metadata. Invalid or unknown IDs yield `None`.
    pub fn metadata_for(&self, id: DiagId) -> Option<&DiagMetadata> {
        if !id.is_valid() {
            return None;
        }
        self.metadata.get(id.as_u32() as usize - 1)
    }

    /// Record an occurrence of a registered diagnostic.
    ///
    /// Unregistered/invalid `diag` IDs make this a silent no-op: counters and the log are left
    /// untouched. `detail` longer than [`MAX_DETAIL`] bytes is truncated. `location` may be
    /// [`LocationId::INVALID`], in which case rendering omits the source context.
    pub fn report(&mut self, diag: DiagId, location: LocationId, detail: impl Into<String>) {
        let Some(metadata) = self.metadata_for(diag) else {
            return;
        };

        match metadata.level {
            DiagLevel::Note => self.note_count += 1,
            DiagLevel::Warning => self.warning_count += 1,
            // Fatal subsumed by the error counter.
            DiagLevel::Error | DiagLevel::Fatal => self.error_count += 1,
        }

        let mut detail = detail.into();
        if detail.len() > MAX_DETAIL {
            let mut cut = MAX_DETAIL;
            while cut > 0 && !detail.is_char_boundary(cut) {
                cut -= 1;
            }
            detail.truncate(cut);
        }

        self.entries.push(Diagnostic {
            location,
            diag,
            detail,
        });
    }

    /// O(1) read of the maintained severity counters.
    ///
    /// `Fatal` occurrences are folded into the error counter at report time, so
    /// `count_by_level(DiagLevel::Fatal)` is always 0.
    pub fn count_by_level(&self, level: DiagLevel) -> usize {
        match level {
            DiagLevel::Note => self.note_count,
            DiagLevel::Warning => self.warning_count,
            DiagLevel::Error => self.error_count,
            DiagLevel::Fatal => 0,
        }
    }

    /// Return `true` iff any error-level (or fatal) diagnostic was recorded.
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Total number of recorded occurrences.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` if nothing has been reported.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The occurrence log in emission order.
    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// The owned location table (for resolution).
    pub fn locations(&self) -> &LocationTable {
        &self.locations
    }

    /// The owned location table (for registration during lexing/parsing).
    pub fn locations_mut(&mut self) -> &mut LocationTable {
        &mut self.locations
    }

    /// Render every recorded diagnostic in emission order.
    ///
    /// Pure read: calling this repeatedly yields the same output and mutates nothing. Pass the
    /// original source text to get source-line context with caret underlines; pass `color: false`
    /// for plain output (tests, non-tty).
    pub fn render_all(&self, source: Option<&str>, color: bool) -> String {
        super::render::render_all(self, source, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reporter_with(level: DiagLevel) -> (DiagReporter, DiagId) {
        let mut reporter = DiagReporter::new();
        let id = reporter.register(DiagMetadata::new("test_diag", level, "test message"));
        (reporter, id)
    }

    #[test]
    fn test_register_assigns_sequential_ids() {
        let mut reporter = DiagReporter::new();
        let a = reporter.register(DiagMetadata::error("a", "a"));
        let b = reporter.register(DiagMetadata::error("b", "b"));
        assert_eq!(a.as_u32(), 1);
        assert_eq!(b.as_u32(), 2);
        assert_eq!(reporter.metadata_for(b).map(|m| m.name.as_str()), Some("b"));
        assert_eq!(reporter.metadata_for(b).map(|m| m.id), Some(b));
    }

    #[test]
    fn test_report_increments_exactly_one_counter() {
        for (level, expected) in [
            (DiagLevel::Note, (1, 0, 0)),
            (DiagLevel::Warning, (0, 1, 0)),
            (DiagLevel::Error, (0, 0, 1)),
        ] {
            let (mut reporter, id) = reporter_with(level);
            reporter.report(id, LocationId::INVALID, "");
            assert_eq!(reporter.count_by_level(DiagLevel::Note), expected.0);
            assert_eq!(reporter.count_by_level(DiagLevel::Warning), expected.1);
            assert_eq!(reporter.count_by_level(DiagLevel::Error), expected.2);
        }
    }

    #[test]
    fn test_fatal_counts_as_error() {
        let (mut reporter, id) = reporter_with(DiagLevel::Fatal);
        reporter.report(id, LocationId::INVALID, "");
        assert_eq!(reporter.count_by_level(DiagLevel::Fatal), 0);
        assert_eq!(reporter.count_by_level(DiagLevel::Error), 1);
        assert!(reporter.has_errors());
    }

    #[test]
    fn test_unregistered_id_is_a_no_op() {
        let (mut reporter, _id) = reporter_with(DiagLevel::Error);
        reporter.report(DiagId::INVALID, LocationId::INVALID, "ignored");
        reporter.report(DiagId::from_raw(99), LocationId::INVALID, "ignored");
        assert!(reporter.is_empty());
        assert!(!reporter.has_errors());
    }

    #[test]
    fn test_log_preserves_emission_order() {
        let mut reporter = DiagReporter::new();
        let a = reporter.register(DiagMetadata::error("a", "a"));
        let b = reporter.register(DiagMetadata::warning("b", "b"));
        reporter.report(b, LocationId::INVALID, "first");
        reporter.report(a, LocationId::INVALID, "second");
        reporter.report(b, LocationId::INVALID, "third");
        let details: Vec<&str> = reporter.entries().iter().map(|d| d.detail.as_str()).collect();
        assert_eq!(details, ["first", "second", "third"]);
    }

    #[test]
    fn test_oversized_detail_is_truncated() {
        let (mut reporter, id) = reporter_with(DiagLevel::Error);
        let detail = "x".repeat(MAX_DETAIL + 100);
        reporter.report(id, LocationId::INVALID, detail);
        assert_eq!(reporter.entries()[0].detail.len(), MAX_DETAIL);
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let (mut reporter, id) = reporter_with(DiagLevel::Error);
        // 'é' is two bytes; build a string whose MAX_DETAIL byte index falls mid-char.
        let mut detail = "x".repeat(MAX_DETAIL - 1);
        detail.push_str("ééé");
        reporter.report(id, LocationId::INVALID, detail);
        let stored = &reporter.entries()[0].detail;
        assert!(stored.len() <= MAX_DETAIL);
        assert!(stored.is_char_boundary(stored.len()));
    }

    #[test]
    fn test_metadata_capacity_exhaustion() {
        let mut reporter = DiagReporter::new();
        for i in 0..MAX_METADATA {
            let id = reporter.register(DiagMetadata::note(format!("d{i}"), "m"));
            assert!(id.is_valid());
        }
        let overflow = reporter.register(DiagMetadata::note("overflow", "m"));
        assert_eq!(overflow, DiagId::INVALID);
        // Reporting with the invalid id must not crash or count.
        reporter.report(overflow, LocationId::INVALID, "");
        assert!(reporter.is_empty());
    }
}
