//! Source location tracking for diagnostics.
//!
//! A [`LocationTable`] maps stable numeric IDs to `(path, line, column, length)` tuples. IDs are
//! assigned monotonically in registration order and never reused, so a [`LocationId`] recorded
//! during lexing stays valid for the lifetime of the compilation unit.
//!
//! Path strings are interned: registering ten thousand locations in the same file shares one
//! allocation for the path.

use std::collections::HashSet;
use std::sync::Arc;

/// Maximum number of locations a table will store.
///
/// `add` past this bound returns [`LocationId::INVALID`]; callers degrade by omitting the
/// location rather than failing.
pub const MAX_LOCATIONS: usize = 16384;

/// Opaque handle identifying a registered source location.
///
/// `0` is the reserved "invalid/absent" sentinel ([`LocationId::INVALID`]). Valid IDs are
/// 1-based and monotonically assigned in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LocationId(u32);

impl LocationId {
    /// The reserved "no location available" sentinel.
    pub const INVALID: LocationId = LocationId(0);

    /// Reconstruct a handle from its raw value. Useful for tests and serialization; an
    /// out-of-range value is harmless (lookups return the empty sentinel).
    pub fn from_raw(raw: u32) -> Self {
        LocationId(raw)
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

/// A resolved source location.
///
/// `length` is the number of source characters a diagnostic should underline; renderers
/// normalize 0 to 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagLocation {
    pub path: Arc<str>,
    /// 1-based line number (0 in the empty sentinel).
    pub line: u32,
    /// 1-based column number (0 in the empty sentinel).
    pub column: u32,
    pub length: u32,
}

impl DiagLocation {
    /// The documented empty location: callers must treat an all-zero result as "no location
    /// available."
    pub fn empty() -> Self {
        DiagLocation {
            path: Arc::from(""),
            line: 0,
            column: 0,
            length: 0,
        }
    }

    /// Return `true` if this is the empty sentinel.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty() && self.line == 0 && self.column == 0 && self.length == 0
    }
}

/// Append-only store of source locations with interned path strings.
#[derive(Debug, Default)]
pub struct LocationTable {
    entries: Vec<DiagLocation>,
    paths: HashSet<Arc<str>>,
}

impl LocationTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a location and return its ID (the entry count after insertion, 1-based).
    ///
    /// Returns [`LocationId::INVALID`] once the table holds [`MAX_LOCATIONS`] entries; this is a
    /// recoverable condition, not an error.
    pub fn add(&mut self, path: &str, line: u32, column: u32, length: u32) -> LocationId {
        if self.entries.len() >= MAX_LOCATIONS {
            return LocationId::INVALID;
        }

        let path = self.intern(path);
        self.entries.push(DiagLocation {
            path,
            line,
            column,
            length,
        });
        LocationId(self.entries.len() as u32)
    }

    /// Resolve an ID. Zero or out-of-range IDs yield [`DiagLocation::empty`] rather than failing.
    pub fn get(&self, id: LocationId) -> DiagLocation {
        if !id.is_valid() {
            return DiagLocation::empty();
        }
        match self.entries.get(id.0 as usize - 1) {
            Some(entry) => entry.clone(),
            None => DiagLocation::empty(),
        }
    }

    /// Number of registered locations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn intern(&mut self, path: &str) -> Arc<str> {
        if let Some(existing) = self.paths.get(path) {
            return Arc::clone(existing);
        }
        let interned: Arc<str> = Arc::from(path);
        self.paths.insert(Arc::clone(&interned));
        interned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_sequential_and_stable() {
        let mut table = LocationTable::new();
        for k in 1..=100u32 {
            let id = table.add("main.rvn", k, 2 * k, 3);
            assert_eq!(id.as_u32(), k);
        }
        for k in 1..=100u32 {
            let loc = table.get(LocationId::from_raw(k));
            assert_eq!(loc.line, k);
            assert_eq!(loc.column, 2 * k);
            assert_eq!(loc.length, 3);
            assert_eq!(&*loc.path, "main.rvn");
        }
    }

    #[test]
    fn test_invalid_and_out_of_range_yield_empty_sentinel() {
        let mut table = LocationTable::new();
        let id = table.add("a.rvn", 1, 1, 1);
        assert!(id.is_valid());

        assert!(table.get(LocationId::INVALID).is_empty());
        assert!(table.get(LocationId::from_raw(2)).is_empty());
        assert!(table.get(LocationId::from_raw(u32::MAX)).is_empty());
    }

    #[test]
    fn test_paths_are_interned() {
        let mut table = LocationTable::new();
        let a = table.add("src/lib.rvn", 1, 1, 1);
        let b = table.add("src/lib.rvn", 2, 5, 4);
        let first = table.get(a);
        let second = table.get(b);
        assert!(Arc::ptr_eq(&first.path, &second.path));
    }

    #[test]
    fn test_capacity_exhaustion_returns_invalid() {
        let mut table = LocationTable::new();
        for _ in 0..MAX_LOCATIONS {
            assert!(table.add("big.rvn", 1, 1, 1).is_valid());
        }
        assert_eq!(table.add("big.rvn", 1, 1, 1), LocationId::INVALID);
        assert_eq!(table.len(), MAX_LOCATIONS);
    }
}
