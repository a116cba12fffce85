// SPDX-License-Identifier: MPL-2.0
//! Selection state for the picker.
//!
//! The set is an immutable value: [`SelectionSet::toggled`] returns a new
//! set and the controller keeps exclusive ownership of its copy, so caller
//! storage is never mutated through a shared reference.

use crate::media::MediaRecord;

/// Ordered set of selected records, unique by URI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    records: Vec<MediaRecord>,
}

impl SelectionSet {
    /// Builds a set from caller-supplied records (initial or synced
    /// selection). Input order is preserved.
    #[must_use]
    pub fn from_records(records: Vec<MediaRecord>) -> Self {
        Self { records }
    }

    /// Returns `true` if a record with the given URI is selected.
    #[must_use]
    pub fn contains_uri(&self, uri: &str) -> bool {
        self.records.iter().any(|r| r.uri == uri)
    }

    /// The selected records, in selection order.
    #[must_use]
    pub fn records(&self) -> &[MediaRecord] {
        &self.records
    }

    /// Copies the selection out for handing to observers.
    #[must_use]
    pub fn to_vec(&self) -> Vec<MediaRecord> {
        self.records.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the set with `record` toggled.
    ///
    /// A selected record is removed. An unselected one is appended, unless
    /// the set already holds `maximum` records, in which case the set is
    /// returned unchanged. In single-select mode the new record replaces
    /// whatever was selected.
    #[must_use]
    pub fn toggled(&self, record: &MediaRecord, maximum: usize, single_select: bool) -> Self {
        let mut records = self.records.clone();

        if let Some(index) = records.iter().position(|r| r.uri == record.uri) {
            records.remove(index);
            return Self { records };
        }

        if single_select {
            records.clear();
        }
        if records.len() < maximum {
            records.push(record.clone());
        }
        Self { records }
    }
}
