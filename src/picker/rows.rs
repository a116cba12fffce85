// SPDX-License-Identifier: MPL-2.0
//! Row chunking of the accumulated record list.
//!
//! The grid renders fixed-width rows; the final row is padded with `None`
//! placeholders so alignment is preserved. The matrix is recomputed
//! wholesale whenever the list or the selection changes — no incremental
//! patching.

use crate::media::MediaRecord;

/// The accumulated list chunked into rows of uniform width.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowMatrix {
    rows: Vec<Vec<Option<MediaRecord>>>,
}

impl RowMatrix {
    /// Chunks `records` into rows of `items_per_row`, padding the last
    /// row with placeholders. `items_per_row` must be non-zero.
    #[must_use]
    pub fn compute(records: &[MediaRecord], items_per_row: usize) -> Self {
        let mut rows = Vec::with_capacity(records.len().div_ceil(items_per_row.max(1)));
        for chunk in records.chunks(items_per_row) {
            let mut row: Vec<Option<MediaRecord>> =
                chunk.iter().cloned().map(Some).collect();
            row.resize(items_per_row, None);
            rows.push(row);
        }
        Self { rows }
    }

    /// The chunked rows, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Option<MediaRecord>>] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
