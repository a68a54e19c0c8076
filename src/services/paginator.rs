// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fixed-size windows over the raw rows of a trip table.

use crate::models::{RawTripRow, TripTable};

/// Rows per raw-data page.
pub const PAGE_SIZE: usize = 5;

/// Rows `[index * 5, index * 5 + 5)` of the table. Empty once past the end.
pub fn page(table: &TripTable, index: usize) -> Vec<RawTripRow> {
    page_with_size(table, index, PAGE_SIZE)
}

/// Like [`page`] with a caller-chosen window size.
pub fn page_with_size(table: &TripTable, index: usize, size: usize) -> Vec<RawTripRow> {
    let records = table.records();
    let start = index.saturating_mul(size).min(records.len());
    let end = start.saturating_add(size).min(records.len());
    records[start..end].iter().map(RawTripRow::from).collect()
}

/// Stateful cursor used by the interactive "show more rows" loop.
#[derive(Debug)]
pub struct RawDataPager<'a> {
    table: &'a TripTable,
    size: usize,
    next_index: usize,
}

impl<'a> RawDataPager<'a> {
    pub fn new(table: &'a TripTable, size: usize) -> Self {
        Self {
            table,
            size: size.max(1),
            next_index: 0,
        }
    }
}

impl Iterator for RawDataPager<'_> {
    type Item = Vec<RawTripRow>;

    fn next(&mut self) -> Option<Self::Item> {
        let rows = page_with_size(self.table, self.next_index, self.size);
        if rows.is_empty() {
            return None;
        }
        self.next_index += 1;
        Some(rows)
    }
}
