//! Sequential raw-row paging over a filtered table.

use crate::trips::{Trip, TripTable};

/// Rows returned per page.
pub const PAGE_SIZE: usize = 5;

/// Cursor over the filtered rows for one filter cycle.
///
/// `next_page` hands out consecutive windows of up to [`PAGE_SIZE`] rows
/// and returns `None` once the cursor reaches the end; that state is
/// terminal. `is_empty` tells whether there were no rows to begin with,
/// as opposed to having run out partway.
pub struct RawDataPager<'a> {
    trips: &'a [Trip],
    cursor: usize,
}

impl<'a> RawDataPager<'a> {
    pub fn new(table: &'a TripTable) -> RawDataPager<'a> {
        RawDataPager {
            trips: table.trips(),
            cursor: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Rows not yet handed out.
    pub fn remaining(&self) -> usize {
        self.trips.len() - self.cursor
    }

    pub fn next_page(&mut self) -> Option<&'a [Trip]> {
        if self.cursor >= self.trips.len() {
            return None;
        }
        let end = (self.cursor + PAGE_SIZE).min(self.trips.len());
        let page = &self.trips[self.cursor..end];
        self.cursor = end;
        Some(page)
    }
}
