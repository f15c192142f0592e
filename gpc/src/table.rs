//! The bijection between bounded integer pairs and a single linear index.
//!
//! Pairs `(a, b)` with `a < rows`, `b < cols` are enumerated along the
//! anti-diagonals `a + b = const` in increasing order; inside one diagonal
//! the row `a` grows. The resulting index is dense on `[0, rows * cols)`
//! and the enumeration order is part of the wire format: every published
//! code depends on it, so it must never change.

use lazy_static::lazy_static;

use crate::consts::{FOLDED_LAT_RANGE, FOLDED_LONG_RANGE};

lazy_static! {
    /// The shared 180x360 table packing folded latitude and longitude degrees.
    /// Built once and only ever read, so concurrent use needs no coordination.
    pub(crate) static ref LAT_LONG_TABLE: PairTable =
        PairTable::new(FOLDED_LAT_RANGE, FOLDED_LONG_RANGE);
}

#[derive(Debug, Clone)]
pub(crate) struct PairTable {
    rows: u16,
    cols: u16,
    /// `starts[s]` is the index of the first pair on diagonal `s`;
    /// the last entry is the total table size.
    starts: Vec<u32>,
}

impl PairTable {
    /// Requires `rows <= cols` (the diagonal length formulas rely on it).
    pub(crate) fn new(rows: u16, cols: u16) -> Self {
        assert!(rows > 0 && cols > 0, "the table must not be degenerate");
        assert!(rows <= cols, "rows must not exceed cols");

        let diagonals = usize::from(rows) + usize::from(cols) - 1;
        let mut starts = Vec::with_capacity(diagonals + 1);
        let mut total = 0_u32;
        for s in 0..diagonals {
            starts.push(total);
            total += Self::diagonal_len(rows, cols, s);
        }
        starts.push(total);

        Self { rows, cols, starts }
    }

    /// The number of in-range pairs on the diagonal `a + b = s`.
    fn diagonal_len(rows: u16, cols: u16, s: usize) -> u32 {
        let shorter = usize::from(rows);
        let longer = usize::from(cols);
        let len = if s < shorter {
            s + 1
        } else if s < longer {
            shorter
        } else {
            shorter + longer - 1 - s
        };
        len as u32
    }

    /// The smallest row present on the diagonal `s`.
    fn first_row(&self, s: u32) -> u32 {
        s.saturating_sub(u32::from(self.cols) - 1)
    }

    pub(crate) fn size(&self) -> u32 {
        u32::from(self.rows) * u32::from(self.cols)
    }

    /// The linear index of the pair `(a, b)`.
    pub(crate) fn index_of_pair(&self, a: u16, b: u16) -> u32 {
        debug_assert!(a < self.rows && b < self.cols, "pair out of the table");

        let s = u32::from(a) + u32::from(b);
        self.starts[s as usize] + (u32::from(a) - self.first_row(s))
    }

    /// The pair at the linear `index`; the exact inverse of
    /// [`index_of_pair`][Self::index_of_pair].
    pub(crate) fn pair_at_index(&self, index: u32) -> (u16, u16) {
        debug_assert!(index < self.size(), "index out of the table");

        // the last diagonal starting at or before the index
        let s = (self.starts.partition_point(|&start| start <= index) - 1) as u32;
        let a = self.first_row(s) + (index - self.starts[s as usize]);
        let b = s - a;
        (a as u16, b as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_covers_every_folded_pair() {
        assert_eq!(LAT_LONG_TABLE.size(), 64_800);
    }

    #[test]
    fn enumeration_checkpoints() {
        // derived from the published code vectors; normative
        assert_eq!(LAT_LONG_TABLE.index_of_pair(0, 0), 0);
        assert_eq!(LAT_LONG_TABLE.index_of_pair(0, 1), 1);
        assert_eq!(LAT_LONG_TABLE.index_of_pair(1, 0), 2);
        assert_eq!(LAT_LONG_TABLE.index_of_pair(178, 358), 64_795);
        assert_eq!(LAT_LONG_TABLE.index_of_pair(179, 359), 64_799);
    }

    #[test]
    fn diagonal_starts() {
        let table = &LAT_LONG_TABLE;
        assert_eq!(table.starts[1], 1);
        assert_eq!(table.starts[179], 16_110);
        assert_eq!(table.starts[180], 16_290);
        assert_eq!(table.starts[360], 48_690);
        assert_eq!(table.starts[538], 64_799);
        assert_eq!(*table.starts.last().unwrap(), 64_800);
    }

    #[test]
    fn full_round_trip() {
        for index in 0..LAT_LONG_TABLE.size() {
            let (a, b) = LAT_LONG_TABLE.pair_at_index(index);
            assert!(a < 180 && b < 360);
            assert_eq!(LAT_LONG_TABLE.index_of_pair(a, b), index);
        }
    }

    #[test]
    fn small_table_enumeration() {
        let table = PairTable::new(2, 3);
        let expected = [(0, 0), (0, 1), (1, 0), (0, 2), (1, 1), (1, 2)];
        for (index, &pair) in expected.iter().enumerate() {
            assert_eq!(table.pair_at_index(index as u32), pair);
        }
    }

    #[test]
    #[should_panic(expected = "rows must not exceed cols")]
    fn wide_side_goes_second() {
        let _table = PairTable::new(360, 180);
    }
}
