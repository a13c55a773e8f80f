// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! How a span is cut into table rows

/// Bytes shown on one full row
pub const ROW_WIDTH: usize = 0x10;
/// Width of the row address digits. The separator reserves two more columns
/// for the label's padding and colon.
pub const HEADER_WIDTH: usize = 4;
/// Width of the ` %04x :` row label
pub const LABEL_WIDTH: usize = HEADER_WIDTH + 3;
/// Width of one ` xx` hex field
pub const FIELD_WIDTH: usize = 3;
/// Gap between the last hex field of a full row and the ASCII column
pub const GUTTER: usize = 7;
/// Longest span a table can address
pub const MAX_LEN: usize = 0xffff;

/// Spaces between the last hex field of a row and its ASCII column.
///
/// Derived from the number of missing columns, so the ASCII column starts at
/// the same offset on every row.
///
/// # Examples
/// ```rust
/// # use hexview::layout::filler;
/// assert_eq!(7, filler(16));
/// assert_eq!(7 + 12 * 3, filler(4));
/// ```
pub const fn filler(cols: usize) -> usize {
    (ROW_WIDTH - cols) * FIELD_WIDTH + GUTTER
}

/// A single row of the table
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Row {
    /// Zero-based row number
    pub index: usize,
    /// Bytes on this row, `1..=16`
    pub cols: usize,
}

impl Row {
    /// Offset of the row's first byte within the span
    pub fn offset(&self) -> usize {
        self.index << 4
    }
    /// Range of the row's bytes within the span
    pub fn range(&self) -> std::ops::Range<usize> {
        self.offset()..self.offset() + self.cols
    }
    /// Whether this is a short, trailing row
    pub fn is_hole(&self) -> bool {
        self.cols < ROW_WIDTH
    }
}

/// The number of full rows, and the width of the trailing hole row
///
/// # Examples
/// ```rust
/// # use hexview::layout::Tiling;
/// let tiling = Tiling::new(20);
/// assert_eq!((1, 4), (tiling.rows, tiling.hole));
/// assert_eq!(2, tiling.iter().count());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Tiling {
    /// Number of full, 16-byte rows
    pub rows: usize,
    /// Width of the trailing row, or 0 if there is none
    pub hole: usize,
}

impl Tiling {
    /// Tiles a span of `len` bytes
    pub fn new(len: usize) -> Self {
        Tiling {
            rows: len / ROW_WIDTH,
            hole: len % ROW_WIDTH,
        }
    }
    /// Total number of rows, including the hole row
    pub fn len(&self) -> usize {
        self.rows + (self.hole != 0) as usize
    }
    /// Returns true if the table body has no rows
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Iterates over every row, full rows first
    pub fn iter(&self) -> impl Iterator<Item = Row> {
        let Tiling { rows, hole } = *self;
        let hole = Some(hole)
            .filter(|&cols| cols != 0)
            .map(|cols| Row { index: rows, cols });
        (0..rows)
            .map(|index| Row {
                index,
                cols: ROW_WIDTH,
            })
            .chain(hole)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiples_have_no_hole() {
        for len in (0..=MAX_LEN).step_by(ROW_WIDTH) {
            let tiling = Tiling::new(len);
            assert_eq!(0, tiling.hole);
            assert_eq!(len / 16, tiling.len());
            assert!(tiling.iter().all(|row| !row.is_hole()));
        }
    }

    #[test]
    fn every_length_is_covered() {
        for len in 0..=0x123 {
            let rows: Vec<_> = Tiling::new(len).iter().collect();
            assert_eq!(len, rows.iter().map(|row| row.cols).sum::<usize>());
            // rows are contiguous
            let mut next = 0;
            for row in &rows {
                assert_eq!(next, row.range().start);
                next = row.range().end;
            }
            assert_eq!(len, next);
            // only the last row may be short
            if let Some((_, init)) = rows.split_last() {
                assert!(init.iter().all(|row| !row.is_hole()));
            }
        }
    }

    #[test]
    fn short_lengths() {
        for len in 1..16 {
            let tiling = Tiling::new(len);
            assert_eq!((0, len), (tiling.rows, tiling.hole));
            assert_eq!(vec![Row { index: 0, cols: len }], tiling.iter().collect::<Vec<_>>());
        }
    }

    #[test]
    fn empty() {
        assert!(Tiling::new(0).is_empty());
        assert_eq!(None, Tiling::new(0).iter().next());
    }

    #[test]
    fn largest() {
        let tiling = Tiling::new(MAX_LEN);
        assert_eq!((0xfff, 0xf), (tiling.rows, tiling.hole));
        assert_eq!(Some(0xfff0), tiling.iter().last().map(|row| row.offset()));
    }

    #[test]
    fn filler_aligns_ascii() {
        for cols in 1..=ROW_WIDTH {
            assert_eq!(ROW_WIDTH * FIELD_WIDTH + GUTTER, cols * FIELD_WIDTH + filler(cols));
        }
    }
}
