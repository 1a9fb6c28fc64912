//! Lazy enumeration of every input assignment of a fixed width
//!
//! Rows are produced in ascending index order. Bit `i` of a row is taken from the
//! binary expansion of its index, most-significant bit first, so row `0b0110` of
//! width 4 reads `0110` with `x1` and `x2` set.

use std::fmt;
use std::iter::FusedIterator;

/// One binary assignment to the input variables (a minterm)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Row {
    index: u64,
    width: usize,
}

impl Row {
    /// Create the row with the given index and width
    ///
    /// Bits of `index` above `width` are ignored by every accessor.
    pub fn new(index: u64, width: usize) -> Self {
        Row { index, width }
    }

    /// Position of this row in the enumeration
    pub fn index(&self) -> u64 {
        self.index
    }

    /// Number of input variables
    pub fn width(&self) -> usize {
        self.width
    }

    /// Value of input variable `x{position}`
    ///
    /// # Panics
    ///
    /// Panics if `position >= width`.
    pub fn bit(&self, position: usize) -> bool {
        assert!(
            position < self.width,
            "bit position {} out of range for width {}",
            position,
            self.width
        );
        (self.index >> (self.width - 1 - position)) & 1 == 1
    }

    /// Iterate over the bits, `x0` first
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.width).map(move |position| self.bit(position))
    }

    /// Zero-padded binary string of the index, most-significant bit first
    pub fn to_bit_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.bits() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Iterator over all `2^width` rows in ascending order
///
/// Holds only the two cursors, so memory use does not grow with the width.
#[derive(Debug, Clone)]
pub struct Rows {
    width: usize,
    next: u64,
    end: u64,
}

impl Rows {
    /// Enumerate every row of `width` bits
    ///
    /// # Panics
    ///
    /// Panics if `width` is 64 or more; callers validate the width first
    /// (see [`crate::weights::validate_dimensions`]).
    pub fn new(width: usize) -> Self {
        assert!(
            width < u64::BITS as usize,
            "row width {} does not fit a 64-bit index",
            width
        );
        Rows {
            width,
            next: 0,
            end: 1u64 << width,
        }
    }

    /// Total number of rows, `2^width`
    pub fn total(&self) -> u64 {
        1u64 << self.width
    }

    fn remaining(&self) -> u64 {
        self.end - self.next
    }
}

impl Iterator for Rows {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        if self.next == self.end {
            return None;
        }
        let row = Row::new(self.next, self.width);
        self.next += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl DoubleEndedIterator for Rows {
    fn next_back(&mut self) -> Option<Row> {
        if self.next == self.end {
            return None;
        }
        self.end -= 1;
        Some(Row::new(self.end, self.width))
    }
}

impl FusedIterator for Rows {}
