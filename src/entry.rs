//! Assignment requests.

use crate::topology::Topology;

/// A request to fix one cell to one digit.
///
/// Validated against the board bounds at construction and consumed by
/// [`Board::assign`](crate::Board::assign) and
/// [`Board::fix`](crate::Board::fix).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    offset: usize,
    value: u8,
}

impl Entry {
    /// Request to fix the cell at `offset` to `value`.
    ///
    /// # Panic
    /// Panics if `offset` or `value` is out of range for `topology`.
    pub fn new(topology: &Topology, offset: usize, value: u8) -> Entry {
        assert!(offset < topology.cell_count(), "cell offset {} out of range", offset);
        assert!(
            value >= 1 && value as usize <= topology.dim(),
            "digit {} out of range 1..={}",
            value,
            topology.dim()
        );
        Entry { offset, value }
    }

    /// Request to fix the cell at (row, col) to `value`.
    ///
    /// # Panic
    /// Panics if a coordinate or `value` is out of range for `topology`.
    pub fn at(topology: &Topology, row: usize, col: usize, value: u8) -> Entry {
        Entry::new(topology, topology.offset_of(row, col), value)
    }

    /// Linear offset of the targeted cell.
    #[inline]
    pub fn offset(self) -> usize {
        self.offset
    }

    /// The digit to fix, 1-based.
    #[inline]
    pub fn value(self) -> u8 {
        self.value
    }
}
