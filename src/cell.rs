//! Read-only cell views.

use crate::bitset::CandidateSet;

/// Snapshot of one board slot's candidate mask.
///
/// Constructed on demand by [`Board::cell`](crate::Board::cell) and friends.
/// A view is a plain copy of the mask at the time it was taken; it never
/// owns or mutates board state, and it does not follow later changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    candidates: CandidateSet,
}

impl Cell {
    pub(crate) fn new(candidates: CandidateSet) -> Cell {
        Cell { candidates }
    }

    /// Number of digits still possible for this cell.
    pub fn len(self) -> u32 {
        self.candidates.len()
    }

    /// Whether the cell is down to a single candidate.
    pub fn is_fixed(self) -> bool {
        self.candidates.len() == 1
    }

    /// The digit this cell is fixed to, if only one candidate remains.
    pub fn value(self) -> Option<u8> {
        self.candidates.unique().map(|index| index + 1)
    }

    /// Iterator over the remaining candidate digits (1-based), ascending.
    pub fn candidates(self) -> impl Iterator<Item = u8> {
        self.candidates.iter().map(|index| index + 1)
    }

    /// Whether `value` is still a candidate for this cell.
    pub fn contains(self, value: u8) -> bool {
        match value {
            1..=128 => self.candidates.contains(CandidateSet::single(value - 1)),
            _ => false,
        }
    }
}
