//! Error types.

#[cfg(doc)]
use crate::Board;

/// Signal that the current branch of a puzzle is unsatisfiable.
///
/// Returned when an elimination would leave a cell with zero candidates, or
/// when an assignment targets a digit that is no longer a candidate of its
/// cell. During backtracking search this is a routine outcome: the
/// enumerator tallies it as a dead end and tries the next candidate.
///
/// A board whose mutating call returned this is left mid-propagation and
/// must be discarded (or replaced by a clone taken before the call); the
/// engine performs no rollback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("contradiction: a cell was left without candidates")]
pub struct Contradiction;

/// Error for [`Board::from_text`]
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// A value in the text exceeds the digit range of the board size.
    #[error("cell {index} holds {value}, but digits only go up to {max}")]
    ValueOutOfRange {
        /// Row-major index of the offending cell value.
        index: usize,
        /// The parsed value (saturated at `u64::MAX`).
        value: u64,
        /// Largest digit the board accepts.
        max: u64,
    },
    /// The givens contradict each other.
    #[error(transparent)]
    Unsolvable(#[from] Contradiction),
}
