#![warn(missing_docs)]
//! Constraint-propagation solver for sudoku boards of any square order.
//!
//! Boards are square-of-square: a box side of 3 gives the classic 9×9 grid,
//! and any side from 1 to 11 works the same way. Each cell is a bitmask of
//! the digits it can still take. Fixing a digit propagates eliminations
//! through the cell's row, column and box, a subset-exclusion heuristic
//! picks off hidden and naked groups, and a randomized backtracking
//! enumerator handles whatever deduction alone cannot.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use gensudoku::{Board, Entry, Solutions, Topology};
//!
//! let topology = Arc::new(Topology::new(3));
//! let mut board = Board::new(Arc::clone(&topology));
//! board.fix(&[Entry::at(&topology, 0, 0, 5)]).unwrap();
//!
//! let mut solutions = Solutions::new(board);
//! let solved = solutions.next().expect("one clue leaves plenty of solutions");
//! assert!(solved.is_solved());
//! assert_eq!(solved.cell(0, 0).value(), Some(5));
//! println!("{}", solved);
//! ```

mod bitset;
mod board;
mod cell;
mod entry;
mod errors;
mod solutions;
mod topology;

pub use crate::bitset::{CandidateSet, Iter};
pub use crate::board::Board;
pub use crate::cell::Cell;
pub use crate::entry::Entry;
pub use crate::errors::{Contradiction, ParseError};
pub use crate::solutions::Solutions;
pub use crate::topology::{House, Topology};
