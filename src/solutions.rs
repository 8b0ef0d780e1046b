//! Lazy, randomized enumeration of a board's solutions.

use log::trace;
use rand::seq::SliceRandom;

use crate::board::Board;
use crate::entry::Entry;

/// Offsets of the unfixed cells, shuffled and then stably sorted so the
/// cells with the fewest remaining candidates come first. The shuffle
/// breaks ties at random, so repeated searches over equal boards do not
/// drift toward the same solutions.
fn free_cells(board: &Board) -> Vec<usize> {
    let mut free: Vec<usize> = (0..board.topology().cell_count())
        .filter(|&offset| board.cell_at(offset).len() > 1)
        .collect();
    let mut rng = rand::thread_rng();
    free.shuffle(&mut rng);
    free.sort_by_key(|&offset| board.cell_at(offset).len());
    free
}

/// Depth-first iterator over every solution of a root board.
///
/// Each `next` call produces one fully solved board, lazily: the enumerator
/// picks the most constrained unfixed cell as pivot, tries its candidate
/// digits in random order on clones of the root, and delegates to a child
/// enumerator for every hypothesis that survives propagation. The sequence
/// is finite and non-restartable, and its order is randomized by
/// construction.
///
/// Contradictions along the way are not errors; they are tallied and
/// readable at any time through [`dead_ends`](Solutions::dead_ends).
pub struct Solutions {
    root: Board,
    branch: Option<Box<Solutions>>,
    pivot: Option<usize>,
    values: Vec<u8>,
    dead_ends: u64,
    done: bool,
}

impl Solutions {
    /// Starts a search rooted at `board`.
    pub fn new(board: Board) -> Solutions {
        let pivot = free_cells(&board).first().copied();
        let mut values = Vec::new();
        if let Some(pivot) = pivot {
            values.extend(board.cell_at(pivot).candidates());
            values.shuffle(&mut rand::thread_rng());
        }
        Solutions {
            root: board,
            branch: None,
            pivot,
            values,
            dead_ends: 0,
            done: false,
        }
    }

    /// Running total of dead ends hit anywhere in the explored subtree.
    pub fn dead_ends(&self) -> u64 {
        self.dead_ends + self.branch.as_ref().map_or(0, |branch| branch.dead_ends())
    }
}

impl Iterator for Solutions {
    type Item = Board;

    fn next(&mut self) -> Option<Board> {
        if self.done {
            return None;
        }
        let pivot = match self.pivot {
            Some(pivot) => pivot,
            // No free cell: the root is its own, only solution.
            None => {
                self.done = true;
                return Some(self.root.clone());
            }
        };
        loop {
            if let Some(branch) = self.branch.as_mut() {
                if let Some(solution) = branch.next() {
                    return Some(solution);
                }
                // branch exhausted, fold its tally into ours
                self.dead_ends += branch.dead_ends;
                self.branch = None;
            }
            let value = match self.values.pop() {
                Some(value) => value,
                None => {
                    self.done = true;
                    return None;
                }
            };
            let mut trial = self.root.clone();
            let entry = Entry::new(trial.topology(), pivot, value);
            match trial.fix_one(entry) {
                Ok(()) => {
                    trace!("branching on cell {} with digit {}", pivot, value);
                    self.branch = Some(Box::new(Solutions::new(trial)));
                }
                Err(_) => {
                    trace!("dead end on cell {} with digit {}", pivot, value);
                    self.dead_ends += 1;
                }
            }
        }
    }
}
