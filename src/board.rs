//! The board and its propagation engine.
//!
//! A board owns one candidate mask per cell. Fixing a digit writes the
//! singleton mask and eliminates that digit from the three houses of the
//! cell; every cell that collapses to a single candidate in the process is
//! queued and propagated in turn. On top of that runs the subset-exclusion
//! heuristic: whenever `n` unfixed cells of a house can only hold `n`
//! digits between them, those digits are dropped from the rest of the
//! house. Both cascades are driven by explicit work queues so the stack
//! depth stays flat no matter the board size.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use crate::bitset::CandidateSet;
use crate::cell::Cell;
use crate::entry::Entry;
use crate::errors::{Contradiction, ParseError};
use crate::solutions::Solutions;
use crate::topology::{House, Topology};

/// A puzzle in progress: one candidate mask per cell.
///
/// Boards start fully unconstrained and are narrowed through
/// [`assign`](Board::assign) and [`fix`](Board::fix) only. Any `Err` from a
/// mutating call leaves the board mid-propagation; it must be discarded or
/// replaced by a clone taken before the call. Cloning is a deep copy of the
/// mask array and is how search explores hypotheses without disturbing the
/// parent.
#[derive(Debug, Clone)]
pub struct Board {
    topology: Arc<Topology>,
    cells: Vec<CandidateSet>,
}

impl Board {
    /// Creates a board with every digit possible in every cell.
    pub fn new(topology: Arc<Topology>) -> Board {
        let cells = vec![topology.full_mask(); topology.cell_count()];
        Board { topology, cells }
    }

    /// Creates an unconstrained board along with a fresh topology for
    /// boards whose boxes are `side` cells wide.
    ///
    /// When many boards of one size are needed, build the [`Topology`] once
    /// and use [`Board::new`] instead.
    pub fn with_side(side: usize) -> Board {
        Board::new(Arc::new(Topology::new(side)))
    }

    /// The shared geometry tables of this board.
    pub fn topology(&self) -> &Arc<Topology> {
        &self.topology
    }

    /// View of the cell at linear `offset`.
    pub fn cell_at(&self, offset: usize) -> Cell {
        Cell::new(self.cells[offset])
    }

    /// View of the cell at (row, col).
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cell_at(self.topology.offset_of(row, col))
    }

    /// Ordered views of one row, for rendering.
    pub fn row_cells(&self, row: usize) -> Vec<Cell> {
        self.house_views(House::Row(row))
    }

    /// Ordered views of one column.
    pub fn col_cells(&self, col: usize) -> Vec<Cell> {
        self.house_views(House::Col(col))
    }

    /// Ordered views of one box.
    pub fn block_cells(&self, block: usize) -> Vec<Cell> {
        self.house_views(House::Block(block))
    }

    fn house_views(&self, house: House) -> Vec<Cell> {
        self.topology
            .house_cells(house)
            .iter()
            .map(|&offset| self.cell_at(offset))
            .collect()
    }

    /// Whether every cell is down to a single candidate.
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|cell| cell.len() == 1)
    }

    /// Fixes one cell and propagates the elimination through its row,
    /// column and box, without running the subset heuristic.
    ///
    /// Fails if the requested digit is not a candidate of the cell, or if
    /// the propagation empties any cell.
    pub fn assign(&mut self, entry: Entry) -> Result<(), Contradiction> {
        let topology = Arc::clone(&self.topology);
        let mask = CandidateSet::single(entry.value() - 1);
        if !self.cells[entry.offset()].contains(mask) {
            return Err(Contradiction);
        }
        self.cells[entry.offset()] = mask;
        for &(house, peers) in topology.neighbors_of(entry.offset()) {
            self.eliminate_cascading(topology.house_cells(house), peers, mask)?;
        }
        Ok(())
    }

    /// Applies one assignment, then lets the heuristic settle.
    pub fn fix_one(&mut self, entry: Entry) -> Result<(), Contradiction> {
        self.assign(entry)?;
        self.heuristic()
    }

    /// Applies the assignments in order, then lets the heuristic settle.
    pub fn fix(&mut self, entries: &[Entry]) -> Result<(), Contradiction> {
        for &entry in entries {
            self.assign(entry)?;
        }
        self.heuristic()
    }

    /// Runs the subset-exclusion heuristic over every row, column and box,
    /// restarting the sweep whenever a house changed, until one full sweep
    /// comes back clean.
    pub fn heuristic(&mut self) -> Result<(), Contradiction> {
        let topology = Arc::clone(&self.topology);
        'sweep: loop {
            for house in topology.houses() {
                if self.combine_house(house)? {
                    continue 'sweep;
                }
            }
            return Ok(());
        }
    }

    /// Consumes the board and starts enumerating its solutions.
    pub fn solutions(self) -> Solutions {
        Solutions::new(self)
    }

    /// Clears the `drop` digits from the cells of one house selected by
    /// `active`. Emptying a cell is an immediate contradiction; cells that
    /// collapse to one candidate are pushed onto `fixed` for the caller to
    /// cascade. Returns whether any mask changed.
    fn eliminate(
        &mut self,
        offsets: &[usize],
        active: CandidateSet,
        drop: CandidateSet,
        fixed: &mut VecDeque<usize>,
    ) -> Result<bool, Contradiction> {
        let mut changed = false;
        for index in active {
            let offset = offsets[index as usize];
            let cell = self.cells[offset];
            let update = cell.without(drop);
            if update != cell {
                if update.is_empty() {
                    return Err(Contradiction);
                }
                self.cells[offset] = update;
                changed = true;
                if update.len() == 1 {
                    fixed.push_back(offset);
                }
            }
        }
        Ok(changed)
    }

    /// [`eliminate`](Board::eliminate), plus the cascade: every cell fixed
    /// by an elimination has its new singleton eliminated from its own
    /// three houses, until the queue drains. A work queue rather than
    /// recursion, since chained fixes can run through the whole grid on
    /// large boards.
    fn eliminate_cascading(
        &mut self,
        offsets: &[usize],
        active: CandidateSet,
        drop: CandidateSet,
    ) -> Result<bool, Contradiction> {
        let topology = Arc::clone(&self.topology);
        let mut fixed = VecDeque::new();
        let changed = self.eliminate(offsets, active, drop, &mut fixed)?;
        while let Some(offset) = fixed.pop_front() {
            let single = self.cells[offset];
            for &(house, peers) in topology.neighbors_of(offset) {
                self.eliminate(topology.house_cells(house), peers, single, &mut fixed)?;
            }
        }
        Ok(changed)
    }

    /// Tests the cell combination selected by `check` within one house.
    ///
    /// If the selected cells together hold no more candidates than there
    /// are cells in the combination, those digits are confined to the
    /// combination and get eliminated from the rest of the unfixed house
    /// cells. Returns whether that elimination changed anything.
    fn check_combination(
        &mut self,
        offsets: &[usize],
        used: CandidateSet,
        check: CandidateSet,
    ) -> Result<bool, Contradiction> {
        let mut comb = CandidateSet::NONE;
        for index in check {
            comb.insert(self.cells[offsets[index as usize]]);
        }
        if comb.len() <= check.len() {
            return self.eliminate_cascading(offsets, used.without(check), comb);
        }
        Ok(false)
    }

    /// Searches the unfixed cells of one house (selected by `used`) for a
    /// productive combination, driven by an explicit work list.
    ///
    /// Each candidate combination is first shrunk: a cell with more options
    /// than the combination could cover cannot belong to it, and removing
    /// one cell lowers that bound, so the filter repeats until stable. The
    /// shrunk combination is tested, and failing that, its one-smaller
    /// sub-combinations are tested and queued. Stops at the first
    /// combination that changed the board.
    fn combine(&mut self, offsets: &[usize], used: CandidateSet) -> Result<bool, Contradiction> {
        if used.len() <= 2 {
            return Ok(false);
        }
        let mut pending = VecDeque::new();
        pending.push_back(used);
        while let Some(mut check) = pending.pop_front() {
            let original = check;
            let mut limit = check.len() - 1;
            loop {
                for index in check {
                    if self.cells[offsets[index as usize]].len() > limit {
                        check.remove(CandidateSet::single(index));
                    }
                }
                let len = check.len();
                if len == limit || len <= 1 {
                    break;
                }
                limit = len;
            }
            if check != original && self.check_combination(offsets, used, check)? {
                return Ok(true);
            }
            if check.len() > 2 {
                for index in check {
                    let sub = check.without(CandidateSet::single(index));
                    if self.check_combination(offsets, used, sub)? {
                        return Ok(true);
                    }
                    pending.push_back(sub);
                }
            }
        }
        Ok(false)
    }

    fn combine_house(&mut self, house: House) -> Result<bool, Contradiction> {
        let topology = Arc::clone(&self.topology);
        let offsets = topology.house_cells(house);
        let mut used = CandidateSet::NONE;
        for (index, &offset) in offsets.iter().enumerate() {
            if self.cells[offset].len() > 1 {
                used.insert(CandidateSet::single(index as u8));
            }
        }
        self.combine(offsets, used)
    }

    /// Loads a board from text: one number per cell in row-major order,
    /// separated by arbitrary non-digit characters, `0` meaning "no
    /// assignment". Values past the cell count are ignored; missing cells
    /// stay unconstrained.
    pub fn from_text(topology: Arc<Topology>, text: &str) -> Result<Board, ParseError> {
        let max = topology.dim() as u64;
        let mut entries = Vec::new();
        let values = text
            .split(|c: char| !c.is_ascii_digit())
            .filter(|token| !token.is_empty())
            .take(topology.cell_count());
        for (index, token) in values.enumerate() {
            let value = token.parse::<u64>().unwrap_or(u64::MAX);
            if value > max {
                return Err(ParseError::ValueOutOfRange { index, value, max });
            }
            if value != 0 {
                entries.push(Entry::new(&topology, index, value as u8));
            }
        }
        let mut board = Board::new(topology);
        board.fix(&entries)?;
        Ok(board)
    }
}

/// ASCII-art dump of the board: fixed cells show their digit, unfixed cells
/// show `<0>`, rows and columns are grouped by box.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let side = self.topology.side();
        let dim = self.topology.dim();
        let mut separator = String::from("+");
        for _ in 0..side {
            for _ in 0..side * 5 {
                separator.push('-');
            }
            separator.push('+');
        }
        write!(f, "{}", separator)?;
        for row in 0..dim {
            write!(f, "\n|")?;
            for (col, cell) in self.row_cells(row).into_iter().enumerate() {
                match cell.value() {
                    Some(value) => write!(f, " {:2}  ", value)?,
                    None => write!(f, " <0> ")?,
                }
                if (col + 1) % side == 0 {
                    write!(f, "|")?;
                }
            }
            if (row + 1) % side == 0 {
                write!(f, "\n{}", separator)?;
            }
        }
        Ok(())
    }
}
