//! Precomputed board geometry.
//!
//! All coordinate bookkeeping lives here, computed once per board size and
//! shared read-only between every board of that size. Cells are addressed by
//! a row-major linear offset (`offset = row * dim + col`). For each offset
//! the tables hold the three houses it belongs to, each paired with an
//! exclusion mask that selects every position of the house except the cell's
//! own. Propagation iterates the mask's set bits and so never needs a
//! self-check per peer.
//!
//! (row, column) and (box, index-within-box) addressing are two views of the
//! same grid, and translating between them is its own inverse: feeding a
//! translated pair back through [`Topology::translate`] returns the
//! original pair.

use crate::bitset::CandidateSet;

/// One row, column or box of a board, identified by its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum House {
    /// Row `0..dim`, top to bottom.
    Row(usize),
    /// Column `0..dim`, left to right.
    Col(usize),
    /// Box `0..dim`, row-major over box coordinates.
    Block(usize),
}

/// Immutable lookup tables for one board size.
///
/// Built once by [`Topology::new`] and handed (behind an `Arc`) to every
/// [`Board`](crate::Board) of that size. Never mutated after construction.
#[derive(Debug)]
pub struct Topology {
    side: usize,
    dim: usize,
    cells: usize,
    full: CandidateSet,
    rows: Vec<Vec<usize>>,
    cols: Vec<Vec<usize>>,
    blocks: Vec<Vec<usize>>,
    neighbors: Vec<[(House, CandidateSet); 3]>,
}

impl Topology {
    /// Builds the tables for boards whose boxes are `side` cells wide.
    ///
    /// # Panic
    /// Panics if `side` is 0 or greater than 11. Cell masks are 128 bits
    /// wide, so `side * side` candidates must fit into 128.
    pub fn new(side: usize) -> Topology {
        assert!(side >= 1, "box side must be at least 1");
        assert!(side <= 11, "box side {} needs more than 128 candidate bits", side);
        let dim = side * side;
        let cells = dim * dim;
        let full = CandidateSet::all(dim as u32);

        let rows: Vec<Vec<usize>> = (0..dim)
            .map(|row| (0..dim).map(|col| row * dim + col).collect())
            .collect();
        let cols: Vec<Vec<usize>> = (0..dim)
            .map(|col| (0..dim).map(|row| row * dim + col).collect())
            .collect();
        let blocks: Vec<Vec<usize>> = (0..dim)
            .map(|block| {
                let base_row = block / side * side;
                let base_col = block % side * side;
                (0..dim)
                    .map(|index| (base_row + index / side) * dim + base_col + index % side)
                    .collect()
            })
            .collect();

        let mut neighbors = Vec::with_capacity(cells);
        for offset in 0..cells {
            let row = offset / dim;
            let col = offset % dim;
            let (block, index) = translate_with_side(side, row, col);
            neighbors.push([
                (House::Block(block), full.without(CandidateSet::single(index as u8))),
                (House::Row(row), full.without(CandidateSet::single(col as u8))),
                (House::Col(col), full.without(CandidateSet::single(row as u8))),
            ]);
        }

        Topology { side, dim, cells, full, rows, cols, blocks, neighbors }
    }

    /// The box side length this topology was built for.
    pub fn side(&self) -> usize {
        self.side
    }

    /// The grid dimension: cells per row, column or box, and the digit range.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Total number of cells on a board of this size.
    pub fn cell_count(&self) -> usize {
        self.cells
    }

    /// Mask with all `dim` candidate bits set.
    pub fn full_mask(&self) -> CandidateSet {
        self.full
    }

    /// Linear offset of the cell at (row, col).
    ///
    /// # Panic
    /// Panics if either coordinate is out of range.
    pub fn offset_of(&self, row: usize, col: usize) -> usize {
        assert!(row < self.dim && col < self.dim, "cell ({}, {}) out of range", row, col);
        row * self.dim + col
    }

    /// Offsets of the cells in row `row`, left to right.
    pub fn row_cells(&self, row: usize) -> &[usize] {
        &self.rows[row]
    }

    /// Offsets of the cells in column `col`, top to bottom.
    pub fn col_cells(&self, col: usize) -> &[usize] {
        &self.cols[col]
    }

    /// Offsets of the cells in box `block`, row-major within the box.
    pub fn block_cells(&self, block: usize) -> &[usize] {
        &self.blocks[block]
    }

    /// Offsets of the cells of `house`, in house order.
    pub fn house_cells(&self, house: House) -> &[usize] {
        match house {
            House::Row(row) => self.row_cells(row),
            House::Col(col) => self.col_cells(col),
            House::Block(block) => self.block_cells(block),
        }
    }

    /// Every house of the board: all rows, then all columns, then all boxes.
    pub fn houses(&self) -> impl Iterator<Item = House> {
        let dim = self.dim;
        (0..dim)
            .map(House::Row)
            .chain((0..dim).map(House::Col))
            .chain((0..dim).map(House::Block))
    }

    /// The three houses containing the cell at `offset`, each paired with
    /// the mask of its peer positions (the cell's own position is cleared).
    pub fn neighbors_of(&self, offset: usize) -> &[(House, CandidateSet); 3] {
        &self.neighbors[offset]
    }

    /// Translates (row, column) to (box, index-within-box) and vice versa.
    ///
    /// The mapping is symmetric, so one function covers both directions:
    /// translating a (row, column) pair yields (box, index), and translating
    /// that result yields the original pair again.
    pub fn translate(&self, coord1: usize, coord2: usize) -> (usize, usize) {
        assert!(coord1 < self.dim && coord2 < self.dim, "coordinate ({}, {}) out of range", coord1, coord2);
        translate_with_side(self.side, coord1, coord2)
    }
}

fn translate_with_side(side: usize, coord1: usize, coord2: usize) -> (usize, usize) {
    (
        coord1 / side * side + coord2 / side,
        coord1 % side * side + coord2 % side,
    )
}
