use std::sync::Arc;

use gensudoku::{Board, Entry, Topology};
use proptest::prelude::*;

proptest! {
    #[test]
    fn translate_is_an_involution(side in 1usize..=5, a in 0usize..1024, b in 0usize..1024) {
        let topology = Topology::new(side);
        let dim = topology.dim();
        let (a, b) = (a % dim, b % dim);
        let (x, y) = topology.translate(a, b);
        prop_assert!(x < dim && y < dim);
        prop_assert_eq!(topology.translate(x, y), (a, b));
    }

    #[test]
    fn fresh_boards_hold_every_digit(side in 1usize..=4) {
        let board = Board::with_side(side);
        let dim = board.topology().dim();
        let expected: Vec<u8> = (1..=dim as u8).collect();
        for row in 0..dim {
            for col in 0..dim {
                let cell = board.cell(row, col);
                prop_assert_eq!(cell.len() as usize, dim);
                prop_assert_eq!(cell.candidates().collect::<Vec<u8>>(), expected.clone());
            }
        }
    }

    #[test]
    fn fixing_narrows_exactly_the_three_houses(row in 0usize..9, col in 0usize..9, value in 1u8..=9) {
        let topology = Arc::new(Topology::new(3));
        let mut board = Board::new(Arc::clone(&topology));
        board.fix(&[Entry::at(&topology, row, col, value)]).unwrap();

        let (block, _) = topology.translate(row, col);
        for r in 0..9 {
            for c in 0..9 {
                let cell = board.cell(r, c);
                if (r, c) == (row, col) {
                    prop_assert_eq!(cell.value(), Some(value));
                } else if r == row || c == col || topology.translate(r, c).0 == block {
                    prop_assert_eq!(cell.len(), 8);
                    prop_assert!(!cell.contains(value));
                } else {
                    prop_assert_eq!(cell.len(), 9);
                }
            }
        }
    }

    #[test]
    fn clones_never_leak_into_the_original(row in 0usize..9, col in 0usize..9, value in 1u8..=9) {
        let topology = Arc::new(Topology::new(3));
        let original = Board::new(Arc::clone(&topology));
        let mut clone = original.clone();
        clone.fix(&[Entry::at(&topology, row, col, value)]).unwrap();

        for offset in 0..topology.cell_count() {
            prop_assert_eq!(original.cell_at(offset).len(), 9);
        }
    }
}
