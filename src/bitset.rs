//! Candidate bitsets.
//!
//! Every cell of a board is a bitmask over the digits it can still take:
//! bit `k` set means digit `k + 1` remains possible. The same representation
//! doubles as a set of positions within a row, column or box during
//! propagation and the subset heuristic. Storage is a `u128`, which caps the
//! grid dimension at 121 candidates, the largest square dimension that fits.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign};

/// Fixed-capacity set of digit or position indices, backed by a `u128`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CandidateSet(u128);

impl CandidateSet {
    /// The empty set.
    pub const NONE: CandidateSet = CandidateSet(0);

    /// Set containing every index in `0..len`.
    pub fn all(len: u32) -> CandidateSet {
        debug_assert!(len <= 128);
        if len == 128 {
            CandidateSet(u128::MAX)
        } else {
            CandidateSet((1u128 << len) - 1)
        }
    }

    /// Set containing only `index`.
    pub fn single(index: u8) -> CandidateSet {
        debug_assert!(index < 128);
        CandidateSet(1u128 << index)
    }

    /// Construct a set from a raw bit pattern.
    pub fn from_bits(bits: u128) -> CandidateSet {
        CandidateSet(bits)
    }

    /// The raw bit pattern backing the set.
    pub fn bits(self) -> u128 {
        self.0
    }

    /// Number of elements in the set.
    pub fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Whether the set contains no element.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether every element of `other` is also in `self`.
    pub fn contains(self, other: CandidateSet) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether `self` and `other` share any element.
    pub fn overlaps(self, other: CandidateSet) -> bool {
        self.0 & other.0 != 0
    }

    /// The elements of `self` that are not in `other`.
    pub fn without(self, other: CandidateSet) -> CandidateSet {
        CandidateSet(self.0 & !other.0)
    }

    /// Deletes the elements of `other` from this set.
    pub fn remove(&mut self, other: CandidateSet) {
        self.0 &= !other.0;
    }

    /// Adds the elements of `other` to this set.
    pub fn insert(&mut self, other: CandidateSet) {
        self.0 |= other.0;
    }

    /// The only element, iff exactly one remains.
    pub fn unique(self) -> Option<u8> {
        if self.len() == 1 {
            Some(self.0.trailing_zeros() as u8)
        } else {
            None
        }
    }

    /// Iterator over the element indices, lowest first.
    pub fn iter(self) -> Iter {
        Iter(self.0)
    }
}

/// Iterator over the set bit positions of a [`CandidateSet`], lowest first.
///
/// Each step takes the lowest set bit and clears it, so the sequence is
/// finite and independent of any board state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Iter(u128);

impl Iterator for Iter {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.0 == 0 {
            return None;
        }
        let lowest_bit = self.0 & self.0.wrapping_neg();
        let bit_pos = lowest_bit.trailing_zeros() as u8;
        self.0 ^= lowest_bit;
        Some(bit_pos)
    }
}

impl IntoIterator for CandidateSet {
    type Item = u8;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

macro_rules! impl_binary_bitops {
    ( $( $trait:ident, $fn_name:ident );* $(;)* ) => {
        $(
            impl $trait for CandidateSet {
                type Output = Self;

                #[inline(always)]
                fn $fn_name(self, other: Self) -> Self {
                    CandidateSet($trait::$fn_name(self.0, other.0))
                }
            }
        )*
    };
}

macro_rules! impl_bitops_assign {
    ( $( $trait:ident, $fn_name:ident );* $(;)* ) => {
        $(
            impl $trait for CandidateSet {
                #[inline(always)]
                fn $fn_name(&mut self, other: Self) {
                    $trait::$fn_name(&mut self.0, other.0)
                }
            }
        )*
    };
}

impl_binary_bitops!(
    BitAnd, bitand;
    BitOr, bitor;
    BitXor, bitxor;
);

impl_bitops_assign!(
    BitAndAssign, bitand_assign;
    BitOrAssign, bitor_assign;
    BitXorAssign, bitxor_assign;
);

impl fmt::Binary for CandidateSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:b}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::CandidateSet;

    #[test]
    fn all_holds_the_first_len_indices() {
        assert_eq!(CandidateSet::all(0), CandidateSet::NONE);
        assert_eq!(CandidateSet::all(9).bits(), 0b1_1111_1111);
        assert_eq!(CandidateSet::all(128).len(), 128);
    }

    #[test]
    fn iteration_is_lowest_bit_first() {
        let set = CandidateSet::from_bits(0b1010_0110);
        let indices: Vec<u8> = set.iter().collect();
        assert_eq!(indices, [1, 2, 5, 7]);
    }

    #[test]
    fn iteration_restarts_from_a_fresh_copy() {
        let set = CandidateSet::from_bits(0b101);
        assert_eq!(set.iter().count(), 2);
        assert_eq!(set.iter().count(), 2);
    }

    #[test]
    fn unique_requires_exactly_one_element() {
        assert_eq!(CandidateSet::NONE.unique(), None);
        assert_eq!(CandidateSet::single(6).unique(), Some(6));
        assert_eq!(CandidateSet::all(2).unique(), None);
    }

    #[test]
    fn without_and_remove_agree() {
        let mut set = CandidateSet::all(9);
        let dropped = CandidateSet::single(4);
        assert_eq!(set.without(dropped).len(), 8);
        set.remove(dropped);
        assert_eq!(set.len(), 8);
        assert!(!set.contains(dropped));
    }
}
