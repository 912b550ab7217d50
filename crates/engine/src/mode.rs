//! Compile-time connectivity modes.
//!
//! Each supported (chosen, complement) pair is a marker type. The enumerator
//! monomorphizes on it, so the neighbour loop, the verdict table and the
//! optional parts of the state are all fixed at build time: modes that never
//! consult the chosen grid or the flood-fill scratch do not carry them.

use figura_core::{dir, neighbour_table, BitGrid, Pos};

use crate::validity::{NoVisit, VisitBuf, VisitScratch};

/// Storage for the currently chosen cells.
///
/// `BitGrid` when the complement check reads it, the zero-sized [`NoGrid`]
/// when no mode logic ever does.
pub trait ChosenCells: Clone + Copy + PartialEq + Default + Send + Sync + 'static {
    fn get(&self, pos: Pos) -> bool;
    fn set(&mut self, pos: Pos);
    fn clear(&mut self, pos: Pos);
    /// Raw words - for the flood-fill mask
    fn words(&self) -> &[u64];
}

impl ChosenCells for BitGrid {
    #[inline(always)]
    fn get(&self, pos: Pos) -> bool {
        BitGrid::get(self, pos)
    }

    #[inline(always)]
    fn set(&mut self, pos: Pos) {
        BitGrid::set(self, pos)
    }

    #[inline(always)]
    fn clear(&mut self, pos: Pos) {
        BitGrid::reset(self, pos)
    }

    #[inline(always)]
    fn words(&self) -> &[u64] {
        BitGrid::words(self)
    }
}

/// Chosen-cell storage for the modes with no complement check.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct NoGrid;

impl ChosenCells for NoGrid {
    #[inline(always)]
    fn get(&self, _pos: Pos) -> bool {
        false
    }

    #[inline(always)]
    fn set(&mut self, _pos: Pos) {}

    #[inline(always)]
    fn clear(&mut self, _pos: Pos) {}

    #[inline(always)]
    fn words(&self) -> &[u64] {
        &[]
    }
}

/// A compile-time (chosen, complement) connectivity pair.
pub trait Connectivity: Clone + Copy + Default + Send + Sync + 'static {
    /// Adjacency chosen pixels must keep: 4 or 8.
    const CHOSEN: u8;
    /// Connectivity the white complement must keep, 0 to disable the check.
    const COMPLEMENT: u8;
    /// Candidate expansion order; fixes the sibling ordering of the walk.
    const NEIGHBOURS: &'static [Pos];
    /// Local verdicts for the 3x3 neighbourhood of a fresh placement,
    /// derived at compile time from the connectivity pair.
    const LOOKUP: [bool; 256];
    /// Chosen-cell grid, present only when the complement check needs it.
    type Chosen: ChosenCells;
    /// Flood-fill scratch, present only in the (8,8) configuration.
    type Visit: VisitScratch;
}

/// 4-connected figures, complement unconstrained.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FourFree;

/// 4-connected figures over a 4-connected complement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FourFour;

/// 4-connected figures over an 8-connected complement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FourEight;

/// 8-connected figures, complement unconstrained.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EightFree;

/// 8-connected figures over a 4-connected complement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EightFour;

/// 8-connected figures over an 8-connected complement. The only mode whose
/// local table is not conclusive; refusals fall back to a global flood fill.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EightEight;

impl Connectivity for FourFree {
    const CHOSEN: u8 = 4;
    const COMPLEMENT: u8 = 0;
    const NEIGHBOURS: &'static [Pos] = &dir::FOUR_WAY;
    const LOOKUP: [bool; 256] = neighbour_table(4, 0);
    type Chosen = NoGrid;
    type Visit = NoVisit;
}

impl Connectivity for FourFour {
    const CHOSEN: u8 = 4;
    const COMPLEMENT: u8 = 4;
    const NEIGHBOURS: &'static [Pos] = &dir::FOUR_WAY;
    const LOOKUP: [bool; 256] = neighbour_table(4, 4);
    type Chosen = BitGrid;
    type Visit = NoVisit;
}

impl Connectivity for FourEight {
    const CHOSEN: u8 = 4;
    const COMPLEMENT: u8 = 8;
    const NEIGHBOURS: &'static [Pos] = &dir::FOUR_WAY;
    const LOOKUP: [bool; 256] = neighbour_table(4, 8);
    type Chosen = BitGrid;
    type Visit = NoVisit;
}

impl Connectivity for EightFree {
    const CHOSEN: u8 = 8;
    const COMPLEMENT: u8 = 0;
    const NEIGHBOURS: &'static [Pos] = &dir::EIGHT_WAY;
    const LOOKUP: [bool; 256] = neighbour_table(8, 0);
    type Chosen = NoGrid;
    type Visit = NoVisit;
}

impl Connectivity for EightFour {
    const CHOSEN: u8 = 8;
    const COMPLEMENT: u8 = 4;
    const NEIGHBOURS: &'static [Pos] = &dir::EIGHT_WAY;
    const LOOKUP: [bool; 256] = neighbour_table(8, 4);
    type Chosen = BitGrid;
    type Visit = NoVisit;
}

impl Connectivity for EightEight {
    const CHOSEN: u8 = 8;
    const COMPLEMENT: u8 = 8;
    const NEIGHBOURS: &'static [Pos] = &dir::EIGHT_WAY;
    const LOOKUP: [bool; 256] = neighbour_table(8, 8);
    type Chosen = BitGrid;
    type Visit = VisitBuf;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_neighbour_orders() {
        assert_eq!(FourFree::NEIGHBOURS.len(), 4);
        assert_eq!(EightFree::NEIGHBOURS.len(), 8);
        assert_eq!(FourFour::NEIGHBOURS, FourFree::NEIGHBOURS);
        assert_eq!(EightEight::NEIGHBOURS, EightFree::NEIGHBOURS);
        assert_eq!(FourFree::NEIGHBOURS[0], dir::RIGHT);
        assert_eq!(EightFree::NEIGHBOURS[1], dir::UP_RIGHT);
    }

    #[test]
    fn test_optional_state_is_absent_from_the_type() {
        assert_eq!(size_of::<<FourFree as Connectivity>::Chosen>(), 0);
        assert_eq!(size_of::<<EightFree as Connectivity>::Visit>(), 0);
        assert!(size_of::<<FourFour as Connectivity>::Chosen>() > 0);
        assert!(size_of::<<EightEight as Connectivity>::Visit>() > 0);
    }

    #[test]
    fn test_free_modes_accept_every_neighbourhood() {
        assert!(FourFree::LOOKUP.iter().all(|&v| v));
        assert!(EightFree::LOOKUP.iter().all(|&v| v));
    }
}
