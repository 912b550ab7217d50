//! Incremental depth-first enumeration of discrete figures.
//!
//! The walk keeps one figure alive at all times and moves between figures
//! with three bounded-cost mutations (first child, next sibling and parent).
//! Candidates discovered on the way
//! down are kept in a fixed array and retired in blocks on the way up, so a
//! step never touches the heap.
//!
//! Canonical rooting: every cell at or below the origin is pre-marked in the
//! candidate grid without ever entering the candidate list. Neighbours in
//! that strip are skipped by the ordinary duplicate test, which keeps the
//! origin the lowest cell of every emitted figure and makes each figure
//! appear exactly once.

use figura_core::{BitGrid, GeneratorStats, Pos, StatsTracker, CANDIDATE_CAP, MAX_SIZE, ORIGIN};

use crate::figure::Figure;
use crate::mode::{ChosenCells, Connectivity};

/// Stateful figure enumerator, monomorphized on the connectivity mode and
/// the statistics tracker.
///
/// The state is a plain value: `clone` snapshots it, and a snapshot resumes
/// independently of the original.
#[derive(Clone)]
pub struct Enumerator<C: Connectivity, T: StatsTracker = ()> {
    /// Current depth; the figure has `level + 1` pixels.
    pub(crate) level: u32,
    /// Candidate positions discovered so far along the current path.
    pub(crate) count: u32,
    /// Snapshot of `count` at the start of each depth.
    pub(crate) candidate_counts: [u32; MAX_SIZE],
    /// Index into `candidates` of the pixel chosen at each depth.
    pub(crate) chosen_indices: [u32; MAX_SIZE],
    /// Candidate positions in discovery order.
    pub(crate) candidates: [Pos; CANDIDATE_CAP],
    /// Cells ever promoted to a candidate, plus the forbidden strip.
    pub(crate) grid_candidates: BitGrid,
    /// Currently chosen cells; zero-sized unless the mode checks the
    /// complement.
    pub(crate) chosen: C::Chosen,
    /// Flood-fill scratch; zero-sized outside (8,8).
    pub(crate) visit: C::Visit,
    pub(crate) stats: T,
}

impl<C: Connectivity, T: StatsTracker> Enumerator<C, T> {
    /// Fresh enumerator standing on the single-pixel figure at the origin.
    pub fn new() -> Self {
        let mut enumerator = Self::blank();
        enumerator.init();
        enumerator
    }

    fn blank() -> Self {
        Self {
            level: 0,
            count: 0,
            candidate_counts: [0; MAX_SIZE],
            chosen_indices: [0; MAX_SIZE],
            candidates: [0; CANDIDATE_CAP],
            grid_candidates: BitGrid::new(),
            chosen: C::Chosen::default(),
            visit: C::Visit::default(),
            stats: T::default(),
        }
    }

    /// Reset to the single-pixel figure at the origin.
    pub fn init(&mut self) {
        *self = Self::blank();
        self.candidates[0] = ORIGIN;
        self.count = 1;
        self.candidate_counts[0] = 1;
        for pos in 0..=ORIGIN {
            self.grid_candidates.set(pos);
        }
        self.chosen_indices[0] = 0;
        self.chosen.set(ORIGIN);
    }

    /// Current depth; 0 is the single-pixel figure.
    #[inline(always)]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Size of the current figure.
    #[inline(always)]
    pub fn size(&self) -> u32 {
        self.level + 1
    }

    /// View of the figure the walk currently stands on.
    #[inline]
    pub fn figure(&self) -> Figure<'_> {
        Figure::new(self.level, &self.candidates, &self.chosen_indices)
    }

    /// Collected statistics, when the tracker collects any.
    pub fn stats(&self) -> Option<GeneratorStats> {
        self.stats.report()
    }

    /// Extend the current figure by its first available child pixel.
    ///
    /// Promotes the unseen neighbours of the current pixel to candidates,
    /// then descends onto the first candidate past the current one. Returns
    /// false (leaving the promotions in place) when no candidate is left.
    pub(crate) fn first_child(&mut self) -> bool {
        let idx = self.chosen_indices[self.level as usize];
        let pos = self.candidates[idx as usize];

        for &d in C::NEIGHBOURS {
            let q = pos + d;
            if !self.grid_candidates.get(q) {
                debug_assert!((self.count as usize) < CANDIDATE_CAP, "candidate overflow");
                self.grid_candidates.set(q);
                self.candidates[self.count as usize] = q;
                self.count += 1;
            }
        }
        if idx + 1 == self.count {
            self.stats.record_leaf();
            return false;
        }

        self.level += 1;
        self.candidate_counts[self.level as usize] = self.count;
        self.chosen_indices[self.level as usize] = idx + 1;
        self.chosen.set(self.candidates[(idx + 1) as usize]);
        self.stats.record_non_leaf();
        true
    }

    /// Swap the pixel at the current depth for the next candidate.
    pub(crate) fn next_sibling(&mut self) -> bool {
        let idx = self.chosen_indices[self.level as usize];
        if idx + 1 < self.count {
            self.chosen.clear(self.candidates[idx as usize]);
            self.chosen.set(self.candidates[(idx + 1) as usize]);
            self.chosen_indices[self.level as usize] = idx + 1;
            true
        } else {
            false
        }
    }

    /// Unwind one depth, retiring the candidates discovered below it.
    pub(crate) fn parent(&mut self) {
        debug_assert!(self.level > 0, "parent of the root figure");
        self.chosen
            .clear(self.candidates[self.chosen_indices[self.level as usize] as usize]);
        self.level -= 1;
        let keep = self.candidate_counts[self.level as usize];
        for idx in keep..self.count {
            self.grid_candidates.reset(self.candidates[idx as usize]);
        }
        self.count = keep;
    }

    /// Drive the walk to completion, invoking `on_figure` once per valid
    /// figure of size at most `nmax` (clamped into `[1, MAX_SIZE]`).
    ///
    /// Figures are delivered in the deterministic order fixed by the mode's
    /// neighbour ordering. The walk ends back on the root figure.
    pub fn generate<F>(&mut self, mut on_figure: F, nmax: u32)
    where
        F: FnMut(Figure<'_>),
    {
        let max_level = nmax.clamp(1, MAX_SIZE as u32) - 1;
        loop {
            while self.check_validity() {
                on_figure(Figure::new(self.level, &self.candidates, &self.chosen_indices));
                if self.level >= max_level {
                    self.stats.record_leaf();
                    break;
                }
                if !self.first_child() {
                    break;
                }
            }
            loop {
                if self.next_sibling() {
                    break;
                }
                if self.level == 0 {
                    return;
                }
                self.parent();
            }
        }
    }

    /// Advance to the next valid figure; the step-once rewording of
    /// [`generate`](Self::generate). Returns false once the walk is
    /// exhausted, with the state back on the root figure.
    pub fn next_step(&mut self, nmax: u32) -> bool {
        let nmax = nmax.clamp(1, MAX_SIZE as u32);
        if self.level + 1 < nmax && self.first_child() && self.check_validity() {
            return true;
        }
        loop {
            loop {
                if self.next_sibling() {
                    break;
                }
                if self.level == 0 {
                    return false;
                }
                self.parent();
            }
            if self.check_validity() {
                return true;
            }
        }
    }
}

impl<C: Connectivity, T: StatsTracker> Default for Enumerator<C, T> {
    fn default() -> Self {
        Self::new()
    }
}
