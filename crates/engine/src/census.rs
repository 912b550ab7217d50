//! Per-size counting drivers over the enumerator.
//!
//! Counting is the reference workload: the per-size tallies of the free
//! modes are published sequences, which makes these drivers the correctness
//! oracle for the whole walk.

use figura_core::{GeneratorStats, MAX_SIZE};

use crate::enumerator::Enumerator;
use crate::mode::Connectivity;

/// Fixed 4-connected figures of sizes 1..=20 (OEIS A001168).
pub const FIXED_FIGURES_4: [u64; 20] = [
    1,
    2,
    6,
    19,
    63,
    216,
    760,
    2_725,
    9_910,
    36_446,
    135_268,
    505_861,
    1_903_890,
    7_204_874,
    27_394_666,
    104_592_937,
    400_795_844,
    1_540_820_542,
    5_940_738_676,
    22_964_779_660,
];

/// Fixed 8-connected figures of sizes 1..=17 (OEIS A006770).
pub const FIXED_FIGURES_8: [u64; 17] = [
    1,
    4,
    20,
    110,
    638,
    3_832,
    23_592,
    147_941,
    940_982,
    6_053_180,
    39_299_408,
    257_105_146,
    1_692_931_066,
    11_208_974_860,
    74_570_549_714,
    498_174_818_986,
    3_340_366_308_393,
];

/// Per-size figure tallies, indexed by size; slot 0 is unused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Census {
    counts: [u64; MAX_SIZE + 1],
}

impl Census {
    pub fn new() -> Self {
        Self {
            counts: [0; MAX_SIZE + 1],
        }
    }

    #[inline(always)]
    pub fn record(&mut self, size: u32) {
        self.counts[size as usize] += 1;
    }

    pub fn count(&self, size: u32) -> u64 {
        self.counts[size as usize]
    }

    /// Counts for sizes 1..=nmax.
    pub fn per_size(&self, nmax: u32) -> &[u64] {
        &self.counts[1..=nmax.clamp(1, MAX_SIZE as u32) as usize]
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Elementwise sum; merges per-segment tallies.
    pub fn merged(mut self, other: Census) -> Census {
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts) {
            *mine += theirs;
        }
        self
    }
}

impl Default for Census {
    fn default() -> Self {
        Self::new()
    }
}

/// Count every figure of size at most `nmax`.
pub fn census<C: Connectivity>(nmax: u32) -> Census {
    let mut enumerator = Enumerator::<C>::new();
    let mut tally = Census::new();
    enumerator.generate(|figure| tally.record(figure.size()), nmax);
    tally
}

/// Count with generator statistics.
pub fn census_with_stats<C: Connectivity>(nmax: u32) -> (Census, GeneratorStats) {
    let mut enumerator = Enumerator::<C, GeneratorStats>::new();
    let mut tally = Census::new();
    enumerator.generate(|figure| tally.record(figure.size()), nmax);
    let stats = enumerator.stats().unwrap_or_default();
    (tally, stats)
}

/// Count through the step-once interface; agrees with [`census`] exactly.
pub fn census_stepwise<C: Connectivity>(nmax: u32) -> Census {
    let mut enumerator = Enumerator::<C>::new();
    let mut tally = Census::new();
    loop {
        tally.record(enumerator.size());
        if !enumerator.next_step(nmax) {
            break;
        }
    }
    tally
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::{EightEight, EightFour, EightFree, FourEight, FourFour, FourFree};
    use std::time::Instant;

    fn assert_per_size(tally: &Census, expected: &[u64]) {
        for (k, &want) in expected.iter().enumerate() {
            let size = k as u32 + 1;
            assert_eq!(
                tally.count(size),
                want,
                "size {}: got {}, reference {}",
                size,
                tally.count(size),
                want
            );
        }
    }

    #[test]
    fn test_four_free_matches_reference_to_10() {
        let tally = census::<FourFree>(10);
        assert_per_size(&tally, &FIXED_FIGURES_4[..10]);
    }

    #[test]
    fn test_eight_free_matches_reference_to_8() {
        let tally = census::<EightFree>(8);
        assert_per_size(&tally, &FIXED_FIGURES_8[..8]);
    }

    #[test]
    fn test_four_four_diverges_at_the_first_holed_figure() {
        // The complement check only bites once a hole is enclosable: the
        // four heptominoes that pinch off a single white cell.
        let tally = census::<FourFour>(7);
        assert_per_size(&tally, &FIXED_FIGURES_4[..6]);
        assert_eq!(tally.count(7), FIXED_FIGURES_4[6] - 4);
    }

    #[test]
    fn test_four_eight_diverges_only_at_the_full_ring() {
        // An 8-connected complement escapes through diagonals; the first
        // loss is the 3x3 ring of eight.
        let tally = census::<FourEight>(8);
        assert_per_size(&tally, &FIXED_FIGURES_4[..7]);
        assert_eq!(tally.count(8), FIXED_FIGURES_4[7] - 1);
    }

    #[test]
    fn test_eight_four_diverges_at_the_diamond() {
        let tally = census::<EightFour>(5);
        assert_per_size(&tally, &FIXED_FIGURES_8[..3]);
        assert_eq!(tally.count(4), FIXED_FIGURES_8[3] - 1);
        assert_eq!(tally.count(5), FIXED_FIGURES_8[4] - 16);
    }

    #[test]
    fn test_eight_eight_diverges_only_at_the_full_ring() {
        let tally = census::<EightEight>(8);
        assert_per_size(&tally, &FIXED_FIGURES_8[..7]);
        assert_eq!(tally.count(8), FIXED_FIGURES_8[7] - 1);
    }

    #[test]
    fn test_stepwise_driver_agrees_with_the_loop() {
        assert_eq!(census_stepwise::<FourFree>(8), census::<FourFree>(8));
        assert_eq!(census_stepwise::<FourFour>(8), census::<FourFour>(8));
        assert_eq!(census_stepwise::<EightEight>(7), census::<EightEight>(7));
    }

    #[test]
    fn test_stats_partition_the_valid_figures() {
        for nmax in [1, 4, 8] {
            let (tally, stats) = census_with_stats::<FourFour>(nmax);
            assert_eq!(stats.total_figures(), tally.total(), "nmax {}", nmax);
        }
        let (tally, stats) = census_with_stats::<EightEight>(7);
        assert_eq!(stats.total_figures(), tally.total());
    }

    #[test]
    fn test_census_is_deterministic() {
        assert_eq!(census::<EightFour>(7), census::<EightFour>(7));
    }

    fn run_reference_benchmark<C: Connectivity>(label: &str, nmax: u32, expected: &[u64]) {
        let start = Instant::now();
        let tally = census::<C>(nmax);
        let elapsed = start.elapsed();
        let total = tally.total();
        eprintln!(
            "{}: n={} {} figures in {:?} ({:.1} Mfig/s)",
            label,
            nmax,
            total,
            elapsed,
            total as f64 / elapsed.as_secs_f64() / 1e6
        );
        assert_eq!(tally.count(nmax), expected[nmax as usize - 1]);
    }

    #[test]
    #[ignore]
    fn test_four_free_deep_reference() {
        run_reference_benchmark::<FourFree>("4-free", 14, &FIXED_FIGURES_4);
    }

    #[test]
    #[ignore]
    fn test_eight_free_deep_reference() {
        run_reference_benchmark::<EightFree>("8-free", 11, &FIXED_FIGURES_8);
    }

    #[test]
    #[ignore]
    fn test_eight_eight_deep_flood_fill() {
        let start = Instant::now();
        let tally = census::<EightEight>(10);
        eprintln!("(8,8) n=10: {} figures in {:?}", tally.total(), start.elapsed());
        assert_eq!(tally.count(3), 20);
    }
}
