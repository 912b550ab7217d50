//! Figura core crate - fundamental grid types for figure enumeration.

mod grid;
mod rules;
mod stats;

pub use grid::{
    dir, pos_at, x_of, y_of, BitGrid, Pos, AREA, CANDIDATE_CAP, GRID_WORDS, HEIGHT, MAX_SIZE,
    ORIGIN, WIDTH,
};
pub use rules::{neighbour_table, ParseRulesError, Rules};
pub use stats::{GeneratorStats, StatsTracker};
