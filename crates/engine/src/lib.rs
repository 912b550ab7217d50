//! figura-engine - incremental enumeration of discrete figures.
//!
//! Provides the depth-first figure walk, the validity oracle, counting
//! drivers and prefix splitting for parallel runs.

pub mod census;
pub mod dispatch;
pub mod enumerator;
pub mod figure;
pub mod mode;
pub mod split;
pub mod validity;

pub use census::{
    census, census_stepwise, census_with_stats, Census, FIXED_FIGURES_4, FIXED_FIGURES_8,
};
pub use dispatch::{run_census, CensusOptions, CensusReport, ConfigError};
pub use enumerator::Enumerator;
pub use figure::Figure;
pub use mode::{
    ChosenCells, Connectivity, EightEight, EightFour, EightFree, FourEight, FourFour, FourFree,
    NoGrid,
};
pub use split::{census_parallel, drain_segment, split_segments};
pub use validity::{NoVisit, VisitBuf, VisitScratch};
