//! Runtime connectivity dispatch for drivers.
//!
//! The enumerator is monomorphized per mode; drivers that read the
//! connectivity pair at runtime go through the match below, which expands to
//! one specialized call per supported pair. Unsupported configurations are
//! refused before any enumeration state is touched.

use std::error::Error;
use std::fmt;

use serde::Serialize;

use figura_core::{GeneratorStats, Rules, MAX_SIZE};

use crate::census::{census, census_stepwise, census_with_stats, Census};
use crate::mode::{EightEight, EightFour, EightFree, FourEight, FourFour, FourFree};
use crate::split::census_parallel;

/// How a census run should be driven.
#[derive(Clone, Copy, Debug)]
pub struct CensusOptions {
    /// Maximum figure size, 1..=MAX_SIZE.
    pub nmax: u32,
    /// Collect generator statistics (serial loop driver only).
    pub stats: bool,
    /// Drive the step-once interface instead of the internal loop.
    pub stepwise: bool,
    /// Enumerate split segments on the rayon pool at this depth.
    pub split_depth: Option<u32>,
}

impl CensusOptions {
    /// Plain serial run up to `nmax`.
    pub fn serial(nmax: u32) -> Self {
        Self {
            nmax,
            stats: false,
            stepwise: false,
            split_depth: None,
        }
    }
}

/// Outcome of one census run.
#[derive(Clone, Debug, Serialize)]
pub struct CensusReport {
    pub rules: Rules,
    pub nmax: u32,
    /// `counts[k]` is the number of figures of size `k + 1`.
    pub counts: Vec<u64>,
    pub total: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<GeneratorStats>,
}

/// Configuration refused before any work happens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The (chosen, complement) pair is not one of the six supported ones.
    UnsupportedRules(Rules),
    /// Maximum size outside `[1, MAX_SIZE]`.
    SizeOutOfRange(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnsupportedRules(rules) => {
                write!(
                    f,
                    "unsupported connectivity {}: chosen must be 4 or 8, complement 0, 4 or 8",
                    rules
                )
            }
            ConfigError::SizeOutOfRange(nmax) => {
                write!(f, "size {} outside 1..={}", nmax, MAX_SIZE)
            }
        }
    }
}

impl Error for ConfigError {}

/// Expand `$body` once per supported pair, with `$mode` bound to the
/// matching marker type.
macro_rules! for_each_mode {
    ($rules:expr, $mode:ident => $body:expr) => {{
        let rules: Rules = $rules;
        match (rules.chosen, rules.complement) {
            (4, 0) => {
                type $mode = FourFree;
                $body
            }
            (4, 4) => {
                type $mode = FourFour;
                $body
            }
            (4, 8) => {
                type $mode = FourEight;
                $body
            }
            (8, 0) => {
                type $mode = EightFree;
                $body
            }
            (8, 4) => {
                type $mode = EightFour;
                $body
            }
            (8, 8) => {
                type $mode = EightEight;
                $body
            }
            _ => return Err(ConfigError::UnsupportedRules(rules)),
        }
    }};
}

/// Run one census under runtime-selected rules.
pub fn run_census(rules: Rules, options: &CensusOptions) -> Result<CensusReport, ConfigError> {
    if options.nmax == 0 || options.nmax > MAX_SIZE as u32 {
        return Err(ConfigError::SizeOutOfRange(options.nmax));
    }
    let nmax = options.nmax;

    let mut stats = None;
    let tally: Census = for_each_mode!(rules, Mode => {
        if let Some(depth) = options.split_depth {
            census_parallel::<Mode>(nmax, depth)
        } else if options.stats {
            let (tally, collected) = census_with_stats::<Mode>(nmax);
            stats = Some(collected);
            tally
        } else if options.stepwise {
            census_stepwise::<Mode>(nmax)
        } else {
            census::<Mode>(nmax)
        }
    });

    Ok(CensusReport {
        rules,
        nmax,
        counts: tally.per_size(nmax).to_vec(),
        total: tally.total(),
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::census::FIXED_FIGURES_4;

    #[test]
    fn test_unsupported_pair_is_refused_up_front() {
        let err = run_census(Rules::new(4, 2), &CensusOptions::serial(5)).unwrap_err();
        assert_eq!(err, ConfigError::UnsupportedRules(Rules::new(4, 2)));
    }

    #[test]
    fn test_size_out_of_range_is_refused() {
        for nmax in [0, MAX_SIZE as u32 + 1] {
            let err = run_census(Rules::new(4, 0), &CensusOptions::serial(nmax)).unwrap_err();
            assert_eq!(err, ConfigError::SizeOutOfRange(nmax));
        }
    }

    #[test]
    fn test_every_supported_pair_runs() {
        for rules in Rules::ALL {
            let report = run_census(rules, &CensusOptions::serial(4)).unwrap();
            assert_eq!(report.counts.len(), 4);
            assert_eq!(report.counts.iter().sum::<u64>(), report.total);
            assert!(report.stats.is_none());
        }
    }

    #[test]
    fn test_drivers_agree() {
        let rules = Rules::new(4, 4);
        let serial = run_census(rules, &CensusOptions::serial(7)).unwrap();
        let stepwise = run_census(
            rules,
            &CensusOptions {
                stepwise: true,
                ..CensusOptions::serial(7)
            },
        )
        .unwrap();
        let parallel = run_census(
            rules,
            &CensusOptions {
                split_depth: Some(3),
                ..CensusOptions::serial(7)
            },
        )
        .unwrap();
        assert_eq!(serial.counts, stepwise.counts);
        assert_eq!(serial.counts, parallel.counts);
    }

    #[test]
    fn test_report_carries_stats_on_request() {
        let report = run_census(
            Rules::new(4, 0),
            &CensusOptions {
                stats: true,
                ..CensusOptions::serial(6)
            },
        )
        .unwrap();
        let stats = report.stats.unwrap();
        assert_eq!(stats.total_figures(), report.total);
        assert_eq!(report.counts, FIXED_FIGURES_4[..6].to_vec());
    }
}
