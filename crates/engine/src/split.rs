//! Prefix splitting for parallel enumeration.
//!
//! The walk below any figure of size D is independent of the walk below any
//! other, so a short single-threaded drive to depth D yields a bag of
//! snapshots that fan out over the rayon pool. The enumerator itself stays
//! strictly single-threaded; a segment is a plain value copy.

use rayon::prelude::*;

use figura_core::{StatsTracker, MAX_SIZE};

use crate::census::Census;
use crate::enumerator::Enumerator;
use crate::figure::Figure;
use crate::mode::Connectivity;

/// Drive the walk single-threaded up to `depth`, tallying sizes <= `depth`
/// and snapshotting an independent copy at every figure of size `depth`.
pub fn split_segments<C: Connectivity, T: StatsTracker>(
    depth: u32,
) -> (Census, Vec<Enumerator<C, T>>) {
    let depth = depth.clamp(1, MAX_SIZE as u32);
    let mut prefix = Enumerator::<C, T>::new();
    let mut tally = Census::new();
    let mut segments = Vec::new();
    loop {
        tally.record(prefix.size());
        if prefix.size() == depth {
            segments.push(prefix.clone());
        }
        if !prefix.next_step(depth) {
            break;
        }
    }
    (tally, segments)
}

/// Resume a segment, reporting every figure in the subtree under its prefix.
/// The segment stops as soon as the walk unwinds above the split depth, so
/// no figure of another segment is ever visited.
pub fn drain_segment<C, T, F>(segment: &mut Enumerator<C, T>, depth: u32, nmax: u32, mut on_figure: F)
where
    C: Connectivity,
    T: StatsTracker,
    F: FnMut(Figure<'_>),
{
    while segment.next_step(nmax) {
        if segment.level() < depth {
            break;
        }
        on_figure(segment.figure());
    }
}

/// Parallel census: split at `depth`, fan the segments out on the rayon
/// pool, and merge the per-segment tallies. Per-size totals equal the serial
/// census for every split depth.
pub fn census_parallel<C: Connectivity>(nmax: u32, depth: u32) -> Census {
    let nmax = nmax.clamp(1, MAX_SIZE as u32);
    let depth = depth.clamp(1, nmax);
    let (prefix_tally, segments) = split_segments::<C, ()>(depth);
    segments
        .into_par_iter()
        .map(|mut segment| {
            let mut tally = Census::new();
            drain_segment(&mut segment, depth, nmax, |figure| {
                tally.record(figure.size())
            });
            tally
        })
        .reduce(Census::new, Census::merged)
        .merged(prefix_tally)
}
