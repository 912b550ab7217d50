//! Read-only view of the figure a walk currently stands on.

use std::fmt;

use figura_core::{pos_at, x_of, y_of, Pos};

/// Borrowed view handed to enumeration callbacks.
///
/// Exposes the figure without copying it; the view is only valid for the
/// duration of the callback.
#[derive(Clone, Copy)]
pub struct Figure<'a> {
    level: u32,
    candidates: &'a [Pos],
    chosen_indices: &'a [u32],
}

impl<'a> Figure<'a> {
    pub(crate) fn new(level: u32, candidates: &'a [Pos], chosen_indices: &'a [u32]) -> Self {
        Self {
            level,
            candidates,
            chosen_indices,
        }
    }

    /// Depth of the walk; `size() - 1`.
    #[inline(always)]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Number of pixels.
    #[inline(always)]
    pub fn size(&self) -> u32 {
        self.level + 1
    }

    /// Positions of the chosen pixels in choice order; the first is always
    /// the origin.
    pub fn cells(&self) -> impl Iterator<Item = Pos> + 'a {
        let candidates = self.candidates;
        self.chosen_indices[..=self.level as usize]
            .iter()
            .map(move |&idx| candidates[idx as usize])
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.cells().any(|p| p == pos)
    }
}

impl fmt::Display for Figure<'_> {
    /// ASCII picture of the figure's bounding box, top row first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (mut x0, mut x1, mut y0, mut y1) = (i32::MAX, i32::MIN, i32::MAX, i32::MIN);
        for pos in self.cells() {
            x0 = x0.min(x_of(pos));
            x1 = x1.max(x_of(pos));
            y0 = y0.min(y_of(pos));
            y1 = y1.max(y_of(pos));
        }
        for y in (y0..=y1).rev() {
            for x in x0..=x1 {
                write!(f, "{}", if self.contains(pos_at(x, y)) { "[]" } else { "  " })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
