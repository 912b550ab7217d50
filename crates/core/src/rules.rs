//! Runtime connectivity selection and the local validity table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A (chosen, complement) connectivity pair as accepted by the drivers.
///
/// `chosen` is the adjacency chosen pixels must keep (4 or 8); `complement`
/// is the connectivity the white complement must keep (4 or 8, or 0 to
/// disable the check).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Rules {
    pub chosen: u8,
    pub complement: u8,
}

impl Rules {
    /// The six supported pairs.
    pub const ALL: [Rules; 6] = [
        Rules::new(4, 0),
        Rules::new(4, 4),
        Rules::new(4, 8),
        Rules::new(8, 0),
        Rules::new(8, 4),
        Rules::new(8, 8),
    ];

    pub const fn new(chosen: u8, complement: u8) -> Self {
        Self { chosen, complement }
    }

    pub const fn is_supported(self) -> bool {
        matches!(self.chosen, 4 | 8) && matches!(self.complement, 0 | 4 | 8)
    }
}

impl fmt::Display for Rules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.chosen, self.complement)
    }
}

/// Error for connectivity selectors that are not one of the six pairs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseRulesError;

impl fmt::Display for ParseRulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "connectivity selector must be one of 40, 44, 48, 80, 84, 88"
        )
    }
}

impl std::error::Error for ParseRulesError {}

impl FromStr for Rules {
    type Err = ParseRulesError;

    /// Parses the drivers' two-digit selectors: chosen adjacency first,
    /// complement connectivity second (e.g. `44`, `80`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [chosen, complement] = s.as_bytes() else {
            return Err(ParseRulesError);
        };
        let rules = Rules::new(
            chosen.wrapping_sub(b'0'),
            complement.wrapping_sub(b'0'),
        );
        if rules.is_supported() {
            Ok(rules)
        } else {
            Err(ParseRulesError)
        }
    }
}

/// Derive the 256-entry local verdict table for one connectivity pair.
///
/// The eight neighbours of a freshly placed pixel are labelled in raster
/// order (`a b c / d . f / g h i`) and packed into the index byte with `a`
/// in bit 0 through `i` in bit 7. The entry is true when walking the outer
/// ring meets at most one run of chosen pixels, in which case the placement
/// cannot have cut the white complement locally.
///
/// Evaluated at compile time; each connectivity mode bakes its own table.
pub const fn neighbour_table(chosen: u8, complement: u8) -> [bool; 256] {
    let mut table = [true; 256];
    if complement == 0 {
        return table;
    }
    let mut n = 0usize;
    while n < 256 {
        let a = n & 1 != 0;
        let b = n & 2 != 0;
        let c = n & 4 != 0;
        let d = n & 8 != 0;
        let f = n & 16 != 0;
        let g = n & 32 != 0;
        let h = n & 64 != 0;
        let i = n & 128 != 0;

        // Chosen-to-white transitions around the ring f,c,b,a,d,g,h,i.
        let mut runs = edge(f, c)
            + edge(c, b)
            + edge(b, a)
            + edge(a, d)
            + edge(d, g)
            + edge(g, h)
            + edge(h, i)
            + edge(i, f);

        if complement == 8 {
            // A chosen corner whose orthogonal neighbours are both white
            // forms a run of its own yet cannot cut an 8-connected
            // complement.
            runs -= (a && !b && !d) as i32
                + (c && !b && !f) as i32
                + (g && !d && !h) as i32
                + (i && !f && !h) as i32;
        }
        if chosen == 8 && complement == 4 {
            // A white corner between two chosen orthogonals keeps an outside
            // path along the diagonal that produced this placement.
            runs -= (!a && b && d) as i32
                + (!c && b && f) as i32
                + (!g && d && h) as i32
                + (!i && f && h) as i32;
        }

        table[n] = runs <= 1;
        n += 1;
    }
    table
}

const fn edge(from: bool, to: bool) -> i32 {
    (from && !to) as i32
}
