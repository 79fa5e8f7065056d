//! Lattice edge (boundary) behavior.

/// How a lattice handles neighbours at its edges.
///
/// The choice changes the neighbour mean seen by edge sites, and therefore
/// edge-site statistics, so it is always explicit at lattice construction.
///
/// # Examples
///
/// ```
/// use hotspot_space::{EdgeBehavior, Grid2D, Neighbourhood};
///
/// // Absorb: corner has 2 neighbours, interior has 4.
/// let absorb = Grid2D::new(4, 4, EdgeBehavior::Absorb).unwrap();
/// assert_eq!(absorb.degree(0), 2);
/// assert_eq!(absorb.degree(5), 4);
///
/// // Wrap: every site has exactly 4 neighbours (torus).
/// let wrap = Grid2D::new(4, 4, EdgeBehavior::Wrap).unwrap();
/// assert_eq!(wrap.degree(0), 4);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Out-of-bounds neighbour is omitted (fewer neighbours at edges).
    #[default]
    Absorb,
    /// Out-of-bounds neighbour maps to the boundary site (self-loop).
    Clamp,
    /// Out-of-bounds neighbour wraps to the opposite side (periodic).
    Wrap,
}

impl EdgeBehavior {
    /// Resolve a possibly out-of-range axis position on an axis of `len`
    /// sites. Returns `None` when the neighbour is omitted.
    pub fn resolve(self, pos: isize, len: usize) -> Option<usize> {
        let n = len as isize;
        if pos >= 0 && pos < n {
            return Some(pos as usize);
        }
        match self {
            Self::Absorb => None,
            Self::Clamp => Some(pos.clamp(0, n - 1) as usize),
            Self::Wrap => Some(pos.rem_euclid(n) as usize),
        }
    }
}
