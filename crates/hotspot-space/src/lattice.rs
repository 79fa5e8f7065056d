//! Implicit regular lattices: a 1D line and a 4-connected 2D grid.
//!
//! Sites are numbered in row-major order. Neighbour visiting order is
//! chosen so that, away from wrapped edges, indices come out ascending:
//! a `Grid2D` with [`EdgeBehavior::Absorb`] visits exactly the same
//! sequence as the point-built [`NeighbourList`](crate::NeighbourList) of
//! the same lattice coordinates.

use crate::edge::EdgeBehavior;
use crate::error::SpaceError;
use crate::neighbourhood::Neighbourhood;
use smallvec::SmallVec;

/// A one-dimensional line of `len` sites.
///
/// Site `i` neighbours `i - 1` and `i + 1`, resolved by [`EdgeBehavior`]:
/// - **Absorb**: end sites have one neighbour
/// - **Clamp**: end sites self-loop once
/// - **Wrap**: periodic ring
///
/// # Examples
///
/// ```
/// use hotspot_space::{EdgeBehavior, Line1D, Neighbourhood};
///
/// let line = Line1D::new(5, EdgeBehavior::Absorb).unwrap();
/// assert_eq!(line.site_count(), 5);
/// assert_eq!(line.degree(2), 2);
/// assert_eq!(line.degree(0), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Line1D {
    len: usize,
    edge: EdgeBehavior,
}

impl Line1D {
    /// Create a line of `len` sites.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if `len == 0`.
    pub fn new(len: usize, edge: EdgeBehavior) -> Result<Self, SpaceError> {
        if len == 0 {
            return Err(SpaceError::EmptySpace);
        }
        if len > isize::MAX as usize {
            return Err(SpaceError::DimensionTooLarge {
                name: "len",
                value: len,
            });
        }
        Ok(Self { len, edge })
    }

    /// Number of sites.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: construction rejects `len == 0`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Edge behavior.
    pub fn edge_behavior(&self) -> EdgeBehavior {
        self.edge
    }

    fn neighbours_of(&self, site: usize) -> SmallVec<[usize; 2]> {
        let i = site as isize;
        [i - 1, i + 1]
            .into_iter()
            .filter_map(|p| self.edge.resolve(p, self.len))
            .collect()
    }
}

impl Neighbourhood for Line1D {
    fn site_count(&self) -> usize {
        self.len
    }

    fn degree(&self, site: usize) -> usize {
        self.neighbours_of(site).len()
    }

    fn for_each_neighbour<F: FnMut(usize)>(&self, site: usize, f: F) {
        self.neighbours_of(site).into_iter().for_each(f);
    }
}

/// A two-dimensional `rows × cols` grid with 4-connected neighbourhood.
///
/// Site `r * cols + c` sits at row `r`, column `c`. Neighbours are visited
/// north, west, east, south; boundary handling follows [`EdgeBehavior`]:
/// - **Absorb**: corners have 2 neighbours, edges have 3
/// - **Clamp**: edge sites self-loop on the boundary axis
/// - **Wrap**: periodic boundary (torus)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid2D {
    rows: usize,
    cols: usize,
    edge: EdgeBehavior,
}

impl Grid2D {
    /// N, W, E, S: ascending flat index for interior sites.
    const OFFSETS: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

    /// Create a `rows × cols` grid.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if either dimension is 0, or
    /// `Err(SpaceError::DimensionTooLarge)` if `rows * cols` overflows.
    pub fn new(rows: usize, cols: usize, edge: EdgeBehavior) -> Result<Self, SpaceError> {
        if rows == 0 || cols == 0 {
            return Err(SpaceError::EmptySpace);
        }
        match rows.checked_mul(cols) {
            Some(n) if n <= isize::MAX as usize => Ok(Self { rows, cols, edge }),
            _ => Err(SpaceError::DimensionTooLarge {
                name: "rows * cols",
                value: rows.saturating_mul(cols),
            }),
        }
    }

    /// Square `size × size` grid.
    pub fn square(size: usize, edge: EdgeBehavior) -> Result<Self, SpaceError> {
        Self::new(size, size, edge)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Edge behavior.
    pub fn edge_behavior(&self) -> EdgeBehavior {
        self.edge
    }

    /// Flat index of `(row, col)`.
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn neighbours_of(&self, site: usize) -> SmallVec<[usize; 4]> {
        let r = (site / self.cols) as isize;
        let c = (site % self.cols) as isize;
        let mut out = SmallVec::new();
        for (dr, dc) in Self::OFFSETS {
            let nr = self.edge.resolve(r + dr, self.rows);
            let nc = self.edge.resolve(c + dc, self.cols);
            if let (Some(nr), Some(nc)) = (nr, nc) {
                out.push(self.index(nr, nc));
            }
        }
        out
    }
}

impl Neighbourhood for Grid2D {
    fn site_count(&self) -> usize {
        self.rows * self.cols
    }

    fn degree(&self, site: usize) -> usize {
        self.neighbours_of(site).len()
    }

    fn for_each_neighbour<F: FnMut(usize)>(&self, site: usize, f: F) {
        self.neighbours_of(site).into_iter().for_each(f);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;

    fn nbs<N: Neighbourhood>(n: &N, site: usize) -> Vec<usize> {
        let mut out = Vec::new();
        n.for_each_neighbour(site, |j| out.push(j));
        out
    }

    // ── Line1D ──────────────────────────────────────────────────

    #[test]
    fn line_absorb_ends() {
        let l = Line1D::new(5, EdgeBehavior::Absorb).unwrap();
        assert_eq!(nbs(&l, 0), vec![1]);
        assert_eq!(nbs(&l, 2), vec![1, 3]);
        assert_eq!(nbs(&l, 4), vec![3]);
    }

    #[test]
    fn line_wrap_ends() {
        let l = Line1D::new(5, EdgeBehavior::Wrap).unwrap();
        assert_eq!(nbs(&l, 0), vec![4, 1]);
        assert_eq!(nbs(&l, 4), vec![3, 0]);
    }

    #[test]
    fn line_clamp_ends_self_loop() {
        let l = Line1D::new(5, EdgeBehavior::Clamp).unwrap();
        assert_eq!(nbs(&l, 0), vec![0, 1]);
        assert_eq!(nbs(&l, 4), vec![3, 4]);
    }

    #[test]
    fn line_single_site() {
        let absorb = Line1D::new(1, EdgeBehavior::Absorb).unwrap();
        assert_eq!(absorb.degree(0), 0);
        let wrap = Line1D::new(1, EdgeBehavior::Wrap).unwrap();
        assert_eq!(nbs(&wrap, 0), vec![0, 0]);
    }

    #[test]
    fn line_rejects_zero_len() {
        assert_eq!(
            Line1D::new(0, EdgeBehavior::Absorb),
            Err(SpaceError::EmptySpace)
        );
    }

    // ── Grid2D ──────────────────────────────────────────────────

    #[test]
    fn grid_absorb_interior_ascending() {
        let g = Grid2D::new(5, 5, EdgeBehavior::Absorb).unwrap();
        assert_eq!(nbs(&g, g.index(2, 2)), vec![7, 11, 13, 17]);
    }

    #[test]
    fn grid_absorb_corner_and_edge() {
        let g = Grid2D::new(5, 5, EdgeBehavior::Absorb).unwrap();
        assert_eq!(nbs(&g, 0), vec![1, 5]);
        assert_eq!(nbs(&g, g.index(0, 2)), vec![1, 3, 7]);
        assert_eq!(g.degree(24), 2);
    }

    #[test]
    fn grid_wrap_corner() {
        let g = Grid2D::new(5, 5, EdgeBehavior::Wrap).unwrap();
        // north wraps to (4,0)=20, west wraps to (0,4)=4
        assert_eq!(nbs(&g, 0), vec![20, 4, 1, 5]);
        assert_eq!(nbs(&g, 24), vec![19, 23, 20, 4]);
    }

    #[test]
    fn grid_clamp_corner() {
        let g = Grid2D::new(5, 5, EdgeBehavior::Clamp).unwrap();
        assert_eq!(nbs(&g, 0), vec![0, 0, 1, 5]);
    }

    #[test]
    fn grid_rectangular_indexing() {
        let g = Grid2D::new(2, 3, EdgeBehavior::Absorb).unwrap();
        assert_eq!(g.site_count(), 6);
        assert_eq!(g.index(1, 2), 5);
        assert_eq!(nbs(&g, 4), vec![1, 3, 5]);
    }

    #[test]
    fn grid_rejects_empty_and_overflow() {
        assert_eq!(
            Grid2D::new(0, 3, EdgeBehavior::Absorb),
            Err(SpaceError::EmptySpace)
        );
        assert!(matches!(
            Grid2D::new(usize::MAX, 2, EdgeBehavior::Absorb),
            Err(SpaceError::DimensionTooLarge { .. })
        ));
    }

    #[test]
    fn grid_edge_counts() {
        let absorb = Grid2D::square(4, EdgeBehavior::Absorb).unwrap();
        // 2 * (2 * 4 * 3) directed references
        assert_eq!(absorb.edge_count(), 48);
        let wrap = Grid2D::square(4, EdgeBehavior::Wrap).unwrap();
        assert_eq!(wrap.edge_count(), 64);
    }

    // ── Compliance suites ───────────────────────────────────────

    #[test]
    fn compliance_all_edges() {
        for edge in [EdgeBehavior::Absorb, EdgeBehavior::Clamp, EdgeBehavior::Wrap] {
            compliance::run_full_compliance(&Line1D::new(7, edge).unwrap());
            compliance::run_full_compliance(&Grid2D::new(4, 6, edge).unwrap());
        }
    }

    fn arb_edge() -> impl Strategy<Value = EdgeBehavior> {
        prop_oneof![
            Just(EdgeBehavior::Absorb),
            Just(EdgeBehavior::Clamp),
            Just(EdgeBehavior::Wrap),
        ]
    }

    proptest! {
        #[test]
        fn grid_neighbours_symmetric(
            rows in 2usize..10,
            cols in 2usize..10,
            edge in arb_edge(),
            site in 0usize..100,
        ) {
            let g = Grid2D::new(rows, cols, edge).unwrap();
            let site = site % g.site_count();
            for nb in nbs(&g, site) {
                prop_assert!(
                    nbs(&g, nb).contains(&site),
                    "neighbour symmetry violated: {} in N({}) but not vice versa",
                    nb, site,
                );
            }
        }

        #[test]
        fn wrap_grid_is_regular(rows in 3usize..10, cols in 3usize..10, site in 0usize..100) {
            let g = Grid2D::new(rows, cols, EdgeBehavior::Wrap).unwrap();
            prop_assert_eq!(g.degree(site % g.site_count()), 4);
        }
    }
}
