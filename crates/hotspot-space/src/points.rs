//! Point sets and neighbour construction from 2D coordinates.
//!
//! Neighbours are the edges of a Gabriel graph: sites `i` and `j` are
//! neighbours unless a third site lies in the closed disc whose diameter is
//! the segment `ij`. Sites at identical coordinates are always neighbours of
//! each other and never block one another's edges, so duplicates behave as
//! co-located copies of one site.
//!
//! The closed-disc test gives a square lattice exactly its 4-connected
//! adjacency (diagonal partners lie *on* the disc boundary and block), and
//! every edge of the relative neighbourhood graph survives, so the result
//! always contains a Euclidean minimum spanning tree: no point set yields an
//! isolated component.

use crate::error::SpaceError;
use crate::neighbourhood::Neighbourhood;
use crate::neighbours::NeighbourList;
use tracing::debug;

/// Relative slack on the candidate strip half-width.
const STRIP_SLACK: f64 = 1e-9;

/// Relative difference in squared distance below which two neighbours
/// count as equidistant when ordering a list.
const TIE_TOLERANCE: f64 = 1e-7;

/// An immutable, ordered set of finite 2D points. Index = site id.
///
/// # Examples
///
/// ```
/// use hotspot_space::PointSet;
///
/// let pts = PointSet::new(&[0.0, 1.0, 2.0], &[0.0, 0.0, 0.0]).unwrap();
/// let nbs = pts.neighbours();
/// assert_eq!(nbs.neighbours(0), &[1]);
/// assert_eq!(nbs.neighbours(1), &[0, 2]);
/// assert_eq!(nbs.neighbours(2), &[1]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PointSet {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl PointSet {
    /// Build from parallel coordinate slices.
    ///
    /// # Errors
    ///
    /// [`SpaceError::CoordinateLengthMismatch`] if the slices differ in
    /// length; [`SpaceError::NonFiniteCoordinate`] for any NaN or infinite
    /// coordinate.
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self, SpaceError> {
        if x.len() != y.len() {
            return Err(SpaceError::CoordinateLengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        for (axis, values) in [("x", x), ("y", y)] {
            if let Some((site, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite())
            {
                return Err(SpaceError::NonFiniteCoordinate { axis, site, value });
            }
        }
        Ok(Self {
            x: x.to_vec(),
            y: y.to_vec(),
        })
    }

    /// Build from `(x, y)` pairs.
    pub fn from_pairs(points: &[(f64, f64)]) -> Result<Self, SpaceError> {
        let (x, y): (Vec<f64>, Vec<f64>) = points.iter().copied().unzip();
        Self::new(&x, &y)
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// `true` if there are no points.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Coordinates of site `i`.
    pub fn point(&self, i: usize) -> (f64, f64) {
        (self.x[i], self.y[i])
    }

    /// Squared Euclidean distance between sites `i` and `j`.
    pub fn distance_squared(&self, i: usize, j: usize) -> f64 {
        let dx = self.x[i] - self.x[j];
        let dy = self.y[i] - self.y[j];
        dx * dx + dy * dy
    }

    fn coincident(&self, i: usize, j: usize) -> bool {
        self.x[i] == self.x[j] && self.y[i] == self.y[j]
    }

    /// Build the neighbour structure.
    ///
    /// Each list is ordered by ascending distance, ties broken by ascending
    /// site index, so repeated calls are bit-identical. Distances that agree
    /// to a relative `1e-7` count as ties. Fewer than two points yield
    /// all-empty lists.
    ///
    /// Every pair of sites is tested, so the cost is at least quadratic in
    /// the number of points; the x-sorted strip only shortens the search for
    /// a blocking site.
    pub fn neighbours(&self) -> NeighbourList {
        let n = self.len();
        if n < 2 {
            return NeighbourList::empty(n);
        }

        // x-sorted order for candidate pruning.
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| self.x[a].total_cmp(&self.x[b]).then(a.cmp(&b)));
        let sorted_x: Vec<f64> = order.iter().map(|&i| self.x[i]).collect();

        let mut lists: Vec<Vec<usize>> = vec![Vec::new(); n];
        for i in 0..n {
            for j in (i + 1)..n {
                if self.is_gabriel_edge(i, j, &order, &sorted_x) {
                    lists[i].push(j);
                    lists[j].push(i);
                }
            }
        }

        for (i, list) in lists.iter_mut().enumerate() {
            self.order_by_distance(i, list);
        }

        let nbs = NeighbourList::from_valid_lists(lists);
        debug!(
            sites = n,
            edges = nbs.edge_count(),
            isolated = nbs.isolated_count(),
            "built neighbour list"
        );
        nbs
    }

    /// Sort `list` by ascending distance from site `i`.
    ///
    /// Distances within [`TIE_TOLERANCE`] of the first distance in a run are
    /// treated as equal and the run is ordered by site index, so rounding in
    /// the coordinates cannot reorder equidistant lattice neighbours.
    fn order_by_distance(&self, i: usize, list: &mut [usize]) {
        let mut keyed: Vec<(f64, usize)> = list
            .iter()
            .map(|&j| (self.distance_squared(i, j), j))
            .collect();
        keyed.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

        let mut start = 0;
        while start < keyed.len() {
            let base = keyed[start].0;
            let end = start
                + keyed[start..]
                    .iter()
                    .take_while(|(d2, _)| *d2 - base <= TIE_TOLERANCE * base)
                    .count();
            keyed[start..end].sort_by_key(|&(_, j)| j);
            start = end;
        }

        for (slot, (_, j)) in list.iter_mut().zip(keyed) {
            *slot = j;
        }
    }

    /// `true` unless a third, non-coincident site lies in the closed disc
    /// with diameter `ij`.
    fn is_gabriel_edge(&self, i: usize, j: usize, order: &[usize], sorted_x: &[f64]) -> bool {
        if self.coincident(i, j) {
            return true;
        }
        let d2 = self.distance_squared(i, j);
        let mx = 0.5 * (self.x[i] + self.x[j]);
        let reach = 0.5 * d2.sqrt() * (1.0 + STRIP_SLACK) + f64::EPSILON * mx.abs().max(1.0);
        let lo = sorted_x.partition_point(|&v| v < mx - reach);
        let mid = sorted_x.partition_point(|&v| v < mx);
        let hi = sorted_x.partition_point(|&v| v <= mx + reach);

        // Scan outward from the disc centre, where blockers are most likely.
        let blocked = order[mid.max(lo)..hi]
            .iter()
            .chain(order[lo..mid.max(lo)].iter().rev())
            .any(|&k| {
                k != i
                    && k != j
                    && !self.coincident(k, i)
                    && !self.coincident(k, j)
                    && self.distance_squared(i, k) + self.distance_squared(j, k) <= d2
            });
        !blocked
    }
}

/// Build a neighbour structure from coordinate sequences `x` and `y`.
///
/// Shorthand for [`PointSet::new`] followed by [`PointSet::neighbours`].
/// Cost grows at least quadratically with the number of points.
pub fn build_neighbours(x: &[f64], y: &[f64]) -> Result<NeighbourList, SpaceError> {
    Ok(PointSet::new(x, y)?.neighbours())
}
