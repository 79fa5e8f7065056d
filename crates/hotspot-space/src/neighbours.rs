//! Explicit ragged adjacency in CSR layout.

use crate::error::SpaceError;
use crate::neighbourhood::Neighbourhood;

/// Ragged neighbour lists stored as one flat index array plus offsets.
///
/// Site `i`'s neighbours are `indices[offsets[i]..offsets[i + 1]]`. The
/// structure is immutable once built and is shared read-only by every
/// consumer, so hot loops never allocate per site.
///
/// Invariants (checked at construction):
/// - every neighbour index is `< len()`;
/// - no site lists itself.
///
/// Symmetry is not enforced: callers may supply directed adjacency.
///
/// # Examples
///
/// ```
/// use hotspot_space::{NeighbourList, Neighbourhood};
///
/// let nbs = NeighbourList::from_lists(&[vec![1], vec![0, 2], vec![1]]).unwrap();
/// assert_eq!(nbs.len(), 3);
/// assert_eq!(nbs.neighbours(1), &[0, 2]);
/// assert_eq!(nbs.edge_count(), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NeighbourList {
    offsets: Vec<usize>,
    indices: Vec<usize>,
}

impl NeighbourList {
    /// `n` sites with no neighbours.
    pub fn empty(n: usize) -> Self {
        Self {
            offsets: vec![0; n + 1],
            indices: Vec::new(),
        }
    }

    /// Build from per-site lists, validating every index.
    ///
    /// # Errors
    ///
    /// [`SpaceError::NeighbourOutOfRange`] if any index is `>= lists.len()`,
    /// [`SpaceError::SelfLoop`] if a site lists itself.
    pub fn from_lists<L: AsRef<[usize]>>(lists: &[L]) -> Result<Self, SpaceError> {
        let n = lists.len();
        let total = lists.iter().map(|l| l.as_ref().len()).sum();
        let mut offsets = Vec::with_capacity(n + 1);
        let mut indices = Vec::with_capacity(total);
        offsets.push(0);
        for (site, list) in lists.iter().enumerate() {
            for &neighbour in list.as_ref() {
                if neighbour >= n {
                    return Err(SpaceError::NeighbourOutOfRange {
                        site,
                        neighbour,
                        site_count: n,
                    });
                }
                if neighbour == site {
                    return Err(SpaceError::SelfLoop { site });
                }
                indices.push(neighbour);
            }
            offsets.push(indices.len());
        }
        Ok(Self { offsets, indices })
    }

    /// Build from lists already known to satisfy the invariants.
    pub(crate) fn from_valid_lists(lists: Vec<Vec<usize>>) -> Self {
        let mut offsets = Vec::with_capacity(lists.len() + 1);
        let mut indices = Vec::with_capacity(lists.iter().map(Vec::len).sum());
        offsets.push(0);
        for list in lists {
            indices.extend(list);
            offsets.push(indices.len());
        }
        Self { offsets, indices }
    }

    /// Number of sites.
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    /// `true` if there are no sites.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Neighbours of `site`.
    ///
    /// # Panics
    ///
    /// Panics if `site >= len()`.
    pub fn neighbours(&self, site: usize) -> &[usize] {
        &self.indices[self.offsets[site]..self.offsets[site + 1]]
    }

    /// Iterate over every site's neighbour slice, in site order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &[usize]> + '_ {
        self.offsets
            .windows(2)
            .map(move |w| &self.indices[w[0]..w[1]])
    }

    /// Largest degree of any site (0 for an empty structure).
    pub fn max_degree(&self) -> usize {
        self.offsets
            .windows(2)
            .map(|w| w[1] - w[0])
            .max()
            .unwrap_or(0)
    }

    /// Number of sites with no neighbours.
    pub fn isolated_count(&self) -> usize {
        self.offsets.windows(2).filter(|w| w[0] == w[1]).count()
    }

    /// `true` if `j` lists `i` whenever `i` lists `j`.
    pub fn is_symmetric(&self) -> bool {
        (0..self.len()).all(|i| {
            self.neighbours(i)
                .iter()
                .all(|&j| self.neighbours(j).contains(&i))
        })
    }

    /// Copy out as nested vectors, the shape binding layers hand back.
    pub fn to_lists(&self) -> Vec<Vec<usize>> {
        self.iter().map(<[usize]>::to_vec).collect()
    }

    /// CSR offsets, length `len() + 1`.
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// CSR flat neighbour indices.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }
}

impl Neighbourhood for NeighbourList {
    fn site_count(&self) -> usize {
        self.len()
    }

    fn degree(&self, site: usize) -> usize {
        self.offsets[site + 1] - self.offsets[site]
    }

    fn for_each_neighbour<F: FnMut(usize)>(&self, site: usize, mut f: F) {
        for &j in self.neighbours(site) {
            f(j);
        }
    }

    fn neighbour_sum(&self, site: usize, values: &[f64]) -> (f64, usize) {
        let nbs = self.neighbours(site);
        (nbs.iter().map(|&j| values[j]).sum(), nbs.len())
    }

    fn edge_count(&self) -> usize {
        self.indices.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;

    fn path3() -> NeighbourList {
        NeighbourList::from_lists(&[vec![1], vec![0, 2], vec![1]]).unwrap()
    }

    #[test]
    fn csr_layout() {
        let nbs = path3();
        assert_eq!(nbs.offsets(), &[0, 1, 3, 4]);
        assert_eq!(nbs.indices(), &[1, 0, 2, 1]);
    }

    #[test]
    fn empty_structure() {
        let nbs = NeighbourList::empty(3);
        assert_eq!(nbs.len(), 3);
        assert_eq!(nbs.isolated_count(), 3);
        assert_eq!(nbs.max_degree(), 0);
        assert!(nbs.iter().all(|l| l.is_empty()));

        let none = NeighbourList::empty(0);
        assert!(none.is_empty());
        assert_eq!(none.max_degree(), 0);
    }

    #[test]
    fn rejects_out_of_range() {
        let err = NeighbourList::from_lists(&[vec![1], vec![3]]).unwrap_err();
        assert_eq!(
            err,
            SpaceError::NeighbourOutOfRange {
                site: 1,
                neighbour: 3,
                site_count: 2
            }
        );
        assert!(err.to_string().contains("neighbour 3"));
    }

    #[test]
    fn rejects_self_loop() {
        let err = NeighbourList::from_lists(&[vec![0]]).unwrap_err();
        assert_eq!(err, SpaceError::SelfLoop { site: 0 });
    }

    #[test]
    fn directed_lists_are_accepted() {
        let nbs = NeighbourList::from_lists(&[vec![1], vec![]]).unwrap();
        assert!(!nbs.is_symmetric());
        assert_eq!(nbs.isolated_count(), 1);
    }

    #[test]
    fn neighbour_mean_skips_isolated() {
        let nbs = NeighbourList::from_lists(&[vec![1, 2], vec![0], vec![0], vec![]]).unwrap();
        let values = [1.0, 2.0, 4.0, 100.0];
        assert_eq!(nbs.neighbour_mean(0, &values), Some(3.0));
        assert_eq!(nbs.neighbour_mean(3, &values), None);
        assert_eq!(nbs.connected_site_count(), 3);
    }

    #[test]
    fn to_lists_round_trip() {
        let lists = vec![vec![2, 1], vec![0], vec![0]];
        let nbs = NeighbourList::from_lists(&lists).unwrap();
        assert_eq!(nbs.to_lists(), lists);
    }

    #[test]
    fn compliance_path() {
        compliance::run_full_compliance(&path3());
    }

    proptest! {
        #[test]
        fn from_lists_preserves_order(lists in prop::collection::vec(
            prop::collection::vec(0usize..20, 0..6), 1..20
        )) {
            let n = lists.len();
            let cleaned: Vec<Vec<usize>> = lists
                .iter()
                .enumerate()
                .map(|(i, l)| l.iter().copied().filter(|&j| j < n && j != i).collect())
                .collect();
            let nbs = NeighbourList::from_lists(&cleaned).unwrap();
            prop_assert_eq!(nbs.len(), n);
            for (i, l) in cleaned.iter().enumerate() {
                prop_assert_eq!(nbs.neighbours(i), l.as_slice());
                prop_assert_eq!(nbs.degree(i), l.len());
            }
            compliance::assert_indices_in_range(&nbs);
        }
    }
}
