//! The `Neighbourhood` trait: a read-only source of neighbour indices.

/// A read-only neighbour source over sites `0..site_count()`.
///
/// Statistics and the simulator are written once against this trait and
/// work unchanged over explicit neighbour lists and implicit lattices.
///
/// # Contract
///
/// - Neighbour indices are always `< site_count()`.
/// - Neighbours are visited in a deterministic, backend-defined order; two
///   visits of the same site yield the same sequence.
/// - `degree(site)` equals the number of indices visited for `site`.
///
/// # Thread Safety
///
/// `Send + Sync` are required because the Monte Carlo engine shares one
/// neighbourhood by reference across all trial workers.
pub trait Neighbourhood: Send + Sync {
    /// Number of sites.
    fn site_count(&self) -> usize;

    /// Number of neighbours of `site`.
    fn degree(&self, site: usize) -> usize;

    /// Call `f` with each neighbour of `site`, in deterministic order.
    fn for_each_neighbour<F: FnMut(usize)>(&self, site: usize, f: F);

    /// Sum of `values` over the neighbours of `site`, and the neighbour count.
    fn neighbour_sum(&self, site: usize, values: &[f64]) -> (f64, usize) {
        let mut sum = 0.0;
        let mut count = 0;
        self.for_each_neighbour(site, |j| {
            sum += values[j];
            count += 1;
        });
        (sum, count)
    }

    /// Mean of `values` over the neighbours of `site`; `None` for degree 0.
    fn neighbour_mean(&self, site: usize, values: &[f64]) -> Option<f64> {
        let (sum, count) = self.neighbour_sum(site, values);
        (count > 0).then(|| sum / count as f64)
    }

    /// Total number of directed neighbour references.
    fn edge_count(&self) -> usize {
        (0..self.site_count()).map(|i| self.degree(i)).sum()
    }

    /// Number of sites with at least one neighbour.
    fn connected_site_count(&self) -> usize {
        (0..self.site_count())
            .filter(|&i| self.degree(i) > 0)
            .count()
    }
}
