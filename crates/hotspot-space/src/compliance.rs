//! Neighbourhood trait compliance test helpers.
//!
//! These functions verify that a `Neighbourhood` implementation satisfies
//! the trait contract. Reused across all backend test modules (NeighbourList,
//! Line1D, Grid2D).

use crate::neighbourhood::Neighbourhood;

fn collect<N: Neighbourhood>(n: &N, site: usize) -> Vec<usize> {
    let mut out = Vec::new();
    n.for_each_neighbour(site, |j| out.push(j));
    out
}

/// Assert every visited neighbour index is `< site_count()`.
pub fn assert_indices_in_range<N: Neighbourhood>(n: &N) {
    let count = n.site_count();
    for site in 0..count {
        for j in collect(n, site) {
            assert!(j < count, "site {site} visits {j}, but only {count} sites");
        }
    }
}

/// Assert `degree(site)` equals the number of visited neighbours.
pub fn assert_degree_matches_visits<N: Neighbourhood>(n: &N) {
    for site in 0..n.site_count() {
        let visited = collect(n, site).len();
        assert_eq!(
            n.degree(site),
            visited,
            "degree({site}) disagrees with visit count"
        );
    }
}

/// Assert two visits of the same site yield the same sequence.
pub fn assert_order_deterministic<N: Neighbourhood>(n: &N) {
    for site in 0..n.site_count() {
        assert_eq!(collect(n, site), collect(n, site), "site {site} order varies");
    }
}

/// Assert the provided `neighbour_sum` / `neighbour_mean` agree with a
/// manual fold over the visited neighbours.
pub fn assert_neighbour_mean_consistent<N: Neighbourhood>(n: &N) {
    let values: Vec<f64> = (0..n.site_count()).map(|i| (i * i) as f64 + 0.5).collect();
    for site in 0..n.site_count() {
        let nbs = collect(n, site);
        let expected_sum: f64 = nbs.iter().map(|&j| values[j]).sum();
        let (sum, count) = n.neighbour_sum(site, &values);
        assert_eq!(count, nbs.len());
        assert!((sum - expected_sum).abs() < 1e-9, "site {site} sum {sum}");
        match n.neighbour_mean(site, &values) {
            None => assert!(nbs.is_empty(), "site {site} has neighbours but no mean"),
            Some(m) => assert!((m - expected_sum / nbs.len() as f64).abs() < 1e-9),
        }
    }
}

/// Assert `edge_count` and `connected_site_count` agree with per-site degrees.
pub fn assert_counts_consistent<N: Neighbourhood>(n: &N) {
    let degrees: Vec<usize> = (0..n.site_count()).map(|i| n.degree(i)).collect();
    assert_eq!(n.edge_count(), degrees.iter().sum::<usize>());
    assert_eq!(
        n.connected_site_count(),
        degrees.iter().filter(|&&d| d > 0).count()
    );
}

/// Run all compliance checks on a neighbourhood.
pub fn run_full_compliance<N: Neighbourhood>(n: &N) {
    assert_indices_in_range(n);
    assert_degree_matches_visits(n);
    assert_order_deterministic(n);
    assert_neighbour_mean_consistent(n);
    assert_counts_consistent(n);
}
