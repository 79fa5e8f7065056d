//! Test fixtures for neutral hotspot development.
//!
//! Plain-vector fixtures only: nothing here depends on the workspace's own
//! types, so every crate can pull this in as a dev-dependency without
//! creating duplicate type instances.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Coordinates of a `rows × cols` unit lattice in row-major site order.
///
/// Site `r * cols + c` sits at `x = c`, `y = r`.
pub fn lattice_coords(rows: usize, cols: usize) -> (Vec<f64>, Vec<f64>) {
    let mut x = Vec::with_capacity(rows * cols);
    let mut y = Vec::with_capacity(rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            x.push(c as f64);
            y.push(r as f64);
        }
    }
    (x, y)
}

/// Ragged 4-connected adjacency of a `rows × cols` lattice with omitted
/// (non-wrapping) edges, neighbours in ascending index order.
pub fn lattice_lists(rows: usize, cols: usize) -> Vec<Vec<usize>> {
    let mut lists = Vec::with_capacity(rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            let mut l = Vec::with_capacity(4);
            if r > 0 {
                l.push((r - 1) * cols + c);
            }
            if c > 0 {
                l.push(r * cols + c - 1);
            }
            if c + 1 < cols {
                l.push(r * cols + c + 1);
            }
            if r + 1 < rows {
                l.push((r + 1) * cols + c);
            }
            lists.push(l);
        }
    }
    lists
}

/// `0, 1, ..., n - 1` as floats.
pub fn ramp(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64).collect()
}

/// Alternating `1.0` / `-1.0` over a `rows × cols` lattice.
pub fn checkerboard(rows: usize, cols: usize) -> Vec<f64> {
    let mut v = Vec::with_capacity(rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            v.push(if (r + c) % 2 == 0 { 1.0 } else { -1.0 });
        }
    }
    v
}

/// Deterministic scattered points in `[0, extent)²` from a 64-bit LCG.
///
/// Enough structure for integration tests without pulling a RNG crate into
/// fixtures.
pub fn scattered_points(n: usize, extent: f64, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 11) as f64 / (1u64 << 53) as f64
    };
    let mut x = Vec::with_capacity(n);
    let mut y = Vec::with_capacity(n);
    for _ in 0..n {
        x.push(next() * extent);
        y.push(next() * extent);
    }
    (x, y)
}

/// Assert two floats agree within `tol`, with a readable message.
pub fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected}, got {actual} (tolerance {tol})"
    );
}

/// Assert two slices agree element-wise within `tol`.
pub fn assert_all_close(actual: &[f64], expected: &[f64], tol: f64) {
    assert_eq!(actual.len(), expected.len(), "length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() <= tol,
            "index {i}: expected {e}, got {a} (tolerance {tol})"
        );
    }
}
