//! Square periodic spin lattice.
//!
//! Spins live in a flat row-major buffer (`row * size + col`), which keeps
//! the four-neighbor sum in the energy model cache-friendly. The topology is
//! toroidal: indices wrap in both directions, so every site has exactly four
//! neighbors.

/// Map a possibly out-of-range coordinate onto `[0, size)`.
///
/// Total over all of `isize`, though the simulation only ever steps one
/// site past an edge in either direction.
#[inline]
pub fn periodic_index(index: isize, size: usize) -> usize {
    index.rem_euclid(size as isize) as usize
}

/// An L×L grid of scalar spins with periodic boundaries.
#[derive(Debug, Clone)]
pub struct Lattice {
    size: usize,
    spins: Vec<f64>,
}

impl Lattice {
    /// Build an L×L lattice with every site in the same initial state
    /// (all spins up at magnitude `spin`). Deterministic, no randomness.
    pub fn new(size: usize, spin: f64) -> Self {
        Self {
            size,
            spins: vec![spin; size * size],
        }
    }

    /// Edge length L.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of sites, L².
    #[inline]
    pub fn num_sites(&self) -> usize {
        self.spins.len()
    }

    /// Spin at `(i, j)`; both indices must already be in `[0, size)`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.spins[i * self.size + j]
    }

    /// Spin at `(i, j)` with periodic wraparound applied to both indices.
    #[inline]
    pub fn get_periodic(&self, i: isize, j: isize) -> f64 {
        let i = periodic_index(i, self.size);
        let j = periodic_index(j, self.size);
        self.spins[i * self.size + j]
    }

    /// Negate the spin at `(i, j)`. O(1), never touches any other site.
    #[inline]
    pub fn flip(&mut self, i: usize, j: usize) {
        self.spins[i * self.size + j] *= -1.0;
    }

    /// All spins in row-major order.
    #[inline]
    pub fn spins(&self) -> &[f64] {
        &self.spins
    }
}
