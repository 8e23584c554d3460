//! Energy change of a single proposed spin flip.

use crate::lattice::Lattice;
use crate::params::Params;

/// Energy difference of flipping site `(i, j)` under the nearest-neighbor
/// Ising Hamiltonian with a uniform external field:
///
/// ```text
/// ΔE = 2 · s(i,j) · (ε · Σ_neighbors s + B)
/// ```
///
/// Evaluated from the *pre-flip* spin, so there is no need to compute the
/// full lattice Hamiltonian before and after. `i` and `j` must be valid
/// lattice indices; the four neighbor lookups wrap periodically.
pub fn delta_e(lattice: &Lattice, params: &Params, i: usize, j: usize) -> f64 {
    let (i, j) = (i as isize, j as isize);
    let neighbor_sum = lattice.get_periodic(i - 1, j)
        + lattice.get_periodic(i + 1, j)
        + lattice.get_periodic(i, j - 1)
        + lattice.get_periodic(i, j + 1);

    let state = lattice.get_periodic(i, j);
    2.0 * state * (params.coupling * neighbor_sum + params.field)
}
