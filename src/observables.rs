//! Instantaneous observables reduced from the current lattice state.

use crate::lattice::Lattice;

/// Sum of all spins in the system. O(L²), pure.
///
/// Used both for the equilibration trace and for the measurement
/// accumulator; identical computation, different consumer.
pub fn total_spin(lattice: &Lattice) -> f64 {
    lattice.spins().iter().sum()
}

/// Total spin divided by the number of sites.
pub fn mean_spin(lattice: &Lattice) -> f64 {
    total_spin(lattice) / lattice.num_sites() as f64
}
