/// Physical run parameters (single source of truth).
///
/// Fixed for the duration of a run; every component takes these by
/// reference instead of reading global constants.
#[derive(Debug, Clone, Copy)]
pub struct Params {
    /// Lattice edge length L (the lattice has L×L sites).
    pub size: usize,
    /// Nearest-neighbor coupling constant ε.
    pub coupling: f64,
    /// Uniform external magnetic field B.
    pub field: f64,
    /// Boltzmann constant convention (1.0 in reduced units).
    pub boltzmann: f64,
    /// Spin magnitude; every site holds ±spin.
    pub spin: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            size:      50,
            coupling:  1.0,
            field:     0.0,
            boltzmann: 1.0,
            spin:      1.0,
        }
    }
}

impl Params {
    /// Total number of lattice sites, L².
    #[inline]
    pub fn num_sites(&self) -> usize {
        self.size * self.size
    }

    /// Inverse temperature β = 1/(k_B·T).
    pub fn beta(&self, temperature: f64) -> f64 {
        1.0 / (self.boltzmann * temperature)
    }
}
