pub mod params;
pub mod lattice;
pub mod energy;
pub mod metropolis;
pub mod observables;
