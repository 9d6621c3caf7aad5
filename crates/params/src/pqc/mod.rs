//! Constants for lattice-based schemes

pub mod lwe;
