//! Constants for supporting primitives

pub mod hash;
