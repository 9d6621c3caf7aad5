//! Internal utilities for the lwekem library
//!
//! Not part of the public API; shared by the algorithm and KEM crates.

pub mod constant_time;
pub mod endian;
