//! Constant values for the lwekem library
//!
//! Parameter profiles and fixed sizes shared by every crate in the
//! workspace. Nothing here allocates or depends on other crates.

pub mod pqc;
pub mod utils;
