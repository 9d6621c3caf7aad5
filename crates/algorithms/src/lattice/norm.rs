//! Norms of small signed vectors, used for noise diagnostics

/// Euclidean length of a vector
pub fn euclidean_norm(v: &[i32]) -> f64 {
    v.iter()
        .map(|&x| (x as f64) * (x as f64))
        .sum::<f64>()
        .sqrt()
}

/// Largest absolute entry
pub fn infinity_norm(v: &[i32]) -> u32 {
    v.iter().map(|x| x.unsigned_abs()).max().unwrap_or(0)
}
