//! Dense row-major matrices over Z_q

use super::ring::Zq;
use crate::error::{validate, Result};

/// A `rows × cols` matrix with entries in `[0, q)`, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<u32>,
}

impl Matrix {
    /// Wrap row-major data, checking `data.len() == rows * cols`
    pub fn from_row_major(rows: usize, cols: usize, data: Vec<u32>) -> Result<Self> {
        validate::parameter(rows > 0, "rows", "matrix must have at least one row")?;
        validate::parameter(cols > 0, "cols", "matrix must have at least one column")?;
        validate::length("matrix data", data.len(), rows * cols)?;
        Ok(Self { rows, cols, data })
    }

    /// Build from nested rows
    pub fn from_rows(rows: &[Vec<u32>]) -> Result<Self> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            validate::length("matrix row", row.len(), cols)?;
            data.extend_from_slice(row);
        }
        Self::from_row_major(rows.len(), cols, data)
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Entry at `[row][col]`, or `None` when out of range
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Borrow one row
    pub fn row(&self, row: usize) -> &[u32] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Row-major view of every entry
    pub fn as_slice(&self) -> &[u32] {
        &self.data
    }

    /// `A·x mod q` for a small signed vector `x` of length `cols`
    pub fn mul_vec(&self, zq: &Zq, x: &[i32]) -> Result<Vec<u32>> {
        validate::length("matrix-vector product", x.len(), self.cols)?;
        self.data
            .chunks_exact(self.cols)
            .map(|row| zq.inner_product(row, x))
            .collect()
    }

    /// `Aᵀ·x mod q` for a small signed vector `x` of length `rows`
    ///
    /// Walks `A` row by row so the transpose is never materialized.
    pub fn transpose_mul_vec(&self, zq: &Zq, x: &[i32]) -> Result<Vec<u32>> {
        validate::length("transposed matrix-vector product", x.len(), self.rows)?;
        let q = zq.q() as u64;
        let mut acc = vec![0u64; self.cols];
        for (row, &xi) in self.data.chunks_exact(self.cols).zip(x.iter()) {
            let xi = zq.lift(xi) as u64;
            for (a, &entry) in acc.iter_mut().zip(row.iter()) {
                *a = (*a + entry as u64 * xi) % q;
            }
        }
        Ok(acc.into_iter().map(|a| a as u32).collect())
    }

    /// The `cols × rows` transpose
    pub fn transpose(&self) -> Matrix {
        let mut data = vec![0u32; self.data.len()];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        Matrix {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }
}
