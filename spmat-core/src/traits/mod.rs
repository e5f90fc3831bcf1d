//! Abstract interfaces for sparse matrix access

pub mod matrix;

pub use matrix::SparseMatrixView;
