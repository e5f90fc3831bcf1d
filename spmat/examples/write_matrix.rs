//! Write a banded sparse matrix to a text file

use spmat::{MatrixFile, SparseMatrix};
use std::time::Instant;

fn main() -> spmat::Result<()> {
    println!("Writing banded sparse matrix...");

    let n = 100_000;
    let bandwidth = 3;
    println!("Matrix dimensions: {n} x {n}, bandwidth {bandwidth}");

    let start = Instant::now();
    let matrix = build_banded_matrix(n, bandwidth);
    let build_time = start.elapsed();
    println!("Built {} non-zeros in {build_time:?}", matrix.nnz());

    let start = Instant::now();
    MatrixFile::write("example_matrix.txt", &matrix)?;
    let write_time = start.elapsed();
    println!("Matrix written in {write_time:?}");
    println!("\nRun 'cargo run --example read_matrix' to read it back!");
    Ok(())
}

/// Values fall off with distance from the diagonal
fn build_banded_matrix(n: usize, bandwidth: usize) -> SparseMatrix {
    let mut matrix = SparseMatrix::with_capacity(n, n, n * (2 * bandwidth + 1));

    for row in 0..n {
        let first = row.saturating_sub(bandwidth);
        let last = (row + bandwidth).min(n - 1);
        for col in first..=last {
            let distance = row.abs_diff(col) as i64;
            matrix.set(row, col, bandwidth as i64 + 1 - distance);
        }
    }

    matrix
}
