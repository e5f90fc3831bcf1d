//! Read a text matrix file, square it and report timings

use spmat::{MatrixFile, SparseMatrixView};
use std::time::Instant;

fn main() -> spmat::Result<()> {
    let filename = "example_matrix.txt";

    if !std::path::Path::new(filename).exists() {
        println!("File '{filename}' not found!");
        println!("   Run 'cargo run --example write_matrix' first");
        return Ok(());
    }

    println!("Reading sparse matrix from '{filename}'...");
    let start = Instant::now();
    let matrix = MatrixFile::read(filename)?;
    let load_time = start.elapsed();
    println!("Parsed in {:.3}ms", load_time.as_secs_f64() * 1000.0);

    #[cfg(feature = "mmap")]
    {
        let start = Instant::now();
        let mapped = spmat::map_matrix(filename)?;
        let map_time = start.elapsed();
        println!(
            "Memory-mapped parse in {:.3}ms (identical: {})",
            map_time.as_secs_f64() * 1000.0,
            mapped == matrix
        );
    }

    let (rows, cols) = matrix.dimensions();
    println!("\nMatrix Information:");
    println!("   Dimensions: {rows} x {cols}");
    println!("   Non-zeros: {}", matrix.nnz());
    println!("   Sparsity: {:.6}%", matrix.density() * 100.0);

    println!("\nFirst row: {:?}", matrix.get_row(0));

    let start = Instant::now();
    let squared = matrix.multiply(&matrix)?;
    let multiply_time = start.elapsed();
    println!(
        "\nSquared in {:.3}ms: {} non-zeros, matrix[0, 0] = {}",
        multiply_time.as_secs_f64() * 1000.0,
        squared.nnz(),
        squared.get(0, 0)
    );

    Ok(())
}
