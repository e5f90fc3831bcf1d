//! End-to-end tests: matrix files on disk through load, arithmetic and write

use spmat::{load, Entry, Error, FormatErrorKind, MatrixFile, Operation, SparseMatrix, SpmatError};
use std::io::Cursor;
use std::path::PathBuf;

/// Temp file removed on drop
struct TempMatrix(PathBuf);

impl TempMatrix {
    fn new(name: &str, contents: &str) -> Self {
        let path = std::env::temp_dir().join(format!("spmat-it-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        Self(path)
    }
}

impl Drop for TempMatrix {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

const IDENTITY: &str = "rows=2\ncols=2\n(0, 0, 1)\n(1, 1, 1)\n";
const DENSE: &str = "rows=2\ncols=2\n(0, 0, 2)\n(0, 1, 3)\n(1, 0, 4)\n(1, 1, 5)\n";

#[test]
fn test_identity_product_from_files() {
    let a = TempMatrix::new("identity.txt", IDENTITY);
    let b = TempMatrix::new("dense.txt", DENSE);

    let left = MatrixFile::read(&a.0).unwrap();
    let right = MatrixFile::read(&b.0).unwrap();
    let product = left.multiply(&right).unwrap();

    assert_eq!(
        product.sorted_entries(),
        vec![
            Entry::new(0, 0, 2),
            Entry::new(0, 1, 3),
            Entry::new(1, 0, 4),
            Entry::new(1, 1, 5),
        ]
    );
}

#[test]
fn test_scalar_add_and_subtract() {
    let a = load(Cursor::new("rows=1\ncols=1\n(0, 0, 5)")).unwrap();
    let b = load(Cursor::new("rows=1\ncols=1\n(0, 0, 3)")).unwrap();

    assert_eq!(a.add(&b).unwrap().to_text(), "rows=1\ncols=1\n(0, 0, 8)");
    assert_eq!(a.subtract(&b).unwrap().to_text(), "rows=1\ncols=1\n(0, 0, 2)");
}

#[test]
fn test_bracketed_entry_is_a_format_error() {
    let file = TempMatrix::new("brackets.txt", "rows=2\ncols=2\n[1, 1, 5]\n");
    let err = MatrixFile::read(&file.0).unwrap_err();

    assert_eq!(
        err.matrix_error(),
        Some(&SpmatError::Format {
            line: 3,
            kind: FormatErrorKind::Entry
        })
    );
    assert_eq!(err.to_string(), "Input file has wrong format (line 3)");
}

#[test]
fn test_missing_file_is_reported() {
    let path = std::env::temp_dir().join("spmat-it-no-such-matrix.txt");
    let err = MatrixFile::read(&path).unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
    assert!(err.to_string().starts_with("File not found: "));
}

#[test]
fn test_write_and_reload_result() {
    let a = load(Cursor::new(DENSE)).unwrap();
    let b = load(Cursor::new("rows=2\ncols=2\n(0, 0, -2)\n(1, 1, 7)")).unwrap();
    let sum = a.apply(Operation::Add, &b).unwrap();
    assert!(!sum.contains(0, 0));

    let out = TempMatrix::new("sum.txt", "");
    MatrixFile::write(&out.0, &sum).unwrap();
    let reloaded = MatrixFile::read(&out.0).unwrap();

    assert_eq!(reloaded, sum);
    assert_eq!(reloaded.get(1, 1), 12);
}

#[test]
fn test_text_round_trip_preserves_entries() {
    let mut matrix = SparseMatrix::new(50, 40);
    for i in 0..50 {
        matrix.set(i, (i * 7) % 40, i as i64 - 25);
    }

    let parsed = SparseMatrix::parse(&matrix.to_text()).unwrap();
    assert_eq!(parsed.dimensions(), matrix.dimensions());
    assert_eq!(parsed.sorted_entries(), matrix.sorted_entries());
    // i == 25 stored a zero
    assert_eq!(parsed.nnz(), 49);
}

#[test]
fn test_dimension_mismatch_between_files() {
    let a = load(Cursor::new("rows=2\ncols=3")).unwrap();
    let b = load(Cursor::new("rows=2\ncols=3")).unwrap();

    assert!(a.add(&b).is_ok());
    let err = a.multiply(&b).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Matrix dimensions do not allow multiplication: 2x3 and 2x3"
    );
}

#[cfg(feature = "mmap")]
#[test]
fn test_mmap_matches_buffered_load() {
    let file = TempMatrix::new("mmap.txt", DENSE);
    assert_eq!(
        spmat::map_matrix(&file.0).unwrap(),
        MatrixFile::read(&file.0).unwrap()
    );
}

#[cfg(feature = "serde")]
#[test]
fn test_json_file_round_trip() {
    let matrix = load(Cursor::new(DENSE)).unwrap();
    let file = TempMatrix::new("matrix.json", "");

    spmat::write_json(&file.0, &matrix).unwrap();
    assert_eq!(spmat::read_json(&file.0).unwrap(), matrix);
}
