//! JSON snapshots of sparse matrices

use crate::error::Result;
use serde::{Deserialize, Serialize};
use spmat_core::{Entry, SparseMatrix, SparseMatrixView};
use std::path::Path;

/// Serializable form of a [`SparseMatrix`]: dimensions plus row-major entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixSnapshot {
    pub rows: usize,
    pub cols: usize,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl MatrixSnapshot {
    /// Capture the entries of any matrix view
    pub fn capture<M: SparseMatrixView + ?Sized>(matrix: &M) -> Self {
        let (rows, cols) = matrix.dimensions();
        Self {
            rows,
            cols,
            entries: matrix.entries(),
        }
    }

    /// Rebuild a matrix; entries are applied in order, so zeros clear
    pub fn into_matrix(self) -> SparseMatrix {
        let mut matrix = SparseMatrix::with_capacity(self.rows, self.cols, self.entries.len());
        for entry in self.entries {
            matrix.set(entry.row, entry.col, entry.value);
        }
        matrix
    }
}

impl From<&SparseMatrix> for MatrixSnapshot {
    fn from(matrix: &SparseMatrix) -> Self {
        Self::capture(matrix)
    }
}

impl From<MatrixSnapshot> for SparseMatrix {
    fn from(snapshot: MatrixSnapshot) -> Self {
        snapshot.into_matrix()
    }
}

/// Render a matrix as pretty-printed JSON
pub fn to_json(matrix: &SparseMatrix) -> Result<String> {
    Ok(serde_json::to_string_pretty(&MatrixSnapshot::from(matrix))?)
}

/// Parse a matrix from JSON
pub fn from_json(json: &str) -> Result<SparseMatrix> {
    let snapshot: MatrixSnapshot = serde_json::from_str(json)?;
    Ok(snapshot.into_matrix())
}

/// Write a matrix as a JSON file
pub fn write_json<P: AsRef<Path>>(path: P, matrix: &SparseMatrix) -> Result<()> {
    std::fs::write(path, to_json(matrix)?)?;
    Ok(())
}

/// Read a matrix from a JSON file
pub fn read_json<P: AsRef<Path>>(path: P) -> Result<SparseMatrix> {
    let file = crate::file_io::open_file(path.as_ref())?;
    let snapshot: MatrixSnapshot = serde_json::from_reader(std::io::BufReader::new(file))?;
    Ok(snapshot.into_matrix())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_snapshot_layout() {
        let matrix = SparseMatrix::from_triplets(2, 3, &[(1, 2, -5), (0, 1, 7)]);
        let value: serde_json::Value = serde_json::from_str(&to_json(&matrix).unwrap()).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "rows": 2,
                "cols": 3,
                "entries": [
                    {"row": 0, "col": 1, "value": 7},
                    {"row": 1, "col": 2, "value": -5}
                ]
            })
        );
    }

    #[test]
    fn test_json_round_trip() {
        let matrix = SparseMatrix::from_triplets(4, 4, &[(3, 3, 1), (0, 2, 12), (2, 1, -3)]);
        let json = to_json(&matrix).unwrap();
        assert_eq!(from_json(&json).unwrap(), matrix);
    }

    #[test]
    fn test_zero_entries_are_dropped() {
        let json = r#"{"rows": 2, "cols": 2, "entries": [
            {"row": 0, "col": 0, "value": 4},
            {"row": 1, "col": 1, "value": 0},
            {"row": 0, "col": 0, "value": 0}
        ]}"#;
        let matrix = from_json(json).unwrap();
        assert!(matrix.is_empty());
        assert_eq!(matrix.dimensions(), (2, 2));
    }

    #[test]
    fn test_missing_entries_field() {
        let matrix = from_json(r#"{"rows": 5, "cols": 1}"#).unwrap();
        assert_eq!(matrix.dimensions(), (5, 1));
        assert!(matrix.is_empty());
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(from_json("{\"rows\": -1}"), Err(Error::Json(_))));
    }
}
