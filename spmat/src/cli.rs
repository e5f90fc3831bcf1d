//! Command-line front end
//!
//! `spmat <OPERATION> <LEFT> <RIGHT>` loads two matrix files, applies the
//! operation and prints the result. Any missing argument is asked for on
//! standard input instead.

use crate::error::Result;
use crate::file_io::{write_matrix, written_summary, MatrixFile};
use clap::{Parser, ValueEnum};
use spmat_core::{Operation, ParseConfig, SparseMatrix, SpmatError};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
#[command(about = "spmat - add, subtract and multiply sparse integer matrix files")]
pub struct Cli {
    /// Operation to apply: add, subtract or multiply
    #[arg(value_parser = parse_operation)]
    pub operation: Option<Operation>,

    /// Path to the left operand
    pub left: Option<PathBuf>,

    /// Path to the right operand
    pub right: Option<PathBuf>,

    /// Write the result to this file instead of standard output
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Reject entries outside the declared dimensions
    #[arg(long)]
    pub strict: bool,

    /// Load inputs through a memory map
    #[cfg(feature = "mmap")]
    #[arg(long)]
    pub mmap: bool,

    /// Only print the result
    #[arg(short, long)]
    pub quiet: bool,
}

/// Rendering of the result matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// rows=/cols= header followed by (row, col, value) lines
    Text,
    /// JSON snapshot
    #[cfg(feature = "serde")]
    Json,
}

fn parse_operation(s: &str) -> std::result::Result<Operation, String> {
    s.parse().map_err(|err: SpmatError| err.to_string())
}

/// Print `question`, then read one trimmed line from `input`
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> Result<String> {
    write!(out, "{question}")?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().to_string())
}

impl Cli {
    fn parse_config(&self) -> ParseConfig {
        ParseConfig::default().with_bounds_check(self.strict)
    }

    fn load(&self, path: &Path) -> Result<SparseMatrix> {
        let config = self.parse_config();

        #[cfg(feature = "serde")]
        {
            if path.extension().is_some_and(|ext| ext == "json") {
                return crate::snapshot::read_json(path);
            }
        }

        #[cfg(feature = "mmap")]
        {
            if self.mmap {
                return crate::mmap_backend::map_matrix_with(path, &config);
            }
        }

        MatrixFile::read_with(path, &config)
    }

    fn render(&self, matrix: &SparseMatrix) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(matrix.to_text()),
            #[cfg(feature = "serde")]
            OutputFormat::Json => crate::snapshot::to_json(matrix),
        }
    }

    /// Run the command, prompting on `input` for anything not given
    pub fn run_with<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> Result<()> {
        let left_path = match &self.left {
            Some(path) => path.clone(),
            None => prompt(input, out, "Enter the path for the first matrix: ")?.into(),
        };
        let right_path = match &self.right {
            Some(path) => path.clone(),
            None => prompt(input, out, "Enter the path for the second matrix: ")?.into(),
        };

        let left = self.load(&left_path)?;
        let right = self.load(&right_path)?;
        if !self.quiet {
            for (path, matrix) in [(&left_path, &left), (&right_path, &right)] {
                writeln!(
                    out,
                    "Loaded {}: {}x{} with {} non-zeros",
                    path.display(),
                    matrix.num_rows(),
                    matrix.num_cols(),
                    matrix.nnz()
                )?;
            }
        }

        let operation = match self.operation {
            Some(operation) => operation,
            None => prompt(input, out, "Select operation (add/subtract/multiply): ")?.parse()?,
        };

        let start_time = Instant::now();
        let result = left.apply(operation, &right)?;
        let elapsed = start_time.elapsed();

        match &self.output {
            Some(path) => {
                match self.format {
                    OutputFormat::Text => write_matrix(path, &result)?,
                    #[cfg(feature = "serde")]
                    OutputFormat::Json => crate::snapshot::write_json(path, &result)?,
                }
                if !self.quiet {
                    writeln!(out, "{}", written_summary(path, &result))?;
                }
            }
            None => {
                writeln!(out, "Resulting Sparse Matrix:")?;
                writeln!(out, "{}", self.render(&result)?)?;
            }
        }

        if !self.quiet {
            writeln!(out, "{operation} completed in {elapsed:.2?}")?;
        }

        Ok(())
    }

    /// Run against the process's standard input and output
    pub fn run(&self) -> Result<()> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        self.run_with(&mut stdin.lock(), &mut stdout.lock())
    }
}
