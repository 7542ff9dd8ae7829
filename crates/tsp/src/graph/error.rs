use std::fmt;

/// Construction-time failures for `Graph` (parsing and validation).
///
/// Line numbers count non-blank input lines starting at 1; row/column indices
/// are 0-based matrix positions.
#[derive(Debug)]
pub enum GraphError {
    /// No rows at all.
    Empty,
    /// A token that is neither a recognized "no edge" marker nor a finite number.
    InvalidToken { line: usize, token: String },
    /// A finite negative weight in the text input.
    NegativeWeight { line: usize, token: String },
    /// A row whose width differs from the first row.
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// Rectangular but not square.
    NotSquare { rows: usize, cols: usize },
    /// A present weight that is negative or not finite.
    InvalidWeight { row: usize, col: usize, value: f64 },
    /// More nodes than the visited-set bitmask can hold.
    TooLarge { n: usize, max: usize },
    /// Node index outside `0..n`.
    NodeOutOfRange { node: usize, n: usize },
    /// Reading the input file failed.
    Io(std::io::Error),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::Empty => write!(f, "Graph file is empty"),
            GraphError::InvalidToken { line, token } => {
                write!(f, "Invalid number '{}' on line {}", token, line)
            }
            GraphError::NegativeWeight { line, token } => {
                write!(f, "Negative weight not allowed: '{}' on line {}", token, line)
            }
            GraphError::RaggedRow {
                line,
                expected,
                found,
            } => write!(
                f,
                "Line {} has inconsistent number of columns (expected {}, found {})",
                line, expected, found
            ),
            GraphError::NotSquare { rows, cols } => {
                write!(f, "Graph must be square (got {} rows x {} columns)", rows, cols)
            }
            GraphError::InvalidWeight { row, col, value } => write!(
                f,
                "weight {} at ({}, {}) must be finite and non-negative",
                value, row, col
            ),
            GraphError::TooLarge { n, max } => {
                write!(f, "graph has {} nodes; at most {} are supported", n, max)
            }
            GraphError::NodeOutOfRange { node, n } => {
                write!(f, "node {} is out of range for a graph of {} nodes", node, n)
            }
            GraphError::Io(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for GraphError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GraphError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GraphError {
    fn from(err: std::io::Error) -> Self {
        GraphError::Io(err)
    }
}
