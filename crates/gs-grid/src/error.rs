use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    SizeMismatch {
        expected: usize,
        actual: usize,
    },
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    NonBinaryCell {
        x: usize,
        y: usize,
        value: u8,
    },
    NonBinaryChar {
        row: usize,
        col: usize,
        ch: char,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(f, "size mismatch: expected {expected}, got {actual}")
            }
            Self::RaggedRow {
                row,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "ragged row {row}: expected {expected} cells, got {actual}"
                )
            }
            Self::NonBinaryCell { x, y, value } => {
                write!(f, "non-binary cell value {value} at ({x}, {y})")
            }
            Self::NonBinaryChar { row, col, ch } => {
                write!(f, "non-binary character '{ch}' at row {row}, column {col}")
            }
        }
    }
}

impl std::error::Error for Error {}
