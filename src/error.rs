use std::{error::Error, fmt, io};

/// A workload rejected at the boundary, before any simulation starts.
#[derive(Debug)]
pub enum SimError {
    Io(io::Error),
    MissingLine {
        what: &'static str,
    },
    NotAnInteger {
        what: &'static str,
        value: String,
    },
    Negative {
        what: &'static str,
        value: i64,
    },
    OutOfRange {
        what: &'static str,
        value: i64,
    },
    CountMismatch {
        what: &'static str,
        found: usize,
        expected: usize,
    },
    NonPositiveQuantum {
        which: &'static str,
        value: i64,
    },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::Io(err) => write!(f, "failed to read input: {err}"),
            SimError::MissingLine { what } => write!(f, "missing input line ({what})"),
            SimError::NotAnInteger { what, value } => {
                write!(f, "{what} must be an integer (was \"{value}\")")
            }
            SimError::Negative { what, value } => {
                write!(f, "{what} must be non-negative (was {value})")
            }
            SimError::OutOfRange { what, value } => {
                write!(f, "{what} must be a 32-bit integer (was {value})")
            }
            SimError::CountMismatch {
                what,
                found,
                expected,
            } => write!(
                f,
                "processes' quantity mismatch; found {found} {what} (n={expected})"
            ),
            SimError::NonPositiveQuantum { which, value } => {
                write!(f, "quantum time must be positive ({which} one was {value})")
            }
        }
    }
}

impl Error for SimError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SimError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for SimError {
    fn from(err: io::Error) -> Self {
        SimError::Io(err)
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
