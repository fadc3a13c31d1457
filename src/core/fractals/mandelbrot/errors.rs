use std::{error::Error, fmt};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MandelbrotError {
    InvalidIterationBound { max_iterations: u32 },
}

impl fmt::Display for MandelbrotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidIterationBound { max_iterations } => {
                write!(
                    f,
                    "maximum iterations must be at least 1, got {}",
                    max_iterations
                )
            }
        }
    }
}

impl Error for MandelbrotError {}
