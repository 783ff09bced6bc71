use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failures reported by the sample elimination routines. Everything except
/// `ResourceExhaustion` is detected before any work is done.
#[derive(Debug, Clone, PartialEq)]
pub enum EliminationError {
    ZeroOutputSize,
    OutputSizeExceedsInput { output_size: usize, input_size: usize },
    InvalidMaximumDistance(f64),
    InvalidExtent,
    PointOutsideDomain { index: usize },
    InvalidParameter(&'static str),

    /// The queue was asked to reposition an index which was already popped or never existed
    InactiveQueueEntry(usize),

    ResourceExhaustion(String),
}

impl Display for EliminationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroOutputSize => write!(f, "output size must be greater than zero"),
            Self::OutputSizeExceedsInput {
                output_size,
                input_size,
            } => write!(
                f,
                "output size {} exceeds the input size {}",
                output_size, input_size
            ),
            Self::InvalidMaximumDistance(d) => {
                write!(f, "maximum distance must be finite and positive, got {}", d)
            }
            Self::InvalidExtent => write!(f, "bounding box extent must be finite and non-negative"),
            Self::PointOutsideDomain { index } => {
                write!(f, "point {} lies outside of the bounding box", index)
            }
            Self::InvalidParameter(name) => write!(f, "invalid elimination parameter: {}", name),
            Self::InactiveQueueEntry(i) => write!(f, "queue entry {} is not active", i),
            Self::ResourceExhaustion(what) => write!(f, "failed to allocate {}", what),
        }
    }
}

impl Error for EliminationError {}

impl From<std::collections::TryReserveError> for EliminationError {
    fn from(value: std::collections::TryReserveError) -> Self {
        Self::ResourceExhaustion(value.to_string())
    }
}
