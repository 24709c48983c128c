use std::fmt;

/// Errors from the checked constructors and the strict quantile query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HistogramError {
    /// The bounds do not describe a usable range: `max <= min`, or a bound is NaN or infinite.
    EmptyRange {
        /// Requested lower bound
        min: f64,
        /// Requested upper bound
        max: f64,
    },
    /// A histogram needs at least one bin.
    ZeroCapacity,
    /// A strict quantile query got a `q` outside `[0, 1]`, or NaN.
    QuantileOutOfRange {
        /// The rejected quantile
        q: f64,
    },
}

impl fmt::Display for HistogramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistogramError::EmptyRange { min, max } => write!(
                f,
                "histogram range [{min}, {max}] is empty or not finite. hint: bounds must be finite with max > min"
            ),
            HistogramError::ZeroCapacity => {
                write!(f, "histogram capacity must be at least 1 bin")
            }
            HistogramError::QuantileOutOfRange { q } => {
                write!(f, "quantile {q} is outside [0, 1]")
            }
        }
    }
}

impl std::error::Error for HistogramError {}

/// Result alias for fallible histogram operations
pub type HistogramResult<T> = Result<T, HistogramError>;
