use std::{
    error::Error,
    fmt::{self, Display},
};

/// The result type used in the entire regression core.
pub type Result<T> = std::result::Result<T, RegressionErr>;

/// The regression core's error type.
#[derive(Debug, Clone, PartialEq)]
pub enum RegressionErr {
    /// Observed and predicted sequences have different lengths.
    ShapeMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },
    /// A ratio metric's denominator is zero (or not positive).
    DivisionUndefined { what: &'static str },
    /// A sequence, dataset or range with no elements.
    EmptyInput { what: &'static str },
    InvalidRange {
        start: f64,
        end: f64,
    },
    InvalidNoise(f64),
}

impl RegressionErr {
    /// Whether this error marks a metric that has no defined value for the input,
    /// as opposed to an input that is malformed.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::DivisionUndefined { .. })
    }
}

impl Display for RegressionErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch {
                what,
                got,
                expected,
            } => write!(
                f,
                "shape mismatch for {what}: got {got} elements, expected {expected}"
            ),
            Self::DivisionUndefined { what } => {
                write!(f, "{what} is undefined, its denominator is zero")
            }
            Self::EmptyInput { what } => write!(f, "{what} must not be empty"),
            Self::InvalidRange { start, end } => {
                write!(f, "invalid range [{start}, {end}]")
            }
            Self::InvalidNoise(sigma) => write!(
                f,
                "the noise standard deviation must be finite and non negative, got {sigma}"
            ),
        }
    }
}

impl Error for RegressionErr {}
