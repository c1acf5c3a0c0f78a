use math::error::{MathError, MatrixError};
use thiserror::Error;

/// Result type specialized for secret recovery.
pub type SecretResult<T> = std::result::Result<T, SecretError>;

/// Ways an input document can be structurally invalid or undecodable.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedInput {
    #[error("invalid document: {0}")]
    Json(String),
    #[error("document is missing the `{0}` field")]
    MissingField(&'static str),
    #[error("entry `{key}` is malformed: {reason}")]
    InvalidEntry { key: String, reason: String },
    #[error("key `{0}` is not a base-10 integer")]
    InvalidKey(String),
    #[error("base `{0}` is not an integer")]
    InvalidBase(String),
    #[error("base {0} is outside the supported range 2..=36")]
    UnsupportedBase(u64),
    #[error("value is empty")]
    EmptyValue,
    #[error(
        "character `{digit}` at position {position} is not a base-{base} digit"
    )]
    InvalidDigit {
        digit: char,
        position: usize,
        base: u32,
    },
    #[error("k must be at least 1")]
    ZeroThreshold,
    #[error("value for x = {x} does not fit in a finite f64")]
    ValueOutOfRange { x: i64 },
}

/// Errors that can arise while recovering the constant term.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SecretError {
    #[error("malformed input: {0}")]
    MalformedInput(#[from] MalformedInput),
    #[error("Insufficient points: need {required}, got {available}")]
    InsufficientPoints { required: usize, available: usize },
    #[error(
        "Singular matrix: pivot {pivot:e} at row {row} is too small to invert"
    )]
    SingularMatrix { row: usize, pivot: f64 },
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(MathError),
    #[error("constant term is not finite: {0}")]
    NonFiniteCoefficient(f64),
    #[error("invalid solver configuration: {0}")]
    InvalidConfig(String),
}

impl From<MathError> for SecretError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::Matrix(MatrixError::Singular { row, pivot }) => {
                SecretError::SingularMatrix { row, pivot }
            }
            other => SecretError::DimensionMismatch(other),
        }
    }
}

impl SecretError {
    /// Whether the error stems from the document itself rather than the solve.
    pub fn is_input_error(&self) -> bool {
        matches!(self, SecretError::MalformedInput(_))
    }
}
