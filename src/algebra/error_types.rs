use thiserror::Error;

/// Classification of container failures.
///
/// Validation helpers in [`checks`](crate::algebra::checks) are parameterized
/// by a kind so that callers decide how a violated precondition is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Operand shapes are incompatible for the requested operation
    ShapeMismatch,
    /// A positional access falls outside the valid index range
    IndexOutOfRange,
    /// An elementwise divisor is zero
    DivisionByZero,
    /// A generic precondition was violated
    InvalidArgument,
}

impl ErrorKind {
    /// Builds the typed failure for this kind carrying `msg`.
    pub fn error(self, msg: impl Into<String>) -> ArrayError {
        let msg = msg.into();
        match self {
            ErrorKind::ShapeMismatch => ArrayError::ShapeMismatch(msg),
            ErrorKind::IndexOutOfRange => ArrayError::IndexOutOfRange(msg),
            ErrorKind::DivisionByZero => ArrayError::DivisionByZero(msg),
            ErrorKind::InvalidArgument => ArrayError::InvalidArgument(msg),
        }
    }
}

/// Error type returned by container construction, access and arithmetic.
///
/// Each variant carries a caller-supplied message.  The library never prints
/// or logs these itself; rendering is left to the surrounding application.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArrayError {
    /// Operand shapes are incompatible for the requested operation
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),
    /// A positional access falls outside the valid index range
    #[error("index out of range: {0}")]
    IndexOutOfRange(String),
    /// An elementwise divisor is zero
    #[error("division by zero: {0}")]
    DivisionByZero(String),
    /// A generic precondition was violated
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl ArrayError {
    /// The kind tag for this failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ArrayError::ShapeMismatch(_) => ErrorKind::ShapeMismatch,
            ArrayError::IndexOutOfRange(_) => ErrorKind::IndexOutOfRange,
            ArrayError::DivisionByZero(_) => ErrorKind::DivisionByZero,
            ArrayError::InvalidArgument(_) => ErrorKind::InvalidArgument,
        }
    }
}
