use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Remote execution failed: {0}")]
    Remote(String),

    #[error("Request timeout: {0}")]
    Timeout(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Bin not found: {0}")]
    BinNotFound(String),

    #[error("Capacity exceeded: capacity {capacity}, size {size}")]
    CapacityExceeded { capacity: i64, size: i64 },

    #[error("Unknown function {package}.{function}")]
    UnknownFunction { package: String, function: String },

    #[error("Package mismatch: bin holds {found}, called through {expected}")]
    PackageMismatch { expected: String, found: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The remote result did not have the shape the operation expects.
    #[error("Unexpected result from {function}: expected {expected}, found {found}")]
    ShapeMismatch {
        function: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}

impl Error {
    /// Returns a stable error code for this error variant.
    pub fn code(&self) -> &'static str {
        match self {
            Error::Remote(_) => "REMOTE_ERROR",
            Error::Timeout(_) => "TIMEOUT",
            Error::Connection(_) => "CONNECTION_ERROR",
            Error::BinNotFound(_) => "BIN_NOT_FOUND",
            Error::CapacityExceeded { .. } => "CAPACITY_EXCEEDED",
            Error::UnknownFunction { .. } => "UNKNOWN_FUNCTION",
            Error::PackageMismatch { .. } => "PACKAGE_MISMATCH",
            Error::InvalidArgument(_) => "INVALID_ARGUMENT",
            Error::ShapeMismatch { .. } => "SHAPE_MISMATCH",
        }
    }

    /// Returns true if the error was produced by the proxy layer rather than
    /// forwarded from the executor.
    pub fn is_local(&self) -> bool {
        matches!(self, Error::ShapeMismatch { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
