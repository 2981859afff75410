#[derive(thiserror::Error, Debug)]
pub enum McElieceError {
    /// Operand shapes are incompatible for a product, or a message/codeword has the wrong length.
    #[error("DimensionMismatch: {0}")]
    DimensionMismatch(String),
    /// Gauss-Jordan elimination found a column without a pivot.
    #[error("Singular: {0}")]
    Singular(String),
    /// Rejection sampling of an invertible matrix gave up.
    #[error("Could not sample an invertible {size}x{size} matrix after {attempts} attempts")]
    RetryLimitExceeded { size: usize, attempts: usize },

    #[error("InvalidParameters: {0}")]
    InvalidParameters(String),
    #[error("InvalidKey: {0}")]
    InvalidKey(String),

    #[error("Encoding failed: {0}")]
    EncodingError(String),

    #[error("Data serialization: {0}")]
    SerializationError(#[from] serde_json::Error),
}
