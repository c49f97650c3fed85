use relay_bls::BLSError;
use thiserror::Error;

/// Convenience result alias
pub type SigningResult<T> = std::result::Result<T, SigningError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Error raised while computing a hash tree root
pub enum TreeHashError {
    /// A bounded list holds more elements than its limit
    #[error("list of length {len} exceeds its limit of {max}")]
    ListTooLong { len: usize, max: usize },
}

#[derive(Debug, Error, Clone, PartialEq)]
/// Error type for domain, signing root and signature operations
pub enum SigningError {
    /// Key or signature decoding failed
    #[error(transparent)]
    Bls(#[from] BLSError),
    /// The signed object could not be hashed
    #[error("could not compute hash tree root: {0}")]
    InvalidStructure(#[from] TreeHashError),
    /// A fork version or genesis validators root could not be parsed
    #[error("invalid {field}: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
    #[error("unknown network {0}")]
    UnknownNetwork(String),
}
