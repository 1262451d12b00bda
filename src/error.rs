use rand::rand_core;
use thiserror::Error;

/// Crate-wide Result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Crate-wide Error type.
///
/// Every validation failure is raised at the call boundary, before any byte
/// of the caller's buffer has been mutated.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Key length does not select a supported AES variant, or does not match
    /// the explicitly requested variant.
    #[error("invalid key size: {len} bytes ({context})")]
    InvalidKeySize { len: usize, context: &'static str },

    /// A non-empty IV must be exactly one block long.
    #[error("invalid IV size: {len} bytes (iv must be 16 bytes long)")]
    InvalidIvSize { len: usize },

    /// CBC input must be an exact multiple of the block length.
    #[error("invalid input size: {len} bytes (input must be a multiple of 16 bytes)")]
    InvalidInputSize { len: usize },

    /// Named cipher mode is not supported.
    #[error("unsupported mode {mode:?} (supported modes: [cbc])")]
    UnsupportedMode { mode: String },

    /// Integer argument outside its documented range.
    #[error("invalid argument: {context}")]
    InvalidArgument { context: &'static str },

    /// OS RNG failed while generating key or IV material.
    #[error("OS RNG failed while generating random bytes")]
    Rng(#[from] rand_core::OsError),
}
