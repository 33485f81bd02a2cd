//! Error types for decoding fixed-size binary values.

use thiserror::Error;

/// Decode input had a length that is neither zero nor the exact expected size.
///
/// Both sizes are byte counts. For text decoding that means bytes of the UTF-8
/// input, which equals the character count for any valid base64 text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("incorrect data size: expected {expected}, received {received}")]
pub struct SizeMismatch {
    /// Required length: N bytes, or `encoded_len(N)` bytes of UTF-8 text.
    pub expected: usize,
    /// Length of the rejected input, counted in bytes (of the UTF-8 input for text).
    pub received: usize,
}

/// Error during binary or text decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error(transparent)]
    SizeMismatch(#[from] SizeMismatch),

    /// Alphabet or trailing-symbol violation reported by the base64 codec.
    #[error(transparent)]
    Base64(#[from] base64::DecodeError),
}

impl DecodeError {
    /// Returns the size mismatch carried by this error, if that is what it is.
    pub fn size_mismatch(&self) -> Option<&SizeMismatch> {
        match self {
            DecodeError::SizeMismatch(mismatch) => Some(mismatch),
            DecodeError::Base64(_) => None,
        }
    }
}
