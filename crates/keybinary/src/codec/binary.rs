//! Raw binary form: the N bytes verbatim.

use tracing::debug;

use crate::error::{DecodeError, SizeMismatch};

/// Encodes an array as an owned copy of its bytes.
///
/// The all-zero array is not special-cased; the output is always N bytes.
#[inline]
pub fn encode<const N: usize>(bytes: &[u8; N]) -> Vec<u8> {
    bytes.to_vec()
}

/// Decodes exactly N raw bytes.
///
/// Returns `Ok(None)` for empty input, which callers treat as "clear".
pub fn decode<const N: usize>(data: &[u8]) -> Result<Option<[u8; N]>, DecodeError> {
    if data.is_empty() {
        return Ok(None);
    }
    let bytes = <[u8; N]>::try_from(data).map_err(|_| {
        debug!(expected = N, received = data.len(), "rejecting binary input");
        SizeMismatch {
            expected: N,
            received: data.len(),
        }
    })?;
    Ok(Some(bytes))
}
