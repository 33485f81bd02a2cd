//! Text form: unpadded standard-alphabet base64.
//!
//! The empty string is the sentinel for the all-zero array, so the text form
//! doubles as an "is this field set?" signal. Encoded length is fixed per N
//! (see [`encoded_len`]).
//!
//! Decoding is lenient about the unused low bits of the final symbol: they
//! are ignored rather than rejected, so `...6ZF` and `...6ZE` decode to the
//! same 32 bytes. Encoding always emits them as zero.

use base64::engine::general_purpose::{self, GeneralPurpose};
use base64::{Engine, alphabet};
use tracing::debug;

use super::encoded_len;
use crate::error::{DecodeError, SizeMismatch};

/// Standard alphabet, no padding, trailing bits in the last symbol ignored.
const ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    general_purpose::NO_PAD.with_decode_allow_trailing_bits(true),
);

/// Encodes an array as unpadded base64.
///
/// The all-zero array encodes as the empty string.
pub fn encode<const N: usize>(bytes: &[u8; N]) -> String {
    if bytes.iter().all(|&b| b == 0) {
        return String::new();
    }
    ENGINE.encode(bytes)
}

/// Decodes unpadded base64 text of exactly `encoded_len(N)` characters.
///
/// Returns `Ok(None)` for empty input, which callers treat as "clear".
/// Length is checked before any base64 work is done; alphabet errors come
/// back as [`DecodeError::Base64`] unchanged.
pub fn decode<const N: usize>(text: impl AsRef<[u8]>) -> Result<Option<[u8; N]>, DecodeError> {
    let text = text.as_ref();
    if text.is_empty() {
        return Ok(None);
    }

    let expected = encoded_len(N);
    if text.len() != expected {
        debug!(expected, received = text.len(), "rejecting text input");
        return Err(SizeMismatch {
            expected,
            received: text.len(),
        }
        .into());
    }

    let decoded = ENGINE.decode(text).inspect_err(|err| {
        debug!(error = %err, "rejecting malformed base64 input");
    })?;
    // encoded_len(N) characters always decode to N bytes
    let bytes = <[u8; N]>::try_from(decoded.as_slice()).map_err(|_| SizeMismatch {
        expected: N,
        received: decoded.len(),
    })?;
    Ok(Some(bytes))
}
