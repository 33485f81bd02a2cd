//! Wire forms for fixed-size binary values.
//!
//! Two encodings are supported:
//! - [`binary`]: exactly N raw bytes, no header and no length prefix
//! - [`text`]: unpadded standard-alphabet base64, fixed length per N
//!
//! Both decoders treat empty input as "no data supplied" and report it as
//! `Ok(None)`; any other length that is not exactly the expected one is a
//! [`SizeMismatch`](crate::error::SizeMismatch).

pub mod binary;
pub mod text;

/// Returns the length of the unpadded base64 encoding of `n` bytes.
///
/// ```text
/// encoded_len(n) = ceil(n * 8 / 6)
/// ```
pub const fn encoded_len(n: usize) -> usize {
    (n * 4).div_ceil(3)
}
