//! Fixed-size binary value type.
//!
//! [`ByteArray`] owns exactly N bytes by value. It is an opaque blob, not a
//! number or a string: equality is byte-wise and the only distinguished value
//! is the all-zero array, which stands for "empty/absent content".

use std::fmt;
use std::str::FromStr;

use zeroize::Zeroize;

use crate::codec::{binary, encoded_len, text};
use crate::error::DecodeError;

/// A value holding exactly N bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ByteArray<const N: usize> {
    bytes: [u8; N],
}

/// 32-byte value, e.g. a Curve25519 or symmetric key.
pub type ByteArray32 = ByteArray<32>;

/// 64-byte value, e.g. an Ed25519 secret key or signature.
pub type ByteArray64 = ByteArray<64>;

impl<const N: usize> ByteArray<N> {
    /// Size of the binary form in bytes.
    pub const LEN: usize = N;

    /// Size of the text form in characters (43 for N=32, 86 for N=64).
    pub const ENCODED_LEN: usize = encoded_len(N);

    /// Creates a value from an optional source array.
    ///
    /// `None` gives the all-zero value; `Some` copies the array.
    pub fn new(source: Option<&[u8; N]>) -> Self {
        match source {
            Some(bytes) => Self { bytes: *bytes },
            None => Self::zero(),
        }
    }

    /// Returns the all-zero value.
    pub const fn zero() -> Self {
        Self { bytes: [0u8; N] }
    }

    /// Decodes a value from its binary form. Empty input gives the zero value.
    pub fn from_binary(data: &[u8]) -> Result<Self, DecodeError> {
        let mut value = Self::zero();
        value.decode_binary(data)?;
        Ok(value)
    }

    /// Decodes a value from its text form. Empty input gives the zero value.
    pub fn from_text(text: impl AsRef<[u8]>) -> Result<Self, DecodeError> {
        let mut value = Self::zero();
        value.decode_text(text)?;
        Ok(value)
    }

    /// Overwrites the content with a copy of `source`.
    #[inline]
    pub fn load(&mut self, source: &[u8; N]) {
        self.bytes = *source;
    }

    /// Overwrites every byte with zero.
    #[inline]
    pub fn clear(&mut self) {
        self.bytes.zeroize();
    }

    /// Returns true if every byte is zero.
    pub fn is_zero(&self) -> bool {
        self.bytes.iter().all(|&b| b == 0)
    }

    /// Returns the underlying array.
    #[inline]
    pub fn as_array(&self) -> &[u8; N] {
        &self.bytes
    }

    /// Returns a mutable view of the backing storage.
    ///
    /// This lets callers fill the value in place (for example straight from a
    /// random source) without an intermediate buffer. The view is exactly N
    /// bytes and can only be overwritten, never resized.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [u8; N] {
        &mut self.bytes
    }

    /// Consumes the value and returns the array.
    #[inline]
    pub fn into_array(self) -> [u8; N] {
        self.bytes
    }

    /// Copies `min(N, dst.len())` bytes into the front of `dst`.
    ///
    /// Bytes of `dst` past N are left untouched. Returns the count copied.
    pub fn copy_into(&self, dst: &mut [u8]) -> usize {
        let count = N.min(dst.len());
        dst[..count].copy_from_slice(&self.bytes[..count]);
        count
    }

    /// Returns the binary form: always exactly N bytes, zero value included.
    pub fn encode_binary(&self) -> Vec<u8> {
        binary::encode(&self.bytes)
    }

    /// Replaces the content from its binary form.
    ///
    /// Empty input clears the value. Any other length but N fails with
    /// [`SizeMismatch`](crate::error::SizeMismatch) and leaves the value as is.
    pub fn decode_binary(&mut self, data: &[u8]) -> Result<(), DecodeError> {
        match binary::decode::<N>(data)? {
            Some(bytes) => self.bytes = bytes,
            None => self.clear(),
        }
        Ok(())
    }

    /// Returns the text form: unpadded base64, or `""` for the zero value.
    pub fn encode_text(&self) -> String {
        text::encode(&self.bytes)
    }

    /// Replaces the content from its text form.
    ///
    /// Empty input clears the value. Any other length but
    /// [`ENCODED_LEN`](Self::ENCODED_LEN) fails with a size mismatch; invalid
    /// base64 fails with the codec's error. On failure the value is unchanged.
    pub fn decode_text(&mut self, text: impl AsRef<[u8]>) -> Result<(), DecodeError> {
        match text::decode::<N>(text)? {
            Some(bytes) => self.bytes = bytes,
            None => self.clear(),
        }
        Ok(())
    }
}

impl<const N: usize> Default for ByteArray<N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize> From<[u8; N]> for ByteArray<N> {
    fn from(bytes: [u8; N]) -> Self {
        Self { bytes }
    }
}

impl<const N: usize> From<&[u8; N]> for ByteArray<N> {
    fn from(bytes: &[u8; N]) -> Self {
        Self { bytes: *bytes }
    }
}

impl<const N: usize> From<ByteArray<N>> for [u8; N] {
    fn from(value: ByteArray<N>) -> Self {
        value.bytes
    }
}

impl<const N: usize> TryFrom<&[u8]> for ByteArray<N> {
    type Error = DecodeError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        Self::from_binary(data)
    }
}

impl<const N: usize> FromStr for ByteArray<N> {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s)
    }
}

impl<const N: usize> AsRef<[u8]> for ByteArray<N> {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl<const N: usize> AsMut<[u8]> for ByteArray<N> {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}

impl<const N: usize> Zeroize for ByteArray<N> {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
    }
}

/// Renders the text form (empty for the zero value).
impl<const N: usize> fmt::Display for ByteArray<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode_text())
    }
}

impl<const N: usize> fmt::Debug for ByteArray<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ByteArray{}({})", N, self.encode_text())
    }
}
