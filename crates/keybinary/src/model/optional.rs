//! Encoding of possibly-absent values.
//!
//! A missing value carries no representation: both of its encodings are
//! empty. This is handled here, on the `Option`, before delegating to
//! [`ByteArray`], so the value type itself never needs an "absent" state.

use super::bytearray::ByteArray;

/// Encoding operations on an optional [`ByteArray`].
pub trait OptionalByteArray {
    /// Binary form, or an empty buffer when absent.
    fn encode_binary(&self) -> Vec<u8>;

    /// Text form, or an empty string when absent or zero.
    fn encode_text(&self) -> String;

    /// Same as [`encode_text`](Self::encode_text); for logging.
    fn to_display_string(&self) -> String {
        self.encode_text()
    }
}

impl<const N: usize> OptionalByteArray for Option<ByteArray<N>> {
    fn encode_binary(&self) -> Vec<u8> {
        self.as_ref().encode_binary()
    }

    fn encode_text(&self) -> String {
        self.as_ref().encode_text()
    }
}

impl<const N: usize> OptionalByteArray for Option<&ByteArray<N>> {
    fn encode_binary(&self) -> Vec<u8> {
        match self {
            Some(value) => value.encode_binary(),
            None => Vec::new(),
        }
    }

    fn encode_text(&self) -> String {
        match self {
            Some(value) => value.encode_text(),
            None => String::new(),
        }
    }
}
