//! Data model types.
//!
//! - [`ByteArray`]: the fixed-size value, with [`ByteArray32`] and
//!   [`ByteArray64`] as the two common sizes
//! - [`OptionalByteArray`]: encodings for values that may be absent

pub mod bytearray;
pub mod optional;

pub use bytearray::{ByteArray, ByteArray32, ByteArray64};
pub use optional::OptionalByteArray;
