//! Fixed-size binary values for keys and other opaque blobs.
//!
//! This crate provides a single value type, [`ByteArray<N>`], with the two
//! sizes in common use exposed as [`ByteArray32`] and [`ByteArray64`].
//!
//! # Overview
//!
//! Each value owns exactly N bytes and supports:
//! - **Construction**: all-zero by default, or copied from an `[u8; N]`
//! - **Mutation**: `load`, `clear`, and in-place writes through `as_mut_array`
//! - **Binary form**: the N bytes verbatim, no header or length prefix
//! - **Text form**: unpadded standard base64 (43 chars for 32 bytes, 86 for 64)
//!
//! # Quick Start
//!
//! ```rust
//! use keybinary::ByteArray32;
//!
//! let key = ByteArray32::from([7u8; 32]);
//!
//! // Text form
//! let text = key.encode_text();
//! assert_eq!(text.len(), ByteArray32::ENCODED_LEN);
//!
//! // Decode back
//! let decoded: ByteArray32 = text.parse().unwrap();
//! assert_eq!(key, decoded);
//!
//! // The zero value renders as nothing
//! assert_eq!(ByteArray32::zero().encode_text(), "");
//! ```
//!
//! # Empty input
//!
//! Both decoders treat empty input as "no data supplied" and reset the value to
//! zero. Any other length that is not exactly the expected one fails with
//! [`SizeMismatch`] and leaves the value unchanged.
//!
//! # Absent values
//!
//! [`OptionalByteArray`] gives `Option<ByteArray<N>>` the same encoders; an
//! absent value encodes as an empty buffer or string.
//!
//! # Modules
//!
//! - [`model`]: The value type and the optional wrapper
//! - [`codec`]: Binary and base64 text encoding over raw arrays
//! - [`error`]: Error types
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`ByteArray`], text form for
//!   human-readable formats and raw bytes otherwise

pub mod codec;
pub mod error;
pub mod model;

#[cfg(feature = "serde")]
mod serialization;

// Re-export commonly used types at crate root
pub use codec::encoded_len;
pub use error::{DecodeError, SizeMismatch};
pub use model::{ByteArray, ByteArray32, ByteArray64, OptionalByteArray};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
