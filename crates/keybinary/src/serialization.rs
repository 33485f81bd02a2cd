//! Serde support (feature `serde`).
//!
//! Human-readable formats carry the text form, so a zero value serializes as
//! `""`. Binary formats carry the N raw bytes. A sequence of byte values is
//! also accepted on input. Deserialization applies the same size rules as
//! [`ByteArray::decode_text`] and [`ByteArray::decode_binary`].

use std::fmt;
use std::marker::PhantomData;

use serde::{de, ser};

use crate::model::ByteArray;

impl<const N: usize> ser::Serialize for ByteArray<N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.encode_text())
        } else {
            serializer.serialize_bytes(self.as_array())
        }
    }
}

impl<'de, const N: usize> de::Deserialize<'de> for ByteArray<N> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            deserializer.deserialize_any(ByteArrayVisitor::<N>(PhantomData))
        } else {
            deserializer.deserialize_byte_buf(ByteArrayVisitor::<N>(PhantomData))
        }
    }
}

struct ByteArrayVisitor<const N: usize>(PhantomData<[u8; N]>);

impl<'de, const N: usize> de::Visitor<'de> for ByteArrayVisitor<N> {
    type Value = ByteArray<N>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "an unpadded base64 string of {} characters or {} raw bytes",
            ByteArray::<N>::ENCODED_LEN,
            N
        )
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        ByteArray::from_text(v).map_err(E::custom)
    }

    fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        ByteArray::from_binary(v).map_err(E::custom)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: de::SeqAccess<'de>,
    {
        let mut value = ByteArray::<N>::zero();
        let mut len = 0;
        while let Some(byte) = seq.next_element::<u8>()? {
            if len < N {
                value.as_mut_array()[len] = byte;
            }
            len += 1;
        }
        if len != 0 && len != N {
            return Err(de::Error::invalid_length(len, &self));
        }
        Ok(value)
    }
}
