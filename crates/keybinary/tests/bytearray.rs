//! Behaviour of both value sizes through the public API.
//!
//! Keys are filled from the thread-local CSPRNG through `as_mut_array`, the
//! way callers generate fresh key material.

use keybinary::{ByteArray, ByteArray32, ByteArray64, DecodeError, OptionalByteArray, SizeMismatch};
use rand::RngCore;

const TEXT_VECTORS_32: [&str; 5] = [
    "o2kBLbktGE/DnRc0/1cWQolTu2hl/PkrDDoXyQKL6ZE",
    "7ilLOfMrfHgiumT4SrQ8oMbmuRwf076JkENBedOvRJE",
    "TrdknGyTR4AJedGDA1bypUw96rKktEddY6++j7Vph8c",
    "C/UFmHWSHmaKW98sf8SERZLSVyvNBmjS1sUvUFTi0IM",
    "",
];

const TEXT_VECTORS_64: [&str; 5] = [
    "mDIutc9D1yvS5biH1GMPuNR0fq1uuCrNHFsHgUPuJqWGrSMTnVBBcjRwvySoZYN8kSNGHEH1/5mqmc4k6014hQ",
    "5QvhptwdV2joU3mI/dzlYum5SMkYu6PpM+XEAM3l5gxerW/Hrne6HSWbGIpLIchvvCPXKLRTR+raZQryTFbQgA",
    "nNzFlbzOPHvT2N+T+rfhJd3rr+ZaMb1dQeLSzpwrF4kvD+oZMaKQIgd3qTFD39y/poQG6HcHP/CINOGXpANKpA",
    "DvHDFAkPB8eab1ccJG8+msC3QT7xEL1YsAznO/9wb3/0tvRAkKMnEfMgjk5LictRZc5kACy9nCiHqhE98kaJKA",
    "",
];

/// Random non-zero value.
fn random_key<const N: usize>() -> ByteArray<N> {
    let mut key = ByteArray::<N>::zero();
    rand::rng().fill_bytes(key.as_mut_array());
    key.as_mut_array()[0] = b'a';
    key
}

fn check_load<const N: usize>() {
    let raw = random_key::<N>().into_array();
    let k1 = ByteArray::<N>::new(Some(&raw));
    let mut k2 = ByteArray::<N>::default();
    k2.load(&raw);
    assert_eq!(k1, k2, "{k1} vs. {k2}");
}

fn check_copy_into<const N: usize>() {
    let key = random_key::<N>();
    let raw = key.into_array();

    let mut dst19 = [0u8; 19];
    assert_eq!(key.copy_into(&mut dst19), 19);
    assert_eq!(&dst19[..], &raw[..19]);

    let mut dst71 = [0u8; 71];
    assert_eq!(key.copy_into(&mut dst71), N);
    assert_eq!(&dst71[..N], &raw[..]);
    assert!(dst71[N..].iter().all(|&b| b == 0));
}

fn check_clear<const N: usize>() {
    let mut key = random_key::<N>();
    let empty = ByteArray::<N>::default();
    assert!(!key.is_zero());
    assert_ne!(key, empty);

    key.clear();
    assert_eq!(key, empty);
    assert!(key.is_zero());
}

fn check_zero<const N: usize>() {
    let empty = ByteArray::<N>::default();
    assert!(empty.is_zero());
    assert_eq!(empty.encode_text(), "");
    assert_eq!(empty.encode_binary(), vec![0u8; N]);
}

fn check_binary<const N: usize>() {
    for _ in 0..20 {
        let k1 = random_key::<N>();
        let buf = k1.encode_binary();
        assert_eq!(buf.as_slice(), k1.as_array());

        let mut k2 = ByteArray::<N>::new(None);
        k2.decode_binary(&buf).unwrap();
        assert_eq!(k1, k2);
    }

    let absent: Option<&ByteArray<N>> = None;
    assert!(absent.encode_binary().is_empty());

    let mut key = random_key::<N>();
    key.decode_binary(&[]).unwrap();
    assert_eq!(key, ByteArray::<N>::default());

    let err = key.decode_binary(&[0, 1, 2]).unwrap_err();
    assert_eq!(
        err,
        DecodeError::SizeMismatch(SizeMismatch {
            expected: N,
            received: 3
        })
    );
}

fn check_text<const N: usize>(vectors: &[&str]) {
    for (idx, data) in vectors.iter().enumerate() {
        let mut key = ByteArray::<N>::default();
        key.decode_text(data)
            .unwrap_or_else(|err| panic!("decode_text failed ({idx}): {err}"));
        assert_eq!(key.encode_text(), *data, "vector {idx}");
    }

    for _ in 0..20 {
        let k1 = random_key::<N>();
        let k2 = ByteArray::<N>::from_text(k1.encode_text()).unwrap();
        assert_eq!(k1, k2);
    }

    let absent: Option<ByteArray<N>> = None;
    assert!(absent.encode_text().is_empty());

    let mut key = random_key::<N>();
    key.decode_text(b"").unwrap();
    assert_eq!(key, ByteArray::<N>::default());

    let mut key = random_key::<N>();
    key.decode_text("").unwrap();
    assert_eq!(key, ByteArray::<N>::default());

    let err = key.decode_text("abc").unwrap_err();
    assert_eq!(
        err,
        DecodeError::SizeMismatch(SizeMismatch {
            expected: ByteArray::<N>::ENCODED_LEN,
            received: 3
        })
    );
}

#[test]
fn test_byte_array32_load() {
    check_load::<32>();
}

#[test]
fn test_byte_array32_copy_into() {
    check_copy_into::<32>();
}

#[test]
fn test_byte_array32_clear() {
    check_clear::<32>();
}

#[test]
fn test_byte_array32_zero() {
    check_zero::<32>();
}

#[test]
fn test_byte_array32_binary() {
    check_binary::<32>();
}

#[test]
fn test_byte_array32_text() {
    check_text::<32>(&TEXT_VECTORS_32);
}

#[test]
fn test_byte_array64_load() {
    check_load::<64>();
}

#[test]
fn test_byte_array64_copy_into() {
    check_copy_into::<64>();
}

#[test]
fn test_byte_array64_clear() {
    check_clear::<64>();
}

#[test]
fn test_byte_array64_zero() {
    check_zero::<64>();
}

#[test]
fn test_byte_array64_binary() {
    check_binary::<64>();
}

#[test]
fn test_byte_array64_text() {
    check_text::<64>(&TEXT_VECTORS_64);
}

#[test]
fn test_text_length_is_per_size() {
    // A valid 32-byte text is the wrong length for a 64-byte value and vice versa
    let err = ByteArray64::from_text(TEXT_VECTORS_32[0]).unwrap_err();
    assert_eq!(
        err.size_mismatch(),
        Some(&SizeMismatch {
            expected: 86,
            received: 43
        })
    );

    let err = ByteArray32::from_text(TEXT_VECTORS_64[0]).unwrap_err();
    assert_eq!(
        err.size_mismatch(),
        Some(&SizeMismatch {
            expected: 43,
            received: 86
        })
    );
}

#[test]
fn test_display_matches_text() {
    let key: ByteArray32 = TEXT_VECTORS_32[1].parse().unwrap();
    assert_eq!(key.to_string(), TEXT_VECTORS_32[1]);
    assert_eq!(Some(key).to_display_string(), TEXT_VECTORS_32[1]);
    assert_eq!(None::<ByteArray32>.to_display_string(), "");
}
