//! Benchmark for key encoding and decoding.
//!
//! Times the binary and text forms for both value sizes, then a JSON document
//! of peers each carrying a public and a secret key.

use std::time::{Duration, Instant};

use keybinary::{ByteArray, ByteArray32, ByteArray64};
use rand::RngCore;
use serde::{Deserialize, Serialize};

const DEFAULT_COUNT: usize = 100_000;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Peer {
    name: String,
    public_key: ByteArray32,
    secret_key: ByteArray64,
}

fn random_keys<const N: usize>(count: usize) -> Vec<ByteArray<N>> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| {
            let mut key = ByteArray::<N>::zero();
            rng.fill_bytes(key.as_mut_array());
            key
        })
        .collect()
}

fn report(label: &str, bytes: usize, elapsed: Duration) {
    println!("  {}: {} bytes in {:?}", label, bytes, elapsed);
    println!(
        "    Throughput: {:.2} MB/s",
        (bytes as f64 / 1_000_000.0) / elapsed.as_secs_f64()
    );
}

fn bench_size<const N: usize>(count: usize) {
    println!("\n=== {}-byte values ({}) ===", N, count);
    let keys = random_keys::<N>(count);

    // Binary
    let encode_start = Instant::now();
    let binary: Vec<Vec<u8>> = keys.iter().map(|k| k.encode_binary()).collect();
    let encode_time = encode_start.elapsed();
    let binary_len: usize = binary.iter().map(Vec::len).sum();
    report("Binary encode", binary_len, encode_time);

    let decode_start = Instant::now();
    let decoded: Vec<ByteArray<N>> = binary
        .iter()
        .map(|b| ByteArray::from_binary(b).expect("Failed to decode binary"))
        .collect();
    let decode_time = decode_start.elapsed();
    report("Binary decode", binary_len, decode_time);
    assert_eq!(keys, decoded, "Binary roundtrip should be lossless");

    // Text
    let encode_start = Instant::now();
    let text: Vec<String> = keys.iter().map(|k| k.encode_text()).collect();
    let encode_time = encode_start.elapsed();
    let text_len: usize = text.iter().map(String::len).sum();
    report("Text encode", text_len, encode_time);

    let decode_start = Instant::now();
    let decoded: Vec<ByteArray<N>> = text
        .iter()
        .map(|t| ByteArray::from_text(t).expect("Failed to decode text"))
        .collect();
    let decode_time = decode_start.elapsed();
    report("Text decode", text_len, decode_time);
    assert_eq!(keys, decoded, "Text roundtrip should be lossless");
}

fn bench_json(count: usize) {
    println!("\n=== JSON peers ({}) ===", count);
    let public_keys = random_keys::<32>(count);
    let secret_keys = random_keys::<64>(count);
    let peers: Vec<Peer> = public_keys
        .into_iter()
        .zip(secret_keys)
        .enumerate()
        .map(|(i, (public_key, secret_key))| Peer {
            name: format!("peer-{}", i),
            public_key,
            secret_key,
        })
        .collect();

    let encode_start = Instant::now();
    let json = serde_json::to_string(&peers).expect("Failed to serialize");
    let encode_time = encode_start.elapsed();
    report("Serialize", json.len(), encode_time);

    let decode_start = Instant::now();
    let decoded: Vec<Peer> = serde_json::from_str(&json).expect("Failed to deserialize");
    let decode_time = decode_start.elapsed();
    report("Deserialize", json.len(), decode_time);
    assert_eq!(peers, decoded, "JSON roundtrip should be lossless");
}

fn main() {
    let count = std::env::args()
        .nth(1)
        .map(|arg| arg.parse().expect("Count must be a positive integer"))
        .unwrap_or(DEFAULT_COUNT);

    println!("keybinary {}: {} values per run", keybinary::VERSION, count);

    bench_size::<32>(count);
    bench_size::<64>(count);
    bench_json(count);
}
