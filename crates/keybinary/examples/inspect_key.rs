//! Simple inspector for base64-encoded keys.
//!
//! With an argument, decodes it as a 32- or 64-byte key depending on its
//! length. Without one, generates a fresh random 32-byte key.

use keybinary::{ByteArray, ByteArray32, ByteArray64};
use rand::RngCore;

fn format_bytes(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

fn describe<const N: usize>(key: &ByteArray<N>) {
    println!("Size: {} bytes ({} chars as text)", ByteArray::<N>::LEN, ByteArray::<N>::ENCODED_LEN);
    println!("Zero: {}", key.is_zero());
    println!("Text: {}", key);
    println!("Hex:  {}", format_bytes(key.as_array()));

    let mut head = [0u8; 8];
    let copied = key.copy_into(&mut head);
    println!("Head: {} ({} bytes)", format_bytes(&head[..copied]), copied);
}

fn main() {
    let Some(text) = std::env::args().nth(1) else {
        let mut key = ByteArray32::zero();
        rand::rng().fill_bytes(key.as_mut_array());
        println!("Generated random key");
        describe(&key);
        return;
    };

    println!("Reading: {}", text);
    if text.len() == ByteArray64::ENCODED_LEN {
        let key: ByteArray64 = text.parse().expect("Failed to decode");
        describe(&key);
    } else {
        let key: ByteArray32 = text.parse().expect("Failed to decode");
        describe(&key);
    }
}
