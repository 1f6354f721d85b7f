//! Blake2b hashing at the two digest widths the protocol uses.

use blake2::digest::consts::{U32, U64};
use blake2::{Blake2b, Digest};

type Blake2b256 = Blake2b<U32>;
type Blake2b512 = Blake2b<U64>;

/// Compute a 256-bit Blake2b hash of arbitrary data.
pub fn blake2b_256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Hash multiple byte slices in sequence (avoids concatenation allocation).
pub fn blake2b_256_multi(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    for part in parts {
        hasher.update(part);
    }
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Compute a 512-bit Blake2b hash of arbitrary data.
pub fn blake2b_512(data: &[u8]) -> [u8; 64] {
    let mut hasher = Blake2b512::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 64];
    output.copy_from_slice(&result);
    output
}

/// Hash multiple byte slices in sequence into a 512-bit digest.
pub fn blake2b_512_multi(parts: &[&[u8]]) -> [u8; 64] {
    let mut hasher = Blake2b512::new();
    for part in parts {
        hasher.update(part);
    }
    let result = hasher.finalize();
    let mut output = [0u8; 64];
    output.copy_from_slice(&result);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blake2b_256_deterministic() {
        let h1 = blake2b_256(b"hello meridian");
        let h2 = blake2b_256(b"hello meridian");
        assert_eq!(h1, h2);
    }

    #[test]
    fn blake2b_256_different_inputs() {
        assert_ne!(blake2b_256(b"hello"), blake2b_256(b"world"));
    }

    #[test]
    fn blake2b_512_deterministic() {
        let h1 = blake2b_512(b"hello meridian");
        let h2 = blake2b_512(b"hello meridian");
        assert_eq!(h1, h2);
    }

    #[test]
    fn widths_are_independent_constructions() {
        // Blake2b-256 is not a truncation of Blake2b-512: the digest length
        // is part of the parameter block.
        let short = blake2b_256(b"data");
        let long = blake2b_512(b"data");
        assert_ne!(short[..], long[..32]);
    }

    #[test]
    fn blake2b_256_multi_equivalent() {
        assert_eq!(
            blake2b_256(b"helloworld"),
            blake2b_256_multi(&[b"hello", b"world"])
        );
    }

    #[test]
    fn blake2b_512_multi_equivalent() {
        assert_eq!(
            blake2b_512(b"helloworld"),
            blake2b_512_multi(&[b"hello", b"world"])
        );
    }

    #[test]
    fn empty_input_hashes_to_nonzero() {
        assert_ne!(blake2b_256(b""), [0u8; 32]);
        assert_ne!(blake2b_512(b""), [0u8; 64]);
    }
}
