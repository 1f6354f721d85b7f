//! Cryptographic primitives for the Meridian protocol.
//!
//! **Blake2b** for all hashing: 256-bit digests for block-level intermediate
//! hashes, 512-bit digests for candidacy fingerprints.

pub mod hash;

pub use hash::{blake2b_256, blake2b_256_multi, blake2b_512, blake2b_512_multi};
