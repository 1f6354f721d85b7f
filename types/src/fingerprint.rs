//! Candidacy fingerprint — the 512-bit sortition hash.

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Width of a candidacy fingerprint in bytes (512 bits).
pub const FINGERPRINT_LEN: usize = 64;

/// A 512-bit candidacy fingerprint.
///
/// Produced per (block, account) pair by the candidacy engine. The bytes are
/// big-endian, so the derived lexicographic `Ord` is exactly the unsigned
/// big-integer order — selectors sort fingerprints without converting to an
/// integer first.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CandidacyFingerprint([u8; FINGERPRINT_LEN]);

impl CandidacyFingerprint {
    pub const ZERO: Self = Self([0u8; FINGERPRINT_LEN]);

    /// The largest possible fingerprint value (all bits set).
    pub const MAX: Self = Self([0xFF; FINGERPRINT_LEN]);

    pub fn new(bytes: [u8; FINGERPRINT_LEN]) -> Self {
        Self(bytes)
    }

    /// Big-endian bytes of the fingerprint.
    pub fn as_bytes(&self) -> &[u8; FINGERPRINT_LEN] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; FINGERPRINT_LEN]
    }
}

impl Default for CandidacyFingerprint {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Debug for CandidacyFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CandidacyFingerprint(")?;
        for b in &self.0[..4] {
            write!(f, "{:02x}", b)?;
        }
        write!(f, "\u{2026})")
    }
}

impl fmt::Display for CandidacyFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

// Serde derive stops at 32-byte arrays, so the 64-byte fingerprint carries
// hand-written impls: a fixed-length byte sequence on the wire.
impl Serialize for CandidacyFingerprint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&self.0)
    }
}

struct FingerprintVisitor;

impl<'de> Visitor<'de> for FingerprintVisitor {
    type Value = CandidacyFingerprint;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{FINGERPRINT_LEN} bytes")
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        let bytes: [u8; FINGERPRINT_LEN] = v
            .try_into()
            .map_err(|_| E::invalid_length(v.len(), &self))?;
        Ok(CandidacyFingerprint(bytes))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut bytes = [0u8; FINGERPRINT_LEN];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(i, &self))?;
        }
        Ok(CandidacyFingerprint(bytes))
    }
}

impl<'de> Deserialize<'de> for CandidacyFingerprint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_bytes(FingerprintVisitor)
    }
}
