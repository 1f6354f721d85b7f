//! Account identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A Meridian account identifier.
///
/// Account ids are assigned by the ledger layer and are opaque to the
/// election subsystem, which only relies on their total order (equal-hash
/// tie-breaking in representative selection) and on their canonical byte
/// encoding (candidacy hashing).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct AccountId(u64);

impl AccountId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// Canonical byte encoding of this account id.
    ///
    /// Little-endian, fixed 8 bytes. This encoding feeds candidacy hashing,
    /// so it is part of the consensus contract and must never change for a
    /// given algorithm version.
    pub fn to_canonical_bytes(&self) -> [u8; 8] {
        self.0.to_le_bytes()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "account:{}", self.0)
    }
}

impl From<u64> for AccountId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}
