//! Tiered difficulty table for primaries balloting.
//!
//! Every tier known to the running software must have an entry before the
//! table reaches ballot logic. Tables serialized under an older tier
//! enumeration are default-filled on decode — an absent tier must never read
//! as zero difficulty, which would make every candidate win automatically.

use crate::error::ElectionError;
use meridian_types::MiningTier;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-tier primaries difficulty.
///
/// Backed by a canonical-order map: iteration, serialization, and hash
/// contributions always follow [`MiningTier::ALL`] order, never insertion
/// order, so two tables with identical contents produce identical bytes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyTable {
    entries: BTreeMap<MiningTier, u64>,
}

impl DifficultyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fully-populated table with every known tier at `difficulty`.
    pub fn uniform(difficulty: u64) -> Self {
        let mut table = Self::new();
        table.fill_defaults(difficulty);
        table
    }

    /// Difficulty for `tier`, if present.
    pub fn get(&self, tier: MiningTier) -> Option<u64> {
        self.entries.get(&tier).copied()
    }

    pub fn set(&mut self, tier: MiningTier, difficulty: u64) {
        self.entries.insert(tier, difficulty);
    }

    /// Populate every tier not yet present with `default_difficulty`.
    /// Present entries are left untouched.
    pub fn fill_defaults(&mut self, default_difficulty: u64) {
        for tier in MiningTier::ALL {
            self.entries.entry(tier).or_insert(default_difficulty);
        }
    }

    /// Number of tiers with an entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in canonical tier order.
    pub fn iter(&self) -> impl Iterator<Item = (MiningTier, u64)> + '_ {
        self.entries.iter().map(|(tier, difficulty)| (*tier, *difficulty))
    }

    /// Every known tier present, every value non-zero.
    pub fn validate(&self) -> Result<(), ElectionError> {
        for tier in MiningTier::ALL {
            match self.entries.get(&tier) {
                None => {
                    return Err(ElectionError::MalformedDifficultyTable {
                        reason: format!("missing entry for {tier}"),
                    })
                }
                Some(0) => {
                    return Err(ElectionError::MalformedDifficultyTable {
                        reason: format!("zero difficulty for {tier}"),
                    })
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Byte-exact encoding in canonical tier order.
    pub fn encode(&self) -> Vec<u8> {
        bincode::serialize(&self.entries).expect("tier map serialization cannot fail")
    }

    /// Decode a table, default-filling any tier the serialized form lacks.
    ///
    /// This is the forward-compatibility path: a table written under an
    /// older tier enumeration loads on newer software with the new tiers at
    /// `default_difficulty`. Present-but-zero entries are rejected.
    pub fn decode(bytes: &[u8], default_difficulty: u64) -> Result<Self, ElectionError> {
        let entries: BTreeMap<MiningTier, u64> =
            bincode::deserialize(bytes).map_err(|e| ElectionError::MalformedDifficultyTable {
                reason: format!("decode failed: {e}"),
            })?;

        let mut table = Self { entries };
        for (tier, difficulty) in table.iter() {
            if difficulty == 0 {
                return Err(ElectionError::MalformedDifficultyTable {
                    reason: format!("zero difficulty for {tier}"),
                });
            }
        }
        if default_difficulty == 0 {
            return Err(ElectionError::MalformedDifficultyTable {
                reason: "zero default difficulty".into(),
            });
        }
        table.fill_defaults(default_difficulty);
        Ok(table)
    }
}
