//! Selection rules and the active-round application seam.

use meridian_types::{AccountId, CandidacyFingerprint, MiningTier};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-tier representative quotas, supplied by the chain's governance layer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRules {
    limits: BTreeMap<MiningTier, u32>,
}

impl SelectionRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// The same quota for every known tier.
    pub fn uniform(limit: u32) -> Self {
        let mut rules = Self::new();
        for tier in MiningTier::ALL {
            rules.set_limit(tier, limit);
        }
        rules
    }

    pub fn set_limit(&mut self, tier: MiningTier, limit: u32) {
        self.limits.insert(tier, limit);
    }

    /// Maximum number of representatives for `tier`, if configured.
    pub fn limit(&self, tier: MiningTier) -> Option<u32> {
        self.limits.get(&tier).copied()
    }
}

/// An opaque record produced during the active selection round.
///
/// Its internal structure belongs to the block-validation collaborator; the
/// election core only attaches it, byte-for-byte, to the surviving
/// representative's choice.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallotApplication(Vec<u8>);

impl BallotApplication {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Collaborator hook for the active selection round.
///
/// The implementation carries the governance-supplied ballot rules; the
/// selector guarantees exactly one call per surviving representative. A
/// returned error surfaces as
/// [`ElectionError::ApplicationPreparationFailed`](crate::ElectionError) and
/// aborts the tier's active selection.
pub trait ApplicationPreparer {
    fn prepare_application(
        &self,
        tier: MiningTier,
        account: AccountId,
        election_hash: &CandidacyFingerprint,
    ) -> Result<BallotApplication, String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_covers_every_tier() {
        let rules = SelectionRules::uniform(5);
        for tier in MiningTier::ALL {
            assert_eq!(rules.limit(tier), Some(5));
        }
    }

    #[test]
    fn unset_tier_has_no_limit() {
        let mut rules = SelectionRules::new();
        rules.set_limit(MiningTier::Tier0, 3);

        assert_eq!(rules.limit(MiningTier::Tier0), Some(3));
        assert_eq!(rules.limit(MiningTier::Tier1), None);
    }
}
