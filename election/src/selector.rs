//! Passive representative selection — reducing primaries winners to the
//! bounded per-tier representative set.

use crate::error::ElectionError;
use crate::rules::SelectionRules;
use meridian_types::{AccountId, CandidacyFingerprint, ComponentKind, ComponentVersion, MiningTier};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::trace;

/// One account's winning primaries result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectedChoice {
    /// The fingerprint that won the primary — the selection ordering key.
    pub election_hash: CandidacyFingerprint,
}

/// Elected accounts of a single tier.
pub type TierChoices = BTreeMap<AccountId, ElectedChoice>;

/// The per-block election result: tier → elected accounts.
///
/// Canonical-order map, built fresh per evaluation and never persisted by
/// this subsystem. Tiers with no elected accounts are omitted.
pub type ElectionMap = BTreeMap<MiningTier, TierChoices>;

/// A concrete representative selection algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectorMethod {
    /// Reference construction: keep the `limit(tier)` numerically-lowest
    /// election hashes, ties broken by ascending account id.
    TopLowestHashes,
}

impl SelectorMethod {
    pub fn version(&self) -> ComponentVersion {
        match self {
            SelectorMethod::TopLowestHashes => {
                ComponentVersion::new(ComponentKind::RepresentativeSelection, 1, 0)
            }
        }
    }

    /// Reduce one tier's primaries winners to its representative set.
    ///
    /// Fewer candidates than the limit keeps them all. The tie-break on
    /// numerically equal hashes is the accounts' total order — an explicit
    /// rule, not incidental sort stability, so every node agrees.
    pub fn select_tier_representatives(
        &self,
        tier: MiningTier,
        candidates: &TierChoices,
        rules: &SelectionRules,
    ) -> Result<TierChoices, ElectionError> {
        let limit = rules
            .limit(tier)
            .ok_or(ElectionError::UnknownMiningTier(tier))?;

        match self {
            SelectorMethod::TopLowestHashes => Ok(top_lowest_hashes(tier, candidates, limit)),
        }
    }

    /// Reduce every tier of `elected` independently.
    ///
    /// Tiers that end up with zero representatives are omitted from the
    /// output, mirroring the input convention.
    pub fn select_representatives(
        &self,
        elected: &ElectionMap,
        rules: &SelectionRules,
    ) -> Result<ElectionMap, ElectionError> {
        let mut representatives = ElectionMap::new();
        for (tier, candidates) in elected {
            let kept = self.select_tier_representatives(*tier, candidates, rules)?;
            if !kept.is_empty() {
                representatives.insert(*tier, kept);
            }
        }
        Ok(representatives)
    }
}

fn top_lowest_hashes(tier: MiningTier, candidates: &TierChoices, limit: u32) -> TierChoices {
    let mut ranked: Vec<(&AccountId, &ElectedChoice)> = candidates.iter().collect();
    ranked.sort_by(|(account_a, choice_a), (account_b, choice_b)| {
        choice_a
            .election_hash
            .cmp(&choice_b.election_hash)
            .then_with(|| account_a.cmp(account_b))
    });
    ranked.truncate(limit as usize);

    trace!(
        %tier,
        candidates = candidates.len(),
        kept = ranked.len(),
        "selected representatives"
    );

    ranked
        .into_iter()
        .map(|(account, choice)| (*account, *choice))
        .collect()
}
