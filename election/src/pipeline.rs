//! Per-block election evaluation — candidacy and balloting across the full
//! candidate list, aggregated into the tier-keyed election map.

use crate::difficulty::DifficultyTable;
use crate::error::ElectionError;
use crate::registry::{AlgorithmRegistry, ElectionVersions};
use crate::selector::{ElectedChoice, ElectionMap, TierChoices};
use meridian_types::{AccountId, BlockElectionDistillate, MiningTier};
use tracing::debug;

/// The aggregated primaries result for one block evaluation.
///
/// Read-only: block assembly embeds the elected set, gossip workflows
/// announce it, selectors reduce it. The underlying map is tier-keyed and
/// canonical-order, so merging results computed in parallel is
/// order-independent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrimariesOutcome {
    map: ElectionMap,
}

impl PrimariesOutcome {
    /// Elected accounts of one tier, if any were elected.
    pub fn tier(&self, tier: MiningTier) -> Option<&TierChoices> {
        self.map.get(&tier)
    }

    pub fn map(&self) -> &ElectionMap {
        &self.map
    }

    pub fn into_map(self) -> ElectionMap {
        self.map
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Total elected accounts across all tiers.
    pub fn total_elected(&self) -> usize {
        self.map.values().map(|choices| choices.len()).sum()
    }
}

/// Run candidacy and primaries balloting for every candidate against one
/// block.
///
/// Each (account, tier) pair is an independent trial; the aggregation is a
/// plain tier-keyed merge, so callers may equally evaluate accounts in
/// parallel themselves and combine the maps afterwards. A tier missing from
/// the difficulty table fails the whole evaluation: skipping its accounts
/// silently would let differently-configured nodes elect different sets.
pub fn run_primaries(
    registry: &AlgorithmRegistry,
    versions: &ElectionVersions,
    distillate: &BlockElectionDistillate,
    candidates: &[(AccountId, MiningTier)],
    table: &DifficultyTable,
) -> Result<PrimariesOutcome, ElectionError> {
    let candidacy = registry.candidacy(&versions.candidacy)?;
    let ballot = registry.ballot(&versions.ballot)?;

    let mut map = ElectionMap::new();
    for &(account, tier) in candidates {
        let fingerprint = candidacy.determine_candidacy(distillate, account);
        if let Some(election_hash) = ballot.perform_ballot(&fingerprint, tier, table)? {
            map.entry(tier)
                .or_insert_with(TierChoices::new)
                .insert(account, ElectedChoice { election_hash });
        }
    }

    debug!(
        declaring_block = distillate.election_declaring_block_id,
        candidates = candidates.len(),
        elected = map.values().map(|choices| choices.len()).sum::<usize>(),
        "primaries evaluated"
    );

    Ok(PrimariesOutcome { map })
}
