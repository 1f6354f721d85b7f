//! Active representative selection — the secondary application round for
//! representatives that additionally participate in block validation.

use crate::error::ElectionError;
use crate::rules::{ApplicationPreparer, BallotApplication, SelectionRules};
use crate::selector::{ElectionMap, SelectorMethod, TierChoices};
use meridian_types::{AccountId, CandidacyFingerprint, MiningTier};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One account's winning primaries result plus its active-round
/// applications, in preparation order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveElectedChoice {
    pub election_hash: CandidacyFingerprint,
    pub applications: Vec<BallotApplication>,
}

/// Active representatives of a single tier.
pub type ActiveTierChoices = BTreeMap<AccountId, ActiveElectedChoice>;

/// The active-round election result: tier → active representatives.
pub type ActiveElectionMap = BTreeMap<MiningTier, ActiveTierChoices>;

impl SelectorMethod {
    /// Active selection for one tier: the passive reduction (identical
    /// ordering and tie-break), then exactly one `prepare_application` call
    /// per survivor.
    ///
    /// A hook failure aborts the whole tier — a partial representative set
    /// is not a valid consensus state, so no account is ever silently
    /// dropped from the output.
    pub fn select_active_tier_representatives(
        &self,
        tier: MiningTier,
        candidates: &TierChoices,
        rules: &SelectionRules,
        preparer: &dyn ApplicationPreparer,
    ) -> Result<ActiveTierChoices, ElectionError> {
        let passive = self.select_tier_representatives(tier, candidates, rules)?;

        let mut active = ActiveTierChoices::new();
        for (account, choice) in passive {
            let application = preparer
                .prepare_application(tier, account, &choice.election_hash)
                .map_err(|cause| ElectionError::ApplicationPreparationFailed {
                    account,
                    cause,
                })?;
            active.insert(
                account,
                ActiveElectedChoice {
                    election_hash: choice.election_hash,
                    applications: vec![application],
                },
            );
        }
        Ok(active)
    }

    /// Active selection across every tier of `elected`, failing fast on the
    /// first tier whose application round fails.
    ///
    /// Callers that need per-tier failure isolation (a failed tier must not
    /// discard the others) drive [`select_active_tier_representatives`]
    /// tier by tier instead.
    ///
    /// [`select_active_tier_representatives`]: SelectorMethod::select_active_tier_representatives
    pub fn select_active_representatives(
        &self,
        elected: &ElectionMap,
        rules: &SelectionRules,
        preparer: &dyn ApplicationPreparer,
    ) -> Result<ActiveElectionMap, ElectionError> {
        let mut representatives = ActiveElectionMap::new();
        for (tier, candidates) in elected {
            let kept =
                self.select_active_tier_representatives(*tier, candidates, rules, preparer)?;
            if !kept.is_empty() {
                representatives.insert(*tier, kept);
            }
        }
        Ok(representatives)
    }
}
