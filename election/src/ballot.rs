//! Primaries ballot engine — the win/lose sortition test.

use crate::difficulty::DifficultyTable;
use crate::error::ElectionError;
use meridian_types::{CandidacyFingerprint, ComponentKind, ComponentVersion, MiningTier};
use num_bigint::BigUint;
use tracing::trace;

/// A concrete primaries ballot algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BallotMethod {
    /// Reference construction: target = (2^512 − 1) / difficulty, elected
    /// iff the fingerprint, read as an unsigned big integer, is strictly
    /// below the target.
    TargetDivision,
}

impl BallotMethod {
    pub fn version(&self) -> ComponentVersion {
        match self {
            BallotMethod::TargetDivision => {
                ComponentVersion::new(ComponentKind::PrimariesBallot, 1, 0)
            }
        }
    }

    /// Run the primaries ballot for one fingerprint.
    ///
    /// Returns the fingerprint unchanged when the account is elected for
    /// `tier`, `None` when it is not. Each call is an independent Bernoulli
    /// trial with win probability `target / 2^512`, tuned entirely by the
    /// tier's difficulty: higher difficulty shrinks the target.
    pub fn perform_ballot(
        &self,
        fingerprint: &CandidacyFingerprint,
        tier: MiningTier,
        table: &DifficultyTable,
    ) -> Result<Option<CandidacyFingerprint>, ElectionError> {
        let difficulty = table
            .get(tier)
            .ok_or(ElectionError::UnknownMiningTier(tier))?;

        match self {
            BallotMethod::TargetDivision => target_division(fingerprint, tier, difficulty),
        }
    }
}

/// The ballot target for a difficulty setting: (2^512 − 1) / difficulty.
///
/// Exact unsigned big-integer arithmetic — no floating point, no truncation
/// of the 512-bit width. Monotonically decreasing in difficulty. Zero
/// difficulty is malformed (its target would be undefined, and a "free win"
/// must never be representable).
pub fn ballot_target(difficulty: u64) -> Result<BigUint, ElectionError> {
    if difficulty == 0 {
        return Err(ElectionError::MalformedDifficultyTable {
            reason: "zero difficulty has no ballot target".into(),
        });
    }
    let max = BigUint::from_bytes_be(CandidacyFingerprint::MAX.as_bytes());
    Ok(max / BigUint::from(difficulty))
}

fn target_division(
    fingerprint: &CandidacyFingerprint,
    tier: MiningTier,
    difficulty: u64,
) -> Result<Option<CandidacyFingerprint>, ElectionError> {
    let target = ballot_target(difficulty)?;
    let value = BigUint::from_bytes_be(fingerprint.as_bytes());

    let elected = value < target;
    trace!(%tier, difficulty, elected, "primaries ballot evaluated");

    Ok(elected.then_some(*fingerprint))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Left-pad a big integer back into 64 fingerprint bytes.
    fn fingerprint_from(value: &BigUint) -> CandidacyFingerprint {
        let digits = value.to_bytes_be();
        assert!(digits.len() <= 64);
        let mut bytes = [0u8; 64];
        bytes[64 - digits.len()..].copy_from_slice(&digits);
        CandidacyFingerprint::new(bytes)
    }

    fn table_with(tier: MiningTier, difficulty: u64) -> DifficultyTable {
        let mut table = DifficultyTable::new();
        table.set(tier, difficulty);
        table
    }

    #[test]
    fn just_below_target_is_elected() {
        let method = BallotMethod::TargetDivision;
        let table = table_with(MiningTier::Tier0, 100);

        let target = ballot_target(100).unwrap();
        let winning = fingerprint_from(&(target - 1u32));

        let result = method
            .perform_ballot(&winning, MiningTier::Tier0, &table)
            .unwrap();
        assert_eq!(result, Some(winning));
    }

    #[test]
    fn exactly_at_target_is_not_elected() {
        let method = BallotMethod::TargetDivision;
        let table = table_with(MiningTier::Tier0, 100);

        let at_target = fingerprint_from(&ballot_target(100).unwrap());

        let result = method
            .perform_ballot(&at_target, MiningTier::Tier0, &table)
            .unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn above_target_is_not_elected() {
        let method = BallotMethod::TargetDivision;
        let table = table_with(MiningTier::Tier0, 100);

        let above = fingerprint_from(&(ballot_target(100).unwrap() + 1u32));

        let result = method
            .perform_ballot(&above, MiningTier::Tier0, &table)
            .unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn difficulty_one_elects_everything_but_max() {
        let method = BallotMethod::TargetDivision;
        let table = table_with(MiningTier::Tier0, 1);

        let almost_max = fingerprint_from(
            &(BigUint::from_bytes_be(CandidacyFingerprint::MAX.as_bytes()) - 1u32),
        );
        assert!(method
            .perform_ballot(&almost_max, MiningTier::Tier0, &table)
            .unwrap()
            .is_some());

        assert!(method
            .perform_ballot(&CandidacyFingerprint::MAX, MiningTier::Tier0, &table)
            .unwrap()
            .is_none());
    }

    #[test]
    fn target_shrinks_as_difficulty_grows() {
        let mut previous = ballot_target(1).unwrap();
        for difficulty in [2u64, 10, 1_000, u64::MAX] {
            let target = ballot_target(difficulty).unwrap();
            assert!(target < previous, "target must shrink at difficulty {difficulty}");
            previous = target;
        }
    }

    #[test]
    fn higher_difficulty_never_flips_lost_to_won() {
        let method = BallotMethod::TargetDivision;
        let fingerprint = fingerprint_from(&(ballot_target(50).unwrap() - 1u32));

        let low = table_with(MiningTier::Tier0, 50);
        let high = table_with(MiningTier::Tier0, 5_000);

        let won_low = method
            .perform_ballot(&fingerprint, MiningTier::Tier0, &low)
            .unwrap()
            .is_some();
        let won_high = method
            .perform_ballot(&fingerprint, MiningTier::Tier0, &high)
            .unwrap()
            .is_some();

        assert!(won_low);
        assert!(!won_high, "raising difficulty must not create a win");
    }

    #[test]
    fn missing_tier_is_rejected() {
        let method = BallotMethod::TargetDivision;
        let table = table_with(MiningTier::Tier0, 100);

        let result = method.perform_ballot(
            &CandidacyFingerprint::ZERO,
            MiningTier::Tier1,
            &table,
        );
        assert!(matches!(
            result,
            Err(ElectionError::UnknownMiningTier(MiningTier::Tier1))
        ));
    }

    #[test]
    fn zero_difficulty_is_malformed() {
        let method = BallotMethod::TargetDivision;
        let table = table_with(MiningTier::Tier0, 0);

        let result =
            method.perform_ballot(&CandidacyFingerprint::ZERO, MiningTier::Tier0, &table);
        assert!(matches!(
            result,
            Err(ElectionError::MalformedDifficultyTable { .. })
        ));
    }

    #[test]
    fn only_the_named_tier_is_consulted() {
        let method = BallotMethod::TargetDivision;
        let mut table = DifficultyTable::new();
        table.set(MiningTier::Tier0, 1);
        table.set(MiningTier::Tier1, u64::MAX);

        // A fingerprint near the top of the range wins at difficulty 1 even
        // though another tier is configured to be nearly impossible.
        let fingerprint = fingerprint_from(&(ballot_target(1).unwrap() - 1u32));
        assert!(method
            .perform_ballot(&fingerprint, MiningTier::Tier0, &table)
            .unwrap()
            .is_some());
        assert!(method
            .perform_ballot(&fingerprint, MiningTier::Tier1, &table)
            .unwrap()
            .is_none());
    }

    #[test]
    fn version_names_ballot_kind() {
        let v = BallotMethod::TargetDivision.version();
        assert_eq!(v.kind, ComponentKind::PrimariesBallot);
        assert_eq!((v.major, v.minor), (1, 0));
    }
}
