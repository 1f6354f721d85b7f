use meridian_types::{AccountId, ComponentVersion, MiningTier};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ElectionError {
    /// The (kind, major, minor) triple is not recognized by this software.
    /// Fatal to the enclosing block validation — the block must be rejected,
    /// never reinterpreted with a "closest" algorithm.
    #[error("unknown algorithm variant {0}")]
    UnknownAlgorithmVariant(ComponentVersion),

    /// A ballot or selection referenced a tier absent from the governing
    /// difficulty or selection-rules table.
    #[error("mining tier {0} has no entry in the governing table")]
    UnknownMiningTier(MiningTier),

    /// The active round's application hook failed for one account. Aborts
    /// that tier's active selection — a partial representative set for a
    /// tier is not a valid consensus state.
    #[error("application preparation failed for {account}: {cause}")]
    ApplicationPreparationFailed { account: AccountId, cause: String },

    /// A difficulty table contained a present-but-invalid entry, or could
    /// not be decoded at all.
    #[error("malformed difficulty table: {reason}")]
    MalformedDifficultyTable { reason: String },
}
