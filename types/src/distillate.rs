//! Per-block election context.

use crate::block::BlockHash;
use serde::{Deserialize, Serialize};

/// The minimal block-derived context needed to run one election evaluation.
///
/// Assembled by the block/ledger layer and only ever read by the election
/// pipeline. All entities derived from it live for a single evaluation pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockElectionDistillate {
    /// The block id at which this election context was declared.
    /// Monotonically increasing.
    pub election_declaring_block_id: u64,
    /// Hash of the block whose maturity triggered this election, computed a
    /// fixed number of blocks earlier.
    pub mature_block_hash: BlockHash,
    /// Hash of the block currently being evaluated.
    pub current_block_hash: BlockHash,
}

impl BlockElectionDistillate {
    pub fn new(
        election_declaring_block_id: u64,
        mature_block_hash: BlockHash,
        current_block_hash: BlockHash,
    ) -> Self {
        Self {
            election_declaring_block_id,
            mature_block_hash,
            current_block_hash,
        }
    }
}
