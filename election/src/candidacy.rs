//! Candidacy engine — the per-(block, account) sortition fingerprint.

use meridian_crypto::{blake2b_256_multi, blake2b_512_multi};
use meridian_types::{
    AccountId, BlockElectionDistillate, CandidacyFingerprint, ComponentKind, ComponentVersion,
};
use tracing::trace;

/// A concrete candidacy fingerprint algorithm.
///
/// Closed set: new constructions are added as new variants with their own
/// [`ComponentVersion`], never by changing an existing variant's output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CandidacyMethod {
    /// Reference construction: a 256-bit intermediate hash over the current
    /// block hash and the declaring block id, then a 512-bit fingerprint
    /// over the intermediate and the account's canonical encoding.
    SimpleHash,
}

impl CandidacyMethod {
    /// The version triple written alongside any fingerprint this method
    /// produces.
    pub fn version(&self) -> ComponentVersion {
        match self {
            CandidacyMethod::SimpleHash => {
                ComponentVersion::new(ComponentKind::Candidacy, 1, 0)
            }
        }
    }

    /// Compute the candidacy fingerprint for `account` against the block
    /// described by `distillate`.
    ///
    /// Pure: byte-for-byte identical output for identical inputs, on every
    /// machine, with no I/O and no mutable global state.
    pub fn determine_candidacy(
        &self,
        distillate: &BlockElectionDistillate,
        account: AccountId,
    ) -> CandidacyFingerprint {
        match self {
            CandidacyMethod::SimpleHash => simple_hash(distillate, account),
        }
    }
}

fn simple_hash(
    distillate: &BlockElectionDistillate,
    account: AccountId,
) -> CandidacyFingerprint {
    let intermediate = blake2b_256_multi(&[
        distillate.current_block_hash.as_bytes(),
        &distillate.election_declaring_block_id.to_le_bytes(),
    ]);
    let fingerprint = CandidacyFingerprint::new(blake2b_512_multi(&[
        &intermediate,
        &account.to_canonical_bytes(),
    ]));

    trace!(
        %account,
        declaring_block = distillate.election_declaring_block_id,
        %fingerprint,
        "computed candidacy fingerprint"
    );
    fingerprint
}
