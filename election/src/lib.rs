//! Election — the deterministic sortition pipeline deciding who acts for a
//! block.
//!
//! Three stages, each a pure function of public inputs, recomputed
//! identically by every node:
//!
//! 1. **Candidacy**: hash block context and account into a 512-bit
//!    fingerprint.
//! 2. **Primaries ballot**: compare the fingerprint against a
//!    difficulty-derived target; below the target wins.
//! 3. **Representative selection**: keep the bounded set of lowest winning
//!    hashes per tier, optionally running the active application round.
//!
//! Every stage is dispatched through a versioned algorithm registry so that
//! blocks name the exact rules that produced them and remain replayable as
//! the rules evolve.
//!
//! ## Module overview
//!
//! - [`registry`] — version-to-algorithm resolution, [`ElectionVersions`].
//! - [`candidacy`] — candidacy fingerprint computation.
//! - [`difficulty`] — per-tier difficulty table with default-fill decode.
//! - [`ballot`] — the primaries win/lose test.
//! - [`rules`] — selection quotas and the active-round collaborator seam.
//! - [`selector`] — passive representative selection.
//! - [`active`] — active representative selection.
//! - [`pipeline`] — whole-block evaluation and the aggregated outcome.
//! - [`error`] — election error types.

pub mod active;
pub mod ballot;
pub mod candidacy;
pub mod difficulty;
pub mod error;
pub mod pipeline;
pub mod registry;
pub mod rules;
pub mod selector;

pub use active::{ActiveElectedChoice, ActiveElectionMap, ActiveTierChoices};
pub use ballot::{ballot_target, BallotMethod};
pub use candidacy::CandidacyMethod;
pub use difficulty::DifficultyTable;
pub use error::ElectionError;
pub use pipeline::{run_primaries, PrimariesOutcome};
pub use registry::{AlgorithmRegistry, ElectionVersions};
pub use rules::{ApplicationPreparer, BallotApplication, SelectionRules};
pub use selector::{ElectedChoice, ElectionMap, SelectorMethod, TierChoices};
