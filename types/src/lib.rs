//! Fundamental types for the Meridian protocol.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: block hashes, account identifiers, mining tiers, candidacy
//! fingerprints, algorithm component versions, and the per-block election
//! context.

pub mod account;
pub mod block;
pub mod distillate;
pub mod fingerprint;
pub mod tier;
pub mod version;

pub use account::AccountId;
pub use block::BlockHash;
pub use distillate::BlockElectionDistillate;
pub use fingerprint::CandidacyFingerprint;
pub use tier::MiningTier;
pub use version::{ComponentKind, ComponentVersion};
