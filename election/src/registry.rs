//! Algorithm variant registry — version-to-implementation resolution.
//!
//! Blocks carry the [`ComponentVersion`] triples of the algorithms that
//! produced their election data. The registry maps a triple back to the
//! concrete implementation, so historical blocks replay under the exact
//! rules that created them even after the current rules have moved on.

use crate::ballot::BallotMethod;
use crate::candidacy::CandidacyMethod;
use crate::error::ElectionError;
use crate::selector::SelectorMethod;
use meridian_types::ComponentVersion;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The version triple a block embeds for its election data.
///
/// Part of the block's hashable structure: changing any algorithm version
/// changes the block hash, making version selection tamper-evident.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionVersions {
    pub candidacy: ComponentVersion,
    pub ballot: ComponentVersion,
    pub selector: ComponentVersion,
}

impl ElectionVersions {
    /// The versions newly produced blocks are tagged with.
    pub fn current() -> Self {
        Self {
            candidacy: CandidacyMethod::SimpleHash.version(),
            ballot: BallotMethod::TargetDivision.version(),
            selector: SelectorMethod::TopLowestHashes.version(),
        }
    }
}

impl Default for ElectionVersions {
    fn default() -> Self {
        Self::current()
    }
}

/// All algorithm variants this software recognizes.
///
/// Populated once at process startup and read-only afterwards. Resolution
/// never substitutes a "closest" variant — an unrecognized triple is a hard
/// validation error, because silent substitution breaks replay determinism.
#[derive(Clone, Debug)]
pub struct AlgorithmRegistry {
    candidacy: BTreeMap<ComponentVersion, CandidacyMethod>,
    ballot: BTreeMap<ComponentVersion, BallotMethod>,
    selector: BTreeMap<ComponentVersion, SelectorMethod>,
}

impl AlgorithmRegistry {
    /// The registry of every variant shipped with this software. New
    /// variants are added here, keyed by the version they expose.
    pub fn standard() -> Self {
        let mut candidacy = BTreeMap::new();
        for method in [CandidacyMethod::SimpleHash] {
            candidacy.insert(method.version(), method);
        }

        let mut ballot = BTreeMap::new();
        for method in [BallotMethod::TargetDivision] {
            ballot.insert(method.version(), method);
        }

        let mut selector = BTreeMap::new();
        for method in [SelectorMethod::TopLowestHashes] {
            selector.insert(method.version(), method);
        }

        Self {
            candidacy,
            ballot,
            selector,
        }
    }

    /// Resolve a candidacy algorithm by version.
    pub fn candidacy(&self, version: &ComponentVersion) -> Result<CandidacyMethod, ElectionError> {
        self.candidacy
            .get(version)
            .copied()
            .ok_or(ElectionError::UnknownAlgorithmVariant(*version))
    }

    /// Resolve a primaries ballot algorithm by version.
    pub fn ballot(&self, version: &ComponentVersion) -> Result<BallotMethod, ElectionError> {
        self.ballot
            .get(version)
            .copied()
            .ok_or(ElectionError::UnknownAlgorithmVariant(*version))
    }

    /// Resolve a representative selection algorithm by version.
    pub fn selector(&self, version: &ComponentVersion) -> Result<SelectorMethod, ElectionError> {
        self.selector
            .get(version)
            .copied()
            .ok_or(ElectionError::UnknownAlgorithmVariant(*version))
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
