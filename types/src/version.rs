//! Algorithm component versioning.
//!
//! Every concrete election algorithm is identified by a (kind, major, minor)
//! triple. The triple is embedded in a block's hashable structure, so the
//! choice of algorithm is itself tamper-evident: changing the version changes
//! the block hash.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The algorithm family a component version belongs to.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ComponentKind {
    /// Candidacy fingerprint computation.
    Candidacy,
    /// Primaries win/lose balloting.
    PrimariesBallot,
    /// Representative selection (passive and active).
    RepresentativeSelection,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ComponentKind::Candidacy => "candidacy",
            ComponentKind::PrimariesBallot => "primaries-ballot",
            ComponentKind::RepresentativeSelection => "representative-selection",
        };
        write!(f, "{name}")
    }
}

/// Identifies exactly which concrete algorithm produced, or must reinterpret,
/// a piece of election data.
///
/// Immutable once assigned to a block. Used as the lookup key into the
/// algorithm registry; an unrecognized triple is a hard validation error
/// during replay, never silently substituted.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ComponentVersion {
    pub kind: ComponentKind,
    pub major: u16,
    pub minor: u16,
}

impl ComponentVersion {
    pub fn new(kind: ComponentKind, major: u16, minor: u16) -> Self {
        Self { kind, major, minor }
    }
}

impl fmt::Display for ComponentVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}.{}", self.kind, self.major, self.minor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_kind_and_numbers() {
        let v = ComponentVersion::new(ComponentKind::PrimariesBallot, 1, 0);
        assert_eq!(v.to_string(), "primaries-ballot-1.0");
    }

    #[test]
    fn versions_differ_by_any_field() {
        let base = ComponentVersion::new(ComponentKind::Candidacy, 1, 0);
        assert_ne!(base, ComponentVersion::new(ComponentKind::Candidacy, 1, 1));
        assert_ne!(base, ComponentVersion::new(ComponentKind::Candidacy, 2, 0));
        assert_ne!(
            base,
            ComponentVersion::new(ComponentKind::PrimariesBallot, 1, 0)
        );
    }
}
