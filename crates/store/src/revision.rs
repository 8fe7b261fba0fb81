//! Document revisions and write preconditions.

use serde::{Deserialize, Serialize};

use larder_core::StoreError;

/// Monotonic per-document revision.
///
/// Starts at [`Revision::FIRST`] when a document is created and increments
/// on every successful overwrite. Deleting and recreating a document starts
/// the sequence over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Revision(u64);

impl Revision {
    pub const FIRST: Revision = Revision(1);

    pub fn get(self) -> u64 {
        self.0
    }

    pub fn next(self) -> Revision {
        Revision(self.0 + 1)
    }
}

impl core::fmt::Display for Revision {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Optimistic concurrency expectation for a document write or delete.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ExpectedRevision {
    /// Skip the revision check (unconditional write).
    Any,
    /// Require that the document does not exist yet.
    Absent,
    /// Require the document to be at an exact revision.
    Exact(Revision),
}

impl ExpectedRevision {
    pub fn matches(self, actual: Option<Revision>) -> bool {
        match self {
            ExpectedRevision::Any => true,
            ExpectedRevision::Absent => actual.is_none(),
            ExpectedRevision::Exact(expected) => actual == Some(expected),
        }
    }

    pub fn check(self, actual: Option<Revision>) -> Result<(), StoreError> {
        if self.matches(actual) {
            Ok(())
        } else {
            Err(StoreError::conflict(format!(
                "revision precondition failed (expected: {self:?}, actual: {actual:?})"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_matches_everything() {
        assert!(ExpectedRevision::Any.matches(None));
        assert!(ExpectedRevision::Any.matches(Some(Revision::FIRST)));
    }

    #[test]
    fn absent_matches_only_missing_documents() {
        assert!(ExpectedRevision::Absent.matches(None));
        assert!(!ExpectedRevision::Absent.matches(Some(Revision::FIRST)));
    }

    #[test]
    fn exact_matches_only_the_same_revision() {
        let expected = ExpectedRevision::Exact(Revision::FIRST);
        assert!(expected.matches(Some(Revision::FIRST)));
        assert!(!expected.matches(Some(Revision::FIRST.next())));
        assert!(!expected.matches(None));
    }

    #[test]
    fn check_surfaces_a_conflict() {
        let err = ExpectedRevision::Absent
            .check(Some(Revision::FIRST))
            .unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));
    }

    #[test]
    fn revisions_increment_from_first() {
        assert_eq!(Revision::FIRST.get(), 1);
        assert_eq!(Revision::FIRST.next().get(), 2);
    }
}
