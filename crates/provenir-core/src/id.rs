//! # Annotation Identifiers — Sortable Record Identity
//!
//! Defines [`AnnotationId`], the 128-bit lexicographically sortable
//! identifier minted once per annotation, and the [`IdSource`] capability
//! trait that abstracts generation so tests can supply deterministic ids
//! instead of relying on the ambient generator.
//!
//! The canonical text form is the 26-character Crockford base32 rendering;
//! its string ordering approximates creation order, so id-sorted annotation
//! sets read in rough construction sequence.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use ulid::Ulid;

use crate::error::ContractError;

/// Unique, sortable identifier for an annotation record.
///
/// Generated once at construction and never reassigned. Two records never
/// share an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AnnotationId(pub Ulid);

impl AnnotationId {
    /// Mint a fresh identifier from the process clock and entropy.
    pub fn generate() -> Self {
        Self(Ulid::new())
    }

    /// Access the inner ULID.
    pub fn as_ulid(&self) -> &Ulid {
        &self.0
    }
}

impl std::fmt::Display for AnnotationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AnnotationId {
    type Err = ContractError;

    /// Parse the canonical 26-character text form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ulid::from_string(s)
            .map(Self)
            .map_err(|e| ContractError::InvalidIdentifier(format!("{s:?}: {e}")))
    }
}

impl From<Ulid> for AnnotationId {
    fn from(ulid: Ulid) -> Self {
        Self(ulid)
    }
}

/// Capability trait for identifier generation.
///
/// Annotation construction takes an `&dyn IdSource` so deterministic tests
/// can pin the id while production code uses [`UlidIdSource`].
pub trait IdSource: Send + Sync {
    /// Returns the next identifier. Every call must yield a globally
    /// unique value in production implementations.
    fn next_id(&self) -> AnnotationId;
}

/// Production id source backed by the process clock and entropy.
#[derive(Debug, Clone, Copy, Default)]
pub struct UlidIdSource;

impl IdSource for UlidIdSource {
    fn next_id(&self) -> AnnotationId {
        AnnotationId::generate()
    }
}

/// Test double that returns a preset identifier on every call.
#[derive(Debug, Clone, Copy)]
pub struct FixedIdSource {
    /// The identifier to hand out.
    pub id: AnnotationId,
}

impl FixedIdSource {
    /// Creates a fixed source that always yields `id`.
    pub const fn new(id: AnnotationId) -> Self {
        Self { id }
    }
}

impl IdSource for FixedIdSource {
    fn next_id(&self) -> AnnotationId {
        self.id
    }
}
