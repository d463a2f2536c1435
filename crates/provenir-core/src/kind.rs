//! # Annotation Kind — Provenance Mechanism Taxonomy
//!
//! The closed set of mechanisms that can produce an annotation, with their
//! fixed wire codes. Every `match` on [`AnnotationKind`] is exhaustive —
//! adding a mechanism forces every consumer to handle it at compile time.
//! Unknown codes are rejected explicitly; there is no catch-all variant.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ContractError;

/// The provenance mechanism that produced an annotation.
///
/// Wire codes are fixed and case-sensitive: `tpm`, `pki`, `tls`, `src`,
/// `mock`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationKind {
    /// Evidence rooted in a TPM attestation.
    Tpm,
    /// Evidence backed by a PKI signature check.
    Pki,
    /// Data arrived over an authenticated TLS channel.
    Tls,
    /// Source-of-origin check on the producing component.
    #[serde(rename = "src")]
    Source,
    /// Test/mock annotator; never used in production evidence.
    Mock,
}

/// Total number of annotation kinds. Used for exhaustiveness tests.
pub const ANNOTATION_KIND_COUNT: usize = 5;

impl AnnotationKind {
    /// Returns all kinds in canonical order.
    pub fn all_kinds() -> &'static [AnnotationKind] {
        &[Self::Tpm, Self::Pki, Self::Tls, Self::Source, Self::Mock]
    }

    /// Returns the fixed wire code for this kind.
    ///
    /// This must match the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tpm => "tpm",
            Self::Pki => "pki",
            Self::Tls => "tls",
            Self::Source => "src",
            Self::Mock => "mock",
        }
    }
}

impl std::fmt::Display for AnnotationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnnotationKind {
    type Err = ContractError;

    /// Parse a kind from its wire code.
    ///
    /// Accepts the same codes produced by [`AnnotationKind::as_str()`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tpm" => Ok(Self::Tpm),
            "pki" => Ok(Self::Pki),
            "tls" => Ok(Self::Tls),
            "src" => Ok(Self::Source),
            "mock" => Ok(Self::Mock),
            other => Err(ContractError::InvalidKind(other.to_owned())),
        }
    }
}
