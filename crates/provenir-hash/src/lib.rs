//! # provenir-hash — Algorithm-Tag Domain
//!
//! The closed set of evidence-hashing algorithms an annotation can reference,
//! together with their fixed wire codes. This crate only names algorithms; it
//! never computes a digest. Annotation records carry one of these tags so a
//! downstream verifier knows which algorithm the evidence was produced with.
//!
//! ## Crate Policy
//!
//! - Leaf crate: no dependencies on other `provenir-*` crates.
//! - Unknown codes are rejected explicitly; there is no default variant.
//! - The serde representation and [`HashAlgorithm::as_str()`] must agree.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// An unrecognized hash-algorithm wire code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown hash algorithm code: {code:?}")]
pub struct InvalidHashTag {
    /// The code that failed to parse.
    pub code: String,
}

/// The hashing algorithm an annotation's evidence is based on.
///
/// Wire codes are fixed: `sha256`, `md5`, `none`. `None` is a legitimate
/// tag — it marks evidence that references its subject directly rather than
/// through a digest — not an absent value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// SHA-256 digest of the annotated data.
    Sha256,
    /// MD5 digest. Legacy pipelines only; weak for integrity claims.
    Md5,
    /// No digest; the subject reference is used as-is.
    None,
}

/// Total number of hash algorithms. Used for exhaustiveness tests.
pub const HASH_ALGORITHM_COUNT: usize = 3;

impl HashAlgorithm {
    /// Returns all algorithms in canonical order.
    pub fn all_algorithms() -> &'static [HashAlgorithm] {
        &[Self::Sha256, Self::Md5, Self::None]
    }

    /// Returns the fixed wire code for this algorithm.
    ///
    /// This must match the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
            Self::Md5 => "md5",
            Self::None => "none",
        }
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashAlgorithm {
    type Err = InvalidHashTag;

    /// Parse an algorithm from its wire code. Case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sha256" => Ok(Self::Sha256),
            "md5" => Ok(Self::Md5),
            "none" => Ok(Self::None),
            other => Err(InvalidHashTag {
                code: other.to_owned(),
            }),
        }
    }
}
