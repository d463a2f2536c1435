//! # provenir-core — Provenance Annotation Contracts
//!
//! This crate defines the provenance annotation record and its canonical
//! JSON wire representation. An annotation attests that some property
//! (integrity, TLS-origin, TPM-attested, source-checked) holds for a piece
//! of data as it moves through a pipeline: an annotator constructs the
//! record, a signer and a verifier may enrich it later, and the wire codec
//! carries it between nodes.
//!
//! ## Key Design Principles
//!
//! 1. **Omission is the unset encoding.** `signature` and `isSatisfied` are
//!    present/absent option fields, never `null` sentinels. A record that
//!    has not been signed or verified serializes to a strictly smaller
//!    object than a processed one, and a real `false` verdict stays
//!    distinguishable from "not yet verified".
//!
//! 2. **Closed enumerations with fixed wire codes.** [`AnnotationKind`]
//!    maps variant ↔ code in both directions and rejects unknown codes
//!    explicitly. The algorithm-tag domain is consumed from
//!    [`provenir_hash`], not defined here.
//!
//! 3. **Injectable id and clock capabilities.** The only external state is
//!    the identifier generator and the clock, both behind small traits
//!    ([`IdSource`], [`Clock`]) with deterministic test doubles.
//!
//! 4. **Typed decode errors.** Parsing surfaces every malformation as a
//!    [`ContractError`] variant at the point of failure; no partial objects,
//!    no recovery, nothing to retry.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Fully synchronous value semantics; no I/O, no locking. Callers that
//!   share a record across threads own the synchronization.

pub mod annotation;
pub mod error;
pub mod id;
pub mod kind;
pub mod list;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use annotation::Annotation;
pub use error::ContractError;
pub use id::{AnnotationId, FixedIdSource, IdSource, UlidIdSource};
pub use kind::{AnnotationKind, ANNOTATION_KIND_COUNT};
pub use list::AnnotationList;
pub use temporal::{Clock, FixedClock, SystemClock, Timestamp};
