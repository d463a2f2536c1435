//! # Annotation — The Provenance Evidence Record
//!
//! An [`Annotation`] attests that one property holds for one piece of data:
//! which subject (`key`), which evidence algorithm (`hash`), which node
//! (`host`), which mechanism (`kind`), and when (`timestamp`). A signer and
//! a verifier may later attach `signature` and `isSatisfied`.
//!
//! ## Wire Contract
//!
//! Fixed key order: `id`, `key`, `hash`, `host`, `kind`, `timestamp`, then
//! `signature` and `isSatisfied` — each of the last two present only once
//! set. Omission, not `null`, encodes "unset": an unprocessed record is a
//! strictly smaller object than a processed one, and a verifier's `false`
//! never collides with "not yet verified".
//!
//! Decoding is symmetric by choice: absent (or `null`) optionals parse as
//! unset, so every document this module emits can be re-read. A present
//! `isSatisfied` must be a JSON boolean.

use serde::Serialize;
use serde_json::{Map, Value};

use provenir_hash::HashAlgorithm;

use crate::error::ContractError;
use crate::id::{AnnotationId, IdSource, UlidIdSource};
use crate::kind::AnnotationKind;
use crate::temporal::{Clock, SystemClock, Timestamp};

/// A single provenance annotation.
///
/// `id` and `timestamp` are minted at construction; `key`, `hash`, `host`,
/// and `kind` are immutable after construction. The two optionals start
/// unset and are attached later by the signing/verification steps — callers
/// treat them as write-once, the model does not police re-setting, and
/// cross-thread mutation needs external synchronization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    /// Unique sortable record identity, minted once.
    pub id: AnnotationId,
    /// Reference to the annotated subject (e.g. a content address).
    pub key: String,
    /// Algorithm the annotation's evidence is based on.
    pub hash: HashAlgorithm,
    /// Identity of the originating node.
    pub host: String,
    /// Provenance mechanism that produced this record.
    pub kind: AnnotationKind,
    /// Capture time, offset-bearing.
    pub timestamp: Timestamp,
    /// Signature over the record; attached by a signer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    /// Verifier verdict on the annotated property.
    #[serde(rename = "isSatisfied", skip_serializing_if = "Option::is_none")]
    pub is_satisfied: Option<bool>,
}

impl Annotation {
    /// Construct a record with a fresh id and the current time.
    ///
    /// `key` and `host` are trusted as supplied; no content validation
    /// happens here.
    pub fn new(
        key: impl Into<String>,
        hash: HashAlgorithm,
        host: impl Into<String>,
        kind: AnnotationKind,
    ) -> Self {
        Self::new_with(key, hash, host, kind, &UlidIdSource, &SystemClock)
    }

    /// Construct a record drawing identity and time from the given
    /// capabilities. Production code uses [`Annotation::new`]; tests inject
    /// [`FixedIdSource`](crate::id::FixedIdSource) and
    /// [`FixedClock`](crate::temporal::FixedClock) for deterministic output.
    pub fn new_with(
        key: impl Into<String>,
        hash: HashAlgorithm,
        host: impl Into<String>,
        kind: AnnotationKind,
        ids: &dyn IdSource,
        clock: &dyn Clock,
    ) -> Self {
        Self {
            id: ids.next_id(),
            key: key.into(),
            hash,
            host: host.into(),
            kind,
            timestamp: clock.now(),
            signature: None,
            is_satisfied: None,
        }
    }

    /// Attach a signature.
    pub fn set_signature(&mut self, signature: impl Into<String>) {
        self.signature = Some(signature.into());
    }

    /// Record the verifier's verdict.
    pub fn set_satisfied(&mut self, value: bool) {
        self.is_satisfied = Some(value);
    }

    /// Encode to the wire JSON text.
    pub fn to_json(&self) -> Result<String, ContractError> {
        serde_json::to_string(self).map_err(ContractError::Serialization)
    }

    /// Decode from wire JSON text.
    ///
    /// # Errors
    ///
    /// - [`ContractError::MalformedJson`] — input is not JSON.
    /// - [`ContractError::MissingField`] — a required key is absent.
    /// - [`ContractError::InvalidIdentifier`], [`ContractError::InvalidHashTag`],
    ///   [`ContractError::InvalidKind`], [`ContractError::InvalidTimestamp`] —
    ///   a field fails its domain parser.
    /// - [`ContractError::UnexpectedType`] — a present key holds the wrong
    ///   JSON type.
    pub fn from_json(data: &str) -> Result<Self, ContractError> {
        let value: Value = serde_json::from_str(data)?;
        Self::from_value(&value)
    }

    /// Decode from an already-parsed JSON value.
    pub fn from_value(value: &Value) -> Result<Self, ContractError> {
        let object = as_object(value)?;

        let id: AnnotationId = require_str(object, "id")?.parse()?;
        let key = require_str(object, "key")?.to_owned();
        let hash: HashAlgorithm = require_str(object, "hash")?.parse()?;
        let host = require_str(object, "host")?.to_owned();
        let kind: AnnotationKind = require_str(object, "kind")?.parse()?;
        let timestamp = Timestamp::parse(require_str(object, "timestamp")?)?;
        let signature = optional_string(object, "signature")?;
        let is_satisfied = optional_bool(object, "isSatisfied")?;

        Ok(Self {
            id,
            key,
            hash,
            host,
            kind,
            timestamp,
            signature,
            is_satisfied,
        })
    }
}

impl std::fmt::Display for Annotation {
    /// The display form is exactly the wire text.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_json().map_err(|_| std::fmt::Error)?)
    }
}

pub(crate) fn as_object(value: &Value) -> Result<&Map<String, Value>, ContractError> {
    value.as_object().ok_or(ContractError::UnexpectedType {
        field: "document",
        expected: "object",
    })
}

fn require_str<'v>(
    object: &'v Map<String, Value>,
    field: &'static str,
) -> Result<&'v str, ContractError> {
    let value = object
        .get(field)
        .ok_or(ContractError::MissingField(field))?;
    value.as_str().ok_or(ContractError::UnexpectedType {
        field,
        expected: "string",
    })
}

/// Absent and `null` both decode as unset.
fn optional_string(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, ContractError> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ContractError::UnexpectedType {
            field,
            expected: "string",
        }),
    }
}

/// Absent and `null` both decode as unset; anything else must be a boolean.
fn optional_bool(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<bool>, ContractError> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(_) => Err(ContractError::UnexpectedType {
            field,
            expected: "boolean",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::FixedIdSource;
    use crate::temporal::FixedClock;

    const TEST_ID: &str = "01ARZ3NDEKTSV4RRFFQ69G5FAV";
    const TEST_TIME: &str = "2026-08-06T09:15:00+02:00";

    fn pinned() -> Annotation {
        let ids = FixedIdSource::new(TEST_ID.parse().unwrap());
        let clock = FixedClock::new(Timestamp::parse(TEST_TIME).unwrap());
        Annotation::new_with(
            "doc-42",
            HashAlgorithm::Sha256,
            "edge-01",
            AnnotationKind::Tls,
            &ids,
            &clock,
        )
    }

    #[test]
    fn test_new_starts_unset() {
        let a = Annotation::new("k", HashAlgorithm::Sha256, "h", AnnotationKind::Mock);
        assert!(a.signature.is_none());
        assert!(a.is_satisfied.is_none());
    }

    #[test]
    fn test_new_mints_fresh_ids() {
        let a = Annotation::new("k", HashAlgorithm::Sha256, "h", AnnotationKind::Mock);
        let b = Annotation::new("k", HashAlgorithm::Sha256, "h", AnnotationKind::Mock);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_new_timestamp_bears_offset() {
        let a = Annotation::new("k", HashAlgorithm::Sha256, "h", AnnotationKind::Mock);
        let text = a.timestamp.to_rfc3339();
        let tail = &text[text.len() - 6..];
        assert!(tail.starts_with('+') || tail.starts_with('-'));
    }

    #[test]
    fn test_unprocessed_wire_text_exact() {
        let a = pinned();
        assert_eq!(
            a.to_json().unwrap(),
            format!(
                "{{\"id\":\"{TEST_ID}\",\"key\":\"doc-42\",\"hash\":\"sha256\",\
                 \"host\":\"edge-01\",\"kind\":\"tls\",\"timestamp\":\"{TEST_TIME}\"}}"
            )
        );
    }

    #[test]
    fn test_unprocessed_has_exactly_six_keys() {
        let a = pinned();
        let value: Value = serde_json::from_str(&a.to_json().unwrap()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 6);
        for field in ["id", "key", "hash", "host", "kind", "timestamp"] {
            assert!(object.contains_key(field), "missing {field}");
        }
        assert_eq!(object["kind"], "tls");
    }

    #[test]
    fn test_processed_wire_text_appends_in_order() {
        let mut a = pinned();
        a.set_signature("ab12cd");
        a.set_satisfied(true);
        assert_eq!(
            a.to_json().unwrap(),
            format!(
                "{{\"id\":\"{TEST_ID}\",\"key\":\"doc-42\",\"hash\":\"sha256\",\
                 \"host\":\"edge-01\",\"kind\":\"tls\",\"timestamp\":\"{TEST_TIME}\",\
                 \"signature\":\"ab12cd\",\"isSatisfied\":true}}"
            )
        );
    }

    #[test]
    fn test_satisfied_false_still_serialized() {
        let mut a = pinned();
        a.set_satisfied(false);
        assert!(a.to_json().unwrap().contains("\"isSatisfied\":false"));
    }

    #[test]
    fn test_signature_alone() {
        let mut a = pinned();
        a.set_signature("sig");
        let text = a.to_json().unwrap();
        assert!(text.contains("\"signature\":\"sig\""));
        assert!(!text.contains("isSatisfied"));
    }

    #[test]
    fn test_full_round_trip() {
        let mut a = pinned();
        a.set_signature("ab12cd");
        a.set_satisfied(true);
        let parsed = Annotation::from_json(&a.to_json().unwrap()).unwrap();
        assert_eq!(a, parsed);
    }

    #[test]
    fn test_parse_unset_optionals_round_trip() {
        // A document serialized before signing/verification re-reads as unset.
        let a = pinned();
        let parsed = Annotation::from_json(&a.to_json().unwrap()).unwrap();
        assert_eq!(a, parsed);
        assert!(parsed.signature.is_none());
        assert!(parsed.is_satisfied.is_none());
    }

    #[test]
    fn test_parse_null_optionals_treated_unset() {
        let text = format!(
            "{{\"id\":\"{TEST_ID}\",\"key\":\"k\",\"hash\":\"none\",\"host\":\"h\",\
             \"kind\":\"mock\",\"timestamp\":\"{TEST_TIME}\",\
             \"signature\":null,\"isSatisfied\":null}}"
        );
        let parsed = Annotation::from_json(&text).unwrap();
        assert!(parsed.signature.is_none());
        assert!(parsed.is_satisfied.is_none());
    }

    #[test]
    fn test_parse_non_bool_satisfied_rejected() {
        let text = format!(
            "{{\"id\":\"{TEST_ID}\",\"key\":\"k\",\"hash\":\"none\",\"host\":\"h\",\
             \"kind\":\"mock\",\"timestamp\":\"{TEST_TIME}\",\"isSatisfied\":\"yes\"}}"
        );
        let err = Annotation::from_json(&text).unwrap_err();
        assert!(matches!(
            err,
            ContractError::UnexpectedType { field: "isSatisfied", expected: "boolean" }
        ));
    }

    #[test]
    fn test_parse_missing_required_fields() {
        for field in ["id", "key", "hash", "host", "kind", "timestamp"] {
            let a = pinned();
            let mut value: Value = serde_json::from_str(&a.to_json().unwrap()).unwrap();
            value.as_object_mut().unwrap().remove(field);
            let err = Annotation::from_value(&value).unwrap_err();
            assert!(
                matches!(err, ContractError::MissingField(f) if f == field),
                "removing {field} gave {err}"
            );
        }
    }

    #[test]
    fn test_parse_bad_kind() {
        let text = format!(
            "{{\"id\":\"{TEST_ID}\",\"key\":\"k\",\"hash\":\"sha256\",\"host\":\"h\",\
             \"kind\":\"bogus\",\"timestamp\":\"{TEST_TIME}\"}}"
        );
        let err = Annotation::from_json(&text).unwrap_err();
        assert!(matches!(err, ContractError::InvalidKind(code) if code == "bogus"));
    }

    #[test]
    fn test_parse_bad_hash() {
        let text = format!(
            "{{\"id\":\"{TEST_ID}\",\"key\":\"k\",\"hash\":\"crc32\",\"host\":\"h\",\
             \"kind\":\"mock\",\"timestamp\":\"{TEST_TIME}\"}}"
        );
        let err = Annotation::from_json(&text).unwrap_err();
        assert!(matches!(err, ContractError::InvalidHashTag(_)));
    }

    #[test]
    fn test_parse_bad_id() {
        let text = format!(
            "{{\"id\":\"zzz\",\"key\":\"k\",\"hash\":\"sha256\",\"host\":\"h\",\
             \"kind\":\"mock\",\"timestamp\":\"{TEST_TIME}\"}}"
        );
        let err = Annotation::from_json(&text).unwrap_err();
        assert!(matches!(err, ContractError::InvalidIdentifier(_)));
    }

    #[test]
    fn test_parse_bad_timestamp() {
        let text = format!(
            "{{\"id\":\"{TEST_ID}\",\"key\":\"k\",\"hash\":\"sha256\",\"host\":\"h\",\
             \"kind\":\"mock\",\"timestamp\":\"yesterday\"}}"
        );
        let err = Annotation::from_json(&text).unwrap_err();
        assert!(matches!(err, ContractError::InvalidTimestamp(_)));
    }

    #[test]
    fn test_parse_malformed_json() {
        let err = Annotation::from_json("{not json").unwrap_err();
        assert!(matches!(err, ContractError::MalformedJson(_)));
    }

    #[test]
    fn test_parse_non_object() {
        let err = Annotation::from_json("[1,2,3]").unwrap_err();
        assert!(matches!(err, ContractError::UnexpectedType { .. }));
    }

    #[test]
    fn test_parse_wrong_type_for_required() {
        let text = format!(
            "{{\"id\":\"{TEST_ID}\",\"key\":7,\"hash\":\"sha256\",\"host\":\"h\",\
             \"kind\":\"mock\",\"timestamp\":\"{TEST_TIME}\"}}"
        );
        let err = Annotation::from_json(&text).unwrap_err();
        assert!(matches!(
            err,
            ContractError::UnexpectedType { field: "key", expected: "string" }
        ));
    }

    #[test]
    fn test_display_is_wire_text() {
        let mut a = pinned();
        a.set_signature("sig");
        assert_eq!(format!("{a}"), a.to_json().unwrap());
    }
}
