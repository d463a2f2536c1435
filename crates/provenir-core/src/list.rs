//! # Annotation List — The Batch Envelope
//!
//! An ordered, order-preserving container of annotations with its own wire
//! envelope `{"items":[ ... ]}`. Insertion order is the wire order; nothing
//! is deduplicated; the empty batch is legal and encodes as
//! `{"items":[]}`. Decoding fails fast with the first failing element's
//! error — no partial list is ever returned.

use serde::Serialize;
use serde_json::Value;

use crate::annotation::{as_object, Annotation};
use crate::error::ContractError;

/// An ordered batch of annotations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnnotationList {
    /// The annotations, in insertion order.
    pub items: Vec<Annotation>,
}

impl AnnotationList {
    /// Create an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an annotation, preserving insertion order.
    pub fn push(&mut self, annotation: Annotation) {
        self.items.push(annotation);
    }

    /// Number of annotations in the batch.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the batch holds no annotations.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate the annotations in wire order.
    pub fn iter(&self) -> std::slice::Iter<'_, Annotation> {
        self.items.iter()
    }

    /// Encode to the wire JSON text (`{"items":[...]}`).
    pub fn to_json(&self) -> Result<String, ContractError> {
        serde_json::to_string(self).map_err(ContractError::Serialization)
    }

    /// Decode from wire JSON text.
    ///
    /// # Errors
    ///
    /// [`ContractError::MissingField`] if `items` is absent,
    /// [`ContractError::UnexpectedType`] if it is not an array, and
    /// otherwise whatever error the first failing element raises.
    pub fn from_json(data: &str) -> Result<Self, ContractError> {
        let value: Value = serde_json::from_str(data)?;
        let object = as_object(&value)?;
        let items = object
            .get("items")
            .ok_or(ContractError::MissingField("items"))?
            .as_array()
            .ok_or(ContractError::UnexpectedType {
                field: "items",
                expected: "array",
            })?
            .iter()
            .map(Annotation::from_value)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { items })
    }
}

impl From<Vec<Annotation>> for AnnotationList {
    fn from(items: Vec<Annotation>) -> Self {
        Self { items }
    }
}

impl IntoIterator for AnnotationList {
    type Item = Annotation;
    type IntoIter = std::vec::IntoIter<Annotation>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a AnnotationList {
    type Item = &'a Annotation;
    type IntoIter = std::slice::Iter<'a, Annotation>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl std::fmt::Display for AnnotationList {
    /// The display form is exactly the wire text.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_json().map_err(|_| std::fmt::Error)?)
    }
}
