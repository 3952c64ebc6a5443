// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core data types: records, field selectors, match results.
//!
//! Records are flat: field name to optional text. The engine never looks inside
//! a record except through [`Searchable`], so callers can search their own
//! structs without copying them into [`Record`] first.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Field that identifies a record unless the caller says otherwise.
pub const DEFAULT_ID_FIELD: &str = "id";

/// Read access to a record's text fields.
///
/// `text_fields` must return fields in an order that is stable for a given
/// record: it decides the order of `matched_fields` when searching all fields.
pub trait Searchable {
    /// Value of `name`, or `None` if the field is missing or has no value.
    fn field(&self, name: &str) -> Option<&str>;

    /// Every field that currently holds text, as `(name, value)` pairs.
    fn text_fields(&self) -> Vec<(&str, &str)>;
}

/// A flat record: field name to optional text value.
///
/// Backed by an ordered map, so "all fields" means alphabetical field order.
/// Serializes as a plain JSON object with `null` for absent values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, Option<String>>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for a present value.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), Some(value.into()));
        self
    }

    /// Builder-style setter for an explicitly absent value.
    pub fn without(mut self, name: impl Into<String>) -> Self {
        self.fields.insert(name.into(), None);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Option<String>) {
        self.fields.insert(name.into(), value);
    }

    /// Identity under the default `id` field.
    pub fn id(&self) -> Option<&str> {
        self.identity(DEFAULT_ID_FIELD)
    }

    /// Identity under a caller-chosen field.
    pub fn identity(&self, id_field: &str) -> Option<&str> {
        self.field(id_field)
    }

    /// Flatten one JSON object into a record.
    ///
    /// Strings are kept, `null` becomes an absent value, numbers and booleans
    /// are stringified. Nested arrays and objects are not text and are left
    /// out. Returns `None` if `value` is not an object.
    pub fn from_json_value(value: &serde_json::Value) -> Option<Self> {
        use serde_json::Value;

        let object = value.as_object()?;
        let fields = object
            .iter()
            .filter_map(|(name, value)| {
                let text = match value {
                    Value::String(s) => Some(s.clone()),
                    Value::Null => None,
                    Value::Number(n) => Some(n.to_string()),
                    Value::Bool(b) => Some(b.to_string()),
                    Value::Array(_) | Value::Object(_) => return None,
                };
                Some((name.clone(), text))
            })
            .collect();

        Some(Self { fields })
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Parse a JSON array of flat objects into records.
///
/// Entries that are not objects are skipped with a warning rather than failing
/// the whole batch.
pub fn records_from_json(json: &str) -> Result<Vec<Record>, serde_json::Error> {
    let values: Vec<serde_json::Value> = serde_json::from_str(json)?;
    let total = values.len();

    let records: Vec<Record> = values
        .iter()
        .enumerate()
        .filter_map(|(i, value)| {
            let record = Record::from_json_value(value);
            if record.is_none() {
                tracing::warn!(entry = i, "skipping non-object record entry");
            }
            record
        })
        .collect();

    tracing::debug!(total, loaded = records.len(), "parsed records");
    Ok(records)
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, Option<V>)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.map(Into::into)))
                .collect(),
        }
    }
}

impl Searchable for Record {
    fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(|v| v.as_deref())
    }

    fn text_fields(&self) -> Vec<(&str, &str)> {
        self.fields
            .iter()
            .filter_map(|(k, v)| v.as_deref().map(|v| (k.as_str(), v)))
            .collect()
    }
}

impl Searchable for BTreeMap<String, Option<String>> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|v| v.as_deref())
    }

    fn text_fields(&self) -> Vec<(&str, &str)> {
        self.iter()
            .filter_map(|(k, v)| v.as_deref().map(|v| (k.as_str(), v)))
            .collect()
    }
}

impl Searchable for BTreeMap<String, String> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }

    fn text_fields(&self) -> Vec<(&str, &str)> {
        self.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
    }
}

// HashMap iteration order is arbitrary but fixed for an unmodified map, which
// is all `text_fields` promises.
impl Searchable for HashMap<String, Option<String>> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|v| v.as_deref())
    }

    fn text_fields(&self) -> Vec<(&str, &str)> {
        self.iter()
            .filter_map(|(k, v)| v.as_deref().map(|v| (k.as_str(), v)))
            .collect()
    }
}

impl Searchable for HashMap<String, String> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }

    fn text_fields(&self) -> Vec<(&str, &str)> {
        self.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
    }
}

/// Which fields of a record take part in scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldSelector {
    /// Every text-valued field of the record.
    #[default]
    All,
    /// Only these fields, in this order. Repeats are scored once.
    Only(Vec<String>),
}

impl FieldSelector {
    pub fn only<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldSelector::Only(fields.into_iter().map(Into::into).collect())
    }

    /// Resolve against one record: `(name, value)` for each selected field
    /// that has a value, first occurrence order, no duplicates.
    pub fn resolve<'r, R: Searchable + ?Sized>(&'r self, record: &'r R) -> Vec<(&'r str, &'r str)> {
        match self {
            FieldSelector::All => record.text_fields(),
            FieldSelector::Only(names) => {
                let mut out: Vec<(&str, &str)> = Vec::with_capacity(names.len());
                for name in names {
                    if out.iter().any(|(seen, _)| *seen == name.as_str()) {
                        continue;
                    }
                    if let Some(value) = record.field(name) {
                        out.push((name.as_str(), value));
                    }
                }
                out
            }
        }
    }
}

/// Best score of one record plus the fields that reached it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldScore {
    pub best: u8,
    pub matched_fields: Vec<String>,
}

/// One entry of a ranked result list.
///
/// Borrows the record from the caller's slice; `index` is its position there,
/// which is also the tie-breaker between equal scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult<'a, R> {
    pub item: &'a R,
    pub index: usize,
    pub score: u8,
    pub matched_fields: Vec<String>,
}
