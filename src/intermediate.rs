//! Canonical Intermediate Document
//!
//! The reconciled form of the two raw config sources: resolved top-level scalars
//! plus three collections keyed `"1"`, `"2"`, ... in allocation order. It carries
//! everything needed to build the output document deterministically, so any
//! problem on the visualization side should first be checked here.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

/// A collection whose keys are the 1-based allocation indices of its entries.
///
/// Keys are never stored; they are the entry positions, so there are no gaps and
/// no placeholder keys. The next key to be allocated is `next_index()`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexedCollection {
    entries: Vec<Map<String, Value>>,
}

impl IndexedCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index the next pushed entry will receive.
    pub fn next_index(&self) -> usize {
        self.entries.len() + 1
    }

    /// Append an entry and return its index.
    pub fn push(&mut self, entry: Map<String, Value>) -> usize {
        self.entries.push(entry);
        self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry by its string key (`"1"`, `"2"`, ...).
    pub fn get(&self, key: &str) -> Option<&Map<String, Value>> {
        let index: usize = key.parse().ok()?;
        index.checked_sub(1).and_then(|i| self.entries.get(i))
    }

    /// Entries with their keys, in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (String, &Map<String, Value>)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| ((i + 1).to_string(), entry))
    }

    /// Entries without keys, in allocation order.
    pub fn entries(&self) -> &[Map<String, Value>] {
        &self.entries
    }
}

impl Serialize for IndexedCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, entry) in self.iter() {
            map.serialize_entry(&key, entry)?;
        }
        map.end()
    }
}

/// Reconciled document. Scalars hold `Value::Null` while unresolved.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct IntermediateDocument {
    #[serde(rename = "type")]
    pub chart_type: Value,
    pub value_axes: IndexedCollection,
    #[serde(rename = "seriesParams")]
    pub series_params: IndexedCollection,
    pub index_pattern: Value,
    pub desc: Value,
    pub id: Value,
    pub aggs: IndexedCollection,
    pub title: Value,
    pub num_cat_axes: Value,
}

impl Default for IntermediateDocument {
    fn default() -> Self {
        Self {
            chart_type: Value::Null,
            value_axes: IndexedCollection::new(),
            series_params: IndexedCollection::new(),
            index_pattern: Value::Null,
            desc: Value::Null,
            id: Value::Null,
            aggs: IndexedCollection::new(),
            title: Value::Null,
            num_cat_axes: Value::Null,
        }
    }
}

impl IntermediateDocument {
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}
