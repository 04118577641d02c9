//! Ordered name/value collections for FDF export.

use super::value::FieldValue;
use crate::error::{Error, Result};
use indexmap::IndexMap;

/// A form field for FDF export.
#[derive(Debug, Clone, PartialEq)]
pub struct FdfField {
    /// Full qualified field name
    pub name: String,
    /// Field value
    pub value: FieldValue,
}

impl FdfField {
    /// Create a new FDF field.
    pub fn new(name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Ordered mapping of field names to values.
///
/// Entries keep insertion order and are never sorted or merged: inserting the
/// same name twice yields two records in the generated document.
///
/// # Example
///
/// ```
/// use fdf_oxide::fdf::FieldMap;
///
/// let fields = FieldMap::new()
///     .with("name", "José García")
///     .with("age", 42)
///     .with("subscribed", true);
/// assert_eq!(fields.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldMap {
    fields: Vec<FdfField>,
}

impl FieldMap {
    /// Create an empty field map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty field map with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Append an entry.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.push(FdfField::new(name, value));
    }

    /// Append an entry, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Append an already built field.
    pub fn push(&mut self, field: FdfField) {
        self.fields.push(field);
    }

    /// Value of the first entry named `name`.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| &f.value)
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, FdfField> {
        self.fields.iter()
    }
}

impl<'a> IntoIterator for &'a FieldMap {
    type Item = &'a FdfField;
    type IntoIter = std::slice::Iter<'a, FdfField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl IntoIterator for FieldMap {
    type Item = FdfField;
    type IntoIter = std::vec::IntoIter<FdfField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = FieldMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>, V: Into<FieldValue>> Extend<(K, V)> for FieldMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

impl From<Vec<FdfField>> for FieldMap {
    fn from(fields: Vec<FdfField>) -> Self {
        Self { fields }
    }
}

impl<K: Into<String>, V: Into<FieldValue>> From<Vec<(K, V)>> for FieldMap {
    fn from(entries: Vec<(K, V)>) -> Self {
        entries.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<FieldValue>, const N: usize> From<[(K, V); N]> for FieldMap {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<FieldValue>> From<IndexMap<K, V>> for FieldMap {
    fn from(map: IndexMap<K, V>) -> Self {
        map.into_iter().collect()
    }
}

impl TryFrom<&serde_json::Value> for FieldMap {
    type Error = Error;

    /// Accept only JSON objects; key order is preserved.
    fn try_from(value: &serde_json::Value) -> Result<Self> {
        let object = value.as_object().ok_or(Error::InvalidInput)?;

        let mut map = FieldMap::with_capacity(object.len());
        for (name, value) in object {
            map.insert(name.as_str(), FieldValue::from(value));
        }
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insertion_order_kept() {
        let map = FieldMap::new().with("zeta", "1").with("alpha", "2").with("mid", "3");
        let names: Vec<&str> = map.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_duplicates_not_merged() {
        let mut map = FieldMap::new();
        map.insert("name", "first");
        map.insert("name", "second");
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("name"), Some(&FieldValue::Text("first".into())));
    }

    #[test]
    fn test_from_index_map() {
        let mut source = IndexMap::new();
        source.insert("b", 2);
        source.insert("a", 1);
        let map = FieldMap::from(source);
        assert_eq!(map.iter().next().map(|f| f.name.as_str()), Some("b"));
        assert_eq!(map.get("a"), Some(&FieldValue::Integer(1)));
    }

    #[test]
    fn test_from_array() {
        let map = FieldMap::from([("city", "東京"), ("country", "Japan")]);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_try_from_json_object() {
        let value = json!({ "zeta": "z", "alpha": null, "count": 3 });
        let map = FieldMap::try_from(&value).unwrap();
        let names: Vec<&str> = map.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "count"]);
        assert_eq!(map.get("alpha"), Some(&FieldValue::Absent));
    }

    #[test]
    fn test_try_from_json_rejects_non_objects() {
        for value in [json!(null), json!("x"), json!(42), json!(true), json!(["a", "b"])] {
            assert!(matches!(FieldMap::try_from(&value), Err(Error::InvalidInput)));
        }
    }

    #[test]
    fn test_field_map_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FieldMap>();
    }
}
