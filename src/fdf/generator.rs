//! Whole-document entry points.
//!
//! The typed functions take a [`FieldMap`] and cannot fail to encode. The
//! `_json` variants accept loosely-typed [`serde_json::Value`] input for
//! callers that receive field data from outside the program, and validate it
//! before doing any work.

use super::fdf_writer::{assemble, write_fields};
use super::field_map::FieldMap;
use crate::error::{Error, Result};
use serde_json::Value;
use std::path::Path;

/// Encode `fields` into a complete FDF document.
pub fn encode(fields: &FieldMap) -> Vec<u8> {
    assemble(fields)
}

/// Encode `fields` into a complete FDF document.
///
/// Same bytes as [`encode`].
pub fn generate_fdf_buffer(fields: &FieldMap) -> Vec<u8> {
    encode(fields)
}

/// Encode `fields` and write the document to `path`.
///
/// Fails with [`Error::InvalidPath`] for an empty path and with
/// [`Error::Io`] if the write itself fails. Exactly one write is issued.
pub fn generator(fields: &FieldMap, path: impl AsRef<Path>) -> Result<()> {
    write_fields(fields, path.as_ref())
}

/// Encode loosely-typed field data.
///
/// `data` must be a JSON object; anything else (null, primitives, arrays)
/// fails with [`Error::InvalidInput`].
///
/// # Example
///
/// ```
/// use fdf_oxide::fdf::encode_json;
/// use serde_json::json;
///
/// let bytes = encode_json(&json!({ "name": "José García", "age": 42 })).unwrap();
/// assert!(bytes.starts_with(b"%FDF-1.2"));
///
/// assert!(encode_json(&json!(null)).is_err());
/// ```
pub fn encode_json(data: &Value) -> Result<Vec<u8>> {
    let fields = FieldMap::try_from(data)?;
    Ok(encode(&fields))
}

/// Buffer-returning variant of [`encode_json`].
pub fn generate_fdf_buffer_json(data: &Value) -> Result<Vec<u8>> {
    encode_json(data)
}

/// Encode loosely-typed field data and write it to a loosely-typed path.
///
/// `data` is validated first ([`Error::InvalidInput`]), then `path` must be
/// a non-empty JSON string ([`Error::InvalidPath`]). No I/O happens unless
/// both are valid.
pub fn generator_json(data: &Value, path: &Value) -> Result<()> {
    let fields = FieldMap::try_from(data)?;
    let path = match path {
        Value::String(p) if !p.is_empty() => p,
        _ => return Err(Error::InvalidPath),
    };

    write_fields(&fields, Path::new(path))
}
