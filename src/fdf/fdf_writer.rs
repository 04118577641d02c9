//! FDF (Forms Data Format) writer implementation.
//!
//! Generates FDF files according to ISO 32000-1:2008 Section 12.7.7. The
//! document is a fixed header, one field record per entry and a fixed footer:
//!
//! ```text
//! %FDF-1.2
//! âãÏÓ
//! 1 0 obj
//! << /FDF << /Fields [ << /T (name) /V (value) >> ... ] >> >>
//! endobj
//! trailer << /Root 1 0 R >>
//! %%EOF
//! ```
//!
//! (shown flattened; the real output puts every token on its own line)

use super::field_map::{FdfField, FieldMap};
use super::scalar::{encode_scalar, encode_value};
use super::value::FieldValue;
use crate::error::{Error, Result};
use lazy_static::lazy_static;
use std::path::Path;

/// High-bit bytes on the second line marking the file as binary.
pub const BINARY_MARKER: [u8; 4] = [0xE2, 0xE3, 0xCF, 0xD3];

const HEADER_LINES: &[&[u8]] = &[
    b"%FDF-1.2\n",
    &BINARY_MARKER,
    b"\n",
    b"1 0 obj \n",
    b"<<\n",
    b"/FDF \n",
    b"<<\n",
    b"/Fields [\n",
];

const FOOTER_LINES: &[&[u8]] = &[
    b"]\n",
    b">>\n",
    b">>\n",
    b"endobj \n",
    b"trailer\n",
    b"\n",
    b"<<\n",
    b"/Root 1 0 R\n",
    b">>\n",
    b"%%EOF\n",
];

lazy_static! {
    static ref FDF_HEADER: Vec<u8> = HEADER_LINES.concat();
    static ref FDF_FOOTER: Vec<u8> = FOOTER_LINES.concat();
}

/// Bytes preceding the first field record.
pub fn fdf_header() -> &'static [u8] {
    &FDF_HEADER
}

/// Bytes following the last field record.
pub fn fdf_footer() -> &'static [u8] {
    &FDF_FOOTER
}

const RECORD_OPEN: &[u8] = b"<<\n/T (";
const RECORD_VALUE: &[u8] = b")\n/V (";
const RECORD_CLOSE: &[u8] = b")\n>>\n";

/// Append one `<< /T (name) /V (value) >>` record to `out`.
pub fn write_field_record(out: &mut Vec<u8>, name: &str, value: &FieldValue) {
    out.extend_from_slice(RECORD_OPEN);
    out.extend_from_slice(&encode_scalar(name));
    out.extend_from_slice(RECORD_VALUE);
    out.extend_from_slice(&encode_value(value));
    out.extend_from_slice(RECORD_CLOSE);
}

/// Assemble the full document for `fields`.
pub(crate) fn assemble(fields: &FieldMap) -> Vec<u8> {
    let mut output = fdf_header().to_vec();
    for field in fields {
        write_field_record(&mut output, &field.name, &field.value);
    }
    output.extend_from_slice(&FDF_FOOTER);

    log::debug!("Assembled FDF with {} fields ({} bytes)", fields.len(), output.len());
    output
}

/// Assemble the document for `fields` and write it to `path` in one call.
pub(crate) fn write_fields(fields: &FieldMap, path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(Error::InvalidPath);
    }

    let bytes = assemble(fields);
    std::fs::write(path, &bytes)?;
    log::debug!("Wrote {} bytes of FDF to {}", bytes.len(), path.display());
    Ok(())
}

/// FDF file writer.
///
/// Collects fields in insertion order and generates FDF (Forms Data Format)
/// bytes for them. Generation is pure: the same fields always produce the
/// same bytes.
///
/// # Example
///
/// ```
/// use fdf_oxide::fdf::FdfWriter;
///
/// let mut writer = FdfWriter::new();
/// writer.add_field("name", "John Doe");
/// writer.add_field("city", "東京");
///
/// let bytes = writer.to_bytes();
/// assert!(bytes.starts_with(b"%FDF-1.2\n"));
/// assert!(bytes.ends_with(b"%%EOF\n"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FdfWriter {
    /// Form fields to export
    fields: FieldMap,
}

impl FdfWriter {
    /// Create a new FDF writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an FDF writer for an existing field map.
    pub fn from_map(fields: FieldMap) -> Self {
        Self { fields }
    }

    /// Add a field to export.
    pub fn add_field(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name, value);
    }

    /// Add an FDF field directly.
    pub fn add_fdf_field(&mut self, field: FdfField) {
        self.fields.push(field);
    }

    /// Add a field, builder style.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.add_field(name, value);
        self
    }

    /// Fields queued for export.
    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    /// Generate FDF data as bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        assemble(&self.fields)
    }

    /// Write FDF data to a file.
    ///
    /// The file is created or truncated and written in a single call. An
    /// empty path is rejected with [`Error::InvalidPath`] before any I/O.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        write_fields(&self.fields, path.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_DOCUMENT: &[u8] = b"%FDF-1.2\n\xE2\xE3\xCF\xD3\n1 0 obj \n<<\n/FDF \n<<\n/Fields [\n]\n>>\n>>\nendobj \ntrailer\n\n<<\n/Root 1 0 R\n>>\n%%EOF\n";

    #[test]
    fn test_empty_document_layout() {
        assert_eq!(FdfWriter::new().to_bytes(), EMPTY_DOCUMENT.to_vec());
    }

    #[test]
    fn test_header_and_footer() {
        assert!(fdf_header().starts_with(b"%FDF-1.2\n"));
        assert!(fdf_header().ends_with(b"/Fields [\n"));
        assert!(fdf_footer().starts_with(b"]\n"));
        assert!(fdf_footer().ends_with(b"%%EOF\n"));
    }

    #[test]
    fn test_field_record_layout() {
        let mut out = Vec::new();
        write_field_record(&mut out, "name", &FieldValue::from("John"));
        assert_eq!(out, b"<<\n/T (name)\n/V (John)\n>>\n".to_vec());
    }

    #[test]
    fn test_empty_value_record() {
        let mut out = Vec::new();
        write_field_record(&mut out, "emptyField", &FieldValue::Absent);
        assert_eq!(out, b"<<\n/T (emptyField)\n/V ()\n>>\n".to_vec());
    }

    #[test]
    fn test_single_field_document() {
        let bytes = FdfWriter::new().with_field("test", "value").to_bytes();

        let mut expected = fdf_header().to_vec();
        expected.extend_from_slice(b"<<\n/T (test)\n/V (value)\n>>\n");
        expected.extend_from_slice(fdf_footer());
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_unicode_value_record() {
        let mut out = Vec::new();
        write_field_record(&mut out, "city", &FieldValue::from("東京"));

        let mut expected = b"<<\n/T (city)\n/V (".to_vec();
        expected.extend_from_slice(&[0xFE, 0xFF, 0x67, 0x71, 0x4E, 0xAC]);
        expected.extend_from_slice(b")\n>>\n");
        assert_eq!(out, expected);
    }

    #[test]
    fn test_write_to_file_rejects_empty_path() {
        let writer = FdfWriter::new().with_field("a", "b");
        assert!(matches!(writer.write_to_file(""), Err(Error::InvalidPath)));
    }
}
