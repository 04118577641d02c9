//! Scalar encoding for FDF string literals.
//!
//! Each field name and field value is encoded on its own into the bytes that
//! sit between the `(` and `)` delimiters of a literal string. Per
//! ISO 32000-1:2008, Section 7.9.2.2 a text string is either PDFDocEncoding
//! or UTF-16BE prefixed with the byte order mark `FE FF`:
//!
//! - ASCII-only text is written byte for byte
//! - Anything else is widened to UTF-16BE behind the BOM

use super::value::FieldValue;
use byteorder::{BigEndian, ByteOrder};
use std::borrow::Cow;

/// Byte order mark that opens a UTF-16BE text string.
pub const UTF16BE_BOM: [u8; 2] = [0xFE, 0xFF];

/// Escape the characters that are significant inside a literal string.
///
/// Backslashes are doubled first so the backslashes in front of escaped
/// parentheses are never escaped a second time. Returns the input unchanged
/// when nothing needs escaping.
pub fn escape_literal(text: &str) -> Cow<'_, str> {
    if !text.contains(&['\\', '(', ')'][..]) {
        return Cow::Borrowed(text);
    }

    let escaped = text.replace('\\', "\\\\");
    let escaped = escaped.replace('(', "\\(");
    Cow::Owned(escaped.replace(')', "\\)"))
}

/// Check whether every character of `text` is in the 7-bit ASCII range.
#[inline]
pub fn is_ascii_text(text: &str) -> bool {
    text.is_ascii()
}

/// Encode text as UTF-16BE with a leading byte order mark.
///
/// Characters outside the Basic Multilingual Plane become surrogate pairs,
/// each code unit written big-endian.
pub fn encode_utf16be(text: &str) -> Vec<u8> {
    let units: Vec<u16> = text.encode_utf16().collect();

    let mut out = vec![0u8; UTF16BE_BOM.len() + units.len() * 2];
    out[..UTF16BE_BOM.len()].copy_from_slice(&UTF16BE_BOM);
    BigEndian::write_u16_into(&units, &mut out[UTF16BE_BOM.len()..]);
    out
}

/// Encode one field name or value for placement inside `( ... )`.
///
/// Escapes first, then picks the ASCII or UTF-16BE path from the escaped
/// text. Empty text encodes to zero bytes with no BOM.
pub fn encode_scalar(text: &str) -> Vec<u8> {
    let escaped = escape_literal(text);

    if is_ascii_text(&escaped) {
        escaped.into_owned().into_bytes()
    } else {
        encode_utf16be(&escaped)
    }
}

/// Encode a field value after coercing it to its canonical text.
pub fn encode_value(value: &FieldValue) -> Vec<u8> {
    encode_scalar(&value.to_text())
}
