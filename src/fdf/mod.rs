//! Forms Data Format (FDF) generation for form field values.
//!
//! Turns an ordered name/value mapping into a byte-exact FDF document
//! (ISO 32000-1:2008 Section 12.7.7) that PDF viewers and tools can import to
//! fill form fields.
//!
//! The work is split in two:
//! - **Scalar encoding** ([`scalar`]): escapes `\`, `(` and `)` and writes ASCII
//!   text as-is, or UTF-16BE behind a `FE FF` byte order mark otherwise
//! - **Document assembly** ([`FdfWriter`]): frames each name/value pair as a
//!   `<< /T (...) /V (...) >>` record between a fixed header and footer
//!
//! ## Example
//!
//! ```no_run
//! use fdf_oxide::fdf::{generator, FieldMap};
//!
//! # fn main() -> fdf_oxide::Result<()> {
//! let fields = FieldMap::new()
//!     .with("name", "José García")
//!     .with("city", "東京")
//!     .with("age", 42);
//!
//! generator(&fields, "form_data.fdf")?;
//! # Ok(())
//! # }
//! ```

mod fdf_writer;
mod field_map;
mod generator;
pub mod scalar;
mod value;

pub use fdf_writer::{fdf_footer, fdf_header, write_field_record, FdfWriter, BINARY_MARKER};
pub use field_map::{FdfField, FieldMap};
pub use generator::{
    encode, encode_json, generate_fdf_buffer, generate_fdf_buffer_json, generator, generator_json,
};
pub use scalar::{encode_scalar, encode_value, UTF16BE_BOM};
pub use value::FieldValue;
