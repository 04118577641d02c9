// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::enum_variant_names)]

//! # FDF Oxide
//!
//! Byte-exact FDF (Forms Data Format) generation in Rust.
//!
//! ## Core Features
//!
//! - **ISO 32000 Compliance**: FDF document layout per ISO 32000-1:2008 Section 12.7.7
//! - **Unicode Field Data**: non-ASCII names and values written as UTF-16BE
//!   text strings with a byte order mark (§7.9.2.2)
//! - **Literal String Escaping**: `\`, `(` and `)` escaped in every name and value
//! - **Ordered Output**: fields emitted exactly in insertion order, duplicates kept
//! - **Typed and Dynamic Input**: build a [`fdf::FieldMap`] directly or pass a
//!   `serde_json::Value` object
//!
//! ## Quick Start
//!
//! ```
//! use fdf_oxide::fdf::{encode, FieldMap};
//!
//! let fields = FieldMap::new()
//!     .with("name", "José García")
//!     .with("note", "test (with parens)")
//!     .with("subscribed", true);
//!
//! let bytes = encode(&fields);
//! assert!(bytes.starts_with(b"%FDF-1.2\n"));
//! assert!(bytes.ends_with(b"%%EOF\n"));
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Error handling
pub mod error;

// FDF form data export
pub mod fdf;

// Re-exports
pub use error::{Error, Result};
pub use fdf::{encode, generate_fdf_buffer, generator, FdfWriter, FieldMap, FieldValue};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
