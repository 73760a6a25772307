//! XML text helpers for xml2rfc output.
//!
//! Everything written into the generated document passes through one of two
//! paths:
//!
//! - [`escape_xml`] / [`write_escaped`]: replace `<`, `>` and `&` with their
//!   named entities so author-supplied text cannot break the document
//! - [`strip_markup`] / [`write_stripped`] / [`strip_markup_in_place`]: drop
//!   embedded `<...>` spans where only plain text is allowed
//!
//! [`Dialect`] selects between the two xml2rfc vocabularies and is shared by
//! the emitter crates.
//!
//! # Example
//!
//! ```
//! use rfcmark_xml::{strip_markup, write_escaped};
//!
//! let mut out = String::new();
//! write_escaped(&mut out, &strip_markup("<b>Smith & Sons</b>"));
//! assert_eq!(out, "Smith &amp; Sons");
//! ```

mod dialect;
mod escape;
mod sanitize;

pub use dialect::{Dialect, UnsupportedDialect};
pub use escape::{escape_xml, escape_xml_attr, write_escaped, write_escaped_attr};
pub use sanitize::{strip_markup, strip_markup_in_place, write_stripped};
