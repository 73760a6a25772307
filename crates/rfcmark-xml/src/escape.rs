//! XML entity escaping.
//!
//! Text content only needs `<`, `>` and `&` replaced. Quotes pass through
//! [`escape_xml`] untouched, so values placed inside a double-quoted attribute
//! must go through [`escape_xml_attr`] instead.

use std::borrow::Cow;

use quick_xml::escape::{escape, partial_escape};

/// Escape `<`, `>` and `&` as `&lt;`, `&gt;` and `&amp;`.
///
/// This is a single literal substitution pass: existing entities are not
/// recognized, so `&amp;` becomes `&amp;amp;`. Borrows the input when nothing
/// needs escaping.
///
/// # Examples
///
/// ```
/// use rfcmark_xml::escape_xml;
///
/// assert_eq!(escape_xml("A & B <C>"), "A &amp; B &lt;C&gt;");
/// assert_eq!(escape_xml(r#"say "hi""#), r#"say "hi""#);
/// ```
pub fn escape_xml(text: &str) -> Cow<'_, str> {
    partial_escape(text)
}

/// Escape text for use inside an attribute value.
///
/// Same as [`escape_xml`], plus `"` and `'` become `&quot;` and `&apos;`.
pub fn escape_xml_attr(text: &str) -> Cow<'_, str> {
    escape(text)
}

/// Append `text` to `out` with `<`, `>` and `&` escaped.
pub fn write_escaped(out: &mut String, text: &str) {
    out.push_str(&escape_xml(text));
}

/// Append `text` to `out` escaped for an attribute value.
pub fn write_escaped_attr(out: &mut String, text: &str) {
    out.push_str(&escape_xml_attr(text));
}
