//! Markup stripping.
//!
//! A two-state scanner: outside a tag characters are kept, after `<` they are
//! dropped until the next `>`. Nesting, attributes and quoted `>` are not
//! understood. An unterminated tag drops everything up to the end of input.

use std::borrow::Cow;

/// Scanner state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Outside,
    InsideTag,
}

impl State {
    /// Advance on `ch`, returning whether `ch` belongs in the output.
    fn step(&mut self, ch: char) -> bool {
        match (ch, *self) {
            ('<', _) => {
                *self = State::InsideTag;
                false
            }
            ('>', _) => {
                *self = State::Outside;
                false
            }
            (_, State::Outside) => true,
            (_, State::InsideTag) => false,
        }
    }
}

/// Strip markup from a buffer the caller owns, truncating it in place.
///
/// Produces the same text as [`write_stripped`].
pub fn strip_markup_in_place(buf: &mut String) {
    let mut state = State::Outside;
    buf.retain(|ch| state.step(ch));
}

/// Append `text` to `out` with all `<...>` spans removed.
pub fn write_stripped(out: &mut String, text: &str) {
    let mut state = State::Outside;
    out.extend(text.chars().filter(|&ch| state.step(ch)));
}

/// Return `text` with all `<...>` spans removed.
///
/// Borrows the input when it contains no delimiters.
///
/// # Examples
///
/// ```
/// use rfcmark_xml::strip_markup;
///
/// assert_eq!(strip_markup("a <b>bold</b> move"), "a bold move");
/// assert_eq!(strip_markup("cut <here"), "cut ");
/// ```
pub fn strip_markup(text: &str) -> Cow<'_, str> {
    if !text.contains(['<', '>']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    write_stripped(&mut out, text);
    Cow::Owned(out)
}
