//! Title block emitters for xml2rfc documents.
//!
//! Turns parsed front matter into the XML fragments of a document's `<front>`
//! section. Each emitter appends to a caller-supplied `String` and never
//! touches its inputs:
//!
//! - [`write_author`]: `<author>` with organization and postal address
//! - [`write_date`]: `<date/>` with optional year, month name and day
//! - [`write_keywords`]: one `<keyword>` per keyword
//! - [`process_instruction`] / [`write_process_instructions`]: v2 `<?rfc ...?>`
//!   rendering toggles
//!
//! Enable the `serde` feature to deserialize [`Author`] and
//! [`ProcessInstructions`] from front matter.
//!
//! # Example
//!
//! ```
//! use rfcmark_titleblock::{TitleDate, write_date, write_keywords};
//!
//! let mut out = String::new();
//! write_date(&mut out, &TitleDate::from_parts(1997, 4, 0));
//! write_keywords(&mut out, ["dns"]);
//! assert_eq!(out, "<date year=\"1997\" month=\"April\"/>\n\n<keyword>dns</keyword>\n");
//! ```

mod author;
mod date;
mod keyword;
mod pi;

pub use author::{Address, Author, Postal, write_author};
pub use date::{TitleDate, month_name, write_date};
pub use keyword::write_keywords;
pub use pi::{
    ProcessInstruction, ProcessInstructions, UnknownProcessInstruction, process_instruction,
    write_process_instructions,
};
pub use rfcmark_xml::Dialect;
