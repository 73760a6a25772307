//! TOML title block as written at the top of a source document.
//!
//! ```toml
//! title = "Using DNS for OpenPGP keys"
//! abbrev = "OpenPGP in DNS"
//! date = 2015-08-27T00:00:00Z
//! keyword = ["dns", "openpgp"]
//!
//! [pi]
//! toc = "yes"
//! header = "Internet-Draft"
//!
//! [[author]]
//! initials = "R."
//! surname = "Gieben"
//! fullname = "R. (Miek) Gieben"
//! organization = "Google"
//! [author.address]
//! email = "miek@google.com"
//! [author.address.postal]
//! street = "1600 Amphitheatre Parkway"
//! ```

use rfcmark_titleblock::{
    Author, Dialect, ProcessInstructions, TitleDate, write_author, write_date, write_keywords,
    write_process_instructions,
};
use rfcmark_xml::{strip_markup, write_escaped, write_escaped_attr};
use serde::Deserialize;
use toml::value::Datetime;

/// Parsed title block.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct FrontMatter {
    pub(crate) title: String,
    /// Short title for page headers.
    pub(crate) abbrev: Option<String>,
    pub(crate) date: Option<Datetime>,
    pub(crate) keyword: Vec<String>,
    pub(crate) pi: ProcessInstructions,
    pub(crate) author: Vec<Author>,
}

impl FrontMatter {
    pub(crate) fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Calendar part of `date`; absent when no date was given.
    pub(crate) fn title_date(&self) -> TitleDate {
        self.date
            .and_then(|datetime| datetime.date)
            .map(|date| {
                TitleDate::from_parts(
                    i32::from(date.year),
                    i32::from(date.month),
                    i32::from(date.day),
                )
            })
            .unwrap_or_default()
    }

    /// Write the title block: processing instructions (v2 only), title,
    /// authors in declaration order, date and keywords.
    pub(crate) fn write(&self, out: &mut String, dialect: Dialect) {
        write_process_instructions(out, &self.pi, dialect);
        self.write_title(out);
        for author in &self.author {
            write_author(out, author);
        }
        write_date(out, &self.title_date());
        write_keywords(out, &self.keyword);
    }

    /// Titles may carry inline markup from the source; only its text is kept.
    fn write_title(&self, out: &mut String) {
        out.push_str("<title");
        if let Some(abbrev) = self.abbrev.as_deref().filter(|a| !a.is_empty()) {
            out.push_str(" abbrev=\"");
            write_escaped_attr(out, &strip_markup(abbrev));
            out.push('"');
        }
        out.push('>');
        write_escaped(out, &strip_markup(&self.title));
        out.push_str("</title>\n");
    }
}
