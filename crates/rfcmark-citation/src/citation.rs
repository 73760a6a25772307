//! Citation model and compact citation syntax.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Compact citation syntax: `[@!RFC2119]`, `@?I-D.ietf-dane-openpgpkey#02`, `RFC7049`.
///
/// Groups: 1 = class marker, 2 = link, 3 = revision.
static CITATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[?@?([!?])?([^#@!?\[\]\s]+)(?:#([^\]\s]*))?\]?$").expect("invalid citation regex")
});

/// Whether a cited document is required reading or background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CitationClass {
    Informative,
    Normative,
}

impl CitationClass {
    /// Heading of the back-matter section listing citations of this class.
    #[must_use]
    pub fn section_title(self) -> &'static str {
        match self {
            CitationClass::Informative => "Informative References",
            CitationClass::Normative => "Normative References",
        }
    }

    fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "!" => Some(CitationClass::Normative),
            "?" => Some(CitationClass::Informative),
            _ => None,
        }
    }
}

impl fmt::Display for CitationClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CitationClass::Informative => f.write_str("informative"),
            CitationClass::Normative => f.write_str("normative"),
        }
    }
}

/// Bibliography archive entry a citation link points at.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReferenceTarget {
    /// `RFC2119` -> number `2119`.
    Rfc { number: String },
    /// `I-D.ietf-dane-openpgpkey` -> name `ietf-dane-openpgpkey`.
    InternetDraft { name: String },
}

impl ReferenceTarget {
    /// Classify a raw link by its three-byte kind tag.
    ///
    /// Links shorter than four bytes and unknown tags are not resolvable.
    /// For RFCs everything after the tag is the number; for drafts the byte
    /// following the tag is a separator and is skipped.
    pub fn from_link(link: &str) -> Option<Self> {
        if link.len() < 4 {
            return None;
        }
        match link.get(..3)? {
            "RFC" => Some(ReferenceTarget::Rfc {
                number: link[3..].to_owned(),
            }),
            "I-D" => link.get(4..).map(|name| ReferenceTarget::InternetDraft {
                name: name.to_owned(),
            }),
            _ => None,
        }
    }
}

/// One bibliographic reference used in a document.
///
/// The reference target is derived from the link once, at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Citation {
    link: String,
    target: Option<ReferenceTarget>,
    sequence: Option<u32>,
    class: Option<CitationClass>,
}

impl Citation {
    /// Create an unclassified citation of the latest revision.
    pub fn new(link: impl Into<String>) -> Self {
        let link = link.into();
        let target = ReferenceTarget::from_link(&link);
        Self {
            link,
            target,
            sequence: None,
            class: None,
        }
    }

    /// Pin the citation to a draft revision.
    #[must_use]
    pub fn with_sequence(mut self, sequence: u32) -> Self {
        self.sequence = Some(sequence);
        self
    }

    /// Set the citation class.
    #[must_use]
    pub fn with_class(mut self, class: CitationClass) -> Self {
        self.class = Some(class);
        self
    }

    /// Parse the compact citation syntax found in source text.
    ///
    /// Accepts an optional `[@` ... `]` wrapper, a `!` (normative) or `?`
    /// (informative) marker and a `#NN` revision suffix. Without a marker the
    /// citation is informative. A revision that is not a number is ignored.
    /// Returns `None` when no link can be found.
    ///
    /// # Examples
    ///
    /// ```
    /// use rfcmark_citation::{Citation, CitationClass};
    ///
    /// let c = Citation::parse("[@?I-D.ietf-dane-openpgpkey#02]").unwrap();
    /// assert_eq!(c.link(), "I-D.ietf-dane-openpgpkey");
    /// assert_eq!(c.sequence(), Some(2));
    /// assert_eq!(c.class(), Some(CitationClass::Informative));
    /// ```
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        let Some(caps) = CITATION_PATTERN.captures(token) else {
            tracing::debug!(token = %token, "Not a citation");
            return None;
        };

        let mut citation = Citation::new(&caps[2]);
        citation.class = Some(
            caps.get(1)
                .and_then(|m| CitationClass::from_marker(m.as_str()))
                .unwrap_or(CitationClass::Informative),
        );
        if let Some(revision) = caps.get(3) {
            match revision.as_str().parse::<u32>() {
                Ok(sequence) => citation.sequence = Some(sequence),
                Err(_) => tracing::debug!(
                    token = %token,
                    revision = revision.as_str(),
                    "Ignoring non-numeric draft revision"
                ),
            }
        }
        Some(citation)
    }

    /// Raw reference token, e.g. `RFC2119`.
    pub fn link(&self) -> &str {
        &self.link
    }

    /// Archive entry derived from the link, if the link is resolvable.
    pub fn target(&self) -> Option<&ReferenceTarget> {
        self.target.as_ref()
    }

    /// Draft revision; `None` means the latest one.
    pub fn sequence(&self) -> Option<u32> {
        self.sequence
    }

    pub fn class(&self) -> Option<CitationClass> {
        self.class
    }

    /// Fold a repeated citation of the same link into this one.
    ///
    /// A normative use anywhere wins over an informative one, and the most
    /// recent explicit revision wins.
    pub(crate) fn merge(&mut self, other: Citation) {
        if other.class == Some(CitationClass::Normative) || self.class.is_none() {
            self.class = other.class.or(self.class);
        }
        if other.sequence.is_some() {
            self.sequence = other.sequence;
        }
    }
}
