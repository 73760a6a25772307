//! Bibliography URL resolution.

use crate::citation::{Citation, ReferenceTarget};

/// Archive holding `reference.RFC.*.xml` entries.
pub const DEFAULT_RFC_BASE_URL: &str = "http://xml2rfc.ietf.org/public/rfc/bibxml/";

/// Archive holding `reference.I-D.*.xml` entries.
pub const DEFAULT_ID_BASE_URL: &str = "http://xml2rfc.ietf.org/public/rfc/bibxml3/";

const REFERENCE_RFC: &str = "reference.RFC.";
// The archive names pinned revisions with a `draft-` prefix, latest without.
const REFERENCE_DRAFT: &str = "reference.I-D.draft-";
const REFERENCE_DRAFT_LATEST: &str = "reference.I-D.";
const EXTENSION: &str = ".xml";

/// Derives bibliography file URLs from citations.
///
/// The two archive base URLs are fixed at construction; resolution is a pure
/// function of the citation.
///
/// # Examples
///
/// ```
/// use rfcmark_citation::{Citation, CitationResolver};
///
/// let resolver = CitationResolver::default();
/// assert_eq!(
///     resolver.resolve(&Citation::new("RFC2119")),
///     "http://xml2rfc.ietf.org/public/rfc/bibxml/reference.RFC.2119.xml"
/// );
/// assert_eq!(resolver.resolve(&Citation::new("XY")), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CitationResolver {
    rfc_base_url: String,
    id_base_url: String,
}

impl CitationResolver {
    /// Create a resolver for the given RFC and Internet-Draft archives.
    ///
    /// Base URLs are used verbatim, so they should end with `/`.
    pub fn new(rfc_base_url: impl Into<String>, id_base_url: impl Into<String>) -> Self {
        Self {
            rfc_base_url: rfc_base_url.into(),
            id_base_url: id_base_url.into(),
        }
    }

    pub fn rfc_base_url(&self) -> &str {
        &self.rfc_base_url
    }

    pub fn id_base_url(&self) -> &str {
        &self.id_base_url
    }

    /// Resolve a citation to its bibliography URL.
    ///
    /// Returns an empty string when the link is too short or has an unknown
    /// kind tag. Use [`try_resolve`](Self::try_resolve) to get an `Option`.
    pub fn resolve(&self, citation: &Citation) -> String {
        self.try_resolve(citation).unwrap_or_default()
    }

    /// Resolve a citation, returning `None` when it is not resolvable.
    pub fn try_resolve(&self, citation: &Citation) -> Option<String> {
        let url = match citation.target()? {
            ReferenceTarget::Rfc { number } => {
                format!("{}{REFERENCE_RFC}{number}{EXTENSION}", self.rfc_base_url)
            }
            ReferenceTarget::InternetDraft { name } => match citation.sequence() {
                Some(sequence) => format!(
                    "{}{REFERENCE_DRAFT}{name}-{sequence:02}{EXTENSION}",
                    self.id_base_url
                ),
                None => format!(
                    "{}{REFERENCE_DRAFT_LATEST}{name}{EXTENSION}",
                    self.id_base_url
                ),
            },
        };
        Some(url)
    }
}

impl Default for CitationResolver {
    fn default() -> Self {
        Self::new(DEFAULT_RFC_BASE_URL, DEFAULT_ID_BASE_URL)
    }
}
