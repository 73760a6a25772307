//! Citations for xml2rfc documents.
//!
//! A citation names a bibliography entry (`RFC2119`, `I-D.ietf-dane-openpgpkey`)
//! and optionally pins a draft revision. This crate:
//!
//! - parses the compact citation syntax into a [`Citation`]
//! - resolves citations to archive URLs with a [`CitationResolver`]
//! - collects a document's citations in a [`CitationCatalog`] and orders them
//!   deterministically for the back matter
//! - writes the `<references>` sections with [`write_references`]
//!
//! # Example
//!
//! ```
//! use rfcmark_citation::{Citation, CitationCatalog, CitationResolver};
//!
//! let catalog: CitationCatalog = ["[@!RFC2119]", "[@?I-D.ietf-dane-openpgpkey#02]"]
//!     .into_iter()
//!     .filter_map(Citation::parse)
//!     .collect();
//!
//! let summary = catalog.summary();
//! assert_eq!((summary.informative, summary.normative), (1, 1));
//! assert_eq!(summary.keys, ["I-D.ietf-dane-openpgpkey", "RFC2119"]);
//!
//! let resolver = CitationResolver::default();
//! let urls: Vec<String> = catalog.iter_sorted().map(|c| resolver.resolve(c)).collect();
//! assert!(urls[0].ends_with("/reference.I-D.draft-ietf-dane-openpgpkey-02.xml"));
//! ```

mod catalog;
mod citation;
mod references;
mod resolver;

pub use catalog::{CatalogSummary, CitationCatalog, classify};
pub use citation::{Citation, CitationClass, ReferenceTarget};
pub use references::write_references;
pub use resolver::{CitationResolver, DEFAULT_ID_BASE_URL, DEFAULT_RFC_BASE_URL};
