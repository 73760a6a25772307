//! Citation catalog for one document build.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::BuildHasher;

use crate::citation::{Citation, CitationClass};

/// Per-class counts and the deterministic key order of a citation set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSummary {
    /// Citations classified as informative.
    pub informative: usize,
    /// Citations classified as normative.
    pub normative: usize,
    /// Every key, sorted byte-wise.
    pub keys: Vec<String>,
}

/// Count citations per class and sort the keys.
///
/// Unclassified citations count toward neither total but their keys are still
/// listed. The key order decides the order of the rendered reference list, so
/// it is a plain byte-wise sort of the map keys.
pub fn classify<S: BuildHasher>(citations: &HashMap<String, Citation, S>) -> CatalogSummary {
    let mut summary = CatalogSummary {
        keys: Vec::with_capacity(citations.len()),
        ..CatalogSummary::default()
    };
    for (key, citation) in citations {
        match citation.class() {
            Some(CitationClass::Informative) => summary.informative += 1,
            Some(CitationClass::Normative) => summary.normative += 1,
            None => {}
        }
        summary.keys.push(key.clone());
    }
    summary.keys.sort_unstable();
    summary
}

/// Citations of one document, keyed by link.
#[derive(Debug, Clone, Default)]
pub struct CitationCatalog {
    citations: HashMap<String, Citation>,
}

impl CitationCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a citation, merging it with an earlier citation of the same link.
    pub fn insert(&mut self, citation: Citation) {
        match self.citations.entry(citation.link().to_owned()) {
            Entry::Vacant(entry) => {
                entry.insert(citation);
            }
            Entry::Occupied(mut entry) => entry.get_mut().merge(citation),
        }
    }

    pub fn get(&self, link: &str) -> Option<&Citation> {
        self.citations.get(link)
    }

    pub fn len(&self) -> usize {
        self.citations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.citations.is_empty()
    }

    /// Counts and sorted keys, see [`classify`].
    pub fn summary(&self) -> CatalogSummary {
        classify(&self.citations)
    }

    /// Citations in key order.
    pub fn iter_sorted(&self) -> impl Iterator<Item = &Citation> {
        let mut entries: Vec<_> = self.citations.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries.into_iter().map(|(_, citation)| citation)
    }

    /// Underlying map, for callers that classify it themselves.
    pub fn as_map(&self) -> &HashMap<String, Citation> {
        &self.citations
    }
}

impl Extend<Citation> for CitationCatalog {
    fn extend<I: IntoIterator<Item = Citation>>(&mut self, iter: I) {
        for citation in iter {
            self.insert(citation);
        }
    }
}

impl FromIterator<Citation> for CitationCatalog {
    fn from_iter<I: IntoIterator<Item = Citation>>(iter: I) -> Self {
        let mut catalog = Self::new();
        catalog.extend(iter);
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(citations: Vec<Citation>) -> HashMap<String, Citation> {
        citations
            .into_iter()
            .map(|c| (c.link().to_owned(), c))
            .collect()
    }

    #[test]
    fn test_classify_counts_and_sorts() {
        let citations = map(vec![
            Citation::new("RFC7049").with_class(CitationClass::Informative),
            Citation::new("RFC2119").with_class(CitationClass::Normative),
            Citation::new("I-D.foo").with_class(CitationClass::Informative),
        ]);

        let summary = classify(&citations);

        assert_eq!(summary.informative, 2);
        assert_eq!(summary.normative, 1);
        assert_eq!(summary.keys, vec!["I-D.foo", "RFC2119", "RFC7049"]);
    }

    #[test]
    fn test_classify_unclassified_is_listed_but_not_counted() {
        let citations = map(vec![
            Citation::new("RFC2119").with_class(CitationClass::Normative),
            Citation::new("RFC8174"),
            Citation::new("I-D.bar").with_class(CitationClass::Informative),
        ]);

        let summary = classify(&citations);

        assert_eq!(summary.informative + summary.normative, 2);
        assert!(summary.informative + summary.normative < citations.len());
        assert_eq!(summary.keys.len(), citations.len());
        assert!(summary.keys.contains(&"RFC8174".to_owned()));
    }

    #[test]
    fn test_classify_all_classified_counts_equal_len() {
        let citations = map(vec![
            Citation::new("RFC1").with_class(CitationClass::Normative),
            Citation::new("RFC2").with_class(CitationClass::Informative),
        ]);
        let summary = classify(&citations);
        assert_eq!(summary.informative + summary.normative, citations.len());
    }

    #[test]
    fn test_classify_sort_is_bytewise() {
        let citations = map(vec![
            Citation::new("RFC10"),
            Citation::new("RFC9"),
            Citation::new("RFC100"),
            Citation::new("I-D.b"),
            Citation::new("I-D.B"),
        ]);
        let summary = classify(&citations);
        assert_eq!(
            summary.keys,
            vec!["I-D.B", "I-D.b", "RFC10", "RFC100", "RFC9"]
        );
    }

    #[test]
    fn test_classify_empty() {
        let summary = classify(&HashMap::<String, Citation>::new());
        assert_eq!(summary, CatalogSummary::default());
    }

    #[test]
    fn test_catalog_merges_repeated_links() {
        let catalog: CitationCatalog = [
            Citation::new("RFC2119").with_class(CitationClass::Informative),
            Citation::new("RFC2119").with_class(CitationClass::Normative),
            Citation::new("RFC8174"),
        ]
        .into_iter()
        .collect();

        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.get("RFC2119").and_then(Citation::class),
            Some(CitationClass::Normative)
        );
        let summary = catalog.summary();
        assert_eq!(summary.normative, 1);
        assert_eq!(summary.informative, 0);
    }

    #[test]
    fn test_catalog_iter_sorted_matches_summary_keys() {
        let catalog: CitationCatalog = ["RFC7049", "I-D.foo", "RFC2119"]
            .into_iter()
            .map(Citation::new)
            .collect();

        let links: Vec<&str> = catalog.iter_sorted().map(Citation::link).collect();
        assert_eq!(links, catalog.summary().keys);
    }

    #[test]
    fn test_catalog_empty() {
        let catalog = CitationCatalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.iter_sorted().count(), 0);
    }
}
