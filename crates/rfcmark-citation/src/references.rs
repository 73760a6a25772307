//! Back-matter reference sections.
//!
//! Each classified citation becomes an include of its bibliography file:
//!
//! - v2: `<?rfc include="URL"?>` inside `<references title="...">`
//! - v3: `<xi:include href="URL"/>` inside `<references>` with a `<name>`

use rfcmark_xml::{Dialect, write_escaped, write_escaped_attr};

use crate::catalog::CitationCatalog;
use crate::citation::CitationClass;
use crate::resolver::CitationResolver;

/// Section order in the back matter.
const SECTION_ORDER: [CitationClass; 2] = [CitationClass::Normative, CitationClass::Informative];

/// Write the normative and informative reference sections.
///
/// Citations appear in catalog key order. Sections without a resolvable
/// citation are omitted, as are unclassified and unresolvable citations.
pub fn write_references(
    out: &mut String,
    catalog: &CitationCatalog,
    resolver: &CitationResolver,
    dialect: Dialect,
) {
    for class in SECTION_ORDER {
        let urls: Vec<String> = catalog
            .iter_sorted()
            .filter(|citation| citation.class() == Some(class))
            .filter_map(|citation| {
                let url = resolver.try_resolve(citation);
                if url.is_none() {
                    tracing::debug!(link = citation.link(), "Skipping unresolvable citation");
                }
                url
            })
            .collect();

        if urls.is_empty() {
            continue;
        }
        write_section(out, class.section_title(), &urls, dialect);
    }
}

fn write_section(out: &mut String, title: &str, urls: &[String], dialect: Dialect) {
    match dialect {
        Dialect::V2 => {
            out.push_str("<references title=\"");
            write_escaped_attr(out, title);
            out.push_str("\">\n");
            for url in urls {
                out.push_str("<?rfc include=\"");
                write_escaped_attr(out, url);
                out.push_str("\"?>\n");
            }
        }
        Dialect::V3 => {
            out.push_str("<references>\n<name>");
            write_escaped(out, title);
            out.push_str("</name>\n");
            for url in urls {
                out.push_str("<xi:include href=\"");
                write_escaped_attr(out, url);
                out.push_str("\"/>\n");
            }
        }
    }
    out.push_str("</references>\n");
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::citation::Citation;

    fn resolver() -> CitationResolver {
        CitationResolver::new("https://rfc.test/", "https://id.test/")
    }

    fn catalog() -> CitationCatalog {
        [
            Citation::new("RFC7049").with_class(CitationClass::Informative),
            Citation::new("RFC2119").with_class(CitationClass::Normative),
            Citation::new("I-D.ietf-dane-openpgpkey")
                .with_class(CitationClass::Informative)
                .with_sequence(2),
            Citation::new("RFC8174"),
            Citation::new("XY").with_class(CitationClass::Normative),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_write_references_v2() {
        let mut out = String::new();
        write_references(&mut out, &catalog(), &resolver(), Dialect::V2);
        assert_eq!(
            out,
            "<references title=\"Normative References\">\n\
             <?rfc include=\"https://rfc.test/reference.RFC.2119.xml\"?>\n\
             </references>\n\
             <references title=\"Informative References\">\n\
             <?rfc include=\"https://id.test/reference.I-D.draft-ietf-dane-openpgpkey-02.xml\"?>\n\
             <?rfc include=\"https://rfc.test/reference.RFC.7049.xml\"?>\n\
             </references>\n"
        );
    }

    #[test]
    fn test_write_references_v3() {
        let mut out = String::new();
        write_references(&mut out, &catalog(), &resolver(), Dialect::V3);
        assert_eq!(
            out,
            "<references>\n\
             <name>Normative References</name>\n\
             <xi:include href=\"https://rfc.test/reference.RFC.2119.xml\"/>\n\
             </references>\n\
             <references>\n\
             <name>Informative References</name>\n\
             <xi:include href=\"https://id.test/reference.I-D.draft-ietf-dane-openpgpkey-02.xml\"/>\n\
             <xi:include href=\"https://rfc.test/reference.RFC.7049.xml\"/>\n\
             </references>\n"
        );
    }

    #[test]
    fn test_write_references_skips_empty_sections() {
        let catalog: CitationCatalog = [
            Citation::new("RFC8174"),
            Citation::new("BCP14").with_class(CitationClass::Normative),
        ]
        .into_iter()
        .collect();

        let mut out = String::new();
        write_references(&mut out, &catalog, &resolver(), Dialect::V2);
        assert_eq!(out, "");
    }

    #[test]
    fn test_write_references_escapes_base_url() {
        let resolver = CitationResolver::new("https://rfc.test/?a=1&b=2/", "https://id.test/");
        let catalog: CitationCatalog = [Citation::new("RFC1").with_class(CitationClass::Normative)]
            .into_iter()
            .collect();

        let mut out = String::new();
        write_references(&mut out, &catalog, &resolver, Dialect::V3);
        assert!(out.contains("href=\"https://rfc.test/?a=1&amp;b=2/reference.RFC.1.xml\""));
    }
}
