//! `<author>` element.

use rfcmark_xml::{write_escaped, write_escaped_attr};

/// Document author as declared in the title block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Author {
    pub initials: String,
    pub surname: String,
    pub fullname: String,
    pub organization: String,
    /// Short organization name, written as the `abbrev` attribute.
    #[cfg_attr(feature = "serde", serde(rename = "abbrev"))]
    pub organization_abbrev: Option<String>,
    pub address: Address,
}

/// Contact details of an author.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Address {
    pub postal: Postal,
    pub phone: String,
    pub email: String,
    pub uri: String,
}

/// Postal address. Every field may span several lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Postal {
    pub street: String,
    pub city: String,
    pub code: String,
    pub country: String,
}

/// Write an `<author>` element.
///
/// Names, organization, street, city and country are escaped. Postal code,
/// phone, email and uri are written as given. Each line of a postal field
/// becomes its own element.
pub fn write_author(out: &mut String, author: &Author) {
    out.push_str("<author initials=\"");
    write_escaped_attr(out, &author.initials);
    out.push_str("\" surname=\"");
    write_escaped_attr(out, &author.surname);
    out.push_str("\" fullname=\"");
    write_escaped_attr(out, &author.fullname);
    out.push_str("\">\n");

    out.push_str("<organization");
    if let Some(abbrev) = author.organization_abbrev.as_deref()
        && !abbrev.is_empty()
    {
        out.push_str(" abbrev=\"");
        write_escaped_attr(out, abbrev);
        out.push('"');
    }
    out.push('>');
    write_escaped(out, &author.organization);
    out.push_str("</organization>\n");

    write_address(out, &author.address);
    out.push_str("</author>\n");
}

fn write_address(out: &mut String, address: &Address) {
    out.push_str("<address>\n<postal>\n");

    let postal = &address.postal;
    for street in split_lines(&postal.street) {
        write_line_element(out, "street", street, true);
    }
    for city in split_lines(&postal.city) {
        write_line_element(out, "city", city, true);
    }
    for code in split_lines(&postal.code) {
        write_line_element(out, "code", code, false);
    }
    for country in split_lines(&postal.country) {
        write_line_element(out, "country", country, true);
    }
    out.push_str("</postal>\n");

    write_line_element(out, "phone", &address.phone, false);
    write_line_element(out, "email", &address.email, false);
    write_line_element(out, "uri", &address.uri, false);

    out.push_str("</address>\n");
}

fn write_line_element(out: &mut String, tag: &str, text: &str, escape: bool) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    if escape {
        write_escaped(out, text);
    } else {
        out.push_str(text);
    }
    out.push_str("</");
    out.push_str(tag);
    out.push_str(">\n");
}

/// Split on line feeds, keeping empty lines. An empty field yields one empty line.
fn split_lines(field: &str) -> impl Iterator<Item = &str> {
    field
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quick_xml::Reader;
    use quick_xml::events::Event;

    use super::*;

    fn sample_author() -> Author {
        Author {
            initials: "R.".to_owned(),
            surname: "Gieben".to_owned(),
            fullname: "R. (Miek) Gieben".to_owned(),
            organization: "Google".to_owned(),
            organization_abbrev: None,
            address: Address {
                postal: Postal {
                    street: "1600 Amphitheatre Parkway".to_owned(),
                    city: "Mountain View".to_owned(),
                    code: "CA 94043".to_owned(),
                    country: "US".to_owned(),
                },
                phone: "+1 650-253-0000".to_owned(),
                email: "miek@google.com".to_owned(),
                uri: "http://www.google.com".to_owned(),
            },
        }
    }

    fn render(author: &Author) -> String {
        let mut out = String::new();
        write_author(&mut out, author);
        out
    }

    fn assert_well_formed(xml: &str) {
        let mut reader = Reader::from_str(xml);
        loop {
            match reader.read_event() {
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => panic!("malformed XML ({e}): {xml}"),
            }
        }
    }

    #[test]
    fn test_write_author() {
        assert_eq!(
            render(&sample_author()),
            "<author initials=\"R.\" surname=\"Gieben\" fullname=\"R. (Miek) Gieben\">\n\
             <organization>Google</organization>\n\
             <address>\n\
             <postal>\n\
             <street>1600 Amphitheatre Parkway</street>\n\
             <city>Mountain View</city>\n\
             <code>CA 94043</code>\n\
             <country>US</country>\n\
             </postal>\n\
             <phone>+1 650-253-0000</phone>\n\
             <email>miek@google.com</email>\n\
             <uri>http://www.google.com</uri>\n\
             </address>\n\
             </author>\n"
        );
    }

    #[test]
    fn test_write_author_escapes_organization() {
        let author = Author {
            organization: "A & B <C>".to_owned(),
            ..sample_author()
        };
        let out = render(&author);
        assert!(out.contains("<organization>A &amp; B &lt;C&gt;</organization>"));
        assert!(!out.contains("<C>"));
        assert_well_formed(&out);
    }

    #[test]
    fn test_write_author_escapes_name_attributes() {
        let author = Author {
            fullname: "Jane \"JJ\" <Doe> & Co".to_owned(),
            ..sample_author()
        };
        let out = render(&author);
        assert!(out.contains("fullname=\"Jane &quot;JJ&quot; &lt;Doe&gt; &amp; Co\""));
        assert_well_formed(&out);
    }

    #[test]
    fn test_write_author_abbrev_only_when_non_empty() {
        let with_abbrev = Author {
            organization: "Internet Engineering Task Force".to_owned(),
            organization_abbrev: Some("IETF".to_owned()),
            ..sample_author()
        };
        assert!(render(&with_abbrev).contains(
            "<organization abbrev=\"IETF\">Internet Engineering Task Force</organization>"
        ));

        let empty_abbrev = Author {
            organization_abbrev: Some(String::new()),
            ..sample_author()
        };
        assert!(render(&empty_abbrev).contains("<organization>Google</organization>"));
    }

    #[test]
    fn test_write_author_multiline_postal_fields() {
        let mut author = sample_author();
        author.address.postal.street = "Building 4\nFloor 2\r\nRoom 12".to_owned();
        author.address.postal.country = "United Kingdom\nGreat Britain".to_owned();

        let out = render(&author);

        assert!(out.contains(
            "<street>Building 4</street>\n<street>Floor 2</street>\n<street>Room 12</street>\n"
        ));
        assert!(out.contains("<country>United Kingdom</country>\n<country>Great Britain</country>\n"));
    }

    #[test]
    fn test_write_author_code_and_contacts_are_raw() {
        let mut author = sample_author();
        author.address.postal.code = "A&B".to_owned();
        author.address.postal.city = "A&B".to_owned();
        author.address.uri = "http://example.com/?a=1&amp;b=2".to_owned();

        let out = render(&author);

        assert!(out.contains("<code>A&B</code>"));
        assert!(out.contains("<city>A&amp;B</city>"));
        assert!(out.contains("<uri>http://example.com/?a=1&amp;b=2</uri>"));
    }

    #[test]
    fn test_write_author_empty_fields_still_emit_elements() {
        let out = render(&Author::default());
        assert!(out.starts_with("<author initials=\"\" surname=\"\" fullname=\"\">\n"));
        assert!(out.contains("<street></street>\n<city></city>\n<code></code>\n<country></country>\n"));
        assert_well_formed(&out);
    }
}
