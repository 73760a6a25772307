//! `<keyword>` elements.

/// Write one `<keyword>` element per keyword, in order.
///
/// Keywords are simple tokens and are written as given.
pub fn write_keywords<I>(out: &mut String, keywords: I)
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    for keyword in keywords {
        out.push_str("<keyword>");
        out.push_str(keyword.as_ref());
        out.push_str("</keyword>\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_keywords_in_order() {
        let mut out = String::new();
        write_keywords(&mut out, ["xml2rfc", "markdown", "DNS"]);
        assert_eq!(
            out,
            "<keyword>xml2rfc</keyword>\n<keyword>markdown</keyword>\n<keyword>DNS</keyword>\n"
        );
    }

    #[test]
    fn test_write_keywords_empty() {
        let mut out = String::new();
        write_keywords(&mut out, Vec::<String>::new());
        assert_eq!(out, "");
    }

    #[test]
    fn test_write_keywords_from_owned_strings() {
        let keywords = vec!["a".to_owned(), "b".to_owned()];
        let mut out = String::new();
        write_keywords(&mut out, &keywords);
        assert_eq!(out, "<keyword>a</keyword>\n<keyword>b</keyword>\n");
    }
}
