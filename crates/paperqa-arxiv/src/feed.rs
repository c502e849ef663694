//! Atom feed parsing for arXiv query responses.

use crate::error::{SourceError, SourceResult};
use paperqa_core::types::Paper;
use roxmltree::{Document, Node};

const ATOM_NS: &str = "http://www.w3.org/2005/Atom";

/// Parse an arXiv Atom feed into paper records.
///
/// The parse is all-or-nothing: an entry missing any expected field fails
/// the whole call rather than producing partial records.
pub fn parse_feed(xml: &str) -> SourceResult<Vec<Paper>> {
    let doc = Document::parse(xml)?;
    let mut papers = Vec::new();

    for entry in doc
        .root_element()
        .children()
        .filter(|n| n.has_tag_name((ATOM_NS, "entry")))
    {
        papers.push(parse_entry(&entry)?);
    }

    Ok(papers)
}

fn parse_entry(entry: &Node) -> SourceResult<Paper> {
    let mut authors = Vec::new();
    for author in entry
        .children()
        .filter(|n| n.has_tag_name((ATOM_NS, "author")))
    {
        authors.push(child_text(&author, "name")?);
    }

    Ok(Paper {
        title: child_text(entry, "title")?,
        summary: child_text(entry, "summary")?,
        published: child_text(entry, "published")?,
        authors,
        // arXiv reports the canonical abstract URL as the entry id.
        link: child_text(entry, "id")?,
        content: None,
    })
}

fn child_text(node: &Node, tag: &str) -> SourceResult<String> {
    node.children()
        .find(|n| n.has_tag_name((ATOM_NS, tag)))
        .and_then(|n| n.text())
        .map(|t| t.to_string())
        .ok_or_else(|| SourceError::MissingField(tag.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_xml(body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>ArXiv Query Results</title>
  <entry>{}</entry>
</feed>"#,
            body
        )
    }

    #[test]
    fn test_parse_well_formed_entry() {
        let xml = entry_xml(
            "<id>http://x</id>\
             <title>T</title>\
             <summary>S</summary>\
             <published>2024-01-01</published>\
             <author><name>A</name></author>\
             <author><name>B</name></author>",
        );

        let papers = parse_feed(&xml).unwrap();
        assert_eq!(papers.len(), 1);

        let paper = &papers[0];
        assert_eq!(paper.title, "T");
        assert_eq!(paper.summary, "S");
        assert_eq!(paper.authors, vec!["A".to_string(), "B".to_string()]);
        assert_eq!(paper.published, "2024-01-01");
        assert_eq!(paper.link, "http://x");
        assert!(paper.content.is_none());
    }

    #[test]
    fn test_missing_field_fails_whole_parse() {
        // Two entries, second one lacks a summary: no partial results.
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <entry>
    <id>http://a</id><title>A</title><summary>SA</summary>
    <published>2024-01-01</published><author><name>X</name></author>
  </entry>
  <entry>
    <id>http://b</id><title>B</title>
    <published>2024-01-02</published><author><name>Y</name></author>
  </entry>
</feed>"#;

        let err = parse_feed(xml).unwrap_err();
        assert!(matches!(err, SourceError::MissingField(ref f) if f == "summary"));
    }

    #[test]
    fn test_author_without_name_fails() {
        let xml = entry_xml(
            "<id>http://x</id><title>T</title><summary>S</summary>\
             <published>2024-01-01</published><author></author>",
        );

        let err = parse_feed(&xml).unwrap_err();
        assert!(matches!(err, SourceError::MissingField(ref f) if f == "name"));
    }

    #[test]
    fn test_entry_without_authors_is_accepted() {
        let xml = entry_xml(
            "<id>http://x</id><title>T</title><summary>S</summary>\
             <published>2024-01-01</published>",
        );

        let papers = parse_feed(&xml).unwrap();
        assert!(papers[0].authors.is_empty());
    }

    #[test]
    fn test_empty_feed() {
        let xml = r#"<?xml version="1.0"?><feed xmlns="http://www.w3.org/2005/Atom"></feed>"#;
        assert!(parse_feed(xml).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_xml_propagates() {
        assert!(matches!(
            parse_feed("<feed><entry>").unwrap_err(),
            SourceError::Xml(_)
        ));
    }
}
