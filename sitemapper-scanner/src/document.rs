//! Sitemap XML classification.
//!
//! A fetched body is read with a streaming `quick-xml` reader and classified by its
//! root element:
//!
//! - `<sitemapindex>` with `<sitemap><loc>` children becomes [`SitemapDocument::Index`]
//! - `<urlset>` with `<url><loc>` children becomes [`SitemapDocument::UrlSet`]
//! - anything else is [`SitemapDocument::Unrecognized`] and contributes nothing
//!
//! Elements are matched by local name, so namespaced documents
//! (`<sm:urlset xmlns:sm="...">`) classify the same way as plain ones.

use crate::error::{Result, ScanError};
use quick_xml::Reader;
use quick_xml::events::Event;

/// Parsed form of a sitemap body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SitemapDocument {
    /// Locations of further sitemaps, in document order.
    Index { entries: Vec<String> },
    /// Locations of content pages, in document order.
    UrlSet { entries: Vec<String> },
    /// Well-formed XML with some other root.
    Unrecognized,
}

impl SitemapDocument {
    /// Sub-sitemap references carried by this document.
    pub fn sitemaps(&self) -> &[String] {
        match self {
            SitemapDocument::Index { entries } => entries,
            _ => &[],
        }
    }

    /// Content URLs carried by this document.
    pub fn urls(&self) -> &[String] {
        match self {
            SitemapDocument::UrlSet { entries } => entries,
            _ => &[],
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Root {
    Index,
    UrlSet,
    Other,
}

impl Root {
    fn classify(name: &[u8]) -> Self {
        match name {
            b"sitemapindex" => Root::Index,
            b"urlset" => Root::UrlSet,
            _ => Root::Other,
        }
    }

    fn entry_name(self) -> Option<&'static [u8]> {
        match self {
            Root::Index => Some(b"sitemap"),
            Root::UrlSet => Some(b"url"),
            Root::Other => None,
        }
    }
}

/// Parse and classify a sitemap body.
///
/// Entries without a `<loc>` are skipped and `<loc>` text is trimmed. A body with no
/// root element at all, or one that is not well-formed XML, is a [`ScanError::ParseError`].
pub fn parse_document(xml: &str) -> Result<SitemapDocument> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut root: Option<Root> = None;
    // Local names of the currently open elements, root first.
    let mut stack: Vec<Vec<u8>> = Vec::new();
    let mut entries = Vec::new();
    let mut current_loc: Option<String> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = e.local_name().as_ref().to_vec();
                if root.is_none() {
                    root = Some(Root::classify(&name));
                }
                stack.push(name);
                if in_loc(root, &stack) {
                    current_loc = Some(String::new());
                }
            }
            Ok(Event::Empty(e)) if root.is_none() => {
                root = Some(Root::classify(e.local_name().as_ref()));
            }
            Ok(Event::End(_)) => {
                if in_loc(root, &stack)
                    && let Some(loc) = current_loc.take()
                {
                    let loc = loc.trim();
                    if !loc.is_empty() {
                        entries.push(loc.to_string());
                    }
                }
                stack.pop();
            }
            Ok(Event::Text(e)) => {
                if let Some(loc) = current_loc.as_mut() {
                    let text = e
                        .unescape()
                        .map_err(|e| ScanError::ParseError(e.to_string()))?;
                    loc.push_str(&text);
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(loc) = current_loc.as_mut() {
                    loc.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ScanError::ParseError(format!(
                    "XML parse error at position {}: {}",
                    reader.error_position(),
                    e
                )));
            }
            _ => {}
        }
        buf.clear();
    }

    match root {
        Some(Root::Index) => Ok(SitemapDocument::Index { entries }),
        Some(Root::UrlSet) => Ok(SitemapDocument::UrlSet { entries }),
        Some(Root::Other) => Ok(SitemapDocument::Unrecognized),
        None => Err(ScanError::ParseError(
            "document has no root element".to_string(),
        )),
    }
}

/// True when the open elements are exactly `root > entry > loc`.
fn in_loc(root: Option<Root>, stack: &[Vec<u8>]) -> bool {
    match root.and_then(Root::entry_name) {
        Some(entry) => stack.len() == 3 && stack[1] == entry && stack[2] == b"loc",
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_urlset_in_order() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url><loc>https://example.com/a</loc><lastmod>2024-01-15</lastmod></url>
  <url><loc>https://example.com/b</loc></url>
  <url><loc>https://example.com/c</loc></url>
</urlset>"#;

        let doc = parse_document(xml).unwrap();
        assert_eq!(
            doc,
            SitemapDocument::UrlSet {
                entries: vec![
                    "https://example.com/a".to_string(),
                    "https://example.com/b".to_string(),
                    "https://example.com/c".to_string(),
                ]
            }
        );
        assert!(doc.sitemaps().is_empty());
    }

    #[test]
    fn test_parse_sitemap_index() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<sitemapindex xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <sitemap><loc>https://example.com/sitemap-posts.xml</loc></sitemap>
  <sitemap>
    <loc>https://example.com/sitemap-pages.xml</loc>
    <lastmod>2024-01-15T10:30:00Z</lastmod>
  </sitemap>
</sitemapindex>"#;

        let doc = parse_document(xml).unwrap();
        assert_eq!(
            doc.sitemaps(),
            &[
                "https://example.com/sitemap-posts.xml".to_string(),
                "https://example.com/sitemap-pages.xml".to_string(),
            ]
        );
        assert!(doc.urls().is_empty());
    }

    #[test]
    fn test_namespaced_elements() {
        let xml = r#"<sm:urlset xmlns:sm="http://www.sitemaps.org/schemas/sitemap/0.9">
  <sm:url><sm:loc>https://example.com/ns</sm:loc></sm:url>
</sm:urlset>"#;

        let doc = parse_document(xml).unwrap();
        assert_eq!(doc.urls(), &["https://example.com/ns".to_string()]);
    }

    #[test]
    fn test_escaped_and_cdata_locations() {
        let xml = r#"<urlset>
  <url><loc>https://example.com/?a=1&amp;b=2</loc></url>
  <url><loc><![CDATA[https://example.com/cdata]]></loc></url>
  <url><loc>
      https://example.com/padded
  </loc></url>
</urlset>"#;

        let doc = parse_document(xml).unwrap();
        assert_eq!(
            doc.urls(),
            &[
                "https://example.com/?a=1&b=2".to_string(),
                "https://example.com/cdata".to_string(),
                "https://example.com/padded".to_string(),
            ]
        );
    }

    #[test]
    fn test_entries_without_loc_are_skipped() {
        let xml = r#"<urlset>
  <url><lastmod>2024-01-01</lastmod></url>
  <url><loc></loc></url>
  <url><loc>https://example.com/kept</loc></url>
</urlset>"#;

        let doc = parse_document(xml).unwrap();
        assert_eq!(doc.urls(), &["https://example.com/kept".to_string()]);
    }

    #[test]
    fn test_nested_loc_outside_entry_is_ignored() {
        // image:loc lives one level deeper than the page loc.
        let xml = r#"<urlset xmlns:image="http://www.google.com/schemas/sitemap-image/1.1">
  <url>
    <loc>https://example.com/page</loc>
    <image:image><image:loc>https://example.com/img.png</image:loc></image:image>
  </url>
</urlset>"#;

        let doc = parse_document(xml).unwrap();
        assert_eq!(doc.urls(), &["https://example.com/page".to_string()]);
    }

    #[test]
    fn test_unrecognized_root() {
        let xml = r#"<rss version="2.0"><channel><title>feed</title></channel></rss>"#;
        assert_eq!(parse_document(xml).unwrap(), SitemapDocument::Unrecognized);
    }

    #[test]
    fn test_empty_index_is_still_an_index() {
        let doc = parse_document("<sitemapindex></sitemapindex>").unwrap();
        assert_eq!(doc, SitemapDocument::Index { entries: vec![] });
    }

    #[test]
    fn test_self_closing_urlset() {
        assert_eq!(
            parse_document("<urlset/>").unwrap(),
            SitemapDocument::UrlSet { entries: vec![] }
        );
    }

    #[test]
    fn test_empty_body_is_an_error() {
        assert!(matches!(
            parse_document("   "),
            Err(ScanError::ParseError(_))
        ));
    }

    #[test]
    fn test_mismatched_tags_are_an_error() {
        let xml = "<urlset><url><loc>https://example.com</url></urlset>";
        assert!(parse_document(xml).is_err());
    }
}
