use crate::document::Document;
use crate::document::ParsedDocumentCache;
use crate::test_fixtures::parse;

#[test]
fn successful_parse_is_memoized() {
    let mut cache = ParsedDocumentCache::new();
    let text = "query A { name }";
    assert_eq!(cache.cached_text(), None);

    assert_eq!(cache.get_or_default(text), parse(text));
    assert_eq!(cache.cached_text(), Some(text));
    assert_eq!(cache.get_or_default(text), parse(text));
}

#[test]
fn blank_text_yields_the_default_document() {
    let mut cache = ParsedDocumentCache::new();
    assert_eq!(cache.get_or_default(""), Document::default_document());
    assert_eq!(cache.cached_text(), None);
}

/// Typing a character that makes the text temporarily invalid keeps the
/// previously parsed document around.
#[test]
fn parse_failure_yields_the_previous_document() {
    let mut cache = ParsedDocumentCache::new();
    let good_text = "query A { name }";
    cache.get_or_default(good_text);

    assert_eq!(cache.get_or_default("query A { name"), parse(good_text));
    assert_eq!(cache.cached_text(), Some(good_text));
}

#[test]
fn parse_failure_without_a_previous_document_yields_the_default() {
    let mut cache = ParsedDocumentCache::new();
    assert_eq!(cache.get_or_default("query {"), Document::default_document());
}

#[test]
fn new_text_replaces_the_cached_entry() {
    let mut cache = ParsedDocumentCache::new();
    cache.get_or_default("query A { name }");
    let doc = cache.get_or_default("query B { homepage }");
    assert_eq!(doc, parse("query B { homepage }"));
    assert_eq!(cache.cached_text(), Some("query B { homepage }"));

    cache.invalidate();
    assert_eq!(cache.cached_text(), None);
    assert_eq!(cache.get_or_default("}"), Document::default_document());
}
