use crate::*;

#[test]
fn rewrites_both_attribute_orders() {
    let matcher = ReferenceLinkMatcher::new();

    let link = matcher
        .rewrite(r#"  <link rel="match" href="reference/foo.xht" />"#)
        .expect("link");
    assert_eq!(link.line, r#"  <link rel="match" href="reference/foo.rml" />"#);
    assert_eq!(link.source, "reference/foo.xht");

    let link = matcher
        .rewrite(r#"<link href="reference/bar-ref.xht" rel="match"/>"#)
        .expect("link");
    assert_eq!(link.line, r#"<link href="reference/bar-ref.rml" rel="match"/>"#);
    assert_eq!(link.source, "reference/bar-ref.xht");
}

#[test]
fn ignores_other_links() {
    let matcher = ReferenceLinkMatcher::new();
    assert_eq!(
        matcher.rewrite(r#"<link rel="help" href="http://www.w3.org/TR/CSS21/box.html" />"#),
        None
    );
    assert_eq!(
        matcher.rewrite(r#"<link rel="mismatch" href="reference/foo.xht" />"#),
        None
    );
}

#[test]
fn queue_keeps_first_occurrence_order() {
    let mut queue = ReferenceQueue::new();
    assert!(queue.is_empty());
    assert!(queue.push("reference/b.xht"));
    assert!(queue.push("reference/a.xht"));
    assert!(!queue.push("reference/b.xht"));
    assert_eq!(queue.len(), 2);
    assert!(queue.contains("reference/a.xht"));
    assert_eq!(
        queue.drain(),
        vec!["reference/b.xht".to_string(), "reference/a.xht".to_string()]
    );
}

#[test]
fn target_file_names() {
    assert_eq!(dialect::target_file_name("foo-001.xht"), "foo-001.rml");
    assert_eq!(dialect::target_file_name("foo.xht.xht"), "foo.xht.rml");
    assert_eq!(dialect::target_file_name("readme"), "readme.rml");
}
