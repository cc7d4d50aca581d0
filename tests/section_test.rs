//! Integration tests for section extraction.

use pdfsift::{
    build_document, extract_section, extract_sections, BoundaryMode, Document, ExtractOptions,
    HeadingThreshold, LayoutLine, LayoutPage, LinePosition, SectionExtractor,
};

/// Size 13 bold scores 14, size 5 regular scores 4.
fn heading(text: &str) -> LayoutLine {
    LayoutLine::glyph(13.0, "Helvetica-Bold", text)
}

fn body(text: &str) -> LayoutLine {
    LayoutLine::glyph(5.0, "Helvetica", text)
}

fn paper() -> Document {
    build_document(vec![
        LayoutPage::new().with_text_box(vec![heading("Introduction"), body("Lorem ipsum")]),
        LayoutPage::new().with_text_box(vec![heading("References"), body("Smith 1999")]),
    ])
}

#[test]
fn test_two_page_sections() {
    let doc = paper();
    assert_eq!(extract_section(&doc, "references"), "References Smith 1999");
    assert_eq!(extract_section(&doc, "introduction"), "Introduction Lorem ipsum");
    assert_eq!(extract_section(&doc, "REFERENCES"), "References Smith 1999");
}

#[test]
fn test_no_heading_lines() {
    let doc = build_document(vec![LayoutPage::new().with_text_box(vec![
        body("References"),
        body("Smith 1999"),
        body("More text"),
    ])]);
    assert_eq!(extract_section(&doc, "anything"), "");
    assert_eq!(extract_section(&doc, "references"), "");
}

#[test]
fn test_empty_document() {
    let doc = Document::empty();
    assert_eq!(extract_section(&doc, "references"), "");
    assert!(extract_sections(&doc, &["references"]).is_empty());
}

#[test]
fn test_boundaries_are_monotonic() {
    let doc = build_document(vec![
        LayoutPage::new().with_text_box(vec![
            heading("Abstract"),
            body("a"),
            heading("Methods"),
            body("b"),
        ]),
        LayoutPage::new().with_text_box(vec![body("c"), heading("Methods revisited"), body("d")]),
        LayoutPage::new().with_text_box(vec![heading("Discussion"), body("e")]),
    ]);

    let extractor = SectionExtractor::new();
    let boundaries = extractor.find_boundaries(&doc, "methods");
    assert_eq!(boundaries.len(), 2);
    for b in &boundaries {
        if let Some(end) = b.end {
            assert!(b.start < end);
        }
    }
    assert_eq!(boundaries[0].start, LinePosition::new(0, 2));
    assert_eq!(boundaries[0].end, Some(LinePosition::new(1, 1)));
    assert_eq!(boundaries[1].end, Some(LinePosition::new(2, 0)));

    assert_eq!(
        extractor.extract(&doc, "methods"),
        "Methods b c\n\nMethods revisited d"
    );

    let last = extractor.find_boundaries(&doc, "discussion");
    assert_eq!(last.len(), 1);
    assert_eq!(last[0].end, None);
}

#[test]
fn test_heading_text_recurring_in_body() {
    let doc = build_document(vec![
        LayoutPage::new().with_text_box(vec![heading("Methods"), body("see Results below")]),
        LayoutPage::new().with_text_box(vec![heading("Results"), body("It worked.")]),
        LayoutPage::new().with_text_box(vec![heading("Notes"), body("none")]),
    ]);

    assert_eq!(extract_section(&doc, "results"), "Results It worked.");

    let legacy = SectionExtractor::with_options(ExtractOptions::new().legacy());
    assert_eq!(legacy.extract(&doc, "methods"), "Methods see ");
    assert_eq!(legacy.extract(&doc, "results"), "Results It worked. ");
}

#[test]
fn test_fixed_threshold_treats_any_text_as_heading() {
    let doc = paper();
    let extractor = SectionExtractor::with_options(
        ExtractOptions::new().with_heading_threshold(HeadingThreshold::Fixed(-10)),
    );
    assert_eq!(extractor.heading_positions(&doc).len(), 4);
    assert_eq!(extractor.extract(&doc, "references"), "References");
    assert_eq!(extractor.extract(&doc, "smith"), "Smith 1999");
}

#[test]
fn test_boundary_modes_agree_on_simple_layout() {
    let doc = paper();
    let legacy = SectionExtractor::with_options(
        ExtractOptions::new().with_boundary_mode(BoundaryMode::LegacySubstring),
    );
    assert_eq!(legacy.extract(&doc, "references"), "References Smith 1999");
    assert_eq!(legacy.extract(&doc, "introduction"), "Introduction Lorem ipsum ");
}

#[test]
fn test_extract_sections_keys() {
    let doc = paper();
    let sections = extract_sections(&doc, &["references", "methods", "introduction"]);
    let keys: Vec<&str> = sections.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["References", "Introduction"]);
    assert_eq!(sections["Introduction"], "Introduction Lorem ipsum");
}
