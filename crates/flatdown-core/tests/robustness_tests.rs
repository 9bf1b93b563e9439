//! Degenerate-input sweep and the coverage law.
//!
//! The parser is total: anything goes in, a defined element sequence comes
//! out. These tests hammer marker-only, whitespace-only, and mixed inputs,
//! and check the coverage law — re-inserting the stripped markers around a
//! block's tags reproduces the block's original line text.

use flatdown_core::{parse_markdown_elements, Element, Tag, TagStyle};

/// Undo only the marker stripping: put `**`/`_` back around styled tags.
fn reconstruct(tags: &[Tag]) -> String {
    let mut out = String::new();
    for tag in tags {
        match tag.style {
            TagStyle::Plain => out.push_str(&tag.content),
            TagStyle::Bold => {
                out.push_str("**");
                out.push_str(&tag.content);
                out.push_str("**");
            }
            TagStyle::Italic => {
                out.push('_');
                out.push_str(&tag.content);
                out.push('_');
            }
        }
    }
    out
}

/// Undo heading-prefix stripping on top of the marker stripping.
fn reconstruct_element(element: &Element) -> String {
    match element {
        Element::Heading(h) => format!("{} {}", "#".repeat(h.level), reconstruct(&h.tags)),
        Element::Paragraph(p) => reconstruct(&p.tags),
        Element::Break(_) => String::new(),
    }
}

#[test]
fn parse_never_panics_and_blocks_carry_tags() {
    let inputs = [
        "",
        "\n",
        "\n\n",
        "\n\n\n",
        " ",
        "\t",
        "#",
        "# ",
        "##",
        "####### ",
        "#no space",
        "*",
        "**",
        "***",
        "****",
        "_",
        "__",
        "____",
        "_**_**",
        "**_**_",
        "* _ * _",
        "a**b",
        "a_b",
        "**unterminated",
        "_unterminated",
        "héllo **wörld** _ünïcode_",
        "🎉 **🚀** _✨_",
        "# \n\n# \n\n",
        "\n# lone\n",
        "text\n\n\n\ntext",
    ];

    for input in inputs {
        let elements = parse_markdown_elements(input);
        for element in &elements {
            match element {
                Element::Heading(h) => {
                    assert!(!h.tags.is_empty(), "empty heading tags for {input:?}")
                }
                Element::Paragraph(p) => {
                    assert!(!p.tags.is_empty(), "empty paragraph tags for {input:?}")
                }
                Element::Break(_) => assert!(element.tags().is_empty()),
            }
        }
    }
}

#[test]
fn coverage_law_single_line_paragraphs() {
    // Styled content here carries no edge whitespace, so trimming loses
    // nothing and reconstruction must be exact.
    let lines = [
        "plain text",
        "x**y**z",
        "a _b_ c **d** e",
        "**a** and **b**",
        "**a** **b** _i_",
        "_i_**b**",
        "*_*_",
        "a**b",
        "a_b",
        "**unterminated",
        "****",
        "____",
        "__",
        "***",
    ];

    for line in lines {
        let elements = parse_markdown_elements(line);
        assert_eq!(elements.len(), 1, "one block expected for {line:?}");
        assert_eq!(
            reconstruct_element(&elements[0]),
            line,
            "coverage law broken for {line:?}"
        );
    }
}

#[test]
fn coverage_law_across_blocks() {
    let input = "# Head\n\n**a** _b_\nplain **c**";
    let elements = parse_markdown_elements(input);

    let expected = ["# Head", "", "**a** _b_", "plain **c**"];
    assert_eq!(elements.len(), expected.len());
    for (element, line) in elements.iter().zip(expected) {
        assert_eq!(reconstruct_element(element), line);
    }
}

#[test]
fn marker_only_windows_produce_empty_styled_content() {
    let elements = parse_markdown_elements("****");
    assert_eq!(elements[0].tags().len(), 1);
    assert_eq!(elements[0].tags()[0].style, TagStyle::Bold);
    assert_eq!(elements[0].tags()[0].content, "");

    let elements = parse_markdown_elements("____");
    let styles: Vec<TagStyle> = elements[0].tags().iter().map(|t| t.style).collect();
    assert_eq!(styles, vec![TagStyle::Italic, TagStyle::Italic]);
}

#[test]
fn whitespace_only_paragraph_keeps_its_text() {
    let elements = parse_markdown_elements("   ");
    assert_eq!(elements[0].tags()[0].content, "   ");
}

#[test]
fn long_hash_run_heading_level_is_unclamped() {
    let input = format!("{} deep", "#".repeat(40));
    let elements = parse_markdown_elements(&input);

    if let Element::Heading(h) = &elements[0] {
        assert_eq!(h.level, 40);
        assert_eq!(h.tags[0].content, "deep");
    } else {
        panic!("Expected heading, got {:?}", elements[0]);
    }
}

#[test]
fn large_document_parses_flat() {
    let mut input = String::new();
    for i in 0..500 {
        input.push_str(&format!("## Section {i}\n\nBody **{i}** with _style_.\n\n"));
    }

    let elements = parse_markdown_elements(&input);
    // heading + break + paragraph + break per section
    assert_eq!(elements.len(), 2000);
}
