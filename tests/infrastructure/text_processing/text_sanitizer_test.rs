use doc_translator::infrastructure::text_processing::{decode_entities, sanitize_extracted_text};

#[test]
fn given_ligatures_when_sanitizing_then_normalizes_to_plain_letters() {
    assert_eq!(sanitize_extracted_text("ﬁle ﬂow"), "file flow");
}

#[test]
fn given_hyphenated_line_break_when_sanitizing_then_rejoins_word() {
    assert_eq!(
        sanitize_extracted_text("infor-\nmation retrieval"),
        "information retrieval"
    );
}

#[test]
fn given_runs_of_whitespace_when_sanitizing_then_collapses_and_keeps_paragraphs() {
    let raw = "  First   line \nsecond\tline\n\n\n\nNext   paragraph  ";

    assert_eq!(
        sanitize_extracted_text(raw),
        "First line\nsecond line\n\nNext paragraph"
    );
}

#[test]
fn given_whitespace_only_when_sanitizing_then_returns_empty() {
    assert_eq!(sanitize_extracted_text(" \n\t \n"), "");
}

#[test]
fn given_character_references_when_decoding_then_returns_characters() {
    assert_eq!(decode_entities("&lt;b&gt; &amp; &#65;&#x42;"), "<b> & AB");
}

#[test]
fn given_unknown_entity_when_decoding_then_keeps_it() {
    assert_eq!(decode_entities("&bogus; &amp;"), "&bogus; &");
}
