use doc_translator::domain::{Document, DocumentFormat, LanguageCode, sanitize_filename};

#[test]
fn given_supported_extension_in_any_case_when_resolving_format_then_returns_format() {
    assert_eq!(
        DocumentFormat::from_filename("Report.PDF"),
        Some(DocumentFormat::Pdf)
    );
    assert_eq!(
        DocumentFormat::from_filename("deck.pptx"),
        Some(DocumentFormat::Pptx)
    );
    assert_eq!(
        DocumentFormat::from_filename("page.Html"),
        Some(DocumentFormat::Html)
    );
}

#[test]
fn given_unsupported_or_missing_extension_when_resolving_format_then_returns_none() {
    assert_eq!(DocumentFormat::from_filename("setup.exe"), None);
    assert_eq!(DocumentFormat::from_filename("README"), None);
    assert_eq!(DocumentFormat::from_filename("archive.docx.zip"), None);
}

#[test]
fn given_every_format_when_round_tripping_extension_then_format_is_stable() {
    for format in DocumentFormat::ALL {
        assert_eq!(DocumentFormat::from_extension(format.extension()), Some(format));
    }
}

#[test]
fn given_path_traversal_filename_when_sanitizing_then_keeps_safe_basename() {
    assert_eq!(sanitize_filename("../../etc/passwd.txt"), "passwd.txt");
    assert_eq!(sanitize_filename("C:\\Users\\me\\notes.docx"), "notes.docx");
}

#[test]
fn given_spaces_and_symbols_when_sanitizing_then_replaces_or_drops_them() {
    assert_eq!(sanitize_filename("my report (final).pdf"), "my_report_final.pdf");
    assert_eq!(sanitize_filename(".hidden.txt"), "hidden.txt");
}

#[test]
fn given_upload_filename_when_building_document_then_name_is_sanitized() {
    let document = Document::from_upload("../quarterly report.xlsx").unwrap();

    assert_eq!(document.filename, "quarterly_report.xlsx");
    assert_eq!(document.format, DocumentFormat::Xlsx);
}

#[test]
fn given_non_latin_filename_when_building_document_then_keeps_format_with_fallback_stem() {
    let chinese = Document::from_upload("文档.docx").unwrap();
    let greek = Document::from_upload("Έγγραφο.pdf").unwrap();
    let target = LanguageCode::parse("DE").unwrap();

    assert_eq!(chinese.filename, "document.docx");
    assert_eq!(chinese.format, DocumentFormat::Docx);
    assert_eq!(chinese.translated_filename(&target), "document_DE.docx");
    assert_eq!(greek.format, DocumentFormat::Pdf);
}

#[test]
fn given_mixed_script_filename_when_building_document_then_ascii_part_is_kept() {
    let document = Document::from_upload("report_报告.PPTX").unwrap();

    assert_eq!(document.filename, "report_.pptx");
    assert_eq!(document.format, DocumentFormat::Pptx);
}

#[test]
fn given_unsupported_upload_when_building_document_then_returns_none() {
    assert!(Document::from_upload("virus.exe").is_none());
}

#[test]
fn given_document_when_naming_translation_then_appends_target_code() {
    let document = Document::new("report.docx".to_string(), DocumentFormat::Docx);
    let target = LanguageCode::parse("en-gb").unwrap();

    assert_eq!(document.translated_filename(&target), "report_EN-GB.docx");
}

#[test]
fn given_filename_without_stem_when_naming_translation_then_uses_fallback_stem() {
    let document = Document::new(".pdf".to_string(), DocumentFormat::Pdf);
    let target = LanguageCode::parse("DE").unwrap();

    assert_eq!(document.translated_filename(&target), "document_DE.pdf");
}

#[test]
fn given_text_formats_when_reading_mime_then_charset_is_included() {
    assert_eq!(DocumentFormat::Txt.as_mime(), "text/plain; charset=utf-8");
    assert_eq!(DocumentFormat::Pdf.as_mime(), "application/pdf");
}

#[test]
fn given_two_documents_when_created_then_ids_differ() {
    let a = Document::new("a.txt".to_string(), DocumentFormat::Txt);
    let b = Document::new("a.txt".to_string(), DocumentFormat::Txt);

    assert_ne!(a.id, b.id);
}
