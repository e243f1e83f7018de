use doc_translator::domain::DocumentFormat;
use doc_translator::infrastructure::text_processing::ExtractorFactory;
use doc_translator::presentation::config::ExtractionSettings;

#[test]
fn given_default_settings_when_creating_loader_then_every_format_has_a_reader() {
    let loader = ExtractorFactory::create(&ExtractionSettings {
        pdf_timeout_secs: 30,
    });

    for format in DocumentFormat::ALL {
        assert!(loader.supports(format), "{format}");
    }
}
