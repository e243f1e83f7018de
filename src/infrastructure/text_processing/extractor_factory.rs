use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::FileLoader;
use crate::domain::DocumentFormat;
use crate::presentation::config::ExtractionSettings;

use super::composite_file_loader::CompositeFileLoader;
use super::html_adapter::HtmlAdapter;
use super::office_xml_adapter::OfficeXmlAdapter;
use super::pdf_adapter::PdfAdapter;
use super::plain_text_adapter::PlainTextAdapter;

pub struct ExtractorFactory;

impl ExtractorFactory {
    /// Builds a loader with a reader for every supported format.
    pub fn create(settings: &ExtractionSettings) -> CompositeFileLoader {
        let pdf: Arc<dyn FileLoader> = Arc::new(PdfAdapter::new(Duration::from_secs(
            settings.pdf_timeout_secs,
        )));
        let office: Arc<dyn FileLoader> = Arc::new(OfficeXmlAdapter::new());
        let plain_text: Arc<dyn FileLoader> = Arc::new(PlainTextAdapter);
        let html: Arc<dyn FileLoader> = Arc::new(HtmlAdapter::new());

        tracing::info!(
            pdf_timeout_secs = settings.pdf_timeout_secs,
            "Registering document readers"
        );

        CompositeFileLoader::new(vec![
            (DocumentFormat::Pdf, pdf),
            (DocumentFormat::Docx, Arc::clone(&office)),
            (DocumentFormat::Pptx, Arc::clone(&office)),
            (DocumentFormat::Xlsx, office),
            (DocumentFormat::Txt, plain_text),
            (DocumentFormat::Html, html),
        ])
    }
}
