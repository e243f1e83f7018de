mod composite_file_loader;
mod extractor_factory;
mod html_adapter;
mod mock_file_loader;
mod office_xml_adapter;
mod pdf_adapter;
mod plain_text_adapter;
mod text_sanitizer;

pub use composite_file_loader::CompositeFileLoader;
pub use extractor_factory::ExtractorFactory;
pub use html_adapter::HtmlAdapter;
pub use mock_file_loader::MockFileLoader;
pub use office_xml_adapter::OfficeXmlAdapter;
pub use pdf_adapter::PdfAdapter;
pub use plain_text_adapter::PlainTextAdapter;
pub use text_sanitizer::{decode_entities, sanitize_extracted_text};
