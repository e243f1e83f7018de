mod pdf_fixture;

pub use pdf_fixture::image_only_pdf;
