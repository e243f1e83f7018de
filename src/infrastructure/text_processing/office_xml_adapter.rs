use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use zip::ZipArchive;
use zip::result::ZipError;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, DocumentFormat};

use super::text_sanitizer::{decode_entities, sanitize_extracted_text};

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Upper bound on the decompressed size of a single archive entry.
const MAX_ENTRY_BYTES: u64 = 64 * 1024 * 1024;

static PARAGRAPH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<(?:w|a):p[\s>].*?</(?:w|a):p>").unwrap());

static RUN_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(?:w|a):t(?:\s[^>]*)?>([^<]*)</(?:w|a):t>").unwrap());

static STRING_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<(?:si|is)>.*?</(?:si|is)>").unwrap());

static CELL_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<t(?:\s[^>]*)?>([^<]*)</t>").unwrap());

static SLIDE_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ppt/slides/slide(\d+)\.xml$").unwrap());

static SHEET_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^xl/worksheets/sheet(\d+)\.xml$").unwrap());

/// Text reader for the Office Open XML containers (docx, pptx, xlsx).
#[derive(Default)]
pub struct OfficeXmlAdapter;

impl OfficeXmlAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract(path: &Path, format: DocumentFormat) -> Result<String, FileLoaderError> {
        let file = File::open(path).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to open staged file: {e}"))
        })?;
        let mut archive = ZipArchive::new(file).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("not a valid {format} archive: {e}"))
        })?;

        let text = match format {
            DocumentFormat::Docx => {
                let xml = read_entry(&mut archive, "word/document.xml")?.ok_or_else(|| {
                    FileLoaderError::ExtractionFailed("missing word/document.xml".to_string())
                })?;
                paragraphs(&xml)
            }
            DocumentFormat::Pptx => {
                let mut slides = Vec::new();
                for name in numbered_entries(&archive, &SLIDE_ENTRY) {
                    if let Some(xml) = read_entry(&mut archive, &name)? {
                        slides.push(paragraphs(&xml));
                    }
                }
                slides.join("\n\n")
            }
            DocumentFormat::Xlsx => {
                let mut cells = Vec::new();
                if let Some(xml) = read_entry(&mut archive, "xl/sharedStrings.xml")? {
                    cells.push(string_items(&xml));
                }
                for name in numbered_entries(&archive, &SHEET_ENTRY) {
                    if let Some(xml) = read_entry(&mut archive, &name)? {
                        cells.push(string_items(&xml));
                    }
                }
                cells.join("\n")
            }
            other => return Err(FileLoaderError::UnsupportedFormat(other.to_string())),
        };

        Ok(sanitize_extracted_text(&text))
    }
}

fn read_entry(
    archive: &mut ZipArchive<File>,
    name: &str,
) -> Result<Option<String>, FileLoaderError> {
    let entry = match archive.by_name(name) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => return Ok(None),
        Err(e) => {
            return Err(FileLoaderError::ExtractionFailed(format!(
                "failed to open {name}: {e}"
            )));
        }
    };

    let mut xml = String::new();
    entry
        .take(MAX_ENTRY_BYTES)
        .read_to_string(&mut xml)
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to read {name}: {e}")))?;

    Ok(Some(xml))
}

/// Entry names matching `pattern`, ordered by their captured number.
fn numbered_entries(archive: &ZipArchive<File>, pattern: &Regex) -> Vec<String> {
    let mut entries: Vec<(u32, String)> = archive
        .file_names()
        .filter_map(|name| {
            let number = pattern.captures(name)?.get(1)?.as_str().parse().ok()?;
            Some((number, name.to_string()))
        })
        .collect();
    entries.sort_by_key(|(number, _)| *number);
    entries.into_iter().map(|(_, name)| name).collect()
}

fn paragraphs(xml: &str) -> String {
    PARAGRAPH
        .find_iter(xml)
        .map(|paragraph| join_captures(&RUN_TEXT, paragraph.as_str()))
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn string_items(xml: &str) -> String {
    STRING_ITEM
        .find_iter(xml)
        .map(|item| join_captures(&CELL_TEXT, item.as_str()))
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn join_captures(pattern: &Regex, xml: &str) -> String {
    pattern
        .captures_iter(xml)
        .filter_map(|caps| caps.get(1))
        .map(|m| decode_entities(m.as_str()))
        .collect()
}

#[async_trait]
impl FileLoader for OfficeXmlAdapter {
    #[tracing::instrument(
        skip(self, path, document),
        fields(filename = %document.filename, format = %document.format)
    )]
    async fn extract_text(
        &self,
        path: &Path,
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        let format = document.format;
        if !matches!(
            format,
            DocumentFormat::Docx | DocumentFormat::Pptx | DocumentFormat::Xlsx
        ) {
            return Err(FileLoaderError::UnsupportedFormat(format.to_string()));
        }

        let owned_path: PathBuf = path.to_path_buf();

        let text = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract(&owned_path, format)),
        )
        .await
        .map_err(|_| {
            FileLoaderError::ExtractionFailed(format!("{format} extraction timed out"))
        })?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        if text.is_empty() {
            return Err(FileLoaderError::NoTextFound(document.filename.clone()));
        }

        tracing::info!(characters = text.chars().count(), "Office text extraction complete");
        Ok(text)
    }
}
