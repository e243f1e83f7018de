use std::fmt;

use uuid::Uuid;

use super::LanguageCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(Uuid);

impl DocumentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

/// Container formats accepted for document translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Pptx,
    Xlsx,
    Txt,
    Html,
}

impl DocumentFormat {
    pub const ALL: [DocumentFormat; 6] = [
        Self::Pdf,
        Self::Docx,
        Self::Pptx,
        Self::Xlsx,
        Self::Txt,
        Self::Html,
    ];

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "pptx" => Some(Self::Pptx),
            "xlsx" => Some(Self::Xlsx),
            "txt" => Some(Self::Txt),
            "html" => Some(Self::Html),
            _ => None,
        }
    }

    /// Resolves the format from the last extension of `filename`.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, ext) = filename.rsplit_once('.')?;
        Self::from_extension(ext)
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Pptx => "pptx",
            Self::Xlsx => "xlsx",
            Self::Txt => "txt",
            Self::Html => "html",
        }
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            Self::Pptx => {
                "application/vnd.openxmlformats-officedocument.presentationml.presentation"
            }
            Self::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            Self::Txt => "text/plain; charset=utf-8",
            Self::Html => "text/html; charset=utf-8",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

const FALLBACK_STEM: &str = "document";

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub filename: String,
    pub format: DocumentFormat,
}

impl Document {
    pub fn new(filename: String, format: DocumentFormat) -> Self {
        Self {
            id: DocumentId::new(),
            filename,
            format,
        }
    }

    /// Builds a document from a client-supplied filename.
    ///
    /// The format comes from the raw extension; only the stem is sanitized,
    /// falling back to `document` when nothing safe is left of it. `None`
    /// means the extension is not one of the supported formats.
    pub fn from_upload(raw_filename: &str) -> Option<Self> {
        let basename = basename(raw_filename).trim();
        let format = DocumentFormat::from_filename(basename)?;
        let (raw_stem, _) = basename.rsplit_once('.')?;

        let stem = sanitize_filename(raw_stem);
        let stem = if stem.is_empty() { FALLBACK_STEM } else { stem.as_str() };

        Some(Self::new(format!("{stem}.{}", format.extension()), format))
    }

    pub fn stem(&self) -> &str {
        self.filename
            .rsplit_once('.')
            .map(|(stem, _)| stem)
            .filter(|stem| !stem.is_empty())
            .unwrap_or(FALLBACK_STEM)
    }

    /// Name of the translated artifact, e.g. `report_DE.docx`.
    pub fn translated_filename(&self, target: &LanguageCode) -> String {
        format!("{}_{}.{}", self.stem(), target, self.format.extension())
    }
}

/// Reduces a client-supplied filename to a safe basename.
pub fn sanitize_filename(raw: &str) -> String {
    let basename = basename(raw);

    let mut out = String::with_capacity(basename.len());
    for ch in basename.trim().chars() {
        if ch.is_ascii_alphanumeric() || matches!(ch, '.' | '-' | '_') {
            out.push(ch);
        } else if ch.is_whitespace() {
            out.push('_');
        }
    }

    out.trim_start_matches(['.', '_']).to_string()
}

fn basename(raw: &str) -> &str {
    raw.rsplit(['/', '\\']).next().unwrap_or_default()
}
