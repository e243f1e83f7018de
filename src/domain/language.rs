use std::fmt;

const MIN_CODE_LEN: usize = 2;
const MAX_CODE_LEN: usize = 8;

/// Upper-cased language code such as `DE` or `EN-US`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageCode(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LanguageCodeError {
    #[error("language code is empty")]
    Empty,
    #[error("invalid language code: {0}")]
    Invalid(String),
}

impl LanguageCode {
    pub fn parse(raw: &str) -> Result<Self, LanguageCodeError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(LanguageCodeError::Empty);
        }

        let well_formed = (MIN_CODE_LEN..=MAX_CODE_LEN).contains(&trimmed.len())
            && trimmed.chars().all(|c| c.is_ascii_alphabetic() || c == '-')
            && !trimmed.starts_with('-')
            && !trimmed.ends_with('-');

        if !well_formed {
            return Err(LanguageCodeError::Invalid(trimmed.to_string()));
        }

        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageKind {
    Source,
    Target,
}

impl LanguageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Target => "target",
        }
    }
}

/// Language entry as advertised by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    pub code: String,
    pub name: String,
    pub supports_formality: bool,
}
