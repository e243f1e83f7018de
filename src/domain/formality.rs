use std::fmt;
use std::str::FromStr;

/// Register preference passed through to the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Formality {
    #[default]
    Default,
    Formal,
    Informal,
}

impl Formality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Formal => "formal",
            Self::Informal => "informal",
        }
    }
}

impl FromStr for Formality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "default" => Ok(Self::Default),
            "formal" | "more" | "prefer_more" => Ok(Self::Formal),
            "informal" | "less" | "prefer_less" => Ok(Self::Informal),
            other => Err(format!(
                "Invalid formality: {}. Expected: default, formal, or informal",
                other
            )),
        }
    }
}

impl fmt::Display for Formality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
