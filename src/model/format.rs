//! Syntax-highlighting formats accepted by TextBin

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SealError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    #[serde(alias = "plain")]
    Plaintext,
    Python,
    Javascript,
    Typescript,
    Java,
    C,
    Cpp,
    Csharp,
    Go,
    Rust,
    Swift,
    Kotlin,
    Ruby,
    Php,
    Html,
    Css,
    Sql,
    Bash,
    Yaml,
    Json,
}

impl Format {
    pub const ALL: [Format; 20] = [
        Format::Plaintext,
        Format::Python,
        Format::Javascript,
        Format::Typescript,
        Format::Java,
        Format::C,
        Format::Cpp,
        Format::Csharp,
        Format::Go,
        Format::Rust,
        Format::Swift,
        Format::Kotlin,
        Format::Ruby,
        Format::Php,
        Format::Html,
        Format::Css,
        Format::Sql,
        Format::Bash,
        Format::Yaml,
        Format::Json,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Plaintext => "plaintext",
            Format::Python => "python",
            Format::Javascript => "javascript",
            Format::Typescript => "typescript",
            Format::Java => "java",
            Format::C => "c",
            Format::Cpp => "cpp",
            Format::Csharp => "csharp",
            Format::Go => "go",
            Format::Rust => "rust",
            Format::Swift => "swift",
            Format::Kotlin => "kotlin",
            Format::Ruby => "ruby",
            Format::Php => "php",
            Format::Html => "html",
            Format::Css => "css",
            Format::Sql => "sql",
            Format::Bash => "bash",
            Format::Yaml => "yaml",
            Format::Json => "json",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = SealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        if wanted == "plain" {
            return Ok(Format::Plaintext);
        }
        Format::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == wanted)
            .ok_or_else(|| SealError::invalid_field("format", format!("unsupported format '{}'", s)))
    }
}
