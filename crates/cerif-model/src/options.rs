//! Conversion options shared by the engine, the serializer and the CLI.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Character encoding of the written CERIF document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputCharset {
    #[default]
    Utf8,
    Iso88591,
    UsAscii,
    /// Big-endian with a byte order mark.
    Utf16,
    Utf16Be,
    Utf16Le,
}

impl OutputCharset {
    /// Name used in the XML declaration.
    pub fn xml_name(&self) -> &'static str {
        match self {
            OutputCharset::Utf8 => "UTF-8",
            OutputCharset::Iso88591 => "ISO-8859-1",
            OutputCharset::UsAscii => "US-ASCII",
            OutputCharset::Utf16 => "UTF-16",
            OutputCharset::Utf16Be => "UTF-16BE",
            OutputCharset::Utf16Le => "UTF-16LE",
        }
    }
}

impl fmt::Display for OutputCharset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.xml_name())
    }
}

impl FromStr for OutputCharset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace('_', "-");
        match normalized.as_str() {
            "UTF-8" | "UTF8" => Ok(OutputCharset::Utf8),
            "ISO-8859-1" | "ISO8859-1" | "LATIN1" | "LATIN-1" => Ok(OutputCharset::Iso88591),
            "US-ASCII" | "ASCII" => Ok(OutputCharset::UsAscii),
            "UTF-16" | "UTF16" => Ok(OutputCharset::Utf16),
            "UTF-16BE" => Ok(OutputCharset::Utf16Be),
            "UTF-16LE" => Ok(OutputCharset::Utf16Le),
            _ => Err(format!("unsupported charset: {s}")),
        }
    }
}

/// Options that shape the written document but never the graph itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentOptions {
    /// Source database code (RUCT code of the institution).
    pub source_database: String,
    /// Document timestamp, RFC 3339.
    pub date: String,
    pub charset: OutputCharset,
    pub pretty: bool,
}

impl DocumentOptions {
    pub fn new(source_database: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            source_database: source_database.into(),
            date: date.into(),
            charset: OutputCharset::default(),
            pretty: false,
        }
    }

    #[must_use]
    pub fn with_charset(mut self, charset: OutputCharset) -> Self {
        self.charset = charset;
        self
    }

    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_charset_aliases() {
        assert_eq!("utf-8".parse::<OutputCharset>(), Ok(OutputCharset::Utf8));
        assert_eq!("ISO_8859_1".parse::<OutputCharset>(), Ok(OutputCharset::Iso88591));
        assert_eq!("utf-16le".parse::<OutputCharset>(), Ok(OutputCharset::Utf16Le));
        assert!("ebcdic".parse::<OutputCharset>().is_err());
    }
}
