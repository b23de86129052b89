//! Schema-escaped text values.
//!
//! Every text value stored on an entity goes through [`XmlText::escape`]
//! exactly once. Serializers write the stored form verbatim.

use std::fmt;

use quick_xml::escape::{escape, unescape};
use serde::{Deserialize, Serialize};

/// Text already escaped for inclusion in XML character data or attributes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct XmlText(String);

impl XmlText {
    /// Escape raw input text.
    ///
    /// Markup characters (`<`, `>`, `&`, `"`, `'`) become entity references,
    /// carriage returns become a character reference so parsers do not fold
    /// them into line feeds, and characters XML 1.0 cannot carry are dropped.
    pub fn escape(raw: &str) -> Self {
        let cleaned: String = raw.chars().filter(|ch| is_xml_char(*ch)).collect();
        let escaped = escape(cleaned.as_str());
        if escaped.contains('\r') {
            Self(escaped.replace('\r', "&#13;"))
        } else {
            Self(escaped.into_owned())
        }
    }

    /// Escape an optional cell, treating blank text as absent.
    pub fn optional(raw: Option<&str>) -> Option<Self> {
        raw.map(str::trim)
            .filter(|value| !value.is_empty())
            .map(Self::escape)
    }

    /// The escaped form, ready to be written into a document.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Recover the original text.
    pub fn unescaped(&self) -> String {
        match unescape(&self.0) {
            Ok(text) => text.into_owned(),
            // Only reachable for values built outside `escape`.
            Err(_) => self.0.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for XmlText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Characters allowed by the XML 1.0 `Char` production.
pub fn is_xml_char(ch: char) -> bool {
    matches!(
        ch,
        '\t' | '\n' | '\r'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        let text = XmlText::escape(r#"R&D <group> "A""#);
        assert_eq!(text.as_str(), "R&amp;D &lt;group&gt; &quot;A&quot;");
        assert_eq!(text.unescaped(), r#"R&D <group> "A""#);
    }

    #[test]
    fn drops_control_characters() {
        let text = XmlText::escape("a\u{0}b\u{1b}c\u{FFFF}");
        assert_eq!(text.as_str(), "abc");
    }

    #[test]
    fn keeps_carriage_return_as_reference() {
        let text = XmlText::escape("a\r\nb");
        assert_eq!(text.as_str(), "a&#13;\nb");
        assert_eq!(text.unescaped(), "a\r\nb");
    }

    #[test]
    fn optional_skips_blank() {
        assert!(XmlText::optional(None).is_none());
        assert!(XmlText::optional(Some("   ")).is_none());
        assert_eq!(
            XmlText::optional(Some("  x ")).map(|t| t.as_str().to_string()),
            Some("x".to_string())
        );
    }
}
