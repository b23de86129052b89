//! Output charset transcoding.

use std::fmt::Write as _;

use cerif_model::OutputCharset;

/// Encode a finished UTF-8 document in `charset`.
///
/// Characters the charset cannot carry become numeric character
/// references. The document must contain them only in character data or
/// attribute values, which holds for everything the writer emits.
pub fn encode_document(xml: &str, charset: OutputCharset) -> Vec<u8> {
    match charset {
        OutputCharset::Utf8 => xml.as_bytes().to_vec(),
        OutputCharset::Iso88591 => single_byte(xml, 0xFF),
        OutputCharset::UsAscii => single_byte(xml, 0x7F),
        OutputCharset::Utf16 => {
            let mut out = vec![0xFE, 0xFF];
            out.extend(xml.encode_utf16().flat_map(u16::to_be_bytes));
            out
        }
        OutputCharset::Utf16Be => xml.encode_utf16().flat_map(u16::to_be_bytes).collect(),
        OutputCharset::Utf16Le => xml.encode_utf16().flat_map(u16::to_le_bytes).collect(),
    }
}

fn single_byte(xml: &str, max: u32) -> Vec<u8> {
    let mut out = Vec::with_capacity(xml.len());
    let mut reference = String::new();
    for ch in xml.chars() {
        let code = u32::from(ch);
        match u8::try_from(code) {
            Ok(byte) if code <= max => out.push(byte),
            _ => {
                reference.clear();
                let _ = write!(reference, "&#{code};");
                out.extend_from_slice(reference.as_bytes());
            }
        }
    }
    out
}
