//! Shared element writers for the CERIF document.

use std::borrow::Cow;
use std::io::Write;

use anyhow::Result;
use quick_xml::Writer;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::name::QName;

use cerif_model::{Classification, XmlText};

/// CERIF 1.6 XML namespace.
pub const CERIF_NS: &str = "urn:xmlns:org:eurocris:cerif-1.6-2";

/// Translation marker for original-language text.
pub const TRANSLATION_ORIGINAL: &str = "o";

/// Attribute whose value is already escaped.
pub fn escaped_attribute<'a>(key: &'a str, value: &'a XmlText) -> Attribute<'a> {
    Attribute {
        key: QName(key.as_bytes()),
        value: Cow::Borrowed(value.as_str().as_bytes()),
    }
}

/// Write `<name>text</name>` with pre-escaped text.
pub fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: &XmlText,
) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::from_escaped(text.as_str())))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Write `<name>` for a raw value that needs escaping (ids, codes).
pub fn write_raw_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Write a multilingual text element (`cfName`, `cfTitle`, ...).
pub fn write_translated_text<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: &XmlText,
    language: &XmlText,
) -> Result<()> {
    let mut start = BytesStart::new(name);
    start.push_attribute(escaped_attribute("cfLangCode", language));
    start.push_attribute(("cfTrans", TRANSLATION_ORIGINAL));
    writer.write_event(Event::Start(start))?;
    writer.write_event(Event::Text(BytesText::from_escaped(text.as_str())))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Write the `cfClassId`/`cfClassSchemeId` pair.
pub fn write_class_ids<W: Write>(
    writer: &mut Writer<W>,
    classification: &Classification,
) -> Result<()> {
    write_raw_element(writer, "cfClassId", &classification.class)?;
    write_raw_element(writer, "cfClassSchemeId", &classification.scheme)?;
    Ok(())
}

/// Write `<wrapper>` holding just a classification, optionally dated.
pub fn write_class_link<W: Write>(
    writer: &mut Writer<W>,
    wrapper: &str,
    classification: &Classification,
    start_date: Option<&XmlText>,
) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(wrapper)))?;
    write_class_ids(writer, classification)?;
    if let Some(date) = start_date {
        write_text_element(writer, "cfStartDate", date)?;
    }
    writer.write_event(Event::End(BytesEnd::new(wrapper)))?;
    Ok(())
}

/// Write an embedded federated identifier with its identifier-type class.
pub fn write_fed_id<W: Write>(
    writer: &mut Writer<W>,
    value: &XmlText,
    classification: Option<&Classification>,
) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("cfFedId")))?;
    write_text_element(writer, "cfFedId", value)?;
    if let Some(classification) = classification {
        write_class_link(writer, "cfFedId_Class", classification, None)?;
    }
    writer.write_event(Event::End(BytesEnd::new("cfFedId")))?;
    Ok(())
}
