//! CERIF XML serialization of an assembled graph.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};

use cerif_core::Graph;
use cerif_model::{
    Attribute, DocumentOptions, Entity, EntityKind, Field, RelationEdge, XmlText,
};

use crate::common::{
    CERIF_NS, write_class_ids, write_class_link, write_fed_id, write_raw_element,
    write_text_element, write_translated_text,
};
use crate::encoding::encode_document;

/// Language code used when a title carries none.
const FALLBACK_LANGUAGE: &str = "ca";

/// Where the finished document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// Parse an `--out` value: `-` for stdout, otherwise a path ending in `.xml`.
    pub fn parse(value: &str) -> Result<Self> {
        let value = value.trim();
        if value == "-" {
            return Ok(OutputTarget::Stdout);
        }
        let path = Path::new(value);
        let is_xml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"));
        if !is_xml {
            bail!("output file must have an .xml extension: {value}");
        }
        Ok(OutputTarget::File(path.to_path_buf()))
    }
}

/// Render the graph as a complete CERIF document in the requested charset.
pub fn render_cerif(graph: &Graph, options: &DocumentOptions) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    if options.pretty {
        let mut xml = Writer::new_with_indent(&mut buffer, b' ', 2);
        write_document(&mut xml, graph, options)?;
    } else {
        let mut xml = Writer::new(&mut buffer);
        write_document(&mut xml, graph, options)?;
    }
    let text = String::from_utf8(buffer).context("writer produced invalid UTF-8")?;
    Ok(encode_document(&text, options.charset))
}

/// Write rendered bytes to `target`. Files are written in one piece, so a
/// failed run never leaves a partial document behind.
pub fn write_output(target: &OutputTarget, bytes: &[u8]) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            lock.write_all(bytes).context("write document to stdout")?;
            lock.flush().context("flush stdout")?;
        }
        OutputTarget::File(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create {}", parent.display()))?;
            }
            std::fs::write(path, bytes).with_context(|| format!("write {}", path.display()))?;
        }
    }
    Ok(())
}

fn write_document<W: Write>(
    xml: &mut Writer<W>,
    graph: &Graph,
    options: &DocumentOptions,
) -> Result<()> {
    xml.write_event(Event::Decl(BytesDecl::new(
        "1.0",
        Some(options.charset.xml_name()),
        None,
    )))?;

    let mut root = BytesStart::new("CERIF");
    root.push_attribute(("xmlns", CERIF_NS));
    root.push_attribute(("date", options.date.as_str()));
    root.push_attribute(("sourceDatabase", options.source_database.as_str()));
    xml.write_event(Event::Start(root))?;

    for entity in graph.entities() {
        match entity.kind {
            EntityKind::Department | EntityKind::ResearchGroup => write_org_unit(xml, entity)?,
            EntityKind::Project => write_project(xml, entity)?,
            EntityKind::Publication => write_publication(xml, entity)?,
            EntityKind::Researcher | EntityKind::PersonPlaceholder => write_person(xml, entity)?,
        }
    }

    xml.write_event(Event::End(BytesEnd::new("CERIF")))?;
    Ok(())
}

fn language(attribute: &Attribute) -> XmlText {
    attribute
        .language
        .clone()
        .unwrap_or_else(|| XmlText::escape(FALLBACK_LANGUAGE))
}

fn write_org_unit<W: Write>(xml: &mut Writer<W>, entity: &Entity) -> Result<()> {
    xml.write_event(Event::Start(BytesStart::new("cfOrgUnit")))?;
    write_raw_element(xml, "cfOrgUnitId", entity.id().as_str())?;
    if let Some(acronym) = entity.attribute(Field::Acronym) {
        write_text_element(xml, "cfAcro", &acronym.value)?;
    }
    if let Some(uri) = entity.attribute(Field::Uri) {
        write_text_element(xml, "cfURI", &uri.value)?;
    }
    if let Some(title) = entity.attribute(Field::Title) {
        write_translated_text(xml, "cfName", &title.value, &language(title))?;
    }
    for classification in &entity.classifications {
        write_class_link(xml, "cfOrgUnit_Class", classification, None)?;
    }
    for identifier in entity.attributes_of(Field::Identifier) {
        write_fed_id(xml, &identifier.value, identifier.classification.as_ref())?;
    }
    for email in entity.attributes_of(Field::Email) {
        xml.write_event(Event::Start(BytesStart::new("cfOrgUnit_EAddr")))?;
        write_text_element(xml, "cfEAddrId", &email.value)?;
        if let Some(classification) = &email.classification {
            write_class_ids(xml, classification)?;
        }
        xml.write_event(Event::End(BytesEnd::new("cfOrgUnit_EAddr")))?;
    }
    for service in entity.attributes_of(Field::CreationDate) {
        xml.write_event(Event::Start(BytesStart::new("cfOrgUnit_Srv")))?;
        if let Some(id) = &service.element_id {
            write_raw_element(xml, "cfSrvId", id.as_str())?;
        }
        if let Some(classification) = &service.classification {
            write_class_ids(xml, classification)?;
        }
        write_text_element(xml, "cfStartDate", &service.value)?;
        xml.write_event(Event::End(BytesEnd::new("cfOrgUnit_Srv")))?;
    }
    write_person_links(xml, entity, "cfPers_OrgUnit")?;
    xml.write_event(Event::End(BytesEnd::new("cfOrgUnit")))?;
    Ok(())
}

fn write_project<W: Write>(xml: &mut Writer<W>, entity: &Entity) -> Result<()> {
    xml.write_event(Event::Start(BytesStart::new("cfProj")))?;
    write_raw_element(xml, "cfProjId", entity.id().as_str())?;
    if let Some(start) = entity.attribute(Field::StartDate) {
        write_text_element(xml, "cfStartDate", &start.value)?;
    }
    if let Some(end) = entity.attribute(Field::EndDate) {
        write_text_element(xml, "cfEndDate", &end.value)?;
    }
    if let Some(acronym) = entity.attribute(Field::Acronym) {
        write_text_element(xml, "cfAcro", &acronym.value)?;
    }
    if let Some(uri) = entity.attribute(Field::Uri) {
        write_text_element(xml, "cfURI", &uri.value)?;
    }
    if let Some(title) = entity.attribute(Field::Title) {
        write_translated_text(xml, "cfTitle", &title.value, &language(title))?;
    }
    for classification in &entity.classifications {
        write_class_link(xml, "cfProj_Class", classification, None)?;
    }
    for identifier in entity.attributes_of(Field::Identifier) {
        write_fed_id(xml, &identifier.value, identifier.classification.as_ref())?;
    }
    write_person_links(xml, entity, "cfProj_Pers")?;
    xml.write_event(Event::End(BytesEnd::new("cfProj")))?;
    Ok(())
}

fn write_publication<W: Write>(xml: &mut Writer<W>, entity: &Entity) -> Result<()> {
    xml.write_event(Event::Start(BytesStart::new("cfResPubl")))?;
    write_raw_element(xml, "cfResPublId", entity.id().as_str())?;
    let date = entity.attribute(Field::PublicationDate);
    if let Some(date) = date {
        write_text_element(xml, "cfResPublDate", &date.value)?;
    }
    for (field, name) in [
        (Field::Volume, "cfVol"),
        (Field::Issue, "cfIssue"),
        (Field::StartPage, "cfStartPage"),
        (Field::EndPage, "cfEndPage"),
        (Field::Uri, "cfURI"),
    ] {
        if let Some(attribute) = entity.attribute(field) {
            write_text_element(xml, name, &attribute.value)?;
        }
    }
    if let Some(title) = entity.attribute(Field::Title) {
        write_translated_text(xml, "cfTitle", &title.value, &language(title))?;
    }
    if let Some(source) = entity.attribute(Field::SourceTitle) {
        write_translated_text(xml, "cfBibliogrNote", &source.value, &language(source))?;
    }
    for classification in &entity.classifications {
        write_class_link(xml, "cfResPubl_Class", classification, None)?;
    }
    if let Some(date) = date
        && let Some(classification) = &date.classification
    {
        write_class_link(xml, "cfResPubl_Class", classification, Some(&date.value))?;
    }
    for identifier in entity.attributes_of(Field::Identifier) {
        write_fed_id(xml, &identifier.value, identifier.classification.as_ref())?;
    }
    write_person_links(xml, entity, "cfPers_ResPubl")?;
    xml.write_event(Event::End(BytesEnd::new("cfResPubl")))?;
    Ok(())
}

fn write_person<W: Write>(xml: &mut Writer<W>, entity: &Entity) -> Result<()> {
    xml.write_event(Event::Start(BytesStart::new("cfPers")))?;
    write_raw_element(xml, "cfPersId", entity.id().as_str())?;
    for classification in &entity.classifications {
        write_class_link(xml, "cfPers_Class", classification, None)?;
    }
    if let Some(name) = entity.attribute(Field::Name) {
        write_person_name(xml, name)?;
    }
    for identifier in entity
        .attributes_of(Field::FederatedId)
        .chain(entity.attributes_of(Field::Identifier))
    {
        write_fed_id(xml, &identifier.value, identifier.classification.as_ref())?;
    }
    for email in entity.attributes_of(Field::Email) {
        xml.write_event(Event::Start(BytesStart::new("cfPers_EAddr")))?;
        write_text_element(xml, "cfEAddrId", &email.value)?;
        if let Some(classification) = &email.classification {
            write_class_ids(xml, classification)?;
        }
        xml.write_event(Event::End(BytesEnd::new("cfPers_EAddr")))?;
    }
    xml.write_event(Event::End(BytesEnd::new("cfPers")))?;
    Ok(())
}

/// `Family, First` splits at the first comma; otherwise the whole name is
/// the family name.
fn write_person_name<W: Write>(xml: &mut Writer<W>, name: &Attribute) -> Result<()> {
    xml.write_event(Event::Start(BytesStart::new("cfPersName_Pers")))?;
    if let Some(id) = &name.element_id {
        write_raw_element(xml, "cfPersNameId", id.as_str())?;
    }
    if let Some(classification) = &name.classification {
        write_class_ids(xml, classification)?;
    }
    let full = name.value.unescaped();
    match full.split_once(',') {
        Some((family, first)) if !first.trim().is_empty() => {
            write_text_element(xml, "cfFamilyNames", &XmlText::escape(family.trim()))?;
            write_text_element(xml, "cfFirstNames", &XmlText::escape(first.trim()))?;
        }
        _ => write_text_element(xml, "cfFamilyNames", &name.value)?,
    }
    xml.write_event(Event::End(BytesEnd::new("cfPersName_Pers")))?;
    Ok(())
}

fn write_person_links<W: Write>(xml: &mut Writer<W>, entity: &Entity, wrapper: &str) -> Result<()> {
    for edge in &entity.relations {
        write_person_link(xml, entity, edge, wrapper)?;
    }
    Ok(())
}

fn write_person_link<W: Write>(
    xml: &mut Writer<W>,
    owner: &Entity,
    edge: &RelationEdge,
    wrapper: &str,
) -> Result<()> {
    xml.write_event(Event::Start(BytesStart::new(wrapper)))?;
    write_raw_element(xml, "cfPersId", edge.target.as_str())?;
    match &edge.classification {
        Some(classification) => write_class_ids(xml, classification)?,
        None => tracing::warn!(
            owner = %owner.id(),
            person = %edge.target,
            element = wrapper,
            "relation written without role classification"
        ),
    }
    xml.write_event(Event::End(BytesEnd::new(wrapper)))?;
    Ok(())
}
