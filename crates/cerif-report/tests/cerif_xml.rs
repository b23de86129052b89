use cerif_core::{Conversion, ConversionOptions, convert};
use cerif_ingest::InputTables;
use cerif_model::{DocumentOptions, OrgUnitRow, OutputCharset, RelationRow, ResearcherRow};
use cerif_report::{OutputTarget, render_cerif, write_output};
use cerif_standards::Catalog;
use quick_xml::Reader;
use quick_xml::events::Event;

fn researcher(name: &str, fed_id: &str) -> ResearcherRow {
    ResearcherRow {
        name: name.to_string(),
        federated_id: Some(fed_id.to_string()),
        ..ResearcherRow::default()
    }
}

fn group(title: &str, code: &str) -> OrgUnitRow {
    OrgUnitRow {
        title: title.to_string(),
        code: code.to_string(),
        ..OrgUnitRow::default()
    }
}

fn run(tables: &InputTables) -> Conversion {
    convert(
        tables,
        &Catalog::builtin(),
        &ConversionOptions::default().with_seed("report"),
    )
    .expect("convert")
}

fn small_graph() -> Conversion {
    run(&InputTables {
        researchers: vec![researcher("Smith, Alice", "R1")],
        research_groups: vec![group("AI Lab", "G1")],
        research_group_relations: vec![RelationRow::new("G1", Some("R1"), "Alice", "si")],
        ..InputTables::default()
    })
}

fn options() -> DocumentOptions {
    DocumentOptions::new("RUCT-1", "2024-01-01T00:00:00Z")
}

fn assert_well_formed(xml: &str) {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => panic!("malformed document at {}: {err}", reader.buffer_position()),
        }
    }
}

/// Replace generated ids by stable labels.
fn redact_ids(xml: &str, conversion: &Conversion) -> String {
    let mut out = xml.to_string();
    for entity in conversion.graph.entities() {
        let label = if entity.is_person() { "PERSON" } else { "GROUP" };
        out = out.replace(entity.id().as_str(), label);
        for element_id in entity.element_ids() {
            out = out.replace(element_id.as_str(), "NAME");
        }
    }
    out
}

#[test]
fn pretty_document_layout() {
    let conversion = small_graph();
    let bytes = render_cerif(&conversion.graph, &options().with_pretty(true)).expect("render");
    let xml = String::from_utf8(bytes).expect("utf-8 output");
    assert_well_formed(&xml);

    insta::assert_snapshot!(redact_ids(&xml, &conversion), @r#"
    <?xml version="1.0" encoding="UTF-8"?>
    <CERIF xmlns="urn:xmlns:org:eurocris:cerif-1.6-2" date="2024-01-01T00:00:00Z" sourceDatabase="RUCT-1">
      <cfOrgUnit>
        <cfOrgUnitId>GROUP</cfOrgUnitId>
        <cfName cfLangCode="ca" cfTrans="o">AI Lab</cfName>
        <cfOrgUnit_Class>
          <cfClassId>4f7e0f8a-211e-4a59-9dad-be38c588d0f4</cfClassId>
          <cfClassSchemeId>759af938-34ae-11e1-b86c-0800200c9a66</cfClassSchemeId>
        </cfOrgUnit_Class>
        <cfFedId>
          <cfFedId>G1</cfFedId>
          <cfFedId_Class>
            <cfClassId>57a082c7-bde1-4106-a4b2-728b987110f1</cfClassId>
            <cfClassSchemeId>bccb3266-689d-4740-a039-c96594b4d916</cfClassSchemeId>
          </cfFedId_Class>
        </cfFedId>
        <cfPers_OrgUnit>
          <cfPersId>PERSON</cfPersId>
          <cfClassId>8c6681fc-b4c0-428d-b4d8-33ddc2cfd83d</cfClassId>
          <cfClassSchemeId>994069a0-1cd6-11e1-8bc2-0800200c9a66</cfClassSchemeId>
        </cfPers_OrgUnit>
      </cfOrgUnit>
      <cfPers>
        <cfPersId>PERSON</cfPersId>
        <cfPers_Class>
          <cfClassId>977c8ebc-b13d-4c20-892d-f9284b96524f</cfClassId>
          <cfClassSchemeId>65dbbb69-bc8d-474d-96e9-9ccbcebf98a5</cfClassSchemeId>
        </cfPers_Class>
        <cfPersName_Pers>
          <cfPersNameId>NAME</cfPersNameId>
          <cfClassId>b9bfafe5-8d4b-4dcd-b9eb-dd1c0936703a</cfClassId>
          <cfClassSchemeId>0a720969-47de-49f1-9d73-c098d3810375</cfClassSchemeId>
          <cfFamilyNames>Smith</cfFamilyNames>
          <cfFirstNames>Alice</cfFirstNames>
        </cfPersName_Pers>
        <cfFedId>
          <cfFedId>R1</cfFedId>
          <cfFedId_Class>
            <cfClassId>1d3599c8-7441-48a0-8ce3-36cea5a781b4</cfClassId>
            <cfClassSchemeId>bccb3266-689d-4740-a039-c96594b4d916</cfClassSchemeId>
          </cfFedId_Class>
        </cfFedId>
      </cfPers>
    </CERIF>
    "#);
}

#[test]
fn compact_document_has_no_line_breaks() {
    let conversion = small_graph();
    let bytes = render_cerif(&conversion.graph, &options()).expect("render");
    let xml = String::from_utf8(bytes).expect("utf-8 output");
    assert!(!xml.contains('\n'));
    assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?><CERIF "#));
    assert_well_formed(&xml);
}

#[test]
fn text_is_escaped_exactly_once() {
    let conversion = run(&InputTables {
        researchers: vec![researcher("O'Brien & Sons", "R<1>")],
        research_groups: vec![group("R&D <Lab> \"X\"", "G1")],
        ..InputTables::default()
    });
    let xml = String::from_utf8(render_cerif(&conversion.graph, &options()).expect("render"))
        .expect("utf-8 output");
    assert_well_formed(&xml);
    assert!(xml.contains("R&amp;D &lt;Lab&gt; &quot;X&quot;"));
    assert!(xml.contains("<cfFedId>R&lt;1&gt;</cfFedId>"));
    assert!(xml.contains("<cfFamilyNames>O&apos;Brien &amp; Sons</cfFamilyNames>"));
    assert!(!xml.contains("&amp;amp;"));
    assert!(!xml.contains("&amp;lt;"));
}

#[test]
fn unmapped_role_link_has_no_class() {
    let conversion = run(&InputTables {
        researchers: vec![researcher("Alice", "R1")],
        research_groups: vec![group("AI Lab", "G1")],
        research_group_relations: vec![RelationRow::new("G1", Some("R1"), "Alice", "perhaps")],
        ..InputTables::default()
    });
    let xml = String::from_utf8(render_cerif(&conversion.graph, &options()).expect("render"))
        .expect("utf-8 output");
    let person = conversion.graph.persons().next().expect("person");
    assert!(xml.contains(&format!(
        "<cfPers_OrgUnit><cfPersId>{}</cfPersId></cfPers_OrgUnit>",
        person.id()
    )));
}

#[test]
fn latin1_output_declares_charset_and_references_unmappable() {
    let conversion = run(&InputTables {
        researchers: vec![researcher("Núria Łukasz", "R1")],
        ..InputTables::default()
    });
    let bytes = render_cerif(
        &conversion.graph,
        &options().with_charset(OutputCharset::Iso88591),
    )
    .expect("render");
    assert!(bytes.starts_with(br#"<?xml version="1.0" encoding="ISO-8859-1"?>"#));
    let needle = b"<cfFamilyNames>N\xFAria &#321;ukasz</cfFamilyNames>";
    assert!(bytes.windows(needle.len()).any(|window| window == needle));
}

#[test]
fn utf16_output_starts_with_bom() {
    let conversion = small_graph();
    let bytes = render_cerif(&conversion.graph, &options().with_charset(OutputCharset::Utf16))
        .expect("render");
    assert_eq!(&bytes[..4], &[0xFE, 0xFF, 0x00, b'<']);
    let units: Vec<u16> = bytes[2..]
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .collect();
    let text = String::from_utf16(&units).expect("valid UTF-16");
    assert!(text.starts_with(r#"<?xml version="1.0" encoding="UTF-16"?>"#));
}

#[test]
fn writes_file_and_creates_parent() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("nested").join("cerif.xml");
    let target = OutputTarget::parse(path.to_str().expect("utf-8 path")).expect("target");
    write_output(&target, b"<CERIF/>").expect("write");
    assert_eq!(std::fs::read(&path).expect("read back"), b"<CERIF/>");
}
