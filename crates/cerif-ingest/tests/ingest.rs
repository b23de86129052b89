use std::fs;
use std::path::Path;

use cerif_ingest::{IngestError, InputTables, ReadOptions, TableKind, discover_tables, read_table};
use cerif_model::{ContentError, OrgUnitRow, RelationRow};

fn write(dir: &Path, name: &str, contents: &[u8]) {
    fs::write(dir.join(name), contents).expect("write fixture");
}

#[test]
fn loads_present_tables_and_defaults_missing_ones() {
    let dir = tempfile::tempdir().expect("temp dir");
    write(
        dir.path(),
        "researchers.csv",
        b"name;fedId;email;code\nJane Doe;R42;jane@uni.example;U1\n\n;;;\nJohn Roe;;;U2\n",
    );
    write(
        dir.path(),
        "Research_Groups.CSV",
        b"title;acronym;url;emails;code;secondary;created\r\nAI Lab;AIL;;a@x||b@x;G1;SGR-1;2001-05-04\r\n",
    );
    write(
        dir.path(),
        "publication_relations.csv",
        b"owner;name;fed;role\nPUB1;Jane Doe;R42;si\n",
    );
    write(dir.path(), "notes.txt", b"ignored");

    let tables = InputTables::load(dir.path(), &ReadOptions::default()).expect("load tables");

    assert_eq!(tables.researchers.len(), 2);
    assert_eq!(tables.researchers[0].federated_id.as_deref(), Some("R42"));
    assert_eq!(tables.researchers[1].federated_id, None);
    assert_eq!(tables.research_groups.len(), 1);
    assert_eq!(
        tables.research_groups[0].emails.as_deref(),
        Some("a@x||b@x")
    );
    assert_eq!(
        tables.publication_relations,
        vec![RelationRow::new("PUB1", Some("R42"), "Jane Doe", "si")]
    );
    assert!(tables.departments.is_empty());
    assert!(tables.projects.is_empty());
}

#[test]
fn missing_researchers_is_content_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    write(dir.path(), "departments.csv", b"title;a;u;e;code\nD;;;;D1\n");
    let err = InputTables::load(dir.path(), &ReadOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        IngestError::Content {
            source: ContentError::MissingTable { table: "researchers" },
            ..
        }
    ));
}

#[test]
fn missing_code_reports_data_row() {
    let dir = tempfile::tempdir().expect("temp dir");
    write(
        dir.path(),
        "departments.csv",
        b"title;acronym;url;emails;code\nPhysics;PHY;;;D1\n;;;;\nChemistry;CHE;;;\n",
    );
    let err = read_table::<OrgUnitRow>(&dir.path().join("departments.csv"), &ReadOptions::default())
        .unwrap_err();
    match err {
        IngestError::Content { source, .. } => assert_eq!(
            source,
            ContentError::MissingField {
                table: "organisation units",
                row: 2,
                field: "code",
            }
        ),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn decodes_latin1_input() {
    let dir = tempfile::tempdir().expect("temp dir");
    // "Núria" in ISO-8859-1.
    write(dir.path(), "researchers.csv", b"name,fedId\nN\xFAria,R1\n");
    let options = ReadOptions::default()
        .with_delimiter(",")
        .and_then(|o| o.with_encoding_label("iso-8859-1"))
        .expect("options");
    let tables = InputTables::load(dir.path(), &options).expect("load tables");
    assert_eq!(tables.researchers[0].name, "Núria");
}

#[test]
fn canonical_stem_beats_legacy_stem() {
    let dir = tempfile::tempdir().expect("temp dir");
    write(dir.path(), "publication_relations.csv", b"h\n");
    write(dir.path(), "publications_relations.csv", b"h\n");
    let found = discover_tables(dir.path()).expect("discover");
    assert_eq!(
        found[&TableKind::PublicationRelations].file_name().unwrap(),
        "publications_relations.csv"
    );
}

#[test]
fn missing_directory_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = InputTables::load(&dir.path().join("absent"), &ReadOptions::default()).unwrap_err();
    assert!(matches!(err, IngestError::DirectoryNotFound { .. }));
}

#[test]
fn relation_row_without_owner_code_still_loads() {
    let dir = tempfile::tempdir().expect("temp dir");
    write(dir.path(), "researchers.csv", b"name;fedId\nAlice;R1\n");
    write(
        dir.path(),
        "research_groups_relations.csv",
        b"owner;name;fed;role\nG1;Alice;R1;si\n;Bob;;no\n",
    );
    let tables = InputTables::load(dir.path(), &ReadOptions::default()).expect("load tables");
    assert_eq!(
        tables.research_group_relations,
        vec![
            RelationRow::new("G1", Some("R1"), "Alice", "si"),
            RelationRow::new("", None, "Bob", "no"),
        ]
    );
}
