#![allow(dead_code)]

use std::collections::HashMap;

use cerif_core::Graph;
use cerif_model::{
    Classification, Concept, Entity, Field, OrgUnitRow, ProjectRow, PublicationRow, RelationRow,
    ResearcherRow,
};
use cerif_standards::Catalog;

pub fn researcher(name: &str, fed_id: Option<&str>) -> ResearcherRow {
    ResearcherRow {
        name: name.to_string(),
        federated_id: fed_id.map(str::to_string),
        ..ResearcherRow::default()
    }
}

pub fn unit(title: &str, code: &str) -> OrgUnitRow {
    OrgUnitRow {
        title: title.to_string(),
        code: code.to_string(),
        ..OrgUnitRow::default()
    }
}

pub fn project(title: &str, code: &str) -> ProjectRow {
    ProjectRow {
        title: title.to_string(),
        code: code.to_string(),
        ..ProjectRow::default()
    }
}

pub fn publication(title: &str, code: &str, kind: &str) -> PublicationRow {
    PublicationRow {
        title: title.to_string(),
        code: code.to_string(),
        publication_type: Some(kind.to_string()),
        ..PublicationRow::default()
    }
}

pub fn relation(owner: &str, fed_id: Option<&str>, name: &str, role: &str) -> RelationRow {
    RelationRow::new(owner, fed_id, name, role)
}

pub fn class(concept: Concept) -> Classification {
    Catalog::builtin()
        .classify(concept)
        .expect("builtin catalog is complete")
}

/// Display label: person name or entity title.
pub fn label(entity: &Entity) -> String {
    let field = if entity.is_person() {
        Field::Name
    } else {
        Field::Title
    };
    entity
        .attribute(field)
        .map(|attr| attr.value.unescaped())
        .unwrap_or_default()
}

/// Id-free text rendering of a graph: one line per entity, one indented
/// line per relation edge.
pub fn outline(graph: &Graph) -> String {
    let concepts: HashMap<Classification, Concept> = Catalog::builtin()
        .iter()
        .map(|(concept, class)| (class.clone(), concept))
        .collect();
    let name_of = |classification: &Classification| {
        concepts
            .get(classification)
            .map_or("unknown", |concept| concept.as_str())
    };

    let mut out = String::new();
    for entity in graph.entities() {
        let classes: Vec<_> = entity.classifications.iter().map(name_of).collect();
        out.push_str(&format!(
            "{} {} [{}]\n",
            entity.kind,
            label(entity),
            classes.join(", ")
        ));
        for edge in &entity.relations {
            let target = graph.get(&edge.target).map(label).unwrap_or_default();
            let role_class = edge.classification.as_ref().map_or("unclassified", name_of);
            out.push_str(&format!("  -> {target} ({:?}, {role_class})\n", edge.role));
        }
    }
    out
}
