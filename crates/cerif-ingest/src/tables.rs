//! Loading every source table of an input directory.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use cerif_model::{
    ContentError, OrgUnitRow, ProjectRow, PublicationRow, RelationRow, ResearcherRow, TableRow,
};

use crate::discovery::{TableKind, discover_tables};
use crate::error::{IngestError, Result};
use crate::reader::{ReadOptions, read_table};

/// All typed rows of one conversion run. Optional tables that were not
/// found are empty.
#[derive(Debug, Clone, Default)]
pub struct InputTables {
    pub researchers: Vec<ResearcherRow>,
    pub departments: Vec<OrgUnitRow>,
    pub department_relations: Vec<RelationRow>,
    pub research_groups: Vec<OrgUnitRow>,
    pub research_group_relations: Vec<RelationRow>,
    pub projects: Vec<ProjectRow>,
    pub project_relations: Vec<RelationRow>,
    pub publications: Vec<PublicationRow>,
    pub publication_relations: Vec<RelationRow>,
}

impl InputTables {
    /// Discover and read the tables of `dir`.
    pub fn load(dir: &Path, options: &ReadOptions) -> Result<Self> {
        let files = discover_tables(dir)?;
        if !files.contains_key(&TableKind::Researchers) {
            return Err(IngestError::Content {
                path: dir.join(format!("{}.csv", TableKind::Researchers.file_stem())),
                source: ContentError::MissingTable {
                    table: ResearcherRow::TABLE,
                },
            });
        }

        let tables = Self {
            researchers: load_kind(&files, TableKind::Researchers, options)?,
            departments: load_kind(&files, TableKind::Departments, options)?,
            department_relations: load_kind(&files, TableKind::DepartmentRelations, options)?,
            research_groups: load_kind(&files, TableKind::ResearchGroups, options)?,
            research_group_relations: load_kind(
                &files,
                TableKind::ResearchGroupRelations,
                options,
            )?,
            projects: load_kind(&files, TableKind::Projects, options)?,
            project_relations: load_kind(&files, TableKind::ProjectRelations, options)?,
            publications: load_kind(&files, TableKind::Publications, options)?,
            publication_relations: load_kind(&files, TableKind::PublicationRelations, options)?,
        };
        Ok(tables)
    }

    /// Row count per table, in discovery order.
    pub fn counts(&self) -> Vec<(TableKind, usize)> {
        vec![
            (TableKind::Researchers, self.researchers.len()),
            (TableKind::Departments, self.departments.len()),
            (TableKind::DepartmentRelations, self.department_relations.len()),
            (TableKind::ResearchGroups, self.research_groups.len()),
            (
                TableKind::ResearchGroupRelations,
                self.research_group_relations.len(),
            ),
            (TableKind::Projects, self.projects.len()),
            (TableKind::ProjectRelations, self.project_relations.len()),
            (TableKind::Publications, self.publications.len()),
            (TableKind::PublicationRelations, self.publication_relations.len()),
        ]
    }
}

fn load_kind<R: TableRow>(
    files: &BTreeMap<TableKind, PathBuf>,
    kind: TableKind,
    options: &ReadOptions,
) -> Result<Vec<R>> {
    let Some(path) = files.get(&kind) else {
        tracing::debug!(table = %kind, "optional table not present");
        return Ok(Vec::new());
    };
    let rows = read_table::<R>(path, options)?;
    tracing::debug!(table = %kind, path = %path.display(), rows = rows.len(), "loaded table");
    Ok(rows)
}
