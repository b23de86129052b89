//! Input directory discovery.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// Source tables the converter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TableKind {
    Researchers,
    Departments,
    DepartmentRelations,
    ResearchGroups,
    ResearchGroupRelations,
    Projects,
    ProjectRelations,
    Publications,
    PublicationRelations,
}

impl TableKind {
    pub const ALL: [TableKind; 9] = [
        TableKind::Researchers,
        TableKind::Departments,
        TableKind::DepartmentRelations,
        TableKind::ResearchGroups,
        TableKind::ResearchGroupRelations,
        TableKind::Projects,
        TableKind::ProjectRelations,
        TableKind::Publications,
        TableKind::PublicationRelations,
    ];

    /// Canonical file stem.
    pub fn file_stem(&self) -> &'static str {
        match self {
            TableKind::Researchers => "researchers",
            TableKind::Departments => "departments",
            TableKind::DepartmentRelations => "departments_relations",
            TableKind::ResearchGroups => "research_groups",
            TableKind::ResearchGroupRelations => "research_groups_relations",
            TableKind::Projects => "projects",
            TableKind::ProjectRelations => "projects_relations",
            TableKind::Publications => "publications",
            TableKind::PublicationRelations => "publications_relations",
        }
    }

    /// Older exports spelled some stems differently.
    fn legacy_stems(&self) -> &'static [&'static str] {
        match self {
            TableKind::PublicationRelations => &["publication_relations"],
            _ => &[],
        }
    }

    pub fn is_mandatory(&self) -> bool {
        matches!(self, TableKind::Researchers)
    }

    pub fn from_stem(stem: &str) -> Option<(TableKind, bool)> {
        let stem = stem.trim().to_ascii_lowercase();
        TableKind::ALL.iter().copied().find_map(|kind| {
            if kind.file_stem() == stem {
                Some((kind, false))
            } else if kind.legacy_stems().contains(&stem.as_str()) {
                Some((kind, true))
            } else {
                None
            }
        })
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_stem())
    }
}

/// Lists all CSV files in a directory, sorted by filename.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if is_csv {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Map each known table to its file. Unknown files are ignored; a
/// canonical stem wins over a legacy one.
pub fn discover_tables(dir: &Path) -> Result<BTreeMap<TableKind, PathBuf>> {
    let mut found: BTreeMap<TableKind, (PathBuf, bool)> = BTreeMap::new();
    for path in list_csv_files(dir)? {
        let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        let Some((kind, legacy)) = TableKind::from_stem(stem) else {
            tracing::debug!(path = %path.display(), "ignoring unrecognised table");
            continue;
        };
        match found.get(&kind) {
            Some((existing, false)) => {
                tracing::warn!(
                    table = %kind,
                    kept = %existing.display(),
                    ignored = %path.display(),
                    "duplicate table file"
                );
            }
            Some((_, true)) if legacy => {}
            _ => {
                found.insert(kind, (path, legacy));
            }
        }
    }
    Ok(found
        .into_iter()
        .map(|(kind, (path, _))| (kind, path))
        .collect())
}
