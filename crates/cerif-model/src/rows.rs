//! Typed input records, one per source table.
//!
//! Source tables are positional: the column order below is the order of the
//! sheets exported by the research information office. Header text is
//! ignored.

use serde::{Deserialize, Serialize};

use crate::ContentError;

/// A record type that can be built from one positional CSV row.
pub trait TableRow: Sized {
    /// Table name used in error messages.
    const TABLE: &'static str;
    /// Column names, in positional order.
    const COLUMNS: &'static [&'static str];

    /// Build a record from trimmed cells (`None` for blank cells).
    ///
    /// `row` is the 1-based data row number (header and blank rows not
    /// counted), used for error reporting.
    fn from_cells(cells: &[Option<String>], row: usize) -> Result<Self, ContentError>;
}

fn cell(cells: &[Option<String>], idx: usize) -> Option<String> {
    cells.get(idx).cloned().flatten()
}

fn required<R: TableRow>(
    cells: &[Option<String>],
    idx: usize,
    row: usize,
) -> Result<String, ContentError> {
    cell(cells, idx).ok_or(ContentError::MissingField {
        table: R::TABLE,
        row,
        field: R::COLUMNS[idx],
    })
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearcherRow {
    pub name: String,
    pub federated_id: Option<String>,
    pub email: Option<String>,
    pub code: Option<String>,
}

impl TableRow for ResearcherRow {
    const TABLE: &'static str = "researchers";
    const COLUMNS: &'static [&'static str] = &["name", "federated_id", "email", "code"];

    fn from_cells(cells: &[Option<String>], row: usize) -> Result<Self, ContentError> {
        Ok(Self {
            name: required::<Self>(cells, 0, row)?,
            federated_id: cell(cells, 1),
            email: cell(cells, 2),
            code: cell(cells, 3),
        })
    }
}

/// Department or research group row; both sheets share one layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgUnitRow {
    pub title: String,
    pub acronym: Option<String>,
    pub url: Option<String>,
    /// `||`-separated email addresses.
    pub emails: Option<String>,
    pub code: String,
    pub secondary_code: Option<String>,
    pub creation_date: Option<String>,
}

impl TableRow for OrgUnitRow {
    const TABLE: &'static str = "organisation units";
    const COLUMNS: &'static [&'static str] = &[
        "title",
        "acronym",
        "url",
        "emails",
        "code",
        "secondary_code",
        "creation_date",
    ];

    fn from_cells(cells: &[Option<String>], row: usize) -> Result<Self, ContentError> {
        Ok(Self {
            title: cell(cells, 0).unwrap_or_default(),
            acronym: cell(cells, 1),
            url: cell(cells, 2),
            emails: cell(cells, 3),
            code: required::<Self>(cells, 4, row)?,
            secondary_code: cell(cells, 5),
            creation_date: cell(cells, 6),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRow {
    pub title: String,
    pub acronym: Option<String>,
    pub code: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub funding_reference: Option<String>,
    pub url: Option<String>,
}

impl TableRow for ProjectRow {
    const TABLE: &'static str = "projects";
    const COLUMNS: &'static [&'static str] = &[
        "title",
        "acronym",
        "code",
        "start_date",
        "end_date",
        "funding_reference",
        "url",
    ];

    fn from_cells(cells: &[Option<String>], row: usize) -> Result<Self, ContentError> {
        Ok(Self {
            title: cell(cells, 0).unwrap_or_default(),
            acronym: cell(cells, 1),
            code: required::<Self>(cells, 2, row)?,
            start_date: cell(cells, 3),
            end_date: cell(cells, 4),
            funding_reference: cell(cells, 5),
            url: cell(cells, 6),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationRow {
    pub title: String,
    pub code: String,
    pub publication_type: Option<String>,
    pub publication_date: Option<String>,
    pub source_title: Option<String>,
    pub volume: Option<String>,
    pub issue: Option<String>,
    pub start_page: Option<String>,
    pub end_page: Option<String>,
    pub doi: Option<String>,
    pub issn: Option<String>,
    pub isbn: Option<String>,
    pub handle: Option<String>,
    pub url: Option<String>,
    pub language: Option<String>,
}

impl TableRow for PublicationRow {
    const TABLE: &'static str = "publications";
    const COLUMNS: &'static [&'static str] = &[
        "title",
        "code",
        "publication_type",
        "publication_date",
        "source_title",
        "volume",
        "issue",
        "start_page",
        "end_page",
        "doi",
        "issn",
        "isbn",
        "handle",
        "url",
        "language",
    ];

    fn from_cells(cells: &[Option<String>], row: usize) -> Result<Self, ContentError> {
        Ok(Self {
            title: cell(cells, 0).unwrap_or_default(),
            code: required::<Self>(cells, 1, row)?,
            publication_type: cell(cells, 2),
            publication_date: cell(cells, 3),
            source_title: cell(cells, 4),
            volume: cell(cells, 5),
            issue: cell(cells, 6),
            start_page: cell(cells, 7),
            end_page: cell(cells, 8),
            doi: cell(cells, 9),
            issn: cell(cells, 10),
            isbn: cell(cells, 11),
            handle: cell(cells, 12),
            url: cell(cells, 13),
            language: cell(cells, 14),
        })
    }
}

/// Link between an owning entity (by business code) and a person.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationRow {
    pub owner_code: String,
    pub person_name: String,
    pub person_fed_id: Option<String>,
    pub role_code: String,
}

impl RelationRow {
    pub fn new(
        owner_code: impl Into<String>,
        person_fed_id: Option<&str>,
        person_name: impl Into<String>,
        role_code: impl Into<String>,
    ) -> Self {
        Self {
            owner_code: owner_code.into(),
            person_name: person_name.into(),
            person_fed_id: person_fed_id.map(str::to_string),
            role_code: role_code.into(),
        }
    }
}

impl TableRow for RelationRow {
    const TABLE: &'static str = "relations";
    const COLUMNS: &'static [&'static str] = &["owner_code", "person_name", "person_fed_id", "role"];

    /// A blank owner code is kept; the row then matches no entity.
    fn from_cells(cells: &[Option<String>], _row: usize) -> Result<Self, ContentError> {
        Ok(Self {
            owner_code: cell(cells, 0).unwrap_or_default(),
            person_name: cell(cells, 1).unwrap_or_default(),
            person_fed_id: cell(cells, 2),
            role_code: cell(cells, 3).unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<Option<String>> {
        values
            .iter()
            .map(|v| (!v.is_empty()).then(|| v.to_string()))
            .collect()
    }

    #[test]
    fn org_unit_requires_code() {
        let err = OrgUnitRow::from_cells(&cells(&["Dept", "", "", "", ""]), 3).unwrap_err();
        assert_eq!(
            err,
            ContentError::MissingField {
                table: "organisation units",
                row: 3,
                field: "code",
            }
        );
    }

    #[test]
    fn short_rows_leave_trailing_fields_empty() {
        let row = OrgUnitRow::from_cells(&cells(&["Dept", "D", "", "", "D01"]), 1).unwrap();
        assert_eq!(row.code, "D01");
        assert_eq!(row.acronym.as_deref(), Some("D"));
        assert!(row.secondary_code.is_none());
        assert!(row.creation_date.is_none());
    }

    #[test]
    fn relation_row_columns_are_owner_name_fed_id_role() {
        let row = RelationRow::from_cells(&cells(&["G1", "Jane Doe", "R42", "si"]), 1).unwrap();
        assert_eq!(row, RelationRow::new("G1", Some("R42"), "Jane Doe", "si"));
    }

    #[test]
    fn relation_row_without_owner_code_is_accepted() {
        let row = RelationRow::from_cells(&cells(&["", "Bob", "", "no"]), 2).unwrap();
        assert_eq!(row, RelationRow::new("", None, "Bob", "no"));
    }

    #[test]
    fn publication_has_fifteen_columns() {
        assert_eq!(PublicationRow::COLUMNS.len(), 15);
    }
}
