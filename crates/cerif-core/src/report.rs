//! Non-fatal findings and run statistics.

use std::collections::BTreeMap;
use std::fmt;

use cerif_model::EntityKind;
use serde::Serialize;

/// Category of a non-fatal resolution gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum GapKind {
    /// Relation row whose owner code matches no entity; the row is dropped.
    UnknownOwner,
    /// Role code outside leader/member; the edge carries no role class.
    UnmappedRole,
    /// Date cell that could not be read; the date is omitted.
    InvalidDate,
}

impl GapKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GapKind::UnknownOwner => "unknown owner",
            GapKind::UnmappedRole => "unmapped role",
            GapKind::InvalidDate => "invalid date",
        }
    }
}

impl fmt::Display for GapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recorded gap. `row` is the 1-based data row of the source table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionGap {
    pub kind: GapKind,
    pub entity: EntityKind,
    pub relations: bool,
    pub row: usize,
    pub detail: String,
}

impl fmt::Display for ResolutionGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = if self.relations { " relations" } else { "" };
        write!(
            f,
            "{}{} row {}: {}: {}",
            self.entity, table, self.row, self.kind, self.detail
        )
    }
}

/// Outcome statistics of one conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub entities: BTreeMap<EntityKind, usize>,
    pub relations: usize,
    pub gaps: Vec<ResolutionGap>,
}

impl RunReport {
    pub fn count(&self, kind: EntityKind) -> usize {
        self.entities.get(&kind).copied().unwrap_or(0)
    }

    pub fn placeholders(&self) -> usize {
        self.count(EntityKind::PersonPlaceholder)
    }

    pub fn total_entities(&self) -> usize {
        self.entities.values().sum()
    }

    pub fn gaps_of(&self, kind: GapKind) -> usize {
        self.gaps.iter().filter(|gap| gap.kind == kind).count()
    }
}
