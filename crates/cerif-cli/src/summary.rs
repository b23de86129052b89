use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use cerif_core::{GapKind, RunReport};
use cerif_model::EntityKind;
use cerif_report::OutputTarget;

use crate::types::ConvertResult;

const ENTITY_ORDER: [EntityKind; 6] = [
    EntityKind::Researcher,
    EntityKind::PersonPlaceholder,
    EntityKind::Department,
    EntityKind::ResearchGroup,
    EntityKind::Project,
    EntityKind::Publication,
];

const GAP_ORDER: [GapKind; 3] = [
    GapKind::UnknownOwner,
    GapKind::UnmappedRole,
    GapKind::InvalidDate,
];

pub fn print_summary(result: &ConvertResult) {
    let mut rendered = vec![entity_table(&result.report).to_string()];
    if !result.report.gaps.is_empty() {
        rendered.push(gap_table(&result.report).to_string());
    }
    rendered.push(output_line(result));

    // The document itself may occupy stdout.
    let to_stderr = result.written && result.output == OutputTarget::Stdout;
    for block in rendered {
        if to_stderr {
            eprintln!("{block}");
        } else {
            println!("{block}");
        }
    }
}

pub fn entity_table(report: &RunReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Entity"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    for kind in ENTITY_ORDER {
        let label = match kind {
            EntityKind::PersonPlaceholder => "Person (placeholder)".to_string(),
            other => other.to_string(),
        };
        table.add_row(vec![Cell::new(label), count_cell(report.count(kind), Color::Green)]);
    }
    table.add_row(vec![Cell::new("Relations"), count_cell(report.relations, Color::Green)]);
    table.add_row(vec![
        Cell::new("Gaps"),
        count_cell(report.gaps.len(), Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(report.total_entities())
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
    ]);
    align_column(&mut table, 1, CellAlignment::Right);
    table
}

pub fn gap_table(report: &RunReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Gap"),
        header_cell("Table"),
        header_cell("Row"),
        header_cell("Detail"),
    ]);
    apply_table_style(&mut table);
    for kind in GAP_ORDER {
        for gap in report.gaps.iter().filter(|gap| gap.kind == kind) {
            let source = if gap.relations {
                format!("{} relations", gap.entity)
            } else {
                gap.entity.to_string()
            };
            table.add_row(vec![
                Cell::new(gap.kind).fg(Color::Yellow),
                Cell::new(source),
                Cell::new(gap.row),
                Cell::new(&gap.detail),
            ]);
        }
    }
    align_column(&mut table, 2, CellAlignment::Right);
    table
}

fn output_line(result: &ConvertResult) -> String {
    let destination = match &result.output {
        OutputTarget::Stdout => "stdout".to_string(),
        OutputTarget::File(path) => path.display().to_string(),
    };
    if result.written {
        format!("Wrote {} bytes to {destination}", result.document_bytes)
    } else {
        format!(
            "Dry run: {} bytes rendered, nothing written to {destination}",
            result.document_bytes
        )
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
