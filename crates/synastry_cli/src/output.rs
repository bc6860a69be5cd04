//! Table rendering and workbook export.
//!
//! Both surfaces share the fixed schema: a `House` column plus one
//! column per active chart, with an em-dash for empty cells and the
//! house label only on the first row of each house group.

use std::path::{Path, PathBuf};

use synastry_base::ChartId;
use synastry_session::Session;
use synastry_table::{ChartColumn, EMPTY_CELL, SynastryTable, build_table};

/// Columns for a session's tables: every chart whose planets are not
/// omitted, in precedence order.
pub fn active_columns(session: &Session) -> Vec<ChartColumn<'_>> {
    ChartId::all()
        .iter()
        .copied()
        .filter(|id| !session.chart(*id).planets_omitted())
        .map(|id| ChartColumn {
            id,
            planets: session.chart(id).planets(),
        })
        .collect()
}

/// Build the table for one reference chart out of a session.
///
/// `None` when the reference chart's cusp set is incomplete.
pub fn session_table(session: &Session, reference: ChartId) -> Option<SynastryTable> {
    let columns = active_columns(session);
    build_table(reference, session.chart(reference).cusps(), &columns)
}

/// Render a table as aligned text columns for the terminal.
pub fn render_table(table: &SynastryTable) -> String {
    let header = table.header();
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &table.rows {
        widths[0] = widths[0].max(row.house_label.chars().count());
        for (i, cell) in row.cells.iter().enumerate() {
            let text = cell.as_deref().unwrap_or(EMPTY_CELL);
            widths[i + 1] = widths[i + 1].max(text.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &header, &widths);
    for row in &table.rows {
        let mut fields = Vec::with_capacity(widths.len());
        fields.push(row.house_label.clone());
        for cell in &row.cells {
            fields.push(cell.clone().unwrap_or_else(|| EMPTY_CELL.to_string()));
        }
        push_line(&mut out, &fields, &widths);
    }
    out
}

fn push_line(out: &mut String, fields: &[String], widths: &[usize]) {
    for (i, (field, width)) in fields.iter().zip(widths).enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(field);
        // Pad by character count; glyph display width is close enough
        // for a terminal preview.
        for _ in field.chars().count()..*width {
            out.push(' ');
        }
    }
    while out.ends_with(' ') {
        out.pop();
    }
    out.push('\n');
}

/// Write one CSV sheet per usable reference chart into `dir`.
///
/// Charts whose houses are omitted are not reference charts at all;
/// charts with an incomplete cusp set are skipped as unusable. Returns
/// the written paths in chart precedence order.
pub fn write_workbook(session: &Session, dir: &Path) -> Result<Vec<PathBuf>, String> {
    std::fs::create_dir_all(dir).map_err(|e| format!("cannot create {}: {e}", dir.display()))?;

    let mut written = Vec::new();
    for reference in session.usable_references() {
        let Some(table) = session_table(session, reference) else {
            continue;
        };
        let path = dir.join(format!("synastry_{}.csv", reference.name().to_lowercase()));
        write_sheet(&table, &path)?;
        written.push(path);
    }
    Ok(written)
}

fn write_sheet(table: &SynastryTable, path: &Path) -> Result<(), String> {
    let mut writer =
        csv::Writer::from_path(path).map_err(|e| format!("cannot write {}: {e}", path.display()))?;
    writer
        .write_record(table.header())
        .map_err(|e| format!("{}: {e}", path.display()))?;
    for row in &table.rows {
        let mut record = Vec::with_capacity(row.cells.len() + 1);
        record.push(row.house_label.as_str());
        for cell in &row.cells {
            record.push(cell.as_deref().unwrap_or(EMPTY_CELL));
        }
        writer
            .write_record(&record)
            .map_err(|e| format!("{}: {e}", path.display()))?;
    }
    writer
        .flush()
        .map_err(|e| format!("{}: {e}", path.display()))
}
