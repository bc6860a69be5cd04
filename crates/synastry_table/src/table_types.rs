//! Types for the merged multi-chart synastry table.
//!
//! A table is built against one reference chart's cusps and carries one
//! row per placed planet, grouped by house. Cells are optional labels;
//! rendering maps absent cells to an em-dash placeholder.

use synastry_base::{ChartId, PlanetEntry};

/// Placeholder rendered for a cell with no planet.
pub const EMPTY_CELL: &str = "\u{2014}";

/// One chart's contribution to a table: its identity and planet list.
///
/// Order of the `ChartColumn` slice passed to the builder defines both
/// the column order of the output and the cross-chart tie-break for
/// planets at identical cusp distance.
#[derive(Debug, Clone, Copy)]
pub struct ChartColumn<'a> {
    /// Which chart this column is.
    pub id: ChartId,
    /// The chart's planets, in entry order.
    pub planets: &'a [PlanetEntry],
}

/// One display row: a house label and one optional cell per column.
///
/// Exactly one cell holds a planet label. The house label is populated
/// only on the first row of each house group (a merged header cell, not
/// missing data); continuation rows carry an empty string.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// `"{house}H ({cusp})"` on the first row of a house group, else empty.
    pub house_label: String,
    /// One slot per column, in column order; `None` renders as `—`.
    pub cells: Vec<Option<String>>,
}

/// The merged, sorted comparison table for one reference chart.
#[derive(Debug, Clone, PartialEq)]
pub struct SynastryTable {
    /// The chart whose cusps placed every planet.
    pub reference: ChartId,
    /// Column order, as given to the builder.
    pub columns: Vec<ChartId>,
    /// Rows sorted by (house, cusp distance, column precedence).
    pub rows: Vec<TableRow>,
}

impl SynastryTable {
    /// Header cells for rendering/export: `House` plus one per column.
    pub fn header(&self) -> Vec<String> {
        let mut header = Vec::with_capacity(self.columns.len() + 1);
        header.push("House".to_string());
        header.extend(self.columns.iter().map(|c| c.name().to_string()));
        header
    }
}
