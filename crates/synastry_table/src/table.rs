//! The multi-chart merge: place every active planet into the reference
//! chart's houses and assemble the sorted, grouped comparison table.
//!
//! The builder is a pure function of its inputs. An incomplete reference
//! cusp set yields `None` ("no table"), which callers must check before
//! rendering or export; it is never an error.

use synastry_base::{ChartId, CuspSet};

use crate::resolver::find_house;
use crate::table_types::{ChartColumn, SynastryTable, TableRow};

/// One placed planet, before grouping into rows.
#[derive(Debug, Clone)]
struct Placement {
    house: usize,
    column: usize,
    label: String,
    distance: f64,
}

/// Build the synastry table for one reference chart.
///
/// Every planet of every column is converted to a longitude, resolved
/// against `reference_cusps`, and sorted by house, then cusp distance,
/// then column precedence. Equal-distance ties across charts break by
/// the order of `columns`, deterministically.
///
/// Returns `None` when the reference cusp set is incomplete.
pub fn build_table(
    reference: ChartId,
    reference_cusps: &CuspSet,
    columns: &[ChartColumn<'_>],
) -> Option<SynastryTable> {
    let cusp_lons = reference_cusps.longitudes()?;

    let mut placements = Vec::new();
    for (col, column) in columns.iter().enumerate() {
        for planet in column.planets {
            let placement = find_house(planet.position().longitude(), &cusp_lons);
            placements.push(Placement {
                house: placement.house,
                column: col,
                label: planet.label(),
                distance: placement.distance,
            });
        }
    }

    placements.sort_by(|a, b| {
        a.house
            .cmp(&b.house)
            .then(a.distance.total_cmp(&b.distance))
            .then(a.column.cmp(&b.column))
    });

    let mut rows = Vec::with_capacity(placements.len());
    let mut last_house = None;
    for placement in placements {
        let house_label = if last_house == Some(placement.house) {
            String::new()
        } else {
            house_group_label(reference_cusps, placement.house)
        };
        last_house = Some(placement.house);

        let mut cells = vec![None; columns.len()];
        cells[placement.column] = Some(placement.label);
        rows.push(TableRow { house_label, cells });
    }

    Some(SynastryTable {
        reference,
        columns: columns.iter().map(|c| c.id).collect(),
        rows,
    })
}

/// Header label for a house group: `"3H (♊ 0°0′)"`.
fn house_group_label(cusps: &CuspSet, house: usize) -> String {
    match cusps.get(house) {
        Some(cusp) => format!("{}H ({cusp})", house + 1),
        // Unreachable after the completeness check, but never panic.
        None => format!("{}H", house + 1),
    }
}
